///! ARRL call sign registry lookup
///!
///! Builds the search form, posts it to the advanced call sign search page,
///! and turns the result list into a title, basic info lines and table rows.

pub mod classifier;
pub mod client;
pub mod parser;
pub mod types;

pub use classifier::{classify_details, classify_line, DetailLine};
pub use client::RegistryClient;
pub use parser::parse_registry_html;
pub use types::{CallsignQuery, RegistryPage, SearchReport, TableRow};
