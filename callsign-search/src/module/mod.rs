pub mod grid;
pub mod registry;
pub mod renderer;
pub mod search;

pub use search::CallsignSearch;
