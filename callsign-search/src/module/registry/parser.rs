///! ARRL call sign search result parser
///!
///! Pulls the heading and the detail text out of the `div.list2` result list
///! of the advanced call sign search page.

use scraper::{ElementRef, Html, Selector};

use super::classifier::strip_tabs;
use super::types::RegistryPage;
use crate::error::SearchError;

const TITLE_PATH: &str = r#"div[class="list2"] > ul > li > h3"#;
const DETAIL_PATH: &str = r#"div[class="list2"] > ul > li > p"#;
const ITEM_PATH: &str = r#"div[class="list2"] > ul > li"#;

fn selector(css: &str) -> Result<Selector, SearchError> {
    Selector::parse(css).map_err(|e| SearchError::Parse(format!("selector error: {}", e)))
}

/// Direct text children of every element matching `selector`, in document order.
fn direct_text(document: &Html, selector: &Selector) -> Vec<String> {
    document
        .select(selector)
        .flat_map(|element: ElementRef| {
            element
                .children()
                .filter_map(|child| child.value().as_text().map(|t| t.text.to_string()))
        })
        .collect()
}

/// Parse the registry result page into its title and raw detail lines.
pub fn parse_registry_html(html: &str) -> Result<RegistryPage, SearchError> {
    let document = Html::parse_document(html);

    let title = direct_text(&document, &selector(TITLE_PATH)?)
        .into_iter()
        .next()
        .map(|raw| strip_tabs(raw.trim()))
        .filter(|title| !title.is_empty())
        .ok_or_else(|| SearchError::Parse("no result title".to_string()))?;

    let mut details = direct_text(&document, &selector(DETAIL_PATH)?);

    // Some results have no <p> wrapper around the details
    if details.is_empty() {
        tracing::debug!("No paragraph details, falling back to list item text");
        details = direct_text(&document, &selector(ITEM_PATH)?);
    }

    tracing::debug!("Parsed '{}' with {} detail lines", title, details.len());

    Ok(RegistryPage { title, details })
}
