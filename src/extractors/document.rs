use crate::error::ExtractError;
use log::debug;
use scraper::{Html, Selector};

const JSON_LD_SELECTOR: &str = "script[type='application/ld+json']";

/// Parse raw HTML text into a document tree.
///
/// html5ever recovers from nearly any malformed markup and builds a tree even
/// for whitespace, so the only input rejected here is an empty string.
pub fn load_document(body: &str) -> Result<Html, ExtractError> {
    if body.is_empty() {
        return Err(ExtractError::ParseError("document is empty".to_string()));
    }

    let document = Html::parse_document(body);
    if !document.errors.is_empty() {
        debug!(
            "Recovered from {} HTML parse errors",
            document.errors.len()
        );
    }
    Ok(document)
}

/// Collect the text of every JSON-LD script element, in document order.
pub fn locate_json_ld_blocks(document: &Html) -> Result<Vec<String>, ExtractError> {
    let selector = Selector::parse(JSON_LD_SELECTOR)
        .map_err(|e| ExtractError::ParseError(format!("invalid selector: {e}")))?;

    let blocks: Vec<String> = document
        .select(&selector)
        .map(|script| script.text().collect::<String>())
        .collect();
    debug!("Found {} JSON-LD script tags", blocks.len());

    if blocks.is_empty() {
        return Err(ExtractError::NotFound(
            "No JSON-LD found in body".to_string(),
        ));
    }
    Ok(blocks)
}
