use crate::config::ExtractionConfig;
use crate::error::ExtractError;
use crate::extractors::{load_document, Extractor, JsonLdExtractor, ParsingContext};
use crate::model::Recipe;

/// Run the extraction pipeline over raw HTML text.
///
/// Synchronous and self-contained: the document tree lives only for the
/// duration of this call.
pub fn process(
    html: &str,
    source: &str,
    options: &ExtractionConfig,
) -> Result<Recipe, ExtractError> {
    let context = ParsingContext {
        source: source.to_string(),
        document: load_document(html)?,
    };

    JsonLdExtractor::new(*options).parse(&context)
}
