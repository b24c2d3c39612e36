use crate::error::ExtractError;
use crate::model::Recipe;
use scraper::Html;

mod classify;
mod document;
mod json_ld;
mod normalize;
mod project;

pub use classify::is_recipe;
pub use document::{load_document, locate_json_ld_blocks};
pub use json_ld::JsonLdExtractor;
pub use normalize::{normalize_blocks, Candidate, CandidateSet};
pub use project::{coerce_yield, project_recipe};

pub struct ParsingContext {
    /// Where the document came from (URL or file path), for logging
    pub source: String,
    pub document: Html,
}

pub trait Extractor {
    fn parse(&self, context: &ParsingContext) -> Result<Recipe, ExtractError>;
}
