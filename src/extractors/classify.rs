use super::normalize::Candidate;
use serde_json::Value;

const RECIPE_TYPE: &str = "Recipe";

/// Whether the candidate's `@type` declares it a schema.org Recipe.
///
/// Only `@type` is inspected, and the match is exact.
pub fn is_recipe(candidate: &Candidate) -> bool {
    match candidate.get("@type") {
        Some(Value::String(type_str)) => type_str == RECIPE_TYPE,
        Some(Value::Array(types)) => types.iter().any(|t| t.as_str() == Some(RECIPE_TYPE)),
        _ => false,
    }
}
