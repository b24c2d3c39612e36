use super::normalize::Candidate;
use crate::error::CoercionError;
use crate::model::{FieldValue, Recipe};
use log::debug;
use serde_json::Value;

/// Map a classified Recipe entity onto the output record.
///
/// Recognized keys are copied verbatim, except `recipeYield` which is coerced
/// to an integer (and omitted when that fails). Unknown keys are dropped.
pub fn project_recipe(candidate: &Candidate) -> Recipe {
    let text = |key: &str| candidate.get(key).cloned().map(FieldValue::from);
    let passthrough = |key: &str| candidate.get(key).cloned();

    let recipe_yield = candidate
        .get("recipeYield")
        .and_then(|value| match coerce_yield(value) {
            Ok(n) => Some(n),
            Err(e) => {
                debug!("Omitting recipeYield: {}", e);
                None
            }
        });

    Recipe {
        name: text("name"),
        description: text("description"),
        image: text("image"),
        recipe_yield,
        recipe_ingredient: text("recipeIngredient"),
        recipe_instructions: text("recipeInstructions"),
        recipe_category: passthrough("recipeCategory"),
        recipe_cuisine: passthrough("recipeCuisine"),
        recipe_calories: passthrough("recipeCalories"),
        recipe_cook_time: passthrough("recipeCookTime"),
        recipe_prep_time: passthrough("recipePrepTime"),
        total_time: passthrough("totalTime"),
    }
}

/// Coerce a `recipeYield` source value to an integer.
///
/// The record types the yield as an integer, so a fractional number such as
/// `2.5` is truncated to `2` rather than copied through as a float.
pub fn coerce_yield(value: &Value) -> Result<i64, CoercionError> {
    let failure = || CoercionError {
        field: "recipeYield",
        found: value.to_string(),
    };

    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                    .map(|f| f.trunc() as i64)
            })
            .ok_or_else(failure),
        Value::String(s) => parse_leading_int(s).ok_or_else(failure),
        // e.g. ["4", "4 servings"]
        Value::Array(items) => items
            .iter()
            .find_map(|item| match item {
                Value::Array(_) => None,
                other => coerce_yield(other).ok(),
            })
            .ok_or_else(failure),
        _ => Err(failure()),
    }
}

/// Leading-integer parse: optional whitespace and sign, then digits up to the
/// first non-digit. "4 servings" -> 4, "four" -> None.
fn parse_leading_int(s: &str) -> Option<i64> {
    let trimmed = s.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    format!("{sign}{digits}").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn candidate(value: Value) -> Candidate {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_yield_coercion() {
        assert_eq!(coerce_yield(&json!("4")), Ok(4));
        assert_eq!(coerce_yield(&json!(4)), Ok(4));
        assert_eq!(coerce_yield(&json!("4 servings")), Ok(4));
        assert_eq!(coerce_yield(&json!("  12")), Ok(12));
        assert_eq!(coerce_yield(&json!(6.0)), Ok(6));
        assert_eq!(coerce_yield(&json!(2.5)), Ok(2));
        assert_eq!(coerce_yield(&json!(["8", "8 pieces"])), Ok(8));
        assert_eq!(coerce_yield(&json!(["Serves", "6"])), Ok(6));
    }

    #[test]
    fn test_yield_coercion_failures() {
        for value in [
            json!("four"),
            json!(""),
            json!("-"),
            json!(null),
            json!(true),
            json!({"value": 4}),
            json!(["many"]),
            json!("99999999999999999999"),
        ] {
            let err = coerce_yield(&value).unwrap_err();
            assert_eq!(err.field, "recipeYield");
        }
    }

    #[test]
    fn test_unparseable_yield_is_omitted() {
        let recipe = project_recipe(&candidate(json!({
            "@type": "Recipe",
            "name": "Soup",
            "recipeYield": "four"
        })));

        assert_eq!(recipe.recipe_yield, None);
        assert_eq!(recipe.name, Some(FieldValue::Text("Soup".to_string())));
    }

    #[test]
    fn test_unknown_keys_are_dropped() {
        let recipe = project_recipe(&candidate(json!({
            "@type": "Recipe",
            "@context": "https://schema.org",
            "author": {"@type": "Person", "name": "Chef"},
            "keywords": "soup"
        })));

        assert!(recipe.is_empty());
        assert_eq!(serde_json::to_value(&recipe).unwrap(), json!({}));
    }

    #[test]
    fn test_all_fields_round_trip() {
        let source = json!({
            "@type": "Recipe",
            "name": "Pasta Carbonara",
            "description": "Classic Italian pasta dish",
            "image": ["https://example.com/1.jpg", "https://example.com/2.jpg"],
            "recipeYield": "4",
            "recipeIngredient": ["spaghetti", "eggs", "guanciale"],
            "recipeInstructions": [
                {"@type": "HowToStep", "text": "Cook pasta"},
                {"@type": "HowToStep", "text": "Mix"}
            ],
            "recipeCategory": ["Main", "Pasta"],
            "recipeCuisine": "Italian",
            "recipeCalories": {"@type": "NutritionInformation", "calories": "600 kcal"},
            "recipeCookTime": "PT10M",
            "recipePrepTime": "PT5M",
            "totalTime": "PT15M"
        });

        let recipe = project_recipe(&candidate(source.clone()));
        let output = serde_json::to_value(&recipe).unwrap();

        assert_eq!(recipe.field_count(), 12);
        assert_eq!(output["recipeYield"], json!(4));
        for key in [
            "name",
            "description",
            "image",
            "recipeIngredient",
            "recipeInstructions",
            "recipeCategory",
            "recipeCuisine",
            "recipeCalories",
            "recipeCookTime",
            "recipePrepTime",
            "totalTime",
        ] {
            assert_eq!(output[key], source[key], "field {key} changed");
        }
    }
}
