use super::classify::is_recipe;
use super::document::locate_json_ld_blocks;
use super::normalize::normalize_blocks;
use super::project::project_recipe;
use super::{Extractor, ParsingContext};
use crate::config::ExtractionConfig;
use crate::error::ExtractError;
use crate::model::Recipe;
use log::debug;

/// Extracts the first schema.org Recipe found in the page's JSON-LD blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLdExtractor {
    options: ExtractionConfig,
}

impl JsonLdExtractor {
    pub fn new(options: ExtractionConfig) -> Self {
        Self { options }
    }
}

impl Extractor for JsonLdExtractor {
    fn parse(&self, context: &ParsingContext) -> Result<Recipe, ExtractError> {
        debug!("JsonLdExtractor: Starting parse for {}", context.source);

        let blocks = locate_json_ld_blocks(&context.document)?;
        let candidates = normalize_blocks(&blocks, &self.options)?;

        // First match wins; later candidates are never looked at.
        for (index, candidate) in candidates.iter().enumerate() {
            if is_recipe(candidate) {
                debug!("JsonLdExtractor: Candidate {} is a Recipe", index);
                return Ok(project_recipe(candidate));
            }
            debug!(
                "JsonLdExtractor: Candidate {} has @type {:?}",
                index,
                candidate.get("@type")
            );
        }

        Err(ExtractError::NotFound(
            "No entity in this document qualifies as a Recipe".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BlockPolicy;
    use crate::error::ErrorKind;
    use crate::extractors::document::load_document;
    use crate::model::FieldValue;

    fn create_html_document(json_ld: &str) -> String {
        format!(
            r#"
            <!DOCTYPE html>
            <html>
            <head>
                <script type="application/ld+json">
                    {json_ld}
                </script>
            </head>
            <body></body>
            </html>
            "#
        )
    }

    fn parse_with(html: &str, options: ExtractionConfig) -> Result<Recipe, ExtractError> {
        let context = ParsingContext {
            source: "http://example.com".to_string(),
            document: load_document(html).unwrap(),
        };
        JsonLdExtractor::new(options).parse(&context)
    }

    fn parse(html: &str) -> Result<Recipe, ExtractError> {
        parse_with(html, ExtractionConfig::default())
    }

    #[test]
    fn test_parse_basic_recipe() {
        let json_ld = r#"
        {
            "@context": "https://schema.org/",
            "@type": "Recipe",
            "name": "Chocolate Chip Cookies",
            "description": "Delicious homemade cookies",
            "image": "https://example.com/cookie.jpg",
            "recipeIngredient": ["flour", "sugar", "chocolate chips"],
            "recipeInstructions": "Mix ingredients. Bake at 350F for 10 minutes.",
            "recipeYield": "24",
            "author": "Jane Doe"
        }
        "#;

        let result = parse(&create_html_document(json_ld)).unwrap();

        assert_eq!(
            result.name,
            Some(FieldValue::Text("Chocolate Chip Cookies".to_string()))
        );
        assert_eq!(
            result.image,
            Some(FieldValue::Text("https://example.com/cookie.jpg".to_string()))
        );
        assert_eq!(
            result.recipe_ingredient.as_ref().and_then(FieldValue::as_list),
            Some(&["flour".to_string(), "sugar".to_string(), "chocolate chips".to_string()][..])
        );
        assert_eq!(result.recipe_yield, Some(24));
        assert_eq!(result.field_count(), 6);
    }

    #[test]
    fn test_parse_recipe_with_array() {
        let json_ld = r#"
        [
            {
                "@type": "WebSite",
                "name": "Recipe Website"
            },
            {
                "@context": "https://schema.org/",
                "@type": "Recipe",
                "name": "Pasta Carbonara",
                "recipeYield": 4
            }
        ]
        "#;

        let result = parse(&create_html_document(json_ld)).unwrap();

        assert_eq!(
            result.name.as_ref().and_then(FieldValue::as_text),
            Some("Pasta Carbonara")
        );
        assert_eq!(result.recipe_yield, Some(4));
    }

    #[test]
    fn test_non_recipe_is_not_found() {
        let result = parse(&create_html_document(
            r#"{"@type": "Article", "name": "News"}"#,
        ));

        assert_eq!(result.unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_first_match_wins() {
        let html = r#"
            <html><head>
            <script type="application/ld+json">{"@type": "Recipe", "name": "First"}</script>
            <script type="application/ld+json">{"@type": "Recipe", "name": "Second"}</script>
            </head></html>
        "#;

        let result = parse(html).unwrap();

        assert_eq!(result.name.as_ref().and_then(FieldValue::as_text), Some("First"));
    }

    #[test]
    fn test_graph_recipe_needs_expansion() {
        let json_ld = r#"
        {
            "@context": "https://schema.org",
            "@graph": [
                {"@type": "WebPage", "name": "Page"},
                {"@type": "Recipe", "name": "Shakshuka"}
            ]
        }
        "#;
        let html = create_html_document(json_ld);

        assert_eq!(parse(&html).unwrap_err().kind(), ErrorKind::NotFound);

        let options = ExtractionConfig {
            expand_graph: true,
            ..Default::default()
        };
        let result = parse_with(&html, options).unwrap();
        assert_eq!(result.name.as_ref().and_then(FieldValue::as_text), Some("Shakshuka"));
    }

    #[test]
    fn test_lenient_policy_recovers_recipe_next_to_broken_block() {
        let html = r#"
            <html><head>
            <script type="application/ld+json">{"@type": "Organization",</script>
            <script type="application/ld+json">{"@type": "Recipe", "name": "Soup"}</script>
            </head></html>
        "#;

        assert_eq!(parse(html).unwrap_err().kind(), ErrorKind::Parse);

        let options = ExtractionConfig {
            block_policy: BlockPolicy::Lenient,
            ..Default::default()
        };
        let result = parse_with(html, options).unwrap();
        assert_eq!(result.name.as_ref().and_then(FieldValue::as_text), Some("Soup"));
    }

    #[test]
    fn test_lenient_policy_without_any_valid_block() {
        let html = r#"
            <html><head>
            <script type="application/ld+json">{"@type": "Recipe", "name": </script>
            <script type="application/ld+json">[{"@type": "Organization"</script>
            </head></html>
        "#;
        let options = ExtractionConfig {
            block_policy: BlockPolicy::Lenient,
            ..Default::default()
        };

        let err = parse_with(html, options).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
