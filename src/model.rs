use serde::Serialize;
use serde_json::Value;

/// A text-shaped recipe field as found in the source entity.
///
/// Serialized untagged, so the output is the source value unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    // objects, mixed arrays, numbers (ImageObject, HowToStep, ...)
    Structured(Value),
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => FieldValue::Text(s),
            Value::Array(items) if items.iter().all(Value::is_string) => FieldValue::List(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
            ),
            other => FieldValue::Structured(other),
        }
    }
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }
}

/// The flat recipe record returned by the service.
///
/// Every field is optional; only fields present on the source entity are set.
/// Field order here is the order of keys in the serialized object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_yield: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_ingredient: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_instructions: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_category: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_cuisine: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_calories: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_cook_time: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_prep_time: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_time: Option<Value>,
}

impl Recipe {
    /// Number of fields present on the record
    pub fn field_count(&self) -> usize {
        [
            self.name.is_some(),
            self.description.is_some(),
            self.image.is_some(),
            self.recipe_yield.is_some(),
            self.recipe_ingredient.is_some(),
            self.recipe_instructions.is_some(),
            self.recipe_category.is_some(),
            self.recipe_cuisine.is_some(),
            self.recipe_calories.is_some(),
            self.recipe_cook_time.is_some(),
            self.recipe_prep_time.is_some(),
            self.total_time.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.field_count() == 0
    }
}
