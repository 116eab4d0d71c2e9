// SPDX-License-Identifier: MIT OR Apache-2.0
//! Field schema model: the resolved type description a handle renders from.
//!
//! Schemas arrive as JSON produced elsewhere (a schema resolution step owns
//! that); this module only carries the resolved shape and classifies its
//! primitive tag for display. Nothing here validates data against a schema.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Classified primitive type of a field.
///
/// Produced by a flat lookup over the schema's raw tag; every tag outside the
/// recognized set, and an absent tag, classify as [`SchemaType::Any`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaType {
    /// `"string"` tag
    String,
    /// `"number"` tag
    Number,
    /// `"boolean"` tag
    Boolean,
    /// `"object"` tag
    Object,
    /// `"array"` tag
    Array,
    /// `"null"` tag
    Null,
    /// Unrecognized or absent tag
    Any,
}

impl SchemaType {
    /// Classify a raw schema tag. Total over any input: unrecognized or
    /// absent tags collapse to [`SchemaType::Any`].
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("string") => Self::String,
            Some("number") => Self::Number,
            Some("boolean") => Self::Boolean,
            Some("object") => Self::Object,
            Some("array") => Self::Array,
            Some("null") => Self::Null,
            _ => Self::Any,
        }
    }

    /// Human-readable name shown in the handle's type annotation.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::String => "text",
            Self::Number => "number",
            Self::Boolean => "true/false",
            Self::Object => "object",
            Self::Array => "list",
            Self::Null => "null",
            Self::Any => "any",
        }
    }
}

/// Resolved schema of one named field of a node's input or output contract.
///
/// All attributes are optional; unknown JSON keys are ignored rather than
/// rejected, and unrecognized type tags are kept verbatim so a schema
/// round-trips unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSchema {
    /// Raw primitive-type tag as written in the schema source.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
    /// Explicit human label; takes precedence over the beautified key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Free-text description surfaced as the input-handle tooltip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Nested field schemas of an object contract, in source order.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, FieldSchema>,
    /// Element schema of an array contract.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<FieldSchema>>,
    /// Property names that are mandatory in an object contract.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl FieldSchema {
    /// Create a schema with the given raw type tag.
    pub fn new(ty: impl Into<String>) -> Self {
        Self {
            ty: Some(ty.into()),
            ..Self::default()
        }
    }

    /// Create a schema without a type tag (classifies as "any").
    pub fn untyped() -> Self {
        Self::default()
    }

    /// Set the explicit title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a named property schema.
    pub fn with_property(mut self, name: impl Into<String>, schema: FieldSchema) -> Self {
        self.properties.insert(name.into(), schema);
        self
    }

    /// Set the array element schema.
    pub fn with_items(mut self, items: FieldSchema) -> Self {
        self.items = Some(Box::new(items));
        self
    }

    /// Mark a property name as required.
    pub fn require(mut self, name: impl Into<String>) -> Self {
        self.required.push(name.into());
        self
    }

    /// Read a schema from its JSON representation.
    pub fn from_value(value: serde_json::Value) -> Result<Self, SchemaError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Classified primitive type of this field.
    pub fn kind(&self) -> SchemaType {
        SchemaType::from_tag(self.ty.as_deref())
    }

    /// Explicit title, with empty strings treated as absent.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    /// Description, with empty strings treated as absent.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// Get a property schema by name.
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.properties.get(name)
    }

    /// Whether a property name appears in the `required` list.
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }
}

/// Error when reading a schema from its JSON representation.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The JSON value does not have the shape of a field schema.
    #[error("malformed field schema: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_recognized_tags_classify() {
        for (tag, kind) in [
            ("string", SchemaType::String),
            ("number", SchemaType::Number),
            ("boolean", SchemaType::Boolean),
            ("object", SchemaType::Object),
            ("array", SchemaType::Array),
            ("null", SchemaType::Null),
        ] {
            assert_eq!(SchemaType::from_tag(Some(tag)), kind);
        }
    }

    #[test]
    fn test_unrecognized_and_absent_tags_fall_back_to_any() {
        assert_eq!(SchemaType::from_tag(Some("unknown_tag")), SchemaType::Any);
        assert_eq!(SchemaType::from_tag(Some("integer")), SchemaType::Any);
        assert_eq!(SchemaType::from_tag(Some("")), SchemaType::Any);
        assert_eq!(SchemaType::from_tag(None), SchemaType::Any);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(SchemaType::String.display_name(), "text");
        assert_eq!(SchemaType::Number.display_name(), "number");
        assert_eq!(SchemaType::Boolean.display_name(), "true/false");
        assert_eq!(SchemaType::Object.display_name(), "object");
        assert_eq!(SchemaType::Array.display_name(), "list");
        assert_eq!(SchemaType::Null.display_name(), "null");
        assert_eq!(SchemaType::Any.display_name(), "any");
    }

    #[test]
    fn test_from_value_tolerates_unknown_keys() {
        let schema = FieldSchema::from_value(json!({
            "type": "string",
            "title": "User Name",
            "x-vendor-extension": {"anything": [1, 2, 3]},
        }))
        .unwrap();
        assert_eq!(schema.kind(), SchemaType::String);
        assert_eq!(schema.title(), Some("User Name"));
    }

    #[test]
    fn test_unknown_tag_survives_round_trip() {
        let schema = FieldSchema::from_value(json!({"type": "unknown_tag"})).unwrap();
        assert_eq!(schema.kind(), SchemaType::Any);
        assert_eq!(schema.ty.as_deref(), Some("unknown_tag"));

        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(value, json!({"type": "unknown_tag"}));
    }

    #[test]
    fn test_empty_title_counts_as_absent() {
        let schema = FieldSchema::new("string").with_title("");
        assert_eq!(schema.title(), None);
        assert_eq!(schema.description(), None);
    }

    #[test]
    fn test_nested_properties_keep_order_and_required() {
        let schema = FieldSchema::from_value(json!({
            "type": "object",
            "required": ["count"],
            "properties": {
                "user_name": {"type": "string"},
                "count": {"type": "number"},
                "tags": {"type": "array", "items": {"type": "string"}},
            },
        }))
        .unwrap();

        let keys: Vec<&str> = schema.properties.keys().map(String::as_str).collect();
        assert_eq!(keys, ["user_name", "count", "tags"]);
        assert!(schema.is_required("count"));
        assert!(!schema.is_required("user_name"));
        assert_eq!(schema.field("count").unwrap().kind(), SchemaType::Number);
        let items = schema.field("tags").unwrap().items.as_deref().unwrap();
        assert_eq!(items.kind(), SchemaType::String);
    }

    #[test]
    fn test_malformed_schema_is_an_error() {
        assert!(FieldSchema::from_value(json!({"type": 5})).is_err());
        assert!(FieldSchema::from_value(json!("not an object")).is_err());
    }
}
