//! Field metadata for describing widget settings shapes

use serde::{Deserialize, Serialize};

/// Type of value a settings field holds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldType {
    /// Plain text (e.g., a banner title)
    Text,
    /// A link target
    Url,
    /// An image reference (URL plus alt text)
    Image,
    /// Rich text assembled by the editor-element pipeline
    RichText,
    /// Multiple choices out of a candidate list
    SelectMany,
    /// A nested collection of sub-records (e.g., slides, footer sections)
    Collection,
}

/// Metadata describing a single settings field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldMetadata {
    /// Unique identifier for this field within its settings shape
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Description of what this field configures
    pub description: String,
    /// Type of value this field holds
    pub field_type: FieldType,
    /// Whether the editor must fill this field in
    #[serde(default)]
    pub required: bool,
}

impl FieldMetadata {
    /// Create a new field metadata
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        field_type: FieldType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            field_type,
            required: false,
        }
    }

    /// Mark this field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_metadata_defaults_to_optional() {
        let field = FieldMetadata::new("title", "Title", "Banner headline", FieldType::Text);
        assert!(!field.required);
        assert_eq!(field.id, "title");
    }

    #[test]
    fn test_required_builder() {
        let field =
            FieldMetadata::new("title", "Title", "Banner headline", FieldType::Text).required();
        assert!(field.required);
    }
}
