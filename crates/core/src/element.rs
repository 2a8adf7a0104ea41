//! Rich-text editor building blocks

use crate::template::render_placeholders;
use serde_json::Value;
use storefront_types::FieldMetadata;

/// A named building block the rich-text editor can insert
///
/// Elements pair an HTML template with the field schema of its settings;
/// rendering substitutes `{{field}}` placeholders from a settings value.
pub struct EditorElement {
    pub name: String,
    pub template: String,
    pub fields: Vec<FieldMetadata>,
}

impl EditorElement {
    pub fn new(
        name: impl Into<String>,
        template: impl Into<String>,
        fields: Vec<FieldMetadata>,
    ) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
            fields,
        }
    }

    /// Render this element's template against a settings value
    pub fn render(&self, values: &Value) -> String {
        render_placeholders(&self.template, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use storefront_types::FieldType;

    #[test]
    fn test_element_render() {
        let element = EditorElement::new(
            "Add Link",
            "<a href='{{link}}'>{{text}}</a>",
            vec![
                FieldMetadata::new("text", "Text", "Link label", FieldType::Text),
                FieldMetadata::new("link", "Link", "Link target", FieldType::Url),
            ],
        );
        let html = element.render(&json!({"text": "Shop now", "link": "/sale"}));
        assert_eq!(html, "<a href='/sale'>Shop now</a>");
    }
}
