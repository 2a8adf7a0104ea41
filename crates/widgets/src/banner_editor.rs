//! Banner editor widget and its rich-text building blocks
//!
//! The admin UI assembles markup from the registered editor elements and
//! stores the result as a single HTML value; rendering passes that value
//! through to the template.

use anyhow::{bail, Result};
use storefront_core::{EditorElement, Registry, RenderContext, WidgetDefinition, WidgetType};
use storefront_types::settings::BannerEditorSettings;
use storefront_types::{FieldMetadata, FieldType, WidgetSettings};

pub struct BannerEditorWidget {
    definition: WidgetDefinition,
}

impl BannerEditorWidget {
    pub const NAME: &'static str = "BannerEditor";

    pub fn new() -> Self {
        Self {
            definition: WidgetDefinition::new(Self::NAME, &["banner_editor"]),
        }
    }
}

impl Default for BannerEditorWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetType for BannerEditorWidget {
    fn definition(&self) -> &WidgetDefinition {
        &self.definition
    }

    fn settings_fields(&self) -> Vec<FieldMetadata> {
        vec![FieldMetadata::new(
            "value",
            "Value",
            "Markup assembled from editor elements",
            FieldType::RichText,
        )]
    }

    fn default_settings(&self) -> WidgetSettings {
        WidgetSettings::BannerEditor(BannerEditorSettings::default())
    }

    fn build_context(&self, context: &mut RenderContext, settings: &WidgetSettings) -> Result<()> {
        match settings {
            WidgetSettings::BannerEditor(editor) => {
                context.set_option("Value", serde_json::Value::from(editor.value.clone()));
                Ok(())
            }
            other => bail!(
                "{} cannot render {} settings",
                Self::NAME,
                other.widget_type()
            ),
        }
    }
}

/// Register the rich-text building blocks the banner editor offers
pub fn register_elements(registry: &mut Registry) {
    registry.register_element(EditorElement::new(
        "Add Header",
        r#"<h1 style="color: {{color}};">{{text}}</h1>"#,
        vec![
            FieldMetadata::new("text", "Text", "Header text", FieldType::Text),
            FieldMetadata::new("color", "Color", "Header text color", FieldType::Text),
        ],
    ));

    registry.register_element(EditorElement::new(
        "Add Sub Header",
        r#"<h2 style="color: {{color}};">{{text}}</h2>"#,
        vec![
            FieldMetadata::new("text", "Text", "Sub header text", FieldType::Text),
            FieldMetadata::new("color", "Color", "Sub header text color", FieldType::Text),
        ],
    ));

    registry.register_element(EditorElement::new(
        "Add Link",
        "<a href='{{link}}'>{{text}}</a>",
        vec![
            FieldMetadata::new("text", "Text", "Link label", FieldType::Text),
            FieldMetadata::new("link", "Link", "Link target", FieldType::Url),
        ],
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use storefront_types::settings::HeaderElement;

    #[test]
    fn test_build_context_passes_markup_through() {
        let widget = BannerEditorWidget::new();
        let mut context = RenderContext::new();
        let settings = WidgetSettings::BannerEditor(BannerEditorSettings {
            value: "<h1>Welcome</h1>".to_string(),
        });

        widget.build_context(&mut context, &settings).unwrap();
        assert_eq!(
            context.option("Value").unwrap(),
            &serde_json::Value::from("<h1>Welcome</h1>")
        );
    }

    #[test]
    fn test_registered_elements_render() {
        let mut registry = Registry::new();
        register_elements(&mut registry);

        let header = HeaderElement {
            text: "Welcome".to_string(),
            color: "#ff0000".to_string(),
        };
        let element = registry.element("Add Header").unwrap();
        let html = element.render(&serde_json::to_value(&header).unwrap());
        assert_eq!(html, r#"<h1 style="color: #ff0000;">Welcome</h1>"#);

        let link = registry.element("Add Link").unwrap();
        let html = link.render(&json!({"text": "Shop", "link": "/sale"}));
        assert_eq!(html, "<a href='/sale'>Shop</a>");
    }

    #[test]
    fn test_element_names_listed() {
        let mut registry = Registry::new();
        register_elements(&mut registry);
        assert_eq!(
            registry.list_elements(),
            vec!["Add Header", "Add Link", "Add Sub Header"]
        );
    }
}
