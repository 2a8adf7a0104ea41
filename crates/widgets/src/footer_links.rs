//! Footer links widget
//!
//! Titled sections of links shown at the bottom of every page. The widget
//! has no template of its own; the page layout renders the sections
//! directly from the `Setting` option.

use anyhow::{bail, Result};
use storefront_core::{RenderContext, WidgetDefinition, WidgetType};
use storefront_types::settings::FooterLinksSettings;
use storefront_types::{FieldMetadata, FieldType, WidgetSettings};

pub struct FooterLinksWidget {
    definition: WidgetDefinition,
}

impl FooterLinksWidget {
    pub const NAME: &'static str = "Footer Links";

    pub fn new() -> Self {
        Self {
            definition: WidgetDefinition::new(Self::NAME, &[])
                .preview_icon("/images/Widget-Products.png"),
        }
    }
}

impl Default for FooterLinksWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetType for FooterLinksWidget {
    fn definition(&self) -> &WidgetDefinition {
        &self.definition
    }

    fn settings_fields(&self) -> Vec<FieldMetadata> {
        vec![FieldMetadata::new(
            "sections",
            "Sections",
            "Titled groups of footer links",
            FieldType::Collection,
        )]
    }

    fn default_settings(&self) -> WidgetSettings {
        WidgetSettings::FooterLinks(FooterLinksSettings::default())
    }

    fn build_context(&self, context: &mut RenderContext, settings: &WidgetSettings) -> Result<()> {
        match settings {
            WidgetSettings::FooterLinks(footer) => {
                context.set_option("Setting", serde_json::to_value(footer)?);
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

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_types::settings::{FooterItem, FooterSection};

    #[test]
    fn test_build_context_copies_sections() {
        let widget = FooterLinksWidget::new();
        let mut context = RenderContext::new();
        let settings = WidgetSettings::FooterLinks(FooterLinksSettings {
            sections: vec![FooterSection {
                title: "Help".to_string(),
                items: vec![FooterItem {
                    name: "Contact".to_string(),
                    link: "/contact".to_string(),
                }],
                ..FooterSection::default()
            }],
        });

        widget.build_context(&mut context, &settings).unwrap();
        let setting = context.option("Setting").unwrap();
        assert_eq!(setting["sections"][0]["title"], "Help");
        assert_eq!(setting["sections"][0]["items"][0]["link"], "/contact");
    }
}
