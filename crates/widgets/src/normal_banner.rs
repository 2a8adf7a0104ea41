//! Normal banner widget
//!
//! A top-of-page banner with a headline, a call-to-action button, and
//! background/logo images. The templates consume the settings verbatim
//! through the `Setting` option.

use anyhow::{bail, Result};
use storefront_core::{RenderContext, WidgetDefinition, WidgetType};
use storefront_types::settings::BannerSettings;
use storefront_types::{FieldMetadata, FieldType, WidgetSettings};

pub struct NormalBannerWidget {
    definition: WidgetDefinition,
}

impl NormalBannerWidget {
    pub const NAME: &'static str = "NormalBanner";

    pub fn new() -> Self {
        Self {
            definition: WidgetDefinition::new(Self::NAME, &["banner", "banner2"])
                .preview_icon("/images/Widget-NormalBanner.png")
                .group("Banners"),
        }
    }
}

impl Default for NormalBannerWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetType for NormalBannerWidget {
    fn definition(&self) -> &WidgetDefinition {
        &self.definition
    }

    fn settings_fields(&self) -> Vec<FieldMetadata> {
        vec![
            FieldMetadata::new("title", "Title", "Headline shown on the banner", FieldType::Text),
            FieldMetadata::new(
                "button_title",
                "Button Title",
                "Label of the call-to-action button",
                FieldType::Text,
            ),
            FieldMetadata::new("link", "Link", "Target of the call-to-action button", FieldType::Url),
            FieldMetadata::new(
                "background_image",
                "Background Image",
                "Image behind the banner content",
                FieldType::Image,
            ),
            FieldMetadata::new("logo", "Logo", "Logo shown on the banner", FieldType::Image),
        ]
    }

    fn default_settings(&self) -> WidgetSettings {
        WidgetSettings::Banner(BannerSettings::default())
    }

    fn build_context(&self, context: &mut RenderContext, settings: &WidgetSettings) -> Result<()> {
        match settings {
            WidgetSettings::Banner(banner) => {
                context.set_option("Setting", serde_json::to_value(banner)?);
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
