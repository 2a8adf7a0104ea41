//! Slideshow widget
//!
//! A sequence of titled slide images. Saving is rejected when any slide has
//! a blank title.

use anyhow::{bail, Result};
use storefront_core::{RenderContext, SettingsResource, WidgetDefinition, WidgetType};
use storefront_types::settings::SlideshowSettings;
use storefront_types::{FieldMetadata, FieldType, WidgetSettings};

pub struct SlideShowWidget {
    definition: WidgetDefinition,
}

impl SlideShowWidget {
    pub const NAME: &'static str = "SlideShow";

    pub fn new() -> Self {
        Self {
            definition: WidgetDefinition::new(Self::NAME, &["slideshow"])
                .preview_icon("/images/Widget-NormalBanner.png")
                .group("Banners"),
        }
    }
}

impl Default for SlideShowWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetType for SlideShowWidget {
    fn definition(&self) -> &WidgetDefinition {
        &self.definition
    }

    fn settings_fields(&self) -> Vec<FieldMetadata> {
        vec![FieldMetadata::new(
            "slide_images",
            "Slide Images",
            "Titled slides shown in rotation",
            FieldType::Collection,
        )]
    }

    fn default_settings(&self) -> WidgetSettings {
        WidgetSettings::Slideshow(SlideshowSettings::default())
    }

    fn settings_resource(&self) -> SettingsResource {
        SettingsResource::new(self.settings_fields()).add_processor(|settings| {
            if let WidgetSettings::Slideshow(slideshow) = settings {
                for slide in &slideshow.slide_images {
                    if slide.title.is_empty() {
                        bail!("slide title is blank");
                    }
                }
            }
            Ok(())
        })
    }

    fn build_context(&self, context: &mut RenderContext, settings: &WidgetSettings) -> Result<()> {
        match settings {
            WidgetSettings::Slideshow(slideshow) => {
                context.set_option("Setting", serde_json::to_value(slideshow)?);
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
