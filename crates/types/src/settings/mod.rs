//! Per-widget settings shapes and the tagged settings enum

mod banner;
mod banner_editor;
mod footer;
mod products;
mod slideshow;

pub use banner::BannerSettings;
pub use banner_editor::{BannerEditorSettings, ButtonElement, HeaderElement, SubHeaderElement};
pub use footer::{FooterItem, FooterLinksSettings, FooterSection};
pub use products::ProductsSettings;
pub use slideshow::{SlideImage, SlideshowSettings};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Type-safe enum over all widget settings shapes.
/// Uses a serde tag for JSON serialization: {"widget_type": "banner", ...}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "widget_type")]
pub enum WidgetSettings {
    #[serde(rename = "banner")]
    Banner(BannerSettings),

    #[serde(rename = "banner_editor")]
    BannerEditor(BannerEditorSettings),

    #[serde(rename = "slideshow")]
    Slideshow(SlideshowSettings),

    #[serde(rename = "products")]
    Products(ProductsSettings),

    #[serde(rename = "footer_links")]
    FooterLinks(FooterLinksSettings),
}

impl WidgetSettings {
    /// Get the settings type ID string
    pub fn widget_type(&self) -> &'static str {
        match self {
            WidgetSettings::Banner(_) => "banner",
            WidgetSettings::BannerEditor(_) => "banner_editor",
            WidgetSettings::Slideshow(_) => "slideshow",
            WidgetSettings::Products(_) => "products",
            WidgetSettings::FooterLinks(_) => "footer_links",
        }
    }

    /// Create default settings for a given settings type ID
    pub fn default_for_type(widget_type: &str) -> Option<Self> {
        match widget_type {
            "banner" => Some(WidgetSettings::Banner(BannerSettings::default())),
            "banner_editor" => Some(WidgetSettings::BannerEditor(BannerEditorSettings::default())),
            "slideshow" => Some(WidgetSettings::Slideshow(SlideshowSettings::default())),
            "products" => Some(WidgetSettings::Products(ProductsSettings::default())),
            "footer_links" => Some(WidgetSettings::FooterLinks(FooterLinksSettings::default())),
            _ => None,
        }
    }

    /// Create settings from a JSON value for a given settings type ID.
    /// Handles both the tagged format ({"widget_type": "banner", ...}) and
    /// the bare inner shape ({...}).
    pub fn from_value_for_type(widget_type: &str, value: Value) -> Option<Self> {
        if let Ok(settings) = serde_json::from_value::<WidgetSettings>(value.clone()) {
            return Some(settings);
        }

        match widget_type {
            "banner" => serde_json::from_value(value)
                .ok()
                .map(WidgetSettings::Banner),
            "banner_editor" => serde_json::from_value(value)
                .ok()
                .map(WidgetSettings::BannerEditor),
            "slideshow" => serde_json::from_value(value)
                .ok()
                .map(WidgetSettings::Slideshow),
            "products" => serde_json::from_value(value)
                .ok()
                .map(WidgetSettings::Products),
            "footer_links" => serde_json::from_value(value)
                .ok()
                .map(WidgetSettings::FooterLinks),
            other => {
                log::debug!("no settings shape registered for widget type {}", other);
                None
            }
        }
    }

    /// Get the inner settings as a JSON value, without the enum tag.
    /// This is the shape templates consume through the render context.
    pub fn to_inner_value(&self) -> Option<Value> {
        match self {
            WidgetSettings::Banner(s) => serde_json::to_value(s).ok(),
            WidgetSettings::BannerEditor(s) => serde_json::to_value(s).ok(),
            WidgetSettings::Slideshow(s) => serde_json::to_value(s).ok(),
            WidgetSettings::Products(s) => serde_json::to_value(s).ok(),
            WidgetSettings::FooterLinks(s) => serde_json::to_value(s).ok(),
        }
    }
}

impl Default for WidgetSettings {
    fn default() -> Self {
        WidgetSettings::Banner(BannerSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_settings_serialization() {
        let settings = WidgetSettings::Banner(BannerSettings::default());
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"widget_type\":\"banner\""));

        let deserialized: WidgetSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.widget_type(), "banner");
    }

    #[test]
    fn test_default_for_type() {
        let settings = WidgetSettings::default_for_type("slideshow").unwrap();
        assert_eq!(settings.widget_type(), "slideshow");
        assert!(WidgetSettings::default_for_type("carousel").is_none());
    }

    #[test]
    fn test_from_value_for_type_accepts_bare_shape() {
        let value = serde_json::json!({"products": ["1", "2"]});
        let settings = WidgetSettings::from_value_for_type("products", value).unwrap();
        match settings {
            WidgetSettings::Products(cfg) => assert_eq!(cfg.products, vec!["1", "2"]),
            other => panic!("unexpected settings type: {}", other.widget_type()),
        }
    }

    #[test]
    fn test_from_value_for_type_prefers_tag() {
        let value = serde_json::json!({"widget_type": "banner", "title": "Hello"});
        // The tag wins even when a different type ID is supplied.
        let settings = WidgetSettings::from_value_for_type("slideshow", value).unwrap();
        assert_eq!(settings.widget_type(), "banner");
    }

    #[test]
    fn test_to_inner_value_drops_tag() {
        let settings = WidgetSettings::Slideshow(SlideshowSettings::default());
        let inner = settings.to_inner_value().unwrap();
        assert!(inner.get("widget_type").is_none());
        assert!(inner.get("slide_images").is_some());
    }
}
