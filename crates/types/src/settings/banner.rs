//! Settings shape for the normal banner widget

use crate::media::MediaRef;
use serde::{Deserialize, Serialize};

/// Editable settings for a top-of-page banner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BannerSettings {
    /// Headline shown on the banner
    #[serde(default)]
    pub title: String,
    /// Label of the call-to-action button
    #[serde(default)]
    pub button_title: String,
    /// Target of the call-to-action button
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub background_image: MediaRef,
    #[serde(default)]
    pub logo: MediaRef,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_settings_deserialize_partial() {
        let settings: BannerSettings =
            serde_json::from_str(r#"{"title": "Summer Sale", "link": "/sale"}"#).unwrap();
        assert_eq!(settings.title, "Summer Sale");
        assert_eq!(settings.button_title, "");
        assert!(settings.logo.is_empty());
    }
}
