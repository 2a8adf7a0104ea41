//! Media references for image-bearing settings fields

use serde::{Deserialize, Serialize};

/// Reference to an uploaded media file
///
/// Widgets store the resolved URL rather than the raw upload; the asset
/// pipeline that produces these URLs lives outside this workspace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaRef {
    /// Public URL of the media file
    #[serde(default)]
    pub url: String,
    /// Alternative text for accessibility
    #[serde(default)]
    pub alt: String,
}

impl MediaRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: String::new(),
        }
    }

    /// True when no media file has been attached
    pub fn is_empty(&self) -> bool {
        self.url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_media_ref() {
        assert!(MediaRef::default().is_empty());
        assert!(!MediaRef::new("/uploads/banner.png").is_empty());
    }

    #[test]
    fn test_media_ref_deserializes_with_missing_alt() {
        let media: MediaRef = serde_json::from_str(r#"{"url": "/uploads/logo.png"}"#).unwrap();
        assert_eq!(media.url, "/uploads/logo.png");
        assert_eq!(media.alt, "");
    }
}
