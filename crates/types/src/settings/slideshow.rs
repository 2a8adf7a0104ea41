//! Settings shape for the slideshow widget

use crate::media::MediaRef;
use serde::{Deserialize, Serialize};

/// A single slide in a slideshow
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlideImage {
    /// Caption shown over the slide; must not be blank when saved
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: MediaRef,
}

/// Editable settings for the slideshow widget
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlideshowSettings {
    #[serde(default)]
    pub slide_images: Vec<SlideImage>,
}
