//! Settings shapes for the rich-text banner editor

use serde::{Deserialize, Serialize};

/// Editable settings for the banner editor widget
///
/// `value` holds the HTML assembled from editor elements; the admin UI owns
/// the assembly, the widget only passes the markup through to the template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BannerEditorSettings {
    #[serde(default)]
    pub value: String,
}

/// Settings for the "Add Header" editor element
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeaderElement {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub color: String,
}

/// Settings for the "Add Sub Header" editor element
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubHeaderElement {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub color: String,
}

/// Settings for the "Add Link" editor element
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ButtonElement {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub link: String,
}
