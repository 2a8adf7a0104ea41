//! Product records surfaced by the Products widget

use crate::media::MediaRef;
use serde::{Deserialize, Serialize};

/// A product record as read from the backing data store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier, referenced by product-picker settings
    pub id: String,
    /// Display name
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image: MediaRef,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: 0.0,
            image: MediaRef::default(),
        }
    }
}
