//! Settings shape for the footer links widget

use crate::sorting::SortableCollection;
use serde::{Deserialize, Serialize};

/// One link in a footer section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FooterItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub link: String,
}

/// A titled group of footer links
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FooterSection {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub items: Vec<FooterItem>,
    /// Editor-defined display order for the items, keyed by item name
    #[serde(default)]
    pub items_sorter: SortableCollection,
}

/// Editable settings for the footer links widget
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FooterLinksSettings {
    #[serde(default)]
    pub sections: Vec<FooterSection>,
}
