//! Settings shape for the product picker widget

use crate::sorting::SortableCollection;
use serde::{Deserialize, Serialize};

/// Editable settings for the selected-products widget
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductsSettings {
    /// Identifiers of the chosen products
    #[serde(default)]
    pub products: Vec<String>,
    /// Editor-defined display order for the chosen products
    #[serde(default)]
    pub products_sorter: SortableCollection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_settings_deserialize_without_sorter() {
        let settings: ProductsSettings =
            serde_json::from_str(r#"{"products": ["1", "2"]}"#).unwrap();
        assert_eq!(settings.products, vec!["1", "2"]);
        assert!(settings.products_sorter.primary_keys.is_empty());
    }
}
