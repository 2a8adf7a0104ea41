//! Selected-products widget
//!
//! Surfaces a hand-picked set of product records. The editor chooses from a
//! candidate list backed by the data store; rendering fetches at most
//! [`MAX_PRODUCTS`] matching records and applies the editor-defined order.

use anyhow::{bail, Result};
use storefront_core::{
    MetaConfig, RenderContext, SettingsResource, WidgetDefinition, WidgetType,
};
use storefront_types::settings::ProductsSettings;
use storefront_types::{FieldMetadata, FieldType, WidgetSettings};

/// Upper bound on records a single products widget renders
pub const MAX_PRODUCTS: usize = 9;

pub struct ProductsWidget {
    definition: WidgetDefinition,
}

impl ProductsWidget {
    pub const NAME: &'static str = "Products";

    pub fn new() -> Self {
        Self {
            definition: WidgetDefinition::new(Self::NAME, &["products"])
                .preview_icon("/images/Widget-Products.png")
                .group("Products"),
        }
    }
}

impl Default for ProductsWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetType for ProductsWidget {
    fn definition(&self) -> &WidgetDefinition {
        &self.definition
    }

    fn settings_fields(&self) -> Vec<FieldMetadata> {
        vec![FieldMetadata::new(
            "products",
            "Products",
            "Products to feature, in editor-defined order",
            FieldType::SelectMany,
        )]
    }

    fn default_settings(&self) -> WidgetSettings {
        WidgetSettings::Products(ProductsSettings::default())
    }

    fn settings_resource(&self) -> SettingsResource {
        SettingsResource::new(self.settings_fields()).meta(
            MetaConfig::new("products").with_collection(|context| {
                let store = context.store()?;
                Ok(store
                    .all_products()?
                    .into_iter()
                    .map(|product| (product.id, product.name))
                    .collect())
            }),
        )
    }

    fn build_context(&self, context: &mut RenderContext, settings: &WidgetSettings) -> Result<()> {
        match settings {
            WidgetSettings::Products(cfg) => {
                if cfg.products.is_empty() {
                    log::debug!("products widget has no selection, skipping query");
                    return Ok(());
                }
                let store = context.store()?;
                let mut products = store.products_by_ids(&cfg.products, MAX_PRODUCTS)?;
                cfg.products_sorter
                    .sort_by_key(&mut products, |product| product.id.clone());
                context.set_option("Products", serde_json::to_value(&products)?);
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
