//! Data store boundary for widgets that query records

use anyhow::Result;
use storefront_types::Product;

/// Read-only access to the records widgets can surface
///
/// The real site backs this with its persistence layer; tests and the CLI
/// use [`MemoryStore`].
pub trait DataStore: Send + Sync {
    /// All products, for building editor candidate lists
    fn all_products(&self) -> Result<Vec<Product>>;

    /// Products matching the given identifiers, capped at `limit`
    ///
    /// Identifiers with no matching record are skipped. Results come back in
    /// store order; display order is applied by the caller.
    fn products_by_ids(&self, ids: &[String], limit: usize) -> Result<Vec<Product>>;
}

/// In-memory data store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    products: Vec<Product>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn push(&mut self, product: Product) {
        self.products.push(product);
    }
}

impl DataStore for MemoryStore {
    fn all_products(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn products_by_ids(&self, ids: &[String], limit: usize) -> Result<Vec<Product>> {
        Ok(self
            .products
            .iter()
            .filter(|product| ids.contains(&product.id))
            .take(limit)
            .cloned()
            .collect())
    }
}
