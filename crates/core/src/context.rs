//! Request-scoped render context

use crate::store::DataStore;
use anyhow::{anyhow, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Request data exposed to scope predicates and context builders
#[derive(Debug, Clone, Default)]
pub struct RequestInfo {
    pub path: String,
    query: Vec<(String, String)>,
}

impl RequestInfo {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    pub fn with_query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// First value of a query parameter, if present
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether a query parameter is present at all (possibly with an empty
    /// value, e.g. `?from_google`)
    pub fn has_query_param(&self, name: &str) -> bool {
        self.query.iter().any(|(k, _)| k == name)
    }
}

/// Mutable option map a widget populates for its templates
///
/// A context lives for a single render request. Options are string-keyed
/// JSON values; the template renderer reads them back by name.
pub struct RenderContext {
    pub options: HashMap<String, Value>,
    request: Option<RequestInfo>,
    store: Option<Arc<dyn DataStore>>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self {
            options: HashMap::new(),
            request: None,
            store: None,
        }
    }

    pub fn with_request(mut self, request: RequestInfo) -> Self {
        self.request = Some(request);
        self
    }

    pub fn with_store(mut self, store: Arc<dyn DataStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn set_option(&mut self, key: impl Into<String>, value: Value) {
        self.options.insert(key.into(), value);
    }

    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    /// Request data for the current render, if any
    pub fn request(&self) -> Option<&RequestInfo> {
        self.request.as_ref()
    }

    /// Handle to the backing data store
    ///
    /// Errors when the context was built without one; widgets that query
    /// data surface this to the caller instead of rendering partially.
    pub fn store(&self) -> Result<Arc<dyn DataStore>> {
        self.store
            .clone()
            .ok_or_else(|| anyhow!("render context has no data store"))
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_param_lookup() {
        let request = RequestInfo::new("/products")
            .with_query_param("from_google", "")
            .with_query_param("page", "2");
        assert!(request.has_query_param("from_google"));
        assert_eq!(request.query_param("page"), Some("2"));
        assert_eq!(request.query_param("missing"), None);
    }

    #[test]
    fn test_options_are_isolated_per_context() {
        let mut context = RenderContext::new();
        context.set_option("Setting", Value::from("value"));
        assert_eq!(context.option("Setting"), Some(&Value::from("value")));

        let other = RenderContext::new();
        assert!(other.option("Setting").is_none());
    }

    #[test]
    fn test_store_missing_is_an_error() {
        let context = RenderContext::new();
        assert!(context.store().is_err());
    }
}
