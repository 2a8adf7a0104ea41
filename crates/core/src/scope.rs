//! Conditional-visibility scopes

use crate::context::RenderContext;

type VisibleFn = Box<dyn Fn(&RenderContext) -> bool + Send + Sync>;

/// A named visibility rule evaluated per request
///
/// Scopes are stateless; the predicate is re-evaluated against each render
/// context and returns false when the expected request data is absent.
pub struct Scope {
    name: String,
    visible: VisibleFn,
}

impl Scope {
    pub fn new(
        name: impl Into<String>,
        visible: impl Fn(&RenderContext) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            visible: Box::new(visible),
        }
    }

    /// Scope that is visible when the request carries the given query
    /// parameter, with or without a value
    pub fn from_query_param(name: impl Into<String>, param: impl Into<String>) -> Self {
        let param = param.into();
        Self::new(name, move |context| {
            context
                .request()
                .map(|request| request.has_query_param(&param))
                .unwrap_or(false)
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn visible(&self, context: &RenderContext) -> bool {
        (self.visible)(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RequestInfo;

    #[test]
    fn test_query_param_scope_visible() {
        let scope = Scope::from_query_param("From Google", "from_google");
        let context = RenderContext::new()
            .with_request(RequestInfo::new("/").with_query_param("from_google", ""));
        assert!(scope.visible(&context));
    }

    #[test]
    fn test_scope_false_when_param_missing() {
        let scope = Scope::from_query_param("From Google", "from_google");
        let context = RenderContext::new().with_request(RequestInfo::new("/"));
        assert!(!scope.visible(&context));
    }

    #[test]
    fn test_scope_false_without_request() {
        let scope = Scope::from_query_param("From Google", "from_google");
        assert!(!scope.visible(&RenderContext::new()));
    }
}
