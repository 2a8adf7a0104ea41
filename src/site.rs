//! Site-level widget wiring
//!
//! Registers everything the storefront pages use: the built-in widgets and
//! editor elements, the "Banner" picker group, and the "From Google"
//! visibility scope.

use log::info;
use storefront_core::{global_or_init, Registry, Scope, WidgetsGroup};

/// One-time registration of every widget, group, and scope the site uses
///
/// The first call builds and installs the process-wide registry; later
/// calls return the installed instance unchanged.
pub fn init_widgets() -> &'static Registry {
    global_or_init(|| {
        let mut registry = Registry::new();

        storefront_widgets::register_all(&mut registry);

        registry.register_scope(Scope::from_query_param("From Google", "from_google"));

        registry.register_group(WidgetsGroup::new("Banner", &["NormalBanner", "SlideShow"]));

        info!(
            "widget registry initialized with {} widgets",
            registry.list_widgets().len()
        );
        registry
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{RenderContext, RequestInfo};

    #[test]
    fn test_init_widgets_is_idempotent() {
        let first = init_widgets() as *const Registry;
        let second = init_widgets() as *const Registry;
        assert_eq!(first, second);
    }

    #[test]
    fn test_builtin_widgets_registered() {
        let registry = init_widgets();
        assert!(registry.contains_widget("NormalBanner"));
        assert!(registry.contains_widget("SlideShow"));
        assert!(registry.create_widget("Carousel").is_err());
    }

    #[test]
    fn test_banner_group_resolves() {
        let registry = init_widgets();
        let widgets = registry.resolve_group("Banner").unwrap();
        let names: Vec<&str> = widgets
            .iter()
            .map(|widget| widget.definition().name.as_str())
            .collect();
        assert_eq!(names, vec!["NormalBanner", "SlideShow"]);
    }

    #[test]
    fn test_from_google_scope() {
        let registry = init_widgets();
        let scope = registry.scope("From Google").unwrap();

        let plain = RenderContext::new().with_request(RequestInfo::new("/"));
        assert!(!scope.visible(&plain));

        let from_google = RenderContext::new()
            .with_request(RequestInfo::new("/").with_query_param("from_google", ""));
        assert!(scope.visible(&from_google));
    }
}
