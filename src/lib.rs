//! storefront: Widget registry and settings toolkit for template-driven pages.
//!
//! This library provides the site-level wiring for the storefront widget
//! system, including:
//! - One-time registration of the built-in widgets, groups, and scopes
//! - Persistence for editor-saved widget content
//! - Template asset lookup

pub mod assets;
pub mod config;
pub mod site;

// Re-export commonly used types
pub use assets::AssetFs;
pub use config::{SettingsError, SettingsStore};
pub use site::init_widgets;
pub use storefront_core::{
    global, DataStore, MemoryStore, Registry, RenderContext, RequestInfo, Scope, WidgetType,
    WidgetsGroup,
};
pub use storefront_types::{Product, WidgetInstance, WidgetSettings};
