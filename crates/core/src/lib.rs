//! storefront-core: Widget trait, registry, and render context.
//!
//! This crate contains the fundamental trait (WidgetType), the Registry of
//! widgets, groups, scopes, and editor elements, the request-scoped
//! RenderContext, and the settings-resource validation pipeline.

mod context;
mod element;
mod registry;
mod resource;
mod scope;
mod store;
mod widget;

pub mod template;

pub use context::{RenderContext, RequestInfo};
pub use element::EditorElement;
pub use registry::{global, global_or_init, install, Registry, WidgetFactory, WidgetsGroup};
pub use resource::{CollectionFn, MetaConfig, Processor, SettingsResource};
pub use scope::Scope;
pub use store::{DataStore, MemoryStore};
pub use widget::{BoxedWidget, WidgetDefinition, WidgetType};

// Re-export types used in trait signatures for convenience
pub use storefront_types::{FieldMetadata, FieldType, Product, WidgetSettings};
