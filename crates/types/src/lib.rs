//! storefront-types: Shared data types for the storefront widget toolkit.
//!
//! This crate contains the plain data shapes used across the workspace:
//! field metadata for settings editors, per-widget settings structs, the
//! tagged `WidgetSettings` enum, sortable collections, media references,
//! product records, and persisted widget instances.

pub mod field;
pub mod media;
pub mod product;
pub mod settings;
pub mod sorting;

mod instance;

pub use field::{FieldMetadata, FieldType};
pub use instance::WidgetInstance;
pub use media::MediaRef;
pub use product::Product;
pub use settings::WidgetSettings;
pub use sorting::SortableCollection;
