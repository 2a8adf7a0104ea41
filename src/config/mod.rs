//! Persistence for editor-saved widget content

mod settings;

pub use settings::{SettingsError, SettingsStore};
