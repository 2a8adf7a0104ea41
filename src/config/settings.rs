//! Widget content store
//!
//! Holds the settings values editors have saved for each widget instance.
//! Saving validates against the registered widget type first; a rejected
//! value is never written, not even partially.

use chrono::Utc;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use storefront_core::Registry;
use storefront_types::WidgetInstance;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("unknown widget: {0}")]
    UnknownWidget(String),
    #[error("invalid settings: {0}")]
    Validation(String),
    #[error("could not determine config directory")]
    ConfigDir,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Encoding(#[from] serde_json::Error),
}

/// Persisted widget content for a site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsStore {
    /// Version of the store format
    pub version: u32,
    pub instances: Vec<WidgetInstance>,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate an instance against its registered widget type, then keep it
    ///
    /// An instance with an already-known id replaces the previous entry.
    /// Returns the instance id on success.
    pub fn save_instance(
        &mut self,
        registry: &Registry,
        mut instance: WidgetInstance,
    ) -> Result<Uuid, SettingsError> {
        let widget = registry
            .create_widget(&instance.widget_type)
            .map_err(|_| SettingsError::UnknownWidget(instance.widget_type.clone()))?;

        widget
            .validate(&instance.settings)
            .map_err(|err| SettingsError::Validation(err.to_string()))?;

        instance.updated_at = Utc::now();
        let id = instance.id;
        match self.instances.iter_mut().find(|existing| existing.id == id) {
            Some(existing) => *existing = instance,
            None => self.instances.push(instance),
        }
        debug!("saved widget instance {}", id);
        Ok(id)
    }

    pub fn instance(&self, id: Uuid) -> Option<&WidgetInstance> {
        self.instances.iter().find(|instance| instance.id == id)
    }

    /// All saved instances of a widget type, in save order
    pub fn instances_for(&self, widget_type: &str) -> Vec<&WidgetInstance> {
        self.instances
            .iter()
            .filter(|instance| instance.widget_type == widget_type)
            .collect()
    }

    pub fn remove_instance(&mut self, id: Uuid) -> Option<WidgetInstance> {
        let position = self
            .instances
            .iter()
            .position(|instance| instance.id == id)?;
        Some(self.instances.remove(position))
    }

    /// Load the store from its default location
    pub fn load() -> Result<Self, SettingsError> {
        let path = Self::default_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_path(&path)
    }

    /// Save the store to its default location
    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to_path(&Self::default_path()?)
    }

    /// Load the store from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        let store = serde_json::from_str(&content)?;
        Ok(store)
    }

    /// Save the store to a specific file path
    pub fn save_to_path(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn default_path() -> Result<PathBuf, SettingsError> {
        let dirs = directories::ProjectDirs::from("com", "storefront", "storefront")
            .ok_or(SettingsError::ConfigDir)?;
        Ok(dirs.config_dir().join("widgets.json"))
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self {
            version: 1,
            instances: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::Registry;
    use storefront_types::settings::{SlideImage, SlideshowSettings};
    use storefront_types::{MediaRef, WidgetSettings};

    fn registry() -> Registry {
        let mut registry = Registry::new();
        storefront_widgets::register_all(&mut registry);
        registry
    }

    fn slideshow(titles: &[&str]) -> WidgetSettings {
        WidgetSettings::Slideshow(SlideshowSettings {
            slide_images: titles
                .iter()
                .map(|title| SlideImage {
                    title: title.to_string(),
                    image: MediaRef::default(),
                })
                .collect(),
        })
    }

    #[test]
    fn test_save_rejects_invalid_settings() {
        let registry = registry();
        let mut store = SettingsStore::new();
        let instance = WidgetInstance::new("SlideShow", slideshow(&["First", ""]));

        let err = store.save_instance(&registry, instance).unwrap_err();
        assert!(matches!(err, SettingsError::Validation(_)));
        assert!(err.to_string().contains("slide title is blank"));
        assert!(store.instances.is_empty());
    }

    #[test]
    fn test_save_rejects_unknown_widget() {
        let registry = registry();
        let mut store = SettingsStore::new();
        let instance = WidgetInstance::new("Carousel", slideshow(&["First"]));

        let err = store.save_instance(&registry, instance).unwrap_err();
        assert!(matches!(err, SettingsError::UnknownWidget(_)));
    }

    #[test]
    fn test_save_and_replace_instance() {
        let registry = registry();
        let mut store = SettingsStore::new();

        let instance = WidgetInstance::new("SlideShow", slideshow(&["First"]));
        let id = store.save_instance(&registry, instance.clone()).unwrap();
        assert_eq!(store.instances_for("SlideShow").len(), 1);

        let mut updated = instance;
        updated.settings = slideshow(&["First", "Second"]);
        store.save_instance(&registry, updated).unwrap();

        assert_eq!(store.instances.len(), 1);
        match &store.instance(id).unwrap().settings {
            WidgetSettings::Slideshow(settings) => assert_eq!(settings.slide_images.len(), 2),
            other => panic!("unexpected settings type: {}", other.widget_type()),
        }
    }

    #[test]
    fn test_store_roundtrip_through_file() {
        let registry = registry();
        let mut store = SettingsStore::new();
        store
            .save_instance(
                &registry,
                WidgetInstance::new("SlideShow", slideshow(&["First"])),
            )
            .unwrap();

        let path = std::env::temp_dir().join(format!("storefront-test-{}.json", Uuid::new_v4()));
        store.save_to_path(&path).unwrap();
        let loaded = SettingsStore::load_from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded.version, store.version);
        assert_eq!(loaded.instances, store.instances);
    }
}
