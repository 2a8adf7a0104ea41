//! Widget trait and related types

use crate::context::RenderContext;
use crate::resource::SettingsResource;
use anyhow::Result;
use serde::Serialize;
use storefront_types::{FieldMetadata, WidgetSettings};

/// Descriptive metadata for a widget type
#[derive(Debug, Clone, Serialize)]
pub struct WidgetDefinition {
    /// Unique registry name (e.g. "NormalBanner")
    pub name: String,
    /// Templates this widget can render through, in preference order
    pub templates: Vec<String>,
    /// Icon shown in the widget picker
    pub preview_icon: Option<String>,
    /// Display group in the widget picker
    pub group: Option<String>,
}

impl WidgetDefinition {
    pub fn new(name: impl Into<String>, templates: &[&str]) -> Self {
        Self {
            name: name.into(),
            templates: templates.iter().map(|t| t.to_string()).collect(),
            preview_icon: None,
            group: None,
        }
    }

    pub fn preview_icon(mut self, icon: impl Into<String>) -> Self {
        self.preview_icon = Some(icon.into());
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

/// Trait for all widget types
///
/// Widgets are named, template-backed content blocks. Each implementation
/// declares its settings shape and copies a resolved settings value into the
/// render context consumed by its templates.
pub trait WidgetType: Send + Sync {
    /// Get metadata about this widget
    fn definition(&self) -> &WidgetDefinition;

    /// Field schema presented to the settings editor
    fn settings_fields(&self) -> Vec<FieldMetadata>;

    /// Settings value a fresh instance of this widget starts from
    fn default_settings(&self) -> WidgetSettings;

    /// Settings resource: the field schema plus per-field editor metas and
    /// validation processors
    fn settings_resource(&self) -> SettingsResource {
        SettingsResource::new(self.settings_fields())
    }

    /// Validate a parsed settings value before it is persisted
    ///
    /// Runs the widget's resource processors in order; the first error aborts
    /// the save. The whole value is accepted or rejected, never partially.
    fn validate(&self, settings: &WidgetSettings) -> Result<()> {
        self.settings_resource().validate(settings)
    }

    /// Populate the render context with the named options this widget's
    /// templates consume
    fn build_context(&self, context: &mut RenderContext, settings: &WidgetSettings) -> Result<()>;
}

impl std::fmt::Debug for dyn WidgetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetType")
            .field("definition", self.definition())
            .finish()
    }
}

/// Type-erased widget for dynamic dispatch
pub type BoxedWidget = Box<dyn WidgetType>;
