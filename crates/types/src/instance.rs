//! Persisted widget content

use crate::settings::WidgetSettings;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A saved, editor-configured occurrence of a widget
///
/// The widget type is referenced by registry name; the settings value is the
/// parsed shape that passed the widget's validation hook at save time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetInstance {
    pub id: Uuid,
    /// Registry name of the widget type (e.g. "SlideShow")
    pub widget_type: String,
    /// Optional visibility scope this content is limited to
    #[serde(default)]
    pub scope: Option<String>,
    pub settings: WidgetSettings,
    pub updated_at: DateTime<Utc>,
}

impl WidgetInstance {
    pub fn new(widget_type: impl Into<String>, settings: WidgetSettings) -> Self {
        Self {
            id: Uuid::new_v4(),
            widget_type: widget_type.into(),
            scope: None,
            settings,
            updated_at: Utc::now(),
        }
    }

    /// Limit this content to a named visibility scope
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }
}
