//! Settings resources: field schemas, editor metas, and validation

use crate::context::RenderContext;
use anyhow::Result;
use storefront_types::{FieldMetadata, WidgetSettings};

/// Validation processor invoked post-parse, pre-persist
pub type Processor = Box<dyn Fn(&WidgetSettings) -> Result<()> + Send + Sync>;

/// Candidate-list builder backing a select-many field
///
/// Returns (id, label) pairs; the editor UI renders them as choices.
pub type CollectionFn = Box<dyn Fn(&RenderContext) -> Result<Vec<(String, String)>> + Send + Sync>;

/// Per-field editor configuration layered on top of the base schema
pub struct MetaConfig {
    field: String,
    collection: Option<CollectionFn>,
}

impl MetaConfig {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            collection: None,
        }
    }

    /// Back this field with a candidate list
    pub fn with_collection(
        mut self,
        collection: impl Fn(&RenderContext) -> Result<Vec<(String, String)>> + Send + Sync + 'static,
    ) -> Self {
        self.collection = Some(Box::new(collection));
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// Candidate (id, label) pairs for this field; empty when no collection
    /// is attached
    pub fn candidates(&self, context: &RenderContext) -> Result<Vec<(String, String)>> {
        match &self.collection {
            Some(collection) => collection(context),
            None => Ok(Vec::new()),
        }
    }
}

/// A widget's settings resource
///
/// Combines the field schema with per-field metas and an ordered list of
/// validation processors. Validation runs the processors in registration
/// order and aborts on the first error.
pub struct SettingsResource {
    fields: Vec<FieldMetadata>,
    metas: Vec<MetaConfig>,
    processors: Vec<Processor>,
}

impl SettingsResource {
    pub fn new(fields: Vec<FieldMetadata>) -> Self {
        Self {
            fields,
            metas: Vec::new(),
            processors: Vec::new(),
        }
    }

    pub fn fields(&self) -> &[FieldMetadata] {
        &self.fields
    }

    /// Attach a per-field editor meta
    pub fn meta(mut self, meta: MetaConfig) -> Self {
        self.metas.push(meta);
        self
    }

    pub fn meta_for(&self, field: &str) -> Option<&MetaConfig> {
        self.metas.iter().find(|meta| meta.field() == field)
    }

    /// Append a validation processor
    pub fn add_processor(
        mut self,
        processor: impl Fn(&WidgetSettings) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        self.processors.push(Box::new(processor));
        self
    }

    /// Run all processors against a parsed settings value
    pub fn validate(&self, settings: &WidgetSettings) -> Result<()> {
        for processor in &self.processors {
            processor(settings)?;
        }
        Ok(())
    }
}
