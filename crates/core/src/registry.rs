//! Registry for widgets, groups, scopes, and editor elements

use crate::element::EditorElement;
use crate::scope::Scope;
use crate::widget::BoxedWidget;
use anyhow::{anyhow, Result};
use log::warn;
use once_cell::sync::OnceCell;
use serde::Serialize;
use std::collections::HashMap;

/// Function that creates a widget type
pub type WidgetFactory = fn() -> BoxedWidget;

/// Named, ordered collection of widget names for editor UI organization
///
/// Member existence is not checked at registration time; an unknown member
/// surfaces as an error when the group is resolved for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct WidgetsGroup {
    pub name: String,
    pub widgets: Vec<String>,
}

impl WidgetsGroup {
    pub fn new(name: impl Into<String>, widgets: &[&str]) -> Self {
        Self {
            name: name.into(),
            widgets: widgets.iter().map(|w| w.to_string()).collect(),
        }
    }
}

/// Registry for widgets, groups, scopes, and editor elements
///
/// Registration happens once, single-threaded, at startup; after
/// [`install`] the registry is read-only and safe to share across
/// request-handling threads.
pub struct Registry {
    widgets: HashMap<String, WidgetFactory>,
    groups: HashMap<String, WidgetsGroup>,
    scopes: HashMap<String, Scope>,
    elements: HashMap<String, EditorElement>,
}

impl Registry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            widgets: HashMap::new(),
            groups: HashMap::new(),
            scopes: HashMap::new(),
            elements: HashMap::new(),
        }
    }

    /// Register a widget under its definition name. Last write wins.
    pub fn register_widget(&mut self, factory: WidgetFactory) {
        let name = factory().definition().name.clone();
        if self.widgets.insert(name.clone(), factory).is_some() {
            warn!("widget {} re-registered, replacing previous entry", name);
        }
    }

    /// Create a widget by name
    pub fn create_widget(&self, name: &str) -> Result<BoxedWidget> {
        let factory = self
            .widgets
            .get(name)
            .ok_or_else(|| anyhow!("unknown widget: {}", name))?;
        Ok(factory())
    }

    pub fn contains_widget(&self, name: &str) -> bool {
        self.widgets.contains_key(name)
    }

    /// Register a widgets group. Members are resolved lazily.
    pub fn register_group(&mut self, group: WidgetsGroup) {
        self.groups.insert(group.name.clone(), group);
    }

    pub fn group(&self, name: &str) -> Option<&WidgetsGroup> {
        self.groups.get(name)
    }

    /// Instantiate every member of a group, failing on the first member
    /// that is not registered
    pub fn resolve_group(&self, name: &str) -> Result<Vec<BoxedWidget>> {
        let group = self
            .groups
            .get(name)
            .ok_or_else(|| anyhow!("unknown widgets group: {}", name))?;
        group
            .widgets
            .iter()
            .map(|member| self.create_widget(member))
            .collect()
    }

    /// Register a visibility scope
    pub fn register_scope(&mut self, scope: Scope) {
        self.scopes.insert(scope.name().to_string(), scope);
    }

    pub fn scope(&self, name: &str) -> Option<&Scope> {
        self.scopes.get(name)
    }

    /// Register a rich-text editor element
    pub fn register_element(&mut self, element: EditorElement) {
        self.elements.insert(element.name.clone(), element);
    }

    /// Look up an editor element by name
    pub fn element(&self, name: &str) -> Result<&EditorElement> {
        self.elements
            .get(name)
            .ok_or_else(|| anyhow!("unknown editor element: {}", name))
    }

    /// List all registered widget names, sorted
    pub fn list_widgets(&self) -> Vec<String> {
        let mut names: Vec<String> = self.widgets.keys().cloned().collect();
        names.sort();
        names
    }

    /// List all registered group names, sorted
    pub fn list_groups(&self) -> Vec<String> {
        let mut names: Vec<String> = self.groups.keys().cloned().collect();
        names.sort();
        names
    }

    /// List all registered scope names, sorted
    pub fn list_scopes(&self) -> Vec<String> {
        let mut names: Vec<String> = self.scopes.keys().cloned().collect();
        names.sort();
        names
    }

    /// List all registered editor element names, sorted
    pub fn list_elements(&self) -> Vec<String> {
        let mut names: Vec<String> = self.elements.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide registry instance, set once at startup
static GLOBAL_REGISTRY: OnceCell<Registry> = OnceCell::new();

/// Install the registry as the process-wide instance
///
/// Returns false when one is already installed; repeated initialization is
/// a no-op rather than an error.
pub fn install(registry: Registry) -> bool {
    GLOBAL_REGISTRY.set(registry).is_ok()
}

/// Get the installed registry, if initialization has run
pub fn global() -> Option<&'static Registry> {
    GLOBAL_REGISTRY.get()
}

/// Get the installed registry, building and installing it on first use
pub fn global_or_init(build: impl FnOnce() -> Registry) -> &'static Registry {
    GLOBAL_REGISTRY.get_or_init(build)
}
