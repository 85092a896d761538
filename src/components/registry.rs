use crate::components::{AppHeader, LoadingIndicator, NoteForm, ToastStack};
use leptos::logging::warn;
use leptos::prelude::*;
use std::collections::BTreeMap;
use std::fmt;

/// Builds a fresh instance of a registered component.
pub(crate) type ViewFn = fn() -> AnyView;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum RegistryError {
    Duplicate(&'static str),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::Duplicate(tag) => write!(f, "component `{tag}` is already defined"),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Tag name -> component constructor. Built once at startup, read-only afterwards.
#[derive(Clone, Default)]
pub(crate) struct ComponentRegistry {
    entries: BTreeMap<&'static str, ViewFn>,
}

impl ComponentRegistry {
    pub fn define(&mut self, tag: &'static str, view: ViewFn) -> Result<(), RegistryError> {
        if self.entries.contains_key(tag) {
            return Err(RegistryError::Duplicate(tag));
        }
        self.entries.insert(tag, view);
        Ok(())
    }

    pub fn get(&self, tag: &str) -> Option<ViewFn> {
        self.entries.get(tag).copied()
    }

    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// The app's fixed elements.
    pub fn with_defaults() -> Result<Self, RegistryError> {
        let mut registry = Self::default();
        registry.define("app-header", || view! { <AppHeader /> }.into_any())?;
        registry.define("note-form", || view! { <NoteForm /> }.into_any())?;
        registry.define("loading-spinner", || view! { <LoadingIndicator /> }.into_any())?;
        registry.define("toast-stack", || view! { <ToastStack /> }.into_any())?;
        Ok(registry)
    }
}

/// Renders whatever is registered under `tag`, or nothing if the tag is unknown.
#[component]
pub fn Mount(tag: &'static str) -> impl IntoView {
    let registry = expect_context::<ComponentRegistry>();
    match registry.get(tag) {
        Some(view) => view(),
        None => {
            warn!("no component registered for <{tag}>");
            ().into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank() -> AnyView {
        ().into_any()
    }

    #[test]
    fn test_define_rejects_duplicates() {
        let mut registry = ComponentRegistry::default();
        registry.define("note-item", blank).expect("first define");
        assert_eq!(
            registry.define("note-item", blank),
            Err(RegistryError::Duplicate("note-item"))
        );
    }

    #[test]
    fn test_defaults_register_fixed_elements() {
        let registry = ComponentRegistry::with_defaults().expect("no duplicates");
        let tags: Vec<&str> = registry.tags().collect();
        assert_eq!(
            tags,
            vec!["app-header", "loading-spinner", "note-form", "toast-stack"]
        );
        assert!(registry.get("note-item").is_none());
    }

    #[test]
    fn test_registry_error_message() {
        assert_eq!(
            RegistryError::Duplicate("app-header").to_string(),
            "component `app-header` is already defined"
        );
    }
}
