//! In-memory Page
//!
//! Page implementation backed by a map of element values. Every write to
//! the status element is also appended to a history.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError, RwLock};

use crate::domain::ElementId;
use crate::ports::Page;

#[derive(Debug, Default)]
pub struct MemoryPage {
    elements: RwLock<HashMap<ElementId, String>>,
    status_history: Mutex<Vec<String>>,
}

impl MemoryPage {
    /// Empty page with no elements
    pub fn new() -> Self {
        Self::default()
    }

    /// Complete call form with the given field values and an empty status
    pub fn form(phone_number: &str, voice: &str, prompt: &str) -> Self {
        Self::new()
            .with_element(ElementId::CallForm, "")
            .with_element(ElementId::StatusDisplay, "")
            .with_element(ElementId::PhoneNumber, phone_number)
            .with_element(ElementId::Voice, voice)
            .with_element(ElementId::Prompt, prompt)
    }

    /// Add an element
    pub fn with_element(self, id: ElementId, value: impl Into<String>) -> Self {
        self.set_value(id, value);
        self
    }

    /// Set an element's value, creating it if absent
    pub fn set_value(&self, id: ElementId, value: impl Into<String>) {
        self.elements
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, value.into());
    }

    /// Remove an element; returns whether it existed
    pub fn remove(&self, id: ElementId) -> bool {
        self.elements
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id)
            .is_some()
    }

    /// Current status text, `None` without a status element
    pub fn status_text(&self) -> Option<String> {
        self.value(ElementId::StatusDisplay)
    }

    /// Every text written to the status element, oldest first
    pub fn status_history(&self) -> Vec<String> {
        self.status_history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Page for MemoryPage {
    fn contains(&self, id: ElementId) -> bool {
        self.elements
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&id)
    }

    fn value(&self, id: ElementId) -> Option<String> {
        self.elements
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    fn set_text(&self, id: ElementId, text: &str) {
        let mut elements = self.elements.write().unwrap_or_else(PoisonError::into_inner);
        let Some(slot) = elements.get_mut(&id) else {
            tracing::debug!("Dropped write to missing element {}", id);
            return;
        };
        *slot = text.to_string();

        if id == ElementId::StatusDisplay {
            self.status_history
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(text.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_has_every_element() {
        let page = MemoryPage::form("123", "echo", "hi");

        for id in ElementId::REQUIRED.into_iter().chain(ElementId::FIELDS) {
            assert!(page.contains(id), "missing {}", id);
        }
        assert_eq!(page.value(ElementId::Voice).as_deref(), Some("echo"));
        assert_eq!(page.status_text().as_deref(), Some(""));
    }

    #[test]
    fn test_write_to_missing_element_is_dropped() {
        let page = MemoryPage::new();
        page.set_text(ElementId::StatusDisplay, "hello");

        assert!(!page.contains(ElementId::StatusDisplay));
        assert!(page.status_history().is_empty());
    }

    #[test]
    fn test_status_history_records_only_status_writes() {
        let page = MemoryPage::form("123", "echo", "hi");
        page.set_text(ElementId::Prompt, "changed");
        page.set_text(ElementId::StatusDisplay, "one");
        page.set_text(ElementId::StatusDisplay, "two");

        assert_eq!(page.status_history(), vec!["one", "two"]);
        assert_eq!(page.status_text().as_deref(), Some("two"));
    }
}
