//! Page Port
//!
//! Element lookup capability standing in for the host document.

use crate::domain::{ElementId, StatusMessage};

/// Read/write access to the elements of a rendered page.
///
/// Implementations must be safe to share between concurrently running
/// submissions; writes to the status element are last-write-wins.
pub trait Page: Send + Sync {
    /// Whether an element with this id exists
    fn contains(&self, id: ElementId) -> bool;

    /// Current value of an input control, `None` if the element is absent
    fn value(&self, id: ElementId) -> Option<String>;

    /// Replace the text content of an element. Writes to an absent element
    /// are dropped.
    fn set_text(&self, id: ElementId, text: &str);

    /// Render a status into the status element
    fn show_status(&self, status: &StatusMessage) {
        self.set_text(ElementId::StatusDisplay, &status.to_string());
    }
}
