//! Terminal page
//!
//! Presents a call request as a page whose status element is the terminal.

use callform::{CallRequest, ElementId, MemoryPage, Page, StatusMessage};
use colored::Colorize;

pub struct ConsolePage {
    inner: MemoryPage,
}

impl ConsolePage {
    pub fn new(request: &CallRequest) -> Self {
        Self {
            inner: MemoryPage::form(&request.phone_number, &request.voice, &request.prompt),
        }
    }
}

impl Page for ConsolePage {
    fn contains(&self, id: ElementId) -> bool {
        self.inner.contains(id)
    }

    fn value(&self, id: ElementId) -> Option<String> {
        self.inner.value(id)
    }

    fn set_text(&self, id: ElementId, text: &str) {
        self.inner.set_text(id, text);
    }

    fn show_status(&self, status: &StatusMessage) {
        self.inner.show_status(status);
        println!("{}", status_line(status));
    }
}

/// Terminal rendering of a status: red for errors, green on success
fn status_line(status: &StatusMessage) -> String {
    let text = status.to_string();
    match status {
        StatusMessage::InProgress => text.dimmed().to_string(),
        StatusMessage::Initiated { .. } => format!("{} {}", "✓".green(), text),
        StatusMessage::Rejected { .. } | StatusMessage::Failed { .. } => {
            format!("{} {}", "✗".red(), text.red())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_status_line_marks_outcome() {
        plain();

        assert_eq!(status_line(&StatusMessage::InProgress), "Initiating call...");
        assert_eq!(
            status_line(&StatusMessage::Initiated { call_sid: "CA1".into() }),
            "✓ Call initiated! SID: CA1"
        );
        assert_eq!(
            status_line(&StatusMessage::Rejected { error: "invalid number".into() }),
            "✗ Error: invalid number"
        );
        assert_eq!(
            status_line(&StatusMessage::Failed { message: "network down".into() }),
            "✗ Error: network down"
        );
    }

    #[test]
    fn test_show_status_updates_status_element() {
        plain();
        let page = ConsolePage::new(&CallRequest::new("+15551234567", "nova", "hi"));

        assert_eq!(page.value(ElementId::Voice).as_deref(), Some("nova"));
        page.show_status(&StatusMessage::Failed { message: "network down".into() });

        assert_eq!(
            page.value(ElementId::StatusDisplay).as_deref(),
            Some("Error: network down")
        );
    }
}
