//! Callform
//!
//! Client side of a call-initiation service: a form with a phone number,
//! a voice and a prompt is submitted to the server's `/make-call`
//! endpoint, and the outcome is written as text into a status element.
//!
//! # Architecture
//!
//! - **Domain** (`domain/`): request and response types, status messages,
//!   element ids, errors
//! - **Ports** (`ports/`): `Page` (element lookup standing in for the
//!   document) and `CallTransport` (request delivery)
//! - **Handler** (`handler`): explicit setup plus the submit operation
//! - **Adapters** (`adapters/`): `HttpCallTransport` and `MemoryPage`
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use callform::{FormSubmissionHandler, HttpCallTransport, MemoryPage, SubmitEvent};
//!
//! let page = Arc::new(MemoryPage::form("+15551234567", "alloy", "Say hello"));
//! let transport = Arc::new(HttpCallTransport::new("http://localhost:6060"));
//! if let Some(handler) = FormSubmissionHandler::setup(page.clone(), transport) {
//!     handler.submit(&mut SubmitEvent::new()).await;
//! }
//! println!("{}", page.status_text().unwrap_or_default());
//! ```

pub mod adapters;
pub mod domain;
pub mod handler;
pub mod ports;

// Re-export commonly used types
pub use adapters::{HttpCallTransport, MemoryPage, MAKE_CALL_PATH};
pub use domain::{
    CallRequest, CallResponse, ElementId, RawResponse, StatusMessage, SubmitError, Voice,
};
pub use handler::{
    missing_elements, FormSubmissionHandler, PendingSubmission, RenderPolicy, SubmissionOutcome,
    SubmitEvent,
};
pub use ports::{CallTransport, Page};
