//! Domain Entities
//!
//! Request-scoped values that live for a single submission.
//! - CallRequest: the three form fields sent to the server
//! - CallResponse: the decoded server reply

mod call_request;
mod call_response;

pub use call_request::*;
pub use call_response::*;
