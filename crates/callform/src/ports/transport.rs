//! Call Transport Port
//!
//! Abstract interface for delivering a call request to the server.

use async_trait::async_trait;

use crate::domain::{CallRequest, RawResponse, SubmitError};

/// Service interface for posting call requests
#[async_trait]
pub trait CallTransport: Send + Sync {
    /// Send one request and hand back the undecoded reply.
    ///
    /// Non-2xx replies are `Ok`; only failures to obtain a reply are `Err`.
    async fn post_call(&self, request: &CallRequest) -> Result<RawResponse, SubmitError>;
}
