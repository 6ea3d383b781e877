//! Form Submission Handler
//!
//! Wires a page's call form to a call transport. Setup is explicit and runs
//! once after the page is ready; each submit then performs one request and
//! renders its outcome into the status element.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::domain::{CallRequest, ElementId, StatusMessage, SubmitError};
use crate::ports::{CallTransport, Page};

/// Submit event delivered by the page
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress the host's own form navigation
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Which resolved submissions may write the status element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderPolicy {
    /// Every submission renders when it resolves; the last to resolve wins
    #[default]
    LastWriteWins,
    /// Only the most recently started submission renders
    LatestSubmission,
}

/// Result of a finished submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Status was written to the page
    Rendered(StatusMessage),
    /// A newer submission had started; status was not written
    Superseded(StatusMessage),
}

impl SubmissionOutcome {
    pub fn status(&self) -> &StatusMessage {
        match self {
            SubmissionOutcome::Rendered(status) | SubmissionOutcome::Superseded(status) => status,
        }
    }

    pub fn was_rendered(&self) -> bool {
        matches!(self, SubmissionOutcome::Rendered(_))
    }
}

/// Required elements absent from the page
pub fn missing_elements(page: &dyn Page) -> Vec<ElementId> {
    ElementId::REQUIRED
        .into_iter()
        .filter(|id| !page.contains(*id))
        .collect()
}

struct Inner {
    page: Arc<dyn Page>,
    transport: Arc<dyn CallTransport>,
    policy: RenderPolicy,
    sequence: AtomicU64,
}

/// Submit behaviour attached to a call form
#[derive(Clone)]
pub struct FormSubmissionHandler {
    inner: Arc<Inner>,
}

impl FormSubmissionHandler {
    /// Attach to `page` with the default render policy.
    ///
    /// Returns `None` (after logging which elements are missing) when the
    /// form or the status element cannot be found.
    pub fn setup(page: Arc<dyn Page>, transport: Arc<dyn CallTransport>) -> Option<Self> {
        Self::setup_with_policy(page, transport, RenderPolicy::default())
    }

    pub fn setup_with_policy(
        page: Arc<dyn Page>,
        transport: Arc<dyn CallTransport>,
        policy: RenderPolicy,
    ) -> Option<Self> {
        let missing = missing_elements(&*page);
        if !missing.is_empty() {
            for id in &missing {
                tracing::error!("❌ Required element not found: {}", id);
            }
            tracing::warn!("Submit handler not attached");
            return None;
        }

        tracing::debug!("📋 Submit handler attached ({:?})", policy);
        Some(Self {
            inner: Arc::new(Inner {
                page,
                transport,
                policy,
                sequence: AtomicU64::new(0),
            }),
        })
    }

    pub fn policy(&self) -> RenderPolicy {
        self.inner.policy
    }

    /// Handle a submit event end to end
    pub async fn submit(&self, event: &mut SubmitEvent) -> SubmissionOutcome {
        self.begin(event).run().await
    }

    /// Synchronous half of a submit: prevents navigation, snapshots the
    /// fields and shows the in-progress status.
    pub fn begin(&self, event: &mut SubmitEvent) -> PendingSubmission {
        event.prevent_default();

        let request = self.read_request();
        let sequence = self.inner.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        self.write_status(&StatusMessage::InProgress);

        PendingSubmission {
            handler: self.clone(),
            sequence,
            request,
        }
    }

    fn read_request(&self) -> Result<CallRequest, SubmitError> {
        let page = &self.inner.page;
        let field = |id: ElementId| page.value(id).ok_or(SubmitError::MissingElement(id));

        Ok(CallRequest::new(
            field(ElementId::PhoneNumber)?,
            field(ElementId::Voice)?,
            field(ElementId::Prompt)?,
        ))
    }

    fn write_status(&self, status: &StatusMessage) {
        self.inner.page.show_status(status);
    }

    fn is_latest(&self, sequence: u64) -> bool {
        self.inner.sequence.load(Ordering::SeqCst) == sequence
    }

    async fn exchange(&self, request: &CallRequest) -> StatusMessage {
        match self.try_exchange(request).await {
            Ok(status) => status,
            Err(e) => {
                tracing::warn!("Call request failed: {}", e);
                StatusMessage::Failed {
                    message: e.to_string(),
                }
            }
        }
    }

    async fn try_exchange(&self, request: &CallRequest) -> Result<StatusMessage, SubmitError> {
        let raw = self.inner.transport.post_call(request).await?;
        let response = raw.decode()?;

        if raw.is_success() {
            let call_sid = response.call_sid.unwrap_or_else(|| {
                tracing::warn!("Success reply ({}) without call_sid", raw.status);
                String::new()
            });
            tracing::info!("📞 Call initiated: {}", call_sid);
            Ok(StatusMessage::Initiated { call_sid })
        } else {
            let error = response.error.unwrap_or_else(|| {
                tracing::warn!("Error reply ({}) without error text", raw.status);
                String::new()
            });
            tracing::info!("Server rejected call ({}): {}", raw.status, error);
            Ok(StatusMessage::Rejected { error })
        }
    }
}

/// A submission whose in-progress status is showing and whose request has
/// not been sent yet
pub struct PendingSubmission {
    handler: FormSubmissionHandler,
    sequence: u64,
    request: Result<CallRequest, SubmitError>,
}

impl PendingSubmission {
    /// Position of this submission among all submissions of the handler,
    /// starting at 1
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// The request snapshot, if every field could be read
    pub fn request(&self) -> Option<&CallRequest> {
        self.request.as_ref().ok()
    }

    /// Send the request and render the outcome. Never fails: every error
    /// becomes a status message.
    pub async fn run(self) -> SubmissionOutcome {
        let status = match &self.request {
            Ok(request) => self.handler.exchange(request).await,
            Err(e) => {
                tracing::error!("❌ Could not read form: {}", e);
                StatusMessage::Failed {
                    message: e.to_string(),
                }
            }
        };

        if self.handler.policy() == RenderPolicy::LatestSubmission
            && !self.handler.is_latest(self.sequence)
        {
            tracing::debug!("Submission {} superseded, not rendered", self.sequence);
            return SubmissionOutcome::Superseded(status);
        }

        self.handler.write_status(&status);
        SubmissionOutcome::Rendered(status)
    }
}
