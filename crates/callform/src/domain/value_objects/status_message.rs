//! StatusMessage - Text written to the status element

/// Everything the status element can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    /// Written synchronously on submit, before the request resolves
    InProgress,
    /// Server accepted the call
    Initiated { call_sid: String },
    /// Server answered with a non-2xx status
    Rejected { error: String },
    /// Transport, decoding or page failure
    Failed { message: String },
}

impl StatusMessage {
    pub fn is_initiated(&self) -> bool {
        matches!(self, StatusMessage::Initiated { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            StatusMessage::Rejected { .. } | StatusMessage::Failed { .. }
        )
    }
}

impl std::fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusMessage::InProgress => write!(f, "Initiating call..."),
            StatusMessage::Initiated { call_sid } => write!(f, "Call initiated! SID: {}", call_sid),
            StatusMessage::Rejected { error } => write!(f, "Error: {}", error),
            StatusMessage::Failed { message } => write!(f, "Error: {}", message),
        }
    }
}
