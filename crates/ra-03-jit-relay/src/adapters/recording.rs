use crate::domain::entities::{JitCallRequest, JitCallResponse};
use crate::ports::JitCallSubmitter;
use shared_types::{Address, TxHash};
use std::sync::Mutex;

/// In-memory [`JitCallSubmitter`] for tests and the demo runtime.
///
/// Records every accepted request in submission order and hands back a
/// synthetic identifier. A sender can be marked as rejected to exercise the
/// fatal-submission path.
pub struct RecordingJitSubmitter {
    submitted: Mutex<Vec<JitCallRequest>>,
    reject_sender: Option<Address>,
}

impl RecordingJitSubmitter {
    /// Creates a submitter that accepts everything.
    pub fn new() -> Self {
        Self {
            submitted: Mutex::new(Vec::new()),
            reject_sender: None,
        }
    }

    /// Creates a submitter that rejects submissions from `sender`.
    pub fn rejecting(sender: Address) -> Self {
        Self {
            submitted: Mutex::new(Vec::new()),
            reject_sender: Some(sender),
        }
    }

    /// Snapshot of the accepted requests, in submission order.
    pub fn submitted(&self) -> Vec<JitCallRequest> {
        self.submitted.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Number of accepted requests.
    pub fn len(&self) -> usize {
        self.submitted.lock().map(|s| s.len()).unwrap_or(0)
    }

    /// Returns true if nothing was accepted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RecordingJitSubmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl JitCallSubmitter for RecordingJitSubmitter {
    fn submit(&self, request: &JitCallRequest) -> JitCallResponse {
        if self.reject_sender.as_ref() == Some(&request.sender) {
            return JitCallResponse::rejected("sender rejected by test submitter");
        }
        let mut submitted = match self.submitted.lock() {
            Ok(guard) => guard,
            Err(_) => return JitCallResponse::rejected("submitter lock poisoned"),
        };
        submitted.push(request.clone());
        // Synthetic identifier: sequence number in the first byte
        let mut id = [0u8; 32];
        id[0] = submitted.len() as u8;
        JitCallResponse::accepted(TxHash::new(id))
    }
}
