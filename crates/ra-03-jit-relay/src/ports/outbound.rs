//! # Driven Ports (Outbound)
//!
//! The relay subsystem depends on the host's just-in-time call submission
//! API. Adapters implement this trait to bridge to the real host or to a
//! recording substitute in tests.

use crate::domain::entities::{JitCallRequest, JitCallResponse};

/// Host-mediated submission of synthesized calls.
///
/// Submission is synchronous within the current transaction context; the
/// returned response is authoritative. The relay treats `success == false`
/// as fatal and never retries.
pub trait JitCallSubmitter: Send + Sync {
    /// Submits one synthesized call on behalf of a system player.
    fn submit(&self, request: &JitCallRequest) -> JitCallResponse;
}
