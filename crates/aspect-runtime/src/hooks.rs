//! # Hook-Point Dispatch
//!
//! The lifecycle points the host can attach an aspect to, and the narrow
//! interface through which it delivers events. An aspect names its active
//! points once; the host consults that list and calls [`AspectHooks::dispatch`]
//! for matching events only, instead of the aspect implementing every point
//! as a no-op.

use crate::errors::AspectError;
use ra_03_jit_relay::domain::entities::PreContractCallCtx;

/// Contract-execution lifecycle points offered by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HookPoint {
    /// Transaction admission filtering.
    FilterTx,
    /// Before transaction execution starts.
    PreTxExecute,
    /// Before each contract call inside the transaction.
    PreContractCall,
    /// After each contract call inside the transaction.
    PostContractCall,
    /// After transaction execution finishes.
    PostTxExecute,
    /// After the transaction is committed.
    PostTxCommit,
}

/// A host-delivered event for an active hook point.
///
/// Variants exist only for points some aspect in this workspace is active
/// on; the enum grows with the first consumer of each new point.
#[derive(Clone, Debug)]
pub enum HookEvent {
    /// An inbound contract call was intercepted before execution.
    PreContractCall(PreContractCallCtx),
}

impl HookEvent {
    /// The hook point this event belongs to.
    #[must_use]
    pub fn point(&self) -> HookPoint {
        match self {
            Self::PreContractCall(_) => HookPoint::PreContractCall,
        }
    }
}

/// The narrow interface the host drives an aspect through.
pub trait AspectHooks {
    /// Lifecycle points this aspect wants to be invoked on.
    fn active_hooks(&self) -> &'static [HookPoint];

    /// Handles one event. The host only delivers events whose point is in
    /// [`Self::active_hooks`]; an error aborts the surrounding transaction.
    fn dispatch(&self, event: &HookEvent) -> Result<(), AspectError>;
}

// =============================================================================
// TESTS
// =============================================================================
