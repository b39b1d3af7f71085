//! # Aspect Wiring
//!
//! [`RoyaleAspect`] assembles the three subsystems over one shared state
//! store and exposes the two host-facing surfaces: hook dispatch and the
//! operation entry point.

use crate::config::AspectConfig;
use crate::errors::AspectError;
use crate::hooks::{AspectHooks, HookEvent, HookPoint};
use ra_01_aspect_state::ports::StateStore;
use ra_02_operations::service::OperationService;
use ra_03_jit_relay::domain::entities::PreContractCallCtx;
use ra_03_jit_relay::ports::JitCallSubmitter;
use ra_03_jit_relay::service::{RelayOutcome, RelayService};
use std::sync::Arc;

/// The Royale JIT-move aspect, wired over injected host ports.
pub struct RoyaleAspect<S: StateStore, J: JitCallSubmitter> {
    operations: OperationService<S>,
    relay: RelayService<S, J>,
}

impl<S: StateStore, J: JitCallSubmitter> RoyaleAspect<S, J> {
    /// Wires the aspect over the host's state store and relay API.
    pub fn new(store: Arc<S>, submitter: Arc<J>, config: AspectConfig) -> Self {
        Self {
            operations: OperationService::new(store.clone()),
            relay: RelayService::new(store, submitter, config.relay),
        }
    }

    /// The operation entry point: `opcode(2 bytes) || params`.
    ///
    /// Returns an empty buffer for mutations and a UTF-8 string for
    /// queries; any error aborts the invocation.
    pub fn handle_operation(&self, data: &[u8]) -> Result<Vec<u8>, AspectError> {
        Ok(self.operations.handle(data)?)
    }

    /// Direct access to the relay trigger, exposing the outcome.
    pub fn on_pre_contract_call(
        &self,
        ctx: &PreContractCallCtx,
    ) -> Result<RelayOutcome, AspectError> {
        Ok(self.relay.on_pre_contract_call(ctx)?)
    }
}

impl<S: StateStore, J: JitCallSubmitter> AspectHooks for RoyaleAspect<S, J> {
    fn active_hooks(&self) -> &'static [HookPoint] {
        &[HookPoint::PreContractCall]
    }

    fn dispatch(&self, event: &HookEvent) -> Result<(), AspectError> {
        match event {
            HookEvent::PreContractCall(ctx) => {
                self.on_pre_contract_call(ctx)?;
                Ok(())
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
