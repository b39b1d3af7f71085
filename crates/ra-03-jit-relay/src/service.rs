//! # Relay Trigger Service
//!
//! Decides, per intercepted call, whether to synthesize and submit relay
//! calls on behalf of the registered system players.

use crate::domain::abi::{encode_execute, encode_move};
use crate::domain::direction::derive_direction;
use crate::domain::entities::{JitCallRequest, PreContractCallCtx};
use crate::domain::selector::{extract_selector, MOVE_SELECTOR};
use crate::errors::RelayError;
use crate::ports::JitCallSubmitter;
use ra_01_aspect_state::domain::{NonceStore, RegistryStore};
use ra_01_aspect_state::ports::StateStore;
use shared_types::{Bytes, U256};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Relay trigger configuration.
///
/// Gas and fee values are environment-fixed constants of the target chain,
/// not derived quantities.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Selector of the watched game method.
    pub watched_selector: [u8; 4],
    /// Gas allocated to the main execution call.
    pub call_gas_limit: u64,
    /// Gas allocated for the verification step.
    pub verification_gas_limit: u64,
    /// Maximum fee per gas.
    pub max_fee_per_gas: U256,
    /// Maximum priority fee per gas.
    pub max_priority_fee_per_gas: U256,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            watched_selector: MOVE_SELECTOR,
            call_gas_limit: 8_000_000,
            verification_gas_limit: 8_000_000,
            max_fee_per_gas: U256::from(100u64),
            max_priority_fee_per_gas: U256::from(100u64),
        }
    }
}

/// Outcome of one intercepted call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayOutcome {
    /// The call does not target the watched method; nothing to do.
    NotWatched,
    /// The caller is itself a registered system player; pass through.
    Originator,
    /// Relay calls were submitted for every registered player.
    Relayed {
        /// Number of submissions performed.
        submissions: usize,
    },
}

/// The relay trigger: registry lookups, call synthesis, submission and
/// nonce bookkeeping for one intercepted call at a time.
pub struct RelayService<S: StateStore, J: JitCallSubmitter> {
    config: RelayConfig,
    registry: RegistryStore<S>,
    nonces: NonceStore<S>,
    submitter: Arc<J>,
}

impl<S: StateStore, J: JitCallSubmitter> RelayService<S, J> {
    /// Creates a relay service sharing `store` with the other subsystems.
    pub fn new(store: Arc<S>, submitter: Arc<J>, config: RelayConfig) -> Self {
        Self {
            config,
            registry: RegistryStore::new(store.clone()),
            nonces: NonceStore::new(store),
            submitter,
        }
    }

    /// Handles one pre-contract-call interception.
    ///
    /// Submissions happen strictly in registration order; the first failure
    /// aborts the remainder and the triggering transaction with it. A
    /// player's nonce advances only after its submission is acknowledged.
    #[instrument(skip(self, ctx), fields(from = %ctx.from, to = %ctx.to))]
    pub fn on_pre_contract_call(
        &self,
        ctx: &PreContractCallCtx,
    ) -> Result<RelayOutcome, RelayError> {
        match extract_selector(ctx.data.as_slice()) {
            Some(sel) if sel == self.config.watched_selector => {}
            _ => return Ok(RelayOutcome::NotWatched),
        }

        if self.registry.contains(&ctx.from)? {
            // A system player's own move never cascades
            debug!("originator is a system player, passing through");
            return Ok(RelayOutcome::Originator);
        }

        let players = self.registry.list()?;
        let direction = derive_direction(&ctx.tx_hash);
        debug!(
            players = players.len(),
            direction, "relaying move to system players"
        );

        for player in &players {
            let nonce = self.nonces.get(player)?;
            let request = JitCallRequest {
                sender: *player,
                nonce,
                init_code: Bytes::new(),
                call_data: Bytes::from_vec(encode_execute(
                    &ctx.to,
                    U256::zero(),
                    &encode_move(direction),
                )),
                call_gas_limit: self.config.call_gas_limit,
                verification_gas_limit: self.config.verification_gas_limit,
                max_fee_per_gas: self.config.max_fee_per_gas,
                max_priority_fee_per_gas: self.config.max_priority_fee_per_gas,
                paymaster_and_data: Bytes::new(),
            };

            let response = self.submitter.submit(&request);
            if !response.success {
                let reason = response.error.unwrap_or_else(|| "unspecified".to_string());
                warn!(player = %player, reason = %reason, "JIT submission rejected");
                return Err(RelayError::SubmissionFailed {
                    player: *player,
                    reason,
                });
            }
            self.nonces.increment(player, nonce)?;
        }

        info!(submissions = players.len(), "JIT relay complete");
        Ok(RelayOutcome::Relayed {
            submissions: players.len(),
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
