//! # Relay Entities
//!
//! The intercepted-call context handed in by the host, and the synthesized
//! call descriptors exchanged with the relay submission API.

use serde::{Deserialize, Serialize};
use shared_types::{Address, Bytes, TxHash, U256};

/// Descriptor of the intercepted call, as delivered at the
/// pre-contract-call hook.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PreContractCallCtx {
    /// Calling address.
    pub from: Address,
    /// Target contract (the game).
    pub to: Address,
    /// Raw call payload.
    pub data: Bytes,
    /// Hash of the triggering transaction.
    pub tx_hash: TxHash,
}

/// An ephemeral, per-trigger relay call descriptor.
///
/// Field shape follows the EIP-4337-style user operation the host's relay
/// API accepts.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JitCallRequest {
    /// The account initiating the operation (a system player).
    pub sender: Address,
    /// Anti-replay parameter, read from the nonce store before submission.
    pub nonce: u64,
    /// Account init code; empty, all system players are already on-chain.
    pub init_code: Bytes,
    /// ABI-encoded wallet `execute` payload.
    pub call_data: Bytes,
    /// Gas for the main execution call.
    pub call_gas_limit: u64,
    /// Gas for the verification step.
    pub verification_gas_limit: u64,
    /// Maximum fee per gas.
    pub max_fee_per_gas: U256,
    /// Maximum priority fee per gas.
    pub max_priority_fee_per_gas: U256,
    /// Paymaster address plus extra data; empty for self-sponsored calls.
    pub paymaster_and_data: Bytes,
}

/// Submission outcome reported by the relay API.
///
/// The module treats this as authoritative: `success == false` is fatal for
/// the triggering transaction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JitCallResponse {
    /// Whether the host accepted the submission.
    pub success: bool,
    /// Host-provided failure description, if any.
    pub error: Option<String>,
    /// Identifiers of the resulting inherent calls.
    pub tx_hashes: Vec<TxHash>,
}

impl JitCallResponse {
    /// A successful acknowledgment carrying one identifier.
    #[must_use]
    pub fn accepted(tx_hash: TxHash) -> Self {
        Self {
            success: true,
            error: None,
            tx_hashes: vec![tx_hash],
        }
    }

    /// A rejection with a reason.
    #[must_use]
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(reason.into()),
            tx_hashes: Vec::new(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
