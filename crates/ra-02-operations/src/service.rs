//! # Operation Dispatch Service
//!
//! Routes parsed entry-point requests to the state subsystem and encodes
//! the replies. Return values are raw byte buffers: empty for mutations,
//! UTF-8 strings for queries, matching the host's operation calling
//! convention.

use crate::domain::{Opcode, OperationRequest};
use crate::errors::OperationError;
use ra_01_aspect_state::domain::{NonceStore, RegistryStore};
use ra_01_aspect_state::ports::StateStore;
use shared_types::Address;
use std::sync::Arc;
use tracing::{debug, info};

/// Entry-point dispatcher over an injected state store.
pub struct OperationService<S: StateStore> {
    registry: RegistryStore<S>,
    nonces: NonceStore<S>,
}

impl<S: StateStore> OperationService<S> {
    /// Creates a dispatcher whose registry and nonce store share `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            registry: RegistryStore::new(store.clone()),
            nonces: NonceStore::new(store),
        }
    }

    /// Handles one entry-point invocation.
    ///
    /// All errors abort the invocation; failed validation leaves state
    /// untouched.
    pub fn handle(&self, data: &[u8]) -> Result<Vec<u8>, OperationError> {
        let request = OperationRequest::parse(data)?;
        let opcode = Opcode::from_u16(request.opcode_raw)
            .ok_or(OperationError::UnknownOperation(request.opcode_raw))?;

        debug!(
            op = opcode.name(),
            read_only = opcode.is_read_only(),
            params_len = request.params.len(),
            "dispatching operation"
        );

        match opcode {
            Opcode::RegisterSysPlayer => {
                let player = parse_address_param(opcode, request.params)?;
                self.registry.append(&player)?;
                info!(player = %player, "system player registered");
                Ok(Vec::new())
            }
            Opcode::GetSysPlayers => Ok(self.registry.raw()?.into_bytes()),
            Opcode::GetAaWalletNonce => {
                let wallet = parse_address_param(opcode, request.params)?;
                let nonce = self.nonces.get(&wallet)?;
                Ok(nonce.to_string().into_bytes())
            }
        }
    }
}

/// Parses a fixed 20-byte address parameter.
fn parse_address_param(opcode: Opcode, params: &[u8]) -> Result<Address, OperationError> {
    Address::from_slice(params).ok_or(OperationError::InvalidParams {
        opcode,
        expected: 20,
        actual: params.len(),
    })
}

// =============================================================================
// TESTS
// =============================================================================
