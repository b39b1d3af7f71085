//! # Aspect Runtime Demo
//!
//! Wires the aspect over in-memory adapters and walks one full scenario:
//! register two system players through the operation entry point, intercept
//! an outsider's move, and show the relayed submissions plus the advanced
//! nonces.

use aspect_runtime::{AspectConfig, AspectHooks, HookEvent, RoyaleAspect};
use ra_01_aspect_state::adapters::InMemoryStateStore;
use ra_03_jit_relay::adapters::RecordingJitSubmitter;
use ra_03_jit_relay::domain::abi::encode_move;
use ra_03_jit_relay::domain::entities::PreContractCallCtx;
use shared_types::{Address, Bytes, TxHash};
use std::sync::Arc;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let store = Arc::new(InMemoryStateStore::new());
    let submitter = Arc::new(RecordingJitSubmitter::new());
    let aspect = RoyaleAspect::new(store, submitter.clone(), AspectConfig::default());

    // Register two system players via the operation entry point
    let players = [
        Address::from_hex("e2f8857467b61f2e4b1a614a0d560cd75c0c076f")?,
        Address::from_hex("640fa8872cf086e9ab181ce6d7801284e20bc4d7")?,
    ];
    for player in &players {
        let mut calldata = vec![0x00, 0x01];
        calldata.extend_from_slice(player.as_bytes());
        aspect.handle_operation(&calldata)?;
    }

    let blob = aspect.handle_operation(&[0x10, 0x01])?;
    info!(registry = %String::from_utf8_lossy(&blob), "registry after setup");

    // An outsider moves; the aspect relays one call per system player
    let event = HookEvent::PreContractCall(PreContractCallCtx {
        from: Address::from_hex("0250032b4a11478969dc4caaa11ecc2ea98cfc12")?,
        to: Address::from_hex("11fc90e9635ca31d616153c777b395fcd8e770cc")?,
        data: Bytes::from_vec(encode_move(2)),
        tx_hash: TxHash::new([0x0B; 32]),
    });
    aspect.dispatch(&event)?;

    for request in submitter.submitted() {
        info!(
            sender = %request.sender,
            nonce = request.nonce,
            calldata_len = request.call_data.len(),
            "relayed JIT call"
        );
    }

    for player in &players {
        let mut query = vec![0x10, 0x02];
        query.extend_from_slice(player.as_bytes());
        let nonce = aspect.handle_operation(&query)?;
        info!(player = %player, nonce = %String::from_utf8_lossy(&nonce), "wallet nonce");
    }

    Ok(())
}
