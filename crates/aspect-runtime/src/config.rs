//! # Aspect Configuration
//!
//! One struct carrying every tunable of the wired aspect. Defaults match
//! the deployed game environment.

use ra_03_jit_relay::service::RelayConfig;

/// Configuration for the wired aspect.
#[derive(Debug, Clone, Default)]
pub struct AspectConfig {
    /// Relay trigger configuration (watched selector, gas and fee
    /// constants).
    pub relay: RelayConfig,
}
