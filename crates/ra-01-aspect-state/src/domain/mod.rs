//! # Domain Layer
//!
//! Registry blob codec, nonce bookkeeping, and the state error taxonomy.

pub mod errors;
pub mod nonce;
pub mod registry;

pub use errors::StateError;
pub use nonce::NonceStore;
pub use registry::{RegistryStore, SYS_PLAYER_STORAGE_KEY};
