//! # Shared Types Crate
//!
//! This crate contains the value objects and the hex codec shared by every
//! aspect subsystem: addresses, transaction hashes, raw byte buffers.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Canonical Address Form**: Addresses travel as 40 lowercase hex
//!   characters without a `0x` prefix; every comparison and storage-key
//!   lookup happens in that form.
//! - **No Host Leakage**: Nothing in this crate knows about the host
//!   runtime; it is pure data.

pub mod codec;
pub mod errors;
pub mod value_objects;

pub use codec::{decode_hex, encode_hex_lower, strip_hex_prefix};
pub use errors::CodecError;
pub use value_objects::{Address, Bytes, TxHash, U256};
