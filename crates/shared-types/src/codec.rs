//! # Hex Codec
//!
//! Conversions between raw bytes and hex-string form. All encoded output is
//! lowercase and unprefixed; decoding tolerates an optional `0x` prefix and
//! mixed case, since calldata arrives from clients in both shapes.

use crate::errors::CodecError;

/// Strips a leading `0x` prefix if present, otherwise returns the input
/// unchanged.
#[must_use]
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x").unwrap_or(s)
}

/// Encodes bytes as lowercase hex without a prefix.
#[must_use]
pub fn encode_hex_lower(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decodes a hex string (optional `0x` prefix, any case) into bytes.
pub fn decode_hex(s: &str) -> Result<Vec<u8>, CodecError> {
    Ok(hex::decode(strip_hex_prefix(s))?)
}

// =============================================================================
// TESTS
// =============================================================================
