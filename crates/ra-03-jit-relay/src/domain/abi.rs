//! # ABI Encoding Helpers
//!
//! Minimal ABI encoding for the two call shapes the relay synthesizes: the
//! inner game move and the AA-wallet `execute` wrapper. Static arguments
//! occupy one 32-byte word each; a `bytes` argument is referenced by offset
//! from the start of the argument block and carried length-prefixed,
//! right-padded to a word boundary.

use crate::domain::selector::{selector, MOVE_SELECTOR};
use shared_types::{Address, U256};

const WORD: usize = 32;

/// Encodes `move(uint8 direction)` calldata.
#[must_use]
pub fn encode_move(direction: u8) -> Vec<u8> {
    let mut out = Vec::with_capacity(4 + WORD);
    out.extend_from_slice(&MOVE_SELECTOR);
    out.extend_from_slice(&u8_word(direction));
    out
}

/// Encodes `execute(address target, uint256 value, bytes data)` calldata.
#[must_use]
pub fn encode_execute(target: &Address, value: U256, data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(4 + 4 * WORD + padded_len(data.len()));
    out.extend_from_slice(&selector("execute(address,uint256,bytes)"));
    // Static head: address, value, offset of the dynamic tail
    out.extend_from_slice(&address_word(target));
    out.extend_from_slice(&u256_word(value));
    out.extend_from_slice(&u256_word(U256::from(3 * WORD)));
    // Dynamic tail: length-prefixed, zero-padded bytes
    out.extend_from_slice(&u256_word(U256::from(data.len())));
    out.extend_from_slice(data);
    out.resize(out.len() + padded_len(data.len()) - data.len(), 0);
    out
}

/// Left-pads an address into one word.
fn address_word(addr: &Address) -> [u8; WORD] {
    let mut word = [0u8; WORD];
    word[12..].copy_from_slice(addr.as_bytes());
    word
}

/// Encodes a U256 as one big-endian word.
fn u256_word(value: U256) -> [u8; WORD] {
    let mut word = [0u8; WORD];
    value.to_big_endian(&mut word);
    word
}

/// Left-pads a u8 into one word.
fn u8_word(value: u8) -> [u8; WORD] {
    let mut word = [0u8; WORD];
    word[WORD - 1] = value;
    word
}

/// Rounds a byte length up to the next word boundary.
fn padded_len(len: usize) -> usize {
    len.div_ceil(WORD) * WORD
}

// =============================================================================
// TESTS
// =============================================================================
