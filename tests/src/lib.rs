//! # Royale-Aspect Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Cross-subsystem choreography
//!     ├── operation_flow.rs   # Entry-point dispatch against the wired aspect
//!     └── relay_flow.rs       # Register -> intercept -> relay -> nonce flows
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p ra-tests
//!
//! # By category
//! cargo test -p ra-tests integration::
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;
