//! # Integration Tests
//!
//! Cross-subsystem flows exercising the wired aspect end to end.

pub mod operation_flow;
pub mod relay_flow;
