//! # Adapters Layer
//!
//! Concrete [`crate::ports::JitCallSubmitter`] implementations.

mod recording;

pub use recording::RecordingJitSubmitter;
