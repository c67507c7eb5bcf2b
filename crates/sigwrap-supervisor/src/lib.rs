//! # sigwrap-supervisor
//!
//! Signal-forwarding supervision for a single child process.
//!
//! This crate provides the coordination loop behind the `sigwrap` binary:
//! - Child process launch with inherited standard streams
//! - Interception of SIGINT/SIGTERM and best-effort forwarding to the child
//! - Termination-status capture for the caller to mirror
//!
//! The loop never outlives the child and never terminates before it.

pub mod errors;
pub mod relay;
pub mod supervise;

// Re-export main types
pub use errors::*;
pub use relay::*;
pub use supervise::*;
