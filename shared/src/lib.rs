//! Shared types for the idea generator
//!
//! Contains the JSON envelopes exchanged between the browser client and the
//! relay, plus the tracing setup every binary in the workspace uses.

pub mod types;
pub mod errors;
pub mod logging;

pub use types::*;
pub use errors::*;
