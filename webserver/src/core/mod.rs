//! Relay business logic
//!
//! Pure request building and response parsing per provider, plus the relay
//! flow that drives one generation through an [`UpstreamClient`](crate::traits::UpstreamClient).

pub mod provider;
pub mod relay;

pub use relay::Relay;
