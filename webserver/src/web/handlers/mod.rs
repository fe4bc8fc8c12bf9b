//! Request handlers for the relay's HTTP routes

pub mod api;

pub use api::*;
