//! WebServer services implementations

pub mod upstream_client;

#[cfg(test)]
pub mod tests;

pub use upstream_client::*;
