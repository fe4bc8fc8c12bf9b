//! Service tests for webserver
//!
//! Exercises the real upstream transport against local stub servers.

pub mod helpers;
pub mod upstream_client;
