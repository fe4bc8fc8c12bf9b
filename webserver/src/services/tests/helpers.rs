//! Test helpers for webserver service tests

use std::net::{SocketAddr, TcpListener};

use url::Url;

/// Address that refuses connections: bound once, then released
pub fn refused_socket_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

/// Endpoint URL on a stub server
pub fn endpoint(base: &str, path: &str) -> Url {
    Url::parse(&format!("{base}{path}")).unwrap()
}
