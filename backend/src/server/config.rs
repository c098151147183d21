//! HTTP server configuration object.

use std::net::SocketAddr;

use user_registry::outbound::persistence::DbConnection;

/// Everything `create_server` needs: where to listen and which store to use.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) connection: DbConnection,
}

impl ServerConfig {
    /// Construct a server configuration around an opened store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, connection: DbConnection) -> Self {
        Self {
            bind_addr,
            connection,
        }
    }

    /// Return the socket address the server will bind to.
    #[cfg_attr(
        not(any(test, doctest)),
        expect(dead_code, reason = "Read by bootstrap tests")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
