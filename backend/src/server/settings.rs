//! Server settings loaded via OrthoConfig.
//!
//! Precedence is command line, then `USERS_*` environment variables, then
//! the defaults below.

use std::net::{Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Interface the listener binds to.
const BIND_HOST: Ipv4Addr = Ipv4Addr::UNSPECIFIED;

/// SQLite file holding the `users` table, relative to the working directory.
pub const DATABASE_PATH: &str = "database.db";

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERS")]
pub struct ServerSettings {
    /// TCP port to listen on.
    #[ortho_config(default = 3000)]
    pub port: u16,
}

impl ServerSettings {
    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((BIND_HOST, self.port))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_args(args: &[&str]) -> ServerSettings {
        let argv = std::iter::once("user-registry")
            .chain(args.iter().copied())
            .map(OsString::from);
        ServerSettings::load_from_iter(argv).expect("config should load")
    }

    #[rstest]
    fn port_defaults_to_3000() {
        let _guard = lock_env([("USERS_PORT", None::<String>)]);

        let settings = load_from_args(&[]);

        assert_eq!(settings.port, 3000);
        assert_eq!(settings.bind_addr(), "0.0.0.0:3000".parse::<SocketAddr>().expect("addr"));
    }

    #[rstest]
    fn environment_overrides_default() {
        let _guard = lock_env([("USERS_PORT", Some("8081".to_owned()))]);

        let settings = load_from_args(&[]);

        assert_eq!(settings.port, 8081);
    }

    #[rstest]
    fn command_line_overrides_environment() {
        let _guard = lock_env([("USERS_PORT", Some("8081".to_owned()))]);

        let settings = load_from_args(&["--port", "9090"]);

        assert_eq!(settings.port, 9090);
    }
}
