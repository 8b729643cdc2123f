//! Server settings loaded via OrthoConfig and the resolved server config.
//!
//! Settings come from CLI flags (`--host`, `--port`, `--default-limit`),
//! `TYPING_*` environment variables or a config file, in OrthoConfig's
//! usual precedence.

use std::io;
use std::net::{IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use typing_backend::domain::{DEFAULT_RESULT_LIMIT, ResultLimit};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

/// Raw settings controlling the HTTP listener and listing defaults.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TYPING")]
pub struct ServerSettings {
    /// IP address to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// Listing limit used when a request omits `limit`.
    pub default_limit: Option<usize>,
}

impl ServerSettings {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn default_limit(&self) -> ResultLimit {
        ResultLimit::new(self.default_limit.unwrap_or(DEFAULT_RESULT_LIMIT))
    }

    /// Resolve the settings into a [`ServerConfig`].
    ///
    /// # Errors
    /// Returns [`io::ErrorKind::InvalidInput`] when the host is not an IP
    /// address.
    pub fn into_server_config(self) -> io::Result<ServerConfig> {
        let host = self.host();
        let ip: IpAddr = host.parse().map_err(|err| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid TYPING_HOST {host:?}: {err}"),
            )
        })?;
        Ok(ServerConfig {
            bind_addr: SocketAddr::new(ip, self.port()),
            default_limit: self.default_limit(),
        })
    }
}

/// Resolved configuration for creating the HTTP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) default_limit: ResultLimit,
}

impl ServerConfig {
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Exercised by server bootstrap tests")
    )]
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            default_limit: ResultLimit::default(),
        }
    }

    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Exercised by server bootstrap tests")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from(args: &[&str]) -> ServerSettings {
        let args = std::iter::once(OsString::from("typing-backend"))
            .chain(args.iter().map(OsString::from));
        ServerSettings::load_from_iter(args).expect("config should load")
    }

    fn cleared_env() -> [(&'static str, Option<String>); 3] {
        [
            ("TYPING_HOST", None),
            ("TYPING_PORT", None),
            ("TYPING_DEFAULT_LIMIT", None),
        ]
    }

    #[rstest]
    fn defaults_apply_when_nothing_is_set() {
        let _guard = lock_env(cleared_env());

        let settings = load_from(&[]);
        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.port(), DEFAULT_PORT);
        assert_eq!(settings.default_limit().get(), 50);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("TYPING_HOST", Some("127.0.0.1".to_owned())),
            ("TYPING_PORT", Some("8080".to_owned())),
            ("TYPING_DEFAULT_LIMIT", Some("10".to_owned())),
        ]);

        let config = load_from(&[])
            .into_server_config()
            .expect("valid settings");
        assert_eq!(config.bind_addr(), "127.0.0.1:8080".parse().expect("addr"));
        assert_eq!(config.default_limit.get(), 10);
    }

    #[rstest]
    fn cli_flags_override_environment() {
        let _guard = lock_env([
            ("TYPING_HOST", None),
            ("TYPING_PORT", Some("8080".to_owned())),
            ("TYPING_DEFAULT_LIMIT", None),
        ]);

        let settings = load_from(&["--port", "9090"]);
        assert_eq!(settings.port(), 9090);
    }

    #[rstest]
    #[case("localhost")]
    #[case("not a host")]
    fn non_ip_hosts_are_rejected(#[case] host: &str) {
        let settings = ServerSettings {
            host: Some(host.to_owned()),
            port: None,
            default_limit: None,
        };

        let err = settings.into_server_config().expect_err("host rejected");
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
