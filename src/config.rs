//! Process configuration.
//!
//! All settings come from the environment, read once at startup into
//! an explicit struct: `HOST`, `USER`, and `PASS` are required, `PORT`
//! is optional. There is no other configuration surface.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;

use crate::error::ConfigError;
use crate::transport::{AuthMethod, SshConfig};

const HOST_VAR: &str = "HOST";
const USER_VAR: &str = "USER";
const PASS_VAR: &str = "PASS";
const PORT_VAR: &str = "PORT";

const DEFAULT_PORT: u16 = 22;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for one polling run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Switch to poll (hostname or IP address).
    pub host: String,

    /// SSH port.
    pub port: u16,

    /// Username for authentication.
    pub username: String,

    /// Password for authentication.
    pub password: SecretString,

    /// Timeout applied to connecting and to each command.
    pub timeout: Duration,

    /// Directory the report files are written to.
    pub report_dir: PathBuf,
}

impl Config {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let require = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing { name })
        };

        let port = match lookup(PORT_VAR) {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: PORT_VAR,
                value,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: require(HOST_VAR)?,
            port,
            username: require(USER_VAR)?,
            password: require(PASS_VAR)?.into(),
            timeout: DEFAULT_TIMEOUT,
            report_dir: PathBuf::from("."),
        })
    }

    /// Transport settings for this configuration. Unknown host keys
    /// are accepted and learned, matching how the original operators
    /// ran the tool.
    pub fn ssh_config(&self) -> SshConfig {
        SshConfig {
            host: self.host.clone(),
            port: self.port,
            username: self.username.clone(),
            auth: AuthMethod::Password(self.password.clone()),
            timeout: self.timeout,
            host_key_verification: Default::default(),
            known_hosts_path: None,
        }
    }
}
