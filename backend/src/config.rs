//! Host configuration read from the environment.
//!
//! | Variable                     | Default     |
//! |------------------------------|-------------|
//! | `REDACT_UPLOAD_HOST`         | `127.0.0.1` |
//! | `REDACT_UPLOAD_PORT`         | `8080`      |
//! | `REDACT_UPLOAD_OPEN_BROWSER` | `true`      |

use log::warn;
use std::env;

const HOST_VAR: &str = "REDACT_UPLOAD_HOST";
const PORT_VAR: &str = "REDACT_UPLOAD_PORT";
const OPEN_BROWSER_VAR: &str = "REDACT_UPLOAD_OPEN_BROWSER";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Open the form in the default browser shortly after binding.
    pub open_browser: bool,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup(HOST_VAR)
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup(PORT_VAR) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Ignoring invalid {PORT_VAR}={raw:?}, using {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let open_browser = lookup(OPEN_BROWSER_VAR)
            .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off"))
            .unwrap_or(true);

        Self {
            host,
            port,
            open_browser,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
