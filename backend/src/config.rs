//! Server settings read from the environment.
//!
//! | variable             | default         |
//! |----------------------|-----------------|
//! | `METAS_HOST`         | `127.0.0.1`     |
//! | `METAS_PORT`         | `8080`          |
//! | `METAS_DB`           | `metas.sqlite`  |
//! | `METAS_OPEN_BROWSER` | `true`          |
//!
//! Values that fail to parse fall back to the default with a warning.

use log::warn;
use std::path::PathBuf;

pub const HOST_VAR: &str = "METAS_HOST";
pub const PORT_VAR: &str = "METAS_PORT";
pub const DB_VAR: &str = "METAS_DB";
pub const OPEN_BROWSER_VAR: &str = "METAS_OPEN_BROWSER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            db_path: PathBuf::from("metas.sqlite"),
            open_browser: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so it can be tested
    /// without touching the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_VAR).filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }
        if let Some(port) = lookup(PORT_VAR) {
            match port.trim().parse::<u16>() {
                Ok(port) => config.port = port,
                Err(_) => warn!("ignoring {}={:?}, using {}", PORT_VAR, port, config.port),
            }
        }
        if let Some(path) = lookup(DB_VAR).filter(|p| !p.trim().is_empty()) {
            config.db_path = PathBuf::from(path.trim());
        }
        if let Some(flag) = lookup(OPEN_BROWSER_VAR) {
            match parse_flag(&flag) {
                Some(open) => config.open_browser = open,
                None => warn!(
                    "ignoring {}={:?}, using {}",
                    OPEN_BROWSER_VAR, flag, config.open_browser
                ),
            }
        }

        config
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(config_from(&[]), ServerConfig::default());
        assert_eq!(ServerConfig::default().url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            (HOST_VAR, "0.0.0.0"),
            (PORT_VAR, " 9000 "),
            (DB_VAR, "/tmp/metas.db"),
            (OPEN_BROWSER_VAR, "off"),
        ]);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.db_path, PathBuf::from("/tmp/metas.db"));
        assert!(!config.open_browser);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = config_from(&[(PORT_VAR, "80000"), (OPEN_BROWSER_VAR, "maybe"), (HOST_VAR, " ")]);
        assert_eq!(config, ServerConfig::default());
    }
}
