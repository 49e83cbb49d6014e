use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::ConfigError;

/// Zapier catch hook that composes and delivers the email.
pub const DEFAULT_WEBHOOK_URL: &str = "https://hooks.zapier.com/hooks/catch/22923427/272zs5y/";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_STATIC_DIR: &str = "frontend/dist";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub webhook_url: String,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_addr))?;

        let webhook_url = lookup("WEBHOOK_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_WEBHOOK_URL.to_string());

        let static_dir = lookup("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

        Ok(Self {
            bind_addr,
            webhook_url,
            static_dir: PathBuf::from(static_dir),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_with(&[]).unwrap();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse::<SocketAddr>().unwrap());
        assert_eq!(config.webhook_url, DEFAULT_WEBHOOK_URL);
        assert_eq!(config.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
    }

    #[test]
    fn overrides_from_environment() {
        let config = config_with(&[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("WEBHOOK_URL", "http://localhost:9000/hook"),
            ("STATIC_DIR", "/srv/tasks"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.webhook_url, "http://localhost:9000/hook");
        assert_eq!(config.static_dir, PathBuf::from("/srv/tasks"));
    }

    #[test]
    fn blank_webhook_falls_back_to_default() {
        let config = config_with(&[("WEBHOOK_URL", "  ")]).unwrap();
        assert_eq!(config.webhook_url, DEFAULT_WEBHOOK_URL);
    }

    #[test]
    fn rejects_unparsable_bind_addr() {
        let err = config_with(&[("BIND_ADDR", "localhost")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr(addr) if addr == "localhost"));
    }
}
