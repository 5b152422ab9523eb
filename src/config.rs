use anyhow::{Context, anyhow};
use std::net::SocketAddr;

const DEFAULT_DATABASE_URL: &str = "lang_portal.db";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_POOL_SIZE: u32 = 8;

/// Runtime settings, read from the process environment (and `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub pool_size: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.into());

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.into())
            .parse::<SocketAddr>()
            .context("BIND_ADDR must be a socket address such as 127.0.0.1:5000")?;

        let pool_size = match lookup("DB_POOL_SIZE") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or_else(|| anyhow!("DB_POOL_SIZE must be a positive integer, got {:?}", raw))?,
            None => DEFAULT_POOL_SIZE,
        };

        Ok(Config {
            database_url,
            bind_addr,
            pool_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.database_url, "lang_portal.db");
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:5000");
        assert_eq!(config.pool_size, 8);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("DATABASE_URL", "/var/lib/lang-portal/words.db"),
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("DB_POOL_SIZE", "2"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "/var/lib/lang-portal/words.db");
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.pool_size, 2);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(config_from(&[("BIND_ADDR", "localhost")]).is_err());
        assert!(config_from(&[("DB_POOL_SIZE", "0")]).is_err());
        assert!(config_from(&[("DB_POOL_SIZE", "many")]).is_err());
    }
}
