//! Process configuration, read from the environment.

use std::net::SocketAddr;

use anyhow::{Context, bail};

pub const BIND_ADDR_VAR: &str = "LEARNHUB_BIND_ADDR";
pub const SEED_DEMO_DATA_VAR: &str = "LEARNHUB_SEED_DEMO_DATA";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Load the demo users, courses and reviews at startup.
    pub seed_demo_data: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8004)),
            seed_demo_data: true,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup; unset keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = raw
                .trim()
                .parse()
                .with_context(|| format!("{BIND_ADDR_VAR} is not a socket address: {raw:?}"))?;
        }

        if let Some(raw) = lookup(SEED_DEMO_DATA_VAR) {
            config.seed_demo_data = match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                other => bail!("{SEED_DEMO_DATA_VAR} must be a boolean, got {other:?}"),
            };
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.bind_addr.port(), 8004);
        assert!(config.seed_demo_data);
    }

    #[test]
    fn reads_overrides() {
        let config = ApiConfig::from_lookup(lookup(&[
            (BIND_ADDR_VAR, "127.0.0.1:9000"),
            (SEED_DEMO_DATA_VAR, "off"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:9000".parse().unwrap());
        assert!(!config.seed_demo_data);
    }

    #[test]
    fn rejects_garbage() {
        assert!(ApiConfig::from_lookup(lookup(&[(BIND_ADDR_VAR, "localhost")])).is_err());
        assert!(ApiConfig::from_lookup(lookup(&[(SEED_DEMO_DATA_VAR, "maybe")])).is_err());
    }
}
