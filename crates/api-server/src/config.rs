//! Server configuration read from the environment

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use serde::Serialize;
use taskboard_core::id::IdPolicy;
use taskboard_core::store::StoreConfig;

const DEFAULT_ADDR: &str = "0.0.0.0:8081";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// JSON fixture on disk; `None` uses the embedded seed
    pub fixture_path: Option<PathBuf>,
    pub store: StoreConfig,
}

fn parse_flag(raw: Option<String>, default: bool) -> bool {
    match raw {
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        None => default,
    }
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build the config from any variable lookup
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let addr = var("TASKBOARD_ADDR")
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = addr
            .parse()
            .with_context(|| format!("Invalid TASKBOARD_ADDR: {}", addr))?;

        let fixture_path = var("TASKBOARD_FIXTURE")
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        let id_policy = match var("TASKBOARD_ID_POLICY") {
            Some(raw) => raw.parse::<IdPolicy>()?,
            None => IdPolicy::default(),
        };

        let validate_references = parse_flag(
            var("TASKBOARD_VALIDATE_REFERENCES"),
            StoreConfig::default().validate_references,
        );

        Ok(Self {
            addr,
            fixture_path,
            store: StoreConfig {
                id_policy,
                validate_references,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(pairs: &[(&str, &str)]) -> anyhow::Result<ServerConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_vars(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.addr, DEFAULT_ADDR.parse::<SocketAddr>().unwrap());
        assert!(config.fixture_path.is_none());
        assert_eq!(config.store, StoreConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("TASKBOARD_ADDR", "127.0.0.1:9000"),
            ("TASKBOARD_FIXTURE", "/tmp/board.json"),
            ("TASKBOARD_ID_POLICY", "max-plus-one"),
            ("TASKBOARD_VALIDATE_REFERENCES", "off"),
        ])
        .unwrap();

        assert_eq!(config.addr.port(), 9000);
        assert_eq!(config.fixture_path, Some(PathBuf::from("/tmp/board.json")));
        assert_eq!(config.store.id_policy, IdPolicy::MaxPlusOne);
        assert!(!config.store.validate_references);
    }

    #[test]
    fn test_unrecognized_flag_keeps_default() {
        let config = config(&[("TASKBOARD_VALIDATE_REFERENCES", "maybe")]).unwrap();
        assert!(config.store.validate_references);
    }

    #[test]
    fn test_bad_values_are_errors() {
        assert!(config(&[("TASKBOARD_ADDR", "not-an-addr")]).is_err());
        assert!(config(&[("TASKBOARD_ID_POLICY", "uuid")]).is_err());
    }
}
