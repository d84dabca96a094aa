use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;

use microblog_service::ServiceConfig;
use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// How long shutdown waits for the queues to drain.
    pub shutdown_timeout_secs: u64,
    pub service: ServiceConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 8080)),
            shutdown_timeout_secs: 5,
            service: ServiceConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read a TOML file. Missing keys fall back to their defaults.
    pub fn load(path: impl AsRef<Path>) -> ServerResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> ServerResult<Self> {
        toml::from_str(raw).map_err(|e| ServerError::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> ServerResult<String> {
        toml::to_string_pretty(self).map_err(|e| ServerError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn default_config() {
        let c = ServerConfig::default();
        assert_eq!(c.bind_addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(c.shutdown_timeout_secs, 5);
        assert_eq!(c.service.like_queue_capacity, 100);
        assert_eq!(c.service.events.path, PathBuf::from("events.log"));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = ServerConfig::from_toml(
            r#"
            bind_addr = "0.0.0.0:9000"

            [service.events]
            path = "/var/log/microblog/events.log"
            "#,
        )
        .unwrap();
        assert_eq!(c.bind_addr, "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(c.shutdown_timeout_secs, 5);
        assert_eq!(c.service.like_queue_capacity, 100);
        assert_eq!(
            c.service.events.path,
            PathBuf::from("/var/log/microblog/events.log")
        );
        assert!(c.service.events.mirror_stdout);
    }

    #[test]
    fn default_config_survives_toml() {
        let c = ServerConfig::default();
        let parsed = ServerConfig::from_toml(&c.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, c);
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = ServerConfig::from_toml("bind_addr = 12").unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("microblog.toml");
        std::fs::write(&path, "shutdown_timeout_secs = 1\n").unwrap();
        assert_eq!(ServerConfig::load(&path).unwrap().shutdown_timeout_secs, 1);
    }
}
