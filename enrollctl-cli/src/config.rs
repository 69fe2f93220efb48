//! enrollctl configuration file
//!
//! Loaded from `~/.enrollctl/config.toml` unless `--config` (or
//! `ENROLLCTL_CONFIG`) names another file. Command-line flags and their
//! environment variables take precedence over values read here.
//!
//! ```toml
//! log_level = "info"
//!
//! [server]
//! bind = "127.0.0.1:50051"
//! cors_permissive = false
//!
//! [client]
//! url = "http://127.0.0.1:50051"
//! ```

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use enrollctl_server::ServerConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnrollctlConfig {
    pub log_level: Option<String>,
    pub server: ServerSection,
    pub client: ClientSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSection {
    pub bind: Option<SocketAddr>,
    pub cors_permissive: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientSection {
    pub url: Option<String>,
}

impl EnrollctlConfig {
    /// Get config file path: ~/.enrollctl/config.toml
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".enrollctl/config.toml")
    }

    /// Load configuration.
    ///
    /// An explicitly named file must exist. The default file is optional:
    /// when it is absent the built-in defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config not found at {:?}", path);
                }
                path.to_path_buf()
            }
            None => {
                let path = Self::default_path();
                if !path.exists() {
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = fs::read_to_string(&path)
            .context(format!("Failed to read config file: {:?}", path))?;
        Self::from_toml(&content).context(format!("Failed to parse config file: {:?}", path))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid TOML")
    }

    /// Base URL for client commands: flag/env, then file, then the default
    /// local server address.
    pub fn client_url(&self, flag: Option<&str>) -> String {
        flag.map(str::to_owned)
            .or_else(|| self.client.url.clone())
            .unwrap_or_else(|| format!("http://{}", ServerConfig::default().bind_addr))
    }

    /// Server settings: flags override the file, the file overrides defaults.
    pub fn server_config(&self, bind: Option<SocketAddr>, cors_permissive: bool) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            bind_addr: bind.or(self.server.bind).unwrap_or(defaults.bind_addr),
            cors_permissive: cors_permissive || self.server.cors_permissive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(EnrollctlConfig::from_toml("").unwrap(), EnrollctlConfig::default());
    }

    #[test]
    fn parses_all_sections() {
        let config = EnrollctlConfig::from_toml(
            r#"
            log_level = "debug"

            [server]
            bind = "0.0.0.0:8080"
            cors_permissive = true

            [client]
            url = "http://registry.local:8080"
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.server.bind, Some("0.0.0.0:8080".parse().unwrap()));
        assert!(config.server.cors_permissive);
        assert_eq!(config.client_url(None), "http://registry.local:8080");
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(EnrollctlConfig::from_toml("[server]\nport = 1").is_err());
    }

    #[test]
    fn flags_take_precedence() {
        let config = EnrollctlConfig::from_toml(
            "[server]\nbind = \"0.0.0.0:8080\"\n[client]\nurl = \"http://file:1\"",
        )
        .unwrap();

        let bind: SocketAddr = "127.0.0.1:9000".parse().unwrap();
        assert_eq!(config.server_config(Some(bind), false).bind_addr, bind);
        assert_eq!(
            config.server_config(None, false).bind_addr,
            "0.0.0.0:8080".parse::<SocketAddr>().unwrap()
        );
        assert_eq!(config.client_url(Some("http://flag:2")), "http://flag:2");
    }

    #[test]
    fn defaults_point_at_local_server() {
        let config = EnrollctlConfig::default();
        assert_eq!(config.client_url(None), "http://127.0.0.1:50051");
        assert_eq!(config.server_config(None, false), ServerConfig::default());
    }

    #[test]
    fn load_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"warn\"").unwrap();
        file.flush().unwrap();

        let config = EnrollctlConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.log_level.as_deref(), Some("warn"));
    }

    #[test]
    fn load_missing_explicit_file_fails() {
        let err = EnrollctlConfig::load(Some(Path::new("/nonexistent/enrollctl.toml"))).unwrap_err();
        assert!(err.to_string().contains("Config not found"));
    }
}
