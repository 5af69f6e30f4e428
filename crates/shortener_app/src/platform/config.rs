use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use shortener_core::PageAddress;
use shortener_engine::{ClientSettings, RequestMethod, ResponseMode, DEFAULT_ENDPOINT};
use thiserror::Error;

use super::logging::LogDestination;
use crate::cli::Args;

pub const DEFAULT_PAGE_URL: &str = "https://reduced.to/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("invalid page url {url:?}: {message}")]
    PageUrl { url: String, message: String },
    #[error("{field} must be greater than zero")]
    ZeroTimeout { field: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub page_url: String,
    pub endpoint: String,
    pub method: RequestMethod,
    pub response_mode: ResponseMode,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    pub log_destination: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        let client = ClientSettings::default();
        Self {
            page_url: DEFAULT_PAGE_URL.to_string(),
            endpoint: client.endpoint,
            method: client.method,
            response_mode: client.response_mode,
            connect_timeout_ms: client.connect_timeout.as_millis() as u64,
            request_timeout_ms: client.request_timeout.as_millis() as u64,
            log_destination: LogDestination::default(),
        }
    }
}

impl AppConfig {
    /// Command line values win over the file.
    pub fn apply_overrides(&mut self, args: &Args) {
        if let Some(page_url) = &args.page_url {
            self.page_url = page_url.clone();
        }
        if let Some(endpoint) = &args.endpoint {
            self.endpoint = endpoint.clone();
        }
        if args.post {
            self.method = RequestMethod::Post;
        }
        if args.service {
            self.response_mode = ResponseMode::Service;
        }
        if let Some(destination) = args.log {
            self.log_destination = destination;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.connect_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout {
                field: "connect_timeout_ms",
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout {
                field: "request_timeout_ms",
            });
        }
        Ok(())
    }

    pub fn page_address(&self) -> Result<PageAddress, ConfigError> {
        PageAddress::parse(&self.page_url).map_err(|err| ConfigError::PageUrl {
            url: self.page_url.clone(),
            message: err.to_string(),
        })
    }

    pub fn client_settings(&self) -> ClientSettings {
        let endpoint = if self.endpoint.trim().is_empty() {
            DEFAULT_ENDPOINT.to_string()
        } else {
            self.endpoint.clone()
        };
        ClientSettings {
            endpoint,
            method: self.method,
            response_mode: self.response_mode,
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
        }
    }
}

/// Outcome of [`load_config`]: the config plus whether a file was found.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub from_file: bool,
}

pub fn load_config(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(LoadedConfig {
                config: AppConfig::default(),
                from_file: false,
            });
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let config: AppConfig = ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    config.validate()?;
    Ok(LoadedConfig {
        config,
        from_file: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let loaded = load_config(&temp.path().join("absent.ron")).unwrap();

        assert!(!loaded.from_file);
        assert_eq!(loaded.config, AppConfig::default());
        assert_eq!(loaded.config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("shortener.ron");
        fs::write(
            &path,
            r#"(page_url: "https://short.example/#home", method: Post, request_timeout_ms: 500)"#,
        )
        .unwrap();

        let loaded = load_config(&path).unwrap();
        assert!(loaded.from_file);
        assert_eq!(loaded.config.method, RequestMethod::Post);
        assert_eq!(loaded.config.response_mode, ResponseMode::Echo);
        assert_eq!(
            loaded.config.client_settings().request_timeout,
            Duration::from_millis(500)
        );
        assert_eq!(
            loaded.config.page_address().unwrap().base(),
            "https://short.example/"
        );
    }

    #[test]
    fn garbage_file_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("shortener.ron");
        fs::write(&path, "(page_url: ").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("shortener.ron");
        fs::write(&path, "(request_timeout_ms: 0)").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ZeroTimeout {
                field: "request_timeout_ms"
            }
        ));

        fs::write(&path, "(connect_timeout_ms: 0)").unwrap();
        let err = load_config(&path).unwrap_err();
        assert_eq!(err.to_string(), "connect_timeout_ms must be greater than zero");
    }

    #[test]
    fn cli_overrides_file_values() {
        let mut config = AppConfig::default();
        let args = Args::parse_from([
            "shortener",
            "--page-url",
            "http://localhost:5173/",
            "--endpoint",
            "http://localhost:8080/api/shorten",
            "--post",
            "--service",
            "--log",
            "off",
        ]);

        config.apply_overrides(&args);

        assert_eq!(config.page_url, "http://localhost:5173/");
        assert_eq!(config.client_settings().endpoint, "http://localhost:8080/api/shorten");
        assert_eq!(config.method, RequestMethod::Post);
        assert_eq!(config.response_mode, ResponseMode::Service);
        assert_eq!(config.log_destination, LogDestination::Off);
        assert!(args.urls.is_empty());
    }

    #[test]
    fn relative_page_url_is_rejected() {
        let config = AppConfig {
            page_url: "reduced.to".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.page_address(),
            Err(ConfigError::PageUrl { .. })
        ));
    }
}
