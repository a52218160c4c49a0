use crate::assessment::ScoreConfig;
use crate::stress::StressModelConfig;
use serde::Deserialize;
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub engines: EngineProfile,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("EDUSIGHT_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("EDUSIGHT_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("EDUSIGHT_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("EDUSIGHT_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let engines = match env::var_os("EDUSIGHT_ENGINE_PROFILE") {
            Some(path) if !path.is_empty() => EngineProfile::from_path(PathBuf::from(path))?,
            _ => EngineProfile::default(),
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            engines,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Tunable weights and thresholds for both scoring engines.
///
/// Either section may be omitted from the profile file; absent fields fall back to the
/// calibrated defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineProfile {
    pub scoring: ScoreConfig,
    pub stress: StressModelConfig,
}

impl EngineProfile {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ProfileUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw).map_err(|source| ConfigError::ProfileInvalid {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost {
        source: std::net::AddrParseError,
    },
    ProfileUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    ProfileInvalid {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "EDUSIGHT_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "EDUSIGHT_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::ProfileUnreadable { path, .. } => {
                write!(f, "engine profile {} could not be read", path.display())
            }
            ConfigError::ProfileInvalid { path, source } => {
                write!(f, "engine profile {} is malformed: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::ProfileUnreadable { source, .. } => Some(source),
            ConfigError::ProfileInvalid { source, .. } => Some(source),
        }
    }
}
