use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::workflows::ghost_jobs::ScoringConfig;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
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
    pub scoring: ScoringSource,
    pub reports: ReportConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::parse(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let scoring_path = env::var("GHOST_SCORING_CONFIG")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let report_dir = env::var("GHOST_REPORT_DIR")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| "report".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            scoring: ScoringSource { path: scoring_path },
            reports: ReportConfig {
                directory: PathBuf::from(report_dir),
            },
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

/// Where scoring overrides come from; built-in defaults when no file is set.
#[derive(Debug, Clone, Default)]
pub struct ScoringSource {
    pub path: Option<PathBuf>,
}

impl ScoringSource {
    pub fn load(&self) -> Result<ScoringConfig, ConfigError> {
        match &self.path {
            Some(path) => load_scoring_file(path),
            None => Ok(ScoringConfig::default()),
        }
    }
}

/// Reads a TOML file whose keys override the default scoring tables.
pub fn load_scoring_file(path: &Path) -> Result<ScoringConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ScoringFile {
        path: path.to_path_buf(),
        source,
    })?;
    ScoringConfig::from_toml_str(&raw).map_err(|source| ConfigError::ScoringParse {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub directory: PathBuf,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost {
        source: std::net::AddrParseError,
    },
    ScoringFile {
        path: PathBuf,
        source: std::io::Error,
    },
    ScoringParse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::ScoringFile { path, source } => write!(
                f,
                "failed to read scoring config {}: {}",
                path.display(),
                source
            ),
            ConfigError::ScoringParse { path, source } => write!(
                f,
                "invalid scoring config {}: {}",
                path.display(),
                source
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::ScoringFile { source, .. } => Some(source),
            ConfigError::ScoringParse { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("GHOST_SCORING_CONFIG");
        env::remove_var("GHOST_REPORT_DIR");
    }

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("ghost-job-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("create scratch dir");
        let path = dir.join(name);
        std::fs::write(&path, contents).expect("write scratch file");
        path
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.scoring.path, None);
        assert_eq!(config.reports.directory, PathBuf::from("report"));
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn rejects_invalid_port() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_PORT", "seventy");
        match AppConfig::load() {
            Err(ConfigError::InvalidPort) => {}
            other => panic!("expected invalid port, got {other:?}"),
        }
        reset_env();
    }

    #[test]
    fn scoring_overrides_load_from_env_path() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let path = scratch_file(
            "scoring.toml",
            "[thresholds]\nghost_threshold_fresh = 6.0\n",
        );
        env::set_var("GHOST_SCORING_CONFIG", &path);
        env::set_var("APP_ENV", "production");

        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        let scoring = config.scoring.load().expect("scoring loads");
        assert_eq!(scoring.thresholds.ghost_threshold_fresh, 6.0);
        assert_eq!(scoring.thresholds.ghost_threshold_old, 3.0);
        reset_env();
    }

    #[test]
    fn scoring_errors_name_the_file() {
        let missing = load_scoring_file(Path::new("./no-such-scoring.toml"))
            .expect_err("missing file fails");
        match &missing {
            ConfigError::ScoringFile { path, .. } => {
                assert_eq!(path, Path::new("./no-such-scoring.toml"))
            }
            other => panic!("expected scoring file error, got {other:?}"),
        }

        let broken = scratch_file("broken.toml", "[thresholds\n");
        match load_scoring_file(&broken) {
            Err(ConfigError::ScoringParse { .. }) => {}
            other => panic!("expected scoring parse error, got {other:?}"),
        }
    }
}
