use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use serde::Deserialize;

const DEFAULT_ENV: &str = "local";
const ENV_VAR_NAME: &str = "BOOKCLUB_ENV";
const CONFIG_DIR_ENV: &str = "BOOKCLUB_CONFIG_DIR";

/// Deployment environment the client is pointed at.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Local,
    Staging,
    Production,
}

/// Top-level configuration structure loaded from layered sources.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

impl Settings {
    /// Load configuration by layering `.env`, base file, and environment overlay.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(None)
    }

    /// Same as [`Settings::load`] with an explicit config directory taking
    /// precedence over `BOOKCLUB_CONFIG_DIR`.
    pub fn load_from(config_dir: Option<PathBuf>) -> anyhow::Result<Self> {
        // Allow missing `.env` files without failing.
        let _ = dotenvy::dotenv();

        let environment = std::env::var(ENV_VAR_NAME).unwrap_or_else(|_| DEFAULT_ENV.to_string());
        let config_dir = config_dir.or_else(|| std::env::var(CONFIG_DIR_ENV).ok().map(PathBuf::from));
        let config_dir = match config_dir {
            Some(dir) => dir,
            // Default to the `config` directory next to where the client runs.
            None => std::env::current_dir()
                .context("unable to resolve current directory")?
                .join("config"),
        };

        Self::layered(&config_dir, &environment, None)
    }

    /// Layer `base.toml`, `{environment}.toml` and `BOOKCLUB__*` variables.
    /// `vars` replaces the process environment when given.
    fn layered(
        config_dir: &Path,
        environment: &str,
        vars: Option<config::Map<String, String>>,
    ) -> anyhow::Result<Self> {
        let base_path = config_dir.join("base.toml");
        let environment_path = config_dir.join(format!("{}.toml", environment));

        let builder = config::Config::builder()
            .add_source(config::File::from(base_path).required(false))
            .add_source(config::File::from(environment_path).required(false))
            .add_source(
                config::Environment::with_prefix("BOOKCLUB")
                    .separator("__")
                    .source(vars),
            );

        let cfg = builder
            .build()
            .with_context(|| "failed to build configuration")?;

        let mut settings: Settings = cfg
            .try_deserialize()
            .with_context(|| "failed to deserialize configuration")?;

        // Override environment field with parsed enum variant.
        settings.environment = match environment {
            "local" => Environment::Local,
            "staging" => Environment::Staging,
            "production" => Environment::Production,
            other => {
                return Err(anyhow!(
                    "unsupported environment '{}'; expected local/staging/production",
                    other
                ));
            }
        };

        Ok(settings)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "ApiSettings::default_base_url")]
    pub base_url: String,
    #[serde(default = "ApiSettings::default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl ApiSettings {
    fn default_base_url() -> String {
        "http://127.0.0.1:5000".to_string()
    }

    fn default_request_timeout_ms() -> u64 {
        15000
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            request_timeout_ms: Self::default_request_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    /// File holding the persisted token and user profile
    #[serde(default = "SessionSettings::default_path")]
    pub path: PathBuf,
}

impl SessionSettings {
    fn default_path() -> PathBuf {
        PathBuf::from(".bookclub/session.json")
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetrySettings {
    #[serde(default)]
    pub log_format: LogFormat,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "TelemetrySettings::default_filter")]
    pub filter: String,
}

impl TelemetrySettings {
    fn default_filter() -> String {
        "warn".to_string()
    }
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Pretty,
            filter: Self::default_filter(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}
