use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use serde::Deserialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_BACKEND_PORT: u16 = 4000;
const DEFAULT_FRONTEND_PORT: u16 = 3000;
const DEFAULT_BACKEND_URL: &str = "http://localhost:4000";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 5;

/// Top-level application configuration loaded from file + environment.
///
/// Both binaries load the same config; each reads its own section.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub backend: BackendSection,
    pub frontend: FrontendSection,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    pub fn load() -> Result<Self> {
        let config_path = env::var("GREETLY_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let mut builder = config::Config::builder();

        if Path::new(&config_path).exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(&config_path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("GREETLY")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        // GREETLY_BACKEND_URL is the documented single-variable override for
        // the proxy upstream, kept for parity with the original deployment.
        if let Ok(url) = env::var("GREETLY_BACKEND_URL") {
            config.frontend.backend_url = url;
        }

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        config.validate()?;

        Ok(config)
    }

    /// Check that addresses and the upstream URL are usable before binding
    /// anything.
    pub fn validate(&self) -> Result<()> {
        if self.backend.port == 0 {
            bail!("backend.port must be nonzero");
        }
        if self.frontend.port == 0 {
            bail!("frontend.port must be nonzero");
        }

        let url = reqwest::Url::parse(&self.frontend.backend_url)
            .map_err(|e| anyhow::anyhow!("frontend.backend_url is not a valid URL: {}", e))?;
        match url.scheme() {
            "http" | "https" => {}
            other => bail!("frontend.backend_url must be http or https, got '{}'", other),
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendSection {
    pub host: String,
    pub port: u16,
}

impl BackendSection {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for BackendSection {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_BACKEND_PORT,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FrontendSection {
    pub host: String,
    pub port: u16,
    pub backend_url: String,
    pub upstream_timeout_secs: u64,
}

impl FrontendSection {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Upstream base URL without a trailing slash, so route paths can be
    /// appended directly.
    pub fn backend_base(&self) -> String {
        self.backend_url.trim_end_matches('/').to_string()
    }
}

impl Default for FrontendSection {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_FRONTEND_PORT,
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            upstream_timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Text,
}

/// Install the global tracing subscriber. `RUST_LOG` wins over the
/// configured level.
pub fn init_tracing(config: &AppConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.logging.level.clone()))
        .unwrap_or_else(|_| EnvFilter::new("greetly=info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format {
        LogFormat::Json => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        LogFormat::Text => {
            registry.with(tracing_subscriber::fmt::layer()).init();
        }
    }

    Ok(())
}
