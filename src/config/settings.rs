use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;
use std::env;

use super::directive::parse_directive;
use crate::error::{AppError, Result};
use crate::placeholder::time::{find_invalid_format_item, DEFAULT_TIME_FORMAT};

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub placeholders: PlaceholderConfig,
    #[serde(default)]
    pub respond: RespondConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Options of the placeholder provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaceholderConfig {
    /// Lower bound of `extra.rand.int` (inclusive)
    #[serde(default)]
    pub rand_int_min: i64,
    /// Upper bound of `extra.rand.int` (inclusive)
    #[serde(default = "default_rand_int_max")]
    pub rand_int_max: i64,
    /// strftime pattern for the `custom` time fields
    #[serde(default = "default_time_format")]
    pub time_format_custom: String,
    #[serde(default)]
    pub disable_loadavg_placeholders: bool,
    /// `extra_placeholders { ... }` block file replacing the options above
    #[serde(default)]
    pub directive_file: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RespondConfig {
    /// Template served by `GET /`
    #[serde(default = "default_respond_body")]
    pub body: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_rand_int_max() -> i64 {
    100
}

fn default_time_format() -> String {
    DEFAULT_TIME_FORMAT.to_string()
}

fn default_respond_body() -> String {
    "Served by {extra.caddy.version.simple} at {extra.time.now.custom} \
     ({extra.time.now.timezone_name}), lucky number {extra.rand.int}\n"
        .to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Settings {
    pub fn new() -> Result<Self> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // EXTRA__SERVER__PORT, EXTRA__PLACEHOLDERS__RAND_INT_MAX, ...
            .add_source(
                Environment::with_prefix("EXTRA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::load(builder)
    }

    /// Build settings from prepared sources, then apply the directive file,
    /// provisioning and validation.
    pub fn load(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let builder = builder
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?
            .set_default("placeholders.rand_int_min", 0)?
            .set_default("placeholders.rand_int_max", default_rand_int_max())?
            .set_default("placeholders.time_format_custom", DEFAULT_TIME_FORMAT)?
            .set_default("placeholders.disable_loadavg_placeholders", false)?;

        let mut settings: Settings = builder.build()?.try_deserialize()?;

        if let Some(path) = settings.placeholders.directive_file.take() {
            let text = std::fs::read_to_string(&path)?;
            settings.placeholders = parse_directive(&text)?;
            tracing::info!(path = %path, "Loaded extra_placeholders directive");
            settings.placeholders.directive_file = Some(path);
        }

        settings.placeholders.provision();
        settings.placeholders.validate()?;
        Ok(settings)
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl PlaceholderConfig {
    /// Fill in the default random range when neither bound was set.
    pub fn provision(&mut self) {
        if self.rand_int_min == 0 && self.rand_int_max == 0 {
            self.rand_int_max = default_rand_int_max();
        }
    }

    /// Reject configurations the provider must not be activated with.
    pub fn validate(&self) -> Result<()> {
        if self.rand_int_max <= self.rand_int_min {
            return Err(AppError::InvalidRandRange {
                min: self.rand_int_min,
                max: self.rand_int_max,
            });
        }
        if let Some(format) = find_invalid_format_item(&self.time_format_custom) {
            return Err(AppError::InvalidTimeFormat(format));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            rand_int_min: 0,
            rand_int_max: default_rand_int_max(),
            time_format_custom: default_time_format(),
            disable_loadavg_placeholders: false,
            directive_file: None,
        }
    }
}

impl Default for RespondConfig {
    fn default() -> Self {
        Self {
            body: default_respond_body(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}
