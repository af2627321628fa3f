use chrono::{FixedOffset, Offset, Utc};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Clone, Validate)]
pub struct Settings {
    #[validate(nested)]
    pub server: ServerSettings,
    #[validate(nested)]
    pub document_api: DocumentApiSettings,
    #[serde(default)]
    #[validate(nested)]
    pub display: DisplaySettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

#[derive(Deserialize, Clone, Validate)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Body limit for the upload form, covering every file in one submit.
    #[serde(default = "default_max_upload_bytes")]
    #[validate(range(min = 1))]
    pub max_upload_bytes: usize,
}

fn default_max_upload_bytes() -> usize {
    crate::startup::DEFAULT_MAX_UPLOAD_BYTES
}

#[derive(Deserialize, Clone, Validate)]
pub struct DocumentApiSettings {
    /// Base endpoint of the document-storage API, e.g. `http://localhost:8000/`.
    #[validate(url)]
    pub base_url: String,
    /// Sent as `x-api-key` on every call. Supply it through
    /// `APP_DOCUMENT_API__API_KEY`, never in a checked-in file.
    pub api_key: Secret<String>,
    /// Only the first page of this size is ever fetched.
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 100))]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    10
}

/// How timestamps are presented; stands in for the browser locale.
#[derive(Deserialize, Clone, Debug, Validate)]
pub struct DisplaySettings {
    #[serde(default)]
    #[validate(range(min = -1440, max = 1440))]
    pub utc_offset_minutes: i32,
    #[serde(default)]
    pub clock: Clock,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            utc_offset_minutes: 0,
            clock: Clock::default(),
        }
    }
}

impl DisplaySettings {
    pub fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).unwrap_or_else(|| Utc.fix())
    }
}

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    #[serde(rename = "24h")]
    TwentyFourHour,
    #[serde(rename = "12h")]
    TwelveHour,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TelemetrySettings {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// OTLP gRPC collector; spans are only exported when set.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            otlp_endpoint: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Settings {
    /// Field validation plus the checks `validator` can't express.
    pub fn check(&self) -> Result<(), config::ConfigError> {
        self.validate()
            .map_err(|e| config::ConfigError::Message(format!("invalid configuration: {}", e)))?;

        if self.document_api.api_key.expose_secret().trim().is_empty() {
            return Err(config::ConfigError::Message(
                "document_api.api_key is empty; set APP_DOCUMENT_API__API_KEY".to_string(),
            ));
        }

        Ok(())
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("failed to determine the current directory: {}", e))
    })?;

    // Allow running from the workspace root or from the crate directory
    let configuration_directory = if base_path.ends_with("docs-console") {
        base_path.join("config")
    } else {
        base_path.join("docs-console").join("config")
    };

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(true))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    let settings = settings.try_deserialize::<Settings>()?;
    settings.check()?;
    Ok(settings)
}
