use crate::humanize::ByteSize;
use crate::targets::GeneratorOptions;
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub convert: ConvertConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Defaults for `harsnip convert`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConvertConfig {
    #[serde(default = "default_target")]
    pub target: String,
    /// Client within the target; the target's default when unset
    pub client: Option<String>,
    #[serde(default)]
    pub options: GeneratorOptions,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            client: None,
            options: GeneratorOptions::default(),
        }
    }
}

fn default_target() -> String {
    "shell".to_string()
}

/// Input limits
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    #[serde(default = "default_max_bytes")]
    pub max_bytes: ByteSize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_bytes: default_max_bytes(),
        }
    }
}

fn default_max_bytes() -> ByteSize {
    ByteSize(5 * 1024 * 1024) // 5 MB
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "info".to_string()
}
