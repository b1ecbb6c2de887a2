//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::logger::Level;

/// Root configuration for the logging system.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct LoggerConfig {
    /// Label for the global logger. Detected from the process when unset.
    pub label: Option<String>,

    /// Least severe level forwarded to the subscriber.
    pub min_level: Level,

    /// Subscriber (sink and formatting) settings.
    pub subscriber: SubscriberConfig,
}

/// Output format of the installed subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
    Pretty,
    Json,
}

/// Subscriber configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SubscriberConfig {
    pub format: LogFormat,

    /// Enable ANSI color codes.
    pub ansi: bool,

    /// `EnvFilter` directives. Falls back to `RUST_LOG`, then the default.
    pub filter: Option<String>,

    /// Print the event target.
    pub with_target: bool,
}

impl Default for SubscriberConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Full,
            ansi: true,
            filter: None,
            with_target: true,
        }
    }
}
