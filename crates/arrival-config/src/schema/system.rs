//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive covering every arrival crate.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "arrival=trace",
            LogLevel::Debug => "arrival=debug",
            LogLevel::Info => "arrival=info",
            LogLevel::Warning => "arrival=warn",
            LogLevel::Error => "arrival=error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
