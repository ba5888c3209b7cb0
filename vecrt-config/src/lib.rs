//! Vecrt Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Vecrt crates.

use serde::{Deserialize, Serialize};

/// Which standard libraries a fresh runtime opens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibConfig {
    /// Register `type`, `typeof`, `tostring`, `tonumber` as globals
    pub base: bool,
    /// Register the vector library and install the vector metatable
    pub vector: bool,
    /// Global name of the vector function table
    pub vector_namespace: String,
}

/// Log verbosity, mirrors the `tracing` levels
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Output format of the log subscriber
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}

/// Per-phase log level overrides (None falls back to the global level)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogTargets {
    pub install: Option<LogLevel>,
    pub dispatch: Option<LogLevel>,
    pub call: Option<LogLevel>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Global level
    pub level: LogLevel,
    /// Output format
    pub format: LogFormat,
    /// Per-phase overrides
    pub targets: LogTargets,
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VecrtConfig {
    pub libs: LibConfig,
    pub logging: LoggingConfig,
}

/// Runtime phase, used to route log output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Install,
    Dispatch,
    Call,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Install => "install",
            Phase::Dispatch => "dispatch",
            Phase::Call => "call",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("vecrt::{}", self.as_str())
    }

    /// All phases, in pipeline order
    pub fn all() -> [Phase; 3] {
        [Phase::Install, Phase::Dispatch, Phase::Call]
    }
}

impl LogLevel {
    /// Get the lowercase name of the level
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl LoggingConfig {
    /// Effective level for a phase
    pub fn level_for(&self, phase: Phase) -> LogLevel {
        let over = match phase {
            Phase::Install => self.targets.install,
            Phase::Dispatch => self.targets.dispatch,
            Phase::Call => self.targets.call,
        };
        over.unwrap_or(self.level)
    }
}

impl VecrtConfig {
    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json_str(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }
}

impl Default for LibConfig {
    fn default() -> Self {
        Self {
            base: true,
            vector: true,
            vector_namespace: "vec".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Compact,
            targets: LogTargets::default(),
        }
    }
}
