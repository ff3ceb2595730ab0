//! TOML configuration schema types for the email-presets CLI.
//!
//! All structs derive `Deserialize` and `Serialize` with defaults via
//! `#[serde(default)]`, so a partial or empty file is valid.

use clap::ValueEnum;
use email_presets::{IdSource, RandomIds, SequentialIds};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root configuration encompassing all sections.
///
/// Corresponds to the full TOML file structure:
/// ```toml
/// [output]
/// [log]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// How `build` renders a preset.
    pub output: OutputConfig,
    /// Logging settings.
    pub log: LogConfig,
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Output settings for the `build` command.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON. `--pretty` / `--compact` override it.
    pub pretty: bool,
    /// Id allocation strategy. `--ids` overrides it.
    pub ids: IdStrategy,
    /// Prefix for sequential ids (`{prefix}-1`, `{prefix}-2`, ...).
    pub id_prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            ids: IdStrategy::Random,
            id_prefix: "preset".to_string(),
        }
    }
}

/// How entity ids are allocated for a build.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum IdStrategy {
    /// Random UUID v4 ids, different on every build.
    Random,
    /// Deterministic `prefix-N` ids, identical across builds.
    Sequential,
}

impl IdStrategy {
    /// Creates a fresh id source for one build.
    pub fn source(self, prefix: &str) -> Box<dyn IdSource> {
        match self {
            IdStrategy::Random => Box::new(RandomIds),
            IdStrategy::Sequential => Box::new(SequentialIds::new(prefix)),
        }
    }
}

// ---------------------------------------------------------------------------
// Log
// ---------------------------------------------------------------------------

/// Logging configuration from the `[log]` section.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Verbosity used when `EMAIL_PRESETS_LOG` is unset.
    pub level: LogLevel,
}

/// Log verbosity levels (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings (default).
    #[default]
    Warn,
    /// Informational messages.
    Info,
    /// Debug-level detail.
    Debug,
    /// Full trace output.
    Trace,
}

impl LogLevel {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
