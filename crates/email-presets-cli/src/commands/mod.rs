//! Subcommand implementations.
//!
//! Each command writes its result to a caller-supplied writer so tests can
//! capture output without spawning the binary.

use std::path::PathBuf;

use email_presets::{email_presets, EmailPreset};
use thiserror::Error;

use crate::config::error::ConfigError;

/// `build` command.
pub mod build;

/// `list` command.
pub mod list;

/// `show` command.
pub mod show;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CommandError {
    /// No preset with the requested id.
    #[error("Unknown preset '{id}'. Available presets: {}", known.join(", "))]
    UnknownPreset {
        /// Requested id
        id: String,
        /// Every id in the catalog, in order
        known: Vec<String>,
    },

    /// Failed to write the output file.
    #[error("Failed to write output file: {path}")]
    Output {
        /// Target path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode the `list --format json` summaries.
    #[error("Failed to encode preset list as JSON")]
    ListJson(#[source] serde_json::Error),

    /// Failed to write to stdout.
    #[error("Failed to write to stdout")]
    Stdout(#[source] std::io::Error),

    /// Preset encoding failed.
    #[error(transparent)]
    Library(#[from] email_presets::Error),

    /// Configuration could not be loaded or written.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Looks up a catalog entry by id.
pub fn find_preset(id: &str) -> Result<&'static EmailPreset, CommandError> {
    email_presets()
        .iter()
        .find(|preset| preset.id == id)
        .ok_or_else(|| CommandError::UnknownPreset {
            id: id.to_string(),
            known: email_presets().iter().map(|p| p.id.to_string()).collect(),
        })
}
