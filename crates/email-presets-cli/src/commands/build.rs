//! `build`: materialize a preset and emit the editor's canvas JSON.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::commands::{find_preset, CommandError};
use crate::config::schema::{IdStrategy, OutputConfig};

/// Effective options for one build, after CLI flags are layered over config.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildOptions {
    /// Pretty-print the JSON.
    pub pretty: bool,
    /// Id allocation strategy.
    pub ids: IdStrategy,
    /// Prefix for sequential ids.
    pub id_prefix: String,
    /// Write here instead of stdout.
    pub output: Option<PathBuf>,
}

impl BuildOptions {
    /// Starts from the `[output]` config section.
    pub fn from_config(config: &OutputConfig) -> Self {
        Self {
            pretty: config.pretty,
            ids: config.ids,
            id_prefix: config.id_prefix.clone(),
            output: None,
        }
    }
}

/// Builds preset `id` and writes its JSON to `opts.output` or `out`.
pub fn run(id: &str, opts: &BuildOptions, out: &mut impl Write) -> Result<(), CommandError> {
    let preset = find_preset(id)?;
    let ids = opts.ids.source(&opts.id_prefix);
    let canvas = preset.build_with(ids.as_ref());

    let json = if opts.pretty {
        canvas.to_json_pretty()?
    } else {
        canvas.to_json()?
    };

    match &opts.output {
        Some(path) => {
            fs::write(path, format!("{json}\n")).map_err(|e| CommandError::Output {
                path: path.clone(),
                source: e,
            })?;
            tracing::info!(preset = preset.id, "Wrote canvas to {}", path.display());
        }
        None => {
            writeln!(out, "{json}").map_err(CommandError::Stdout)?;
        }
    }
    Ok(())
}
