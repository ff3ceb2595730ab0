//! `list`: print the catalog in display order.

use std::io::Write;

use clap::ValueEnum;
use email_presets::email_presets;
use serde::Serialize;

use crate::commands::CommandError;

/// Output format for `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Aligned columns for humans
    Text,
    /// JSON array of `{id, name, description}`
    Json,
}

/// Catalog metadata as printed by `list --format json`.
#[derive(Debug, Serialize)]
struct PresetSummary {
    id: &'static str,
    name: &'static str,
    description: &'static str,
}

/// Writes the catalog to `out`.
pub fn run(format: ListFormat, out: &mut impl Write) -> Result<(), CommandError> {
    let presets = email_presets();
    match format {
        ListFormat::Json => {
            let summaries: Vec<PresetSummary> = presets
                .iter()
                .map(|p| PresetSummary {
                    id: p.id,
                    name: p.name,
                    description: p.description,
                })
                .collect();
            let json =
                serde_json::to_string_pretty(&summaries).map_err(CommandError::ListJson)?;
            writeln!(out, "{json}").map_err(CommandError::Stdout)?;
        }
        ListFormat::Text => {
            let id_width = presets.iter().map(|p| p.id.len()).max().unwrap_or(0);
            let name_width = presets.iter().map(|p| p.name.len()).max().unwrap_or(0);
            for p in presets {
                writeln!(
                    out,
                    "{:id_width$}  {:name_width$}  {}",
                    p.id, p.name, p.description
                )
                .map_err(CommandError::Stdout)?;
            }
        }
    }
    Ok(())
}
