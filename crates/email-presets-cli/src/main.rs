//! Email Presets - CLI entry point
//!
//! Lists the built-in email presets, previews their structure and exports
//! freshly built trees as editor JSON.

use clap::{ArgAction, Parser, Subcommand};
use email_presets_cli::commands::build::{self, BuildOptions};
use email_presets_cli::commands::list::{self, ListFormat};
use email_presets_cli::commands::{show, CommandError};
use email_presets_cli::config::schema::IdStrategy;
use email_presets_cli::config::{default, xdg, Config, ConfigError, ConfigLoader};
use email_presets_cli::logging;
use std::path::PathBuf;
use std::process::ExitCode;

/// Email layout preset catalog
#[derive(Parser)]
#[command(name = "email-presets")]
#[command(version, about = "Browse and export email layout presets")]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the email-presets CLI
#[derive(Subcommand)]
enum Commands {
    /// List presets in display order
    List {
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: ListFormat,
    },

    /// Show a preset's description and structure
    Show {
        /// Preset id (see `list`)
        id: String,
    },

    /// Build a preset and print its canvas JSON
    Build {
        /// Preset id (see `list`)
        id: String,
        /// Pretty-print JSON (overrides config)
        #[arg(long, action = ArgAction::SetTrue, conflicts_with = "compact")]
        pretty: bool,
        /// Single-line JSON (overrides config)
        #[arg(long, action = ArgAction::SetTrue)]
        compact: bool,
        /// Id allocation strategy (overrides config)
        #[arg(long, value_enum)]
        ids: Option<IdStrategy>,
        /// Prefix for sequential ids (overrides config)
        #[arg(long)]
        id_prefix: Option<String>,
        /// Write JSON to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
enum ConfigAction {
    /// Create default configuration file
    Init,
    /// Show configuration file path
    Path,
    /// Print the effective configuration as TOML
    Show,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // `config init` and `config path` must work even when the file is broken.
    if let Commands::Config { action } = &cli.command {
        match action {
            ConfigAction::Init => return run_config_init(),
            ConfigAction::Path => {
                println!("{}", xdg::config_path().display());
                return ExitCode::SUCCESS;
            }
            ConfigAction::Show => {}
        }
    }

    let config = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(config.log.level);
    let source = cli.config.clone().unwrap_or_else(xdg::config_path);
    if source.exists() {
        tracing::debug!(?config, "Loaded configuration from {}", source.display());
    } else {
        tracing::debug!("No config file at {}, using defaults", source.display());
    }

    let mut stdout = std::io::stdout().lock();
    let result = match cli.command {
        Commands::List { format } => list::run(format, &mut stdout),
        Commands::Show { id } => show::run(&id, &mut stdout),
        Commands::Build {
            id,
            pretty,
            compact,
            ids,
            id_prefix,
            output,
        } => {
            let opts = resolve_build_options(&config, pretty, compact, ids, id_prefix, output);
            build::run(&id, &opts, &mut stdout)
        }
        Commands::Config { .. } => print_config(&config),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Layers `build` flags over the `[output]` config section.
fn resolve_build_options(
    config: &Config,
    pretty: bool,
    compact: bool,
    ids: Option<IdStrategy>,
    id_prefix: Option<String>,
    output: Option<PathBuf>,
) -> BuildOptions {
    let mut opts = BuildOptions::from_config(&config.output);
    if pretty {
        opts.pretty = true;
    }
    if compact {
        opts.pretty = false;
    }
    if let Some(ids) = ids {
        opts.ids = ids;
    }
    if let Some(prefix) = id_prefix {
        opts.id_prefix = prefix;
    }
    opts.output = output;
    opts
}

fn run_config_init() -> ExitCode {
    match default::create_default_config() {
        Ok(path) => {
            println!("Created configuration at {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Config error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_config(config: &Config) -> Result<(), CommandError> {
    let rendered =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError {
            message: e.to_string(),
        })?;
    print!("{rendered}");
    Ok(())
}
