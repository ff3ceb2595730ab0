//! Default configuration template and file creation.
//!
//! Provides a commented TOML template that matches `Config::default()` and a
//! function to write it to the XDG config path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::error::ConfigError;
use crate::config::xdg;

/// A commented TOML template with all default values.
///
/// Every value here must match `Config::default()` from `schema.rs`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Email Presets Configuration
#
# All values shown below are the built-in defaults.
#
# Location: $XDG_CONFIG_HOME/email-presets/config.toml

# ==============================================================================
# Output
# ==============================================================================

[output]

# Pretty-print the JSON written by `email-presets build`.
# Override per run with --pretty or --compact.
pretty = true

# How entity ids are allocated.
# Options: "random", "sequential"
#   random     - UUID v4 ids, different on every build (what the editor expects)
#   sequential - "<id_prefix>-1", "<id_prefix>-2", ... identical on every build
# Override per run with --ids.
ids = "random"

# Prefix for sequential ids.
id_prefix = "preset"

# ==============================================================================
# Logging
# ==============================================================================

[log]

# Logging verbosity, used when EMAIL_PRESETS_LOG is unset.
# Options: "error", "warn", "info", "debug", "trace"
level = "warn"
"#;

/// Creates the default config file at the XDG path.
///
/// Returns `ConfigError::AlreadyExists` rather than overwriting an existing
/// file. Returns the path written.
pub fn create_default_config() -> Result<PathBuf, ConfigError> {
    let path = xdg::config_path();

    if path.exists() {
        return Err(ConfigError::AlreadyExists { path });
    }

    write_default_config(&path)?;
    tracing::info!("Created default configuration at {}", path.display());
    Ok(path)
}

/// Writes the default template to `path`, creating parent dirs and setting 0600 permissions.
fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    xdg::ensure_config_dir().map_err(|e| ConfigError::write(path, e))?;
    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(|e| ConfigError::write(path, e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .map_err(|e| ConfigError::write(path, e))?;
    }

    Ok(())
}
