//! Where `config.toml` lives.
//!
//! `$XDG_CONFIG_HOME/email-presets` wins on every platform. Otherwise Linux
//! uses `~/.config/email-presets` and macOS uses the `dirs` config directory
//! (`~/Library/Application Support/email-presets`).

use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "email-presets";
const CONFIG_FILE: &str = "config.toml";

fn base_dir() -> PathBuf {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(xdg);
    }

    #[cfg(target_os = "macos")]
    let base = dirs::config_dir();
    #[cfg(not(target_os = "macos"))]
    let base = dirs::home_dir().map(|home| home.join(".config"));

    base.unwrap_or_else(|| {
        tracing::warn!("Could not determine home directory, using ./.config");
        PathBuf::from(".config")
    })
}

/// Directory holding `config.toml`.
pub fn config_dir() -> PathBuf {
    base_dir().join(APP_DIR)
}

/// Full path of `config.toml`.
pub fn config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

/// Creates [`config_dir`] (owner-only on unix) and returns it.
pub fn ensure_config_dir() -> std::io::Result<PathBuf> {
    let dir = config_dir();
    fs::create_dir_all(&dir)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&dir, fs::Permissions::from_mode(0o700))?;
    }
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Runs `f` with `XDG_CONFIG_HOME` set to `value` (or removed), then restores it.
    fn with_xdg<F: FnOnce()>(value: Option<&std::ffi::OsStr>, f: F) {
        let saved = std::env::var_os("XDG_CONFIG_HOME");
        match value {
            Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
        f();
        match saved {
            Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }

    #[test]
    #[serial(xdg)]
    fn xdg_override_applies() {
        with_xdg(Some("/custom/config".as_ref()), || {
            assert_eq!(
                config_path(),
                PathBuf::from("/custom/config/email-presets/config.toml")
            );
        });
    }

    #[test]
    #[serial(xdg)]
    fn empty_xdg_value_is_ignored() {
        with_xdg(Some("".as_ref()), || {
            assert_ne!(config_path(), PathBuf::from("email-presets/config.toml"));
        });
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    #[serial(xdg)]
    fn linux_default_is_dot_config() {
        with_xdg(None, || {
            let home = dirs::home_dir().expect("could not determine home directory");
            assert_eq!(config_dir(), home.join(".config/email-presets"));
        });
    }

    #[test]
    #[serial(xdg)]
    fn ensure_config_dir_creates_private_dir() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        with_xdg(Some(tmp.path().as_os_str()), || {
            let dir = ensure_config_dir().expect("ensure_config_dir failed");
            assert_eq!(dir, tmp.path().join("email-presets"));
            assert!(dir.is_dir());

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                let mode = fs::metadata(&dir).expect("metadata").permissions().mode();
                assert_eq!(mode & 0o777, 0o700);
            }
        });
    }
}
