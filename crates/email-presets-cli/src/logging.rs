//! Logging initialization for the email-presets CLI.
//!
//! Configures the `tracing` subscriber with level filtering via the
//! `EMAIL_PRESETS_LOG` environment variable, falling back to the config file's
//! `[log] level`. Records emitted by the preset library through the `log`
//! facade are forwarded to the same subscriber.
//!
//! A bare word in `EMAIL_PRESETS_LOG` must be a level name. `EnvFilter` would
//! read `loud` as a target and silence everything else, so such a value is
//! rejected with a warning and the config level is used instead.
//!
//! # Usage
//!
//! ```bash
//! # Debug level
//! EMAIL_PRESETS_LOG=debug email-presets build newsletter
//!
//! # Module-specific filtering
//! EMAIL_PRESETS_LOG=email_presets=debug,warn email-presets list
//! ```

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::schema::LogLevel;

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "EMAIL_PRESETS_LOG";

const LEVEL_NAMES: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Parses `EMAIL_PRESETS_LOG` directives, or `None` if the value is unusable.
fn env_directives(value: &str) -> Option<EnvFilter> {
    let directives: Vec<&str> = value
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .collect();
    if directives.is_empty() {
        return None;
    }
    let bare_words_are_levels = directives.iter().all(|d| {
        d.contains('=') || d.contains('[') || LEVEL_NAMES.contains(&d.to_ascii_lowercase().as_str())
    });
    if !bare_words_are_levels {
        return None;
    }
    EnvFilter::try_new(value).ok()
}

/// Builds the filter from an `EMAIL_PRESETS_LOG` value, or `fallback` when the
/// value is absent or unusable.
pub fn filter(env_value: Option<&str>, fallback: LogLevel) -> EnvFilter {
    env_value
        .and_then(env_directives)
        .unwrap_or_else(|| EnvFilter::new(fallback.as_directive()))
}

/// Initialize the tracing subscriber.
///
/// Output goes to stderr so JSON on stdout stays clean. A second call is a
/// no-op.
pub fn init(fallback: LogLevel) {
    let env_value = std::env::var(LOG_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty());

    let _ = fmt()
        .with_env_filter(filter(env_value.as_deref(), fallback))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    if let Some(value) = env_value.filter(|v| env_directives(v).is_none()) {
        tracing::warn!(
            "Ignoring invalid {LOG_ENV}={value:?}, using level {}",
            fallback.as_directive()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    fn max_level(env_value: Option<&str>, fallback: LogLevel) -> Option<LevelFilter> {
        filter(env_value, fallback).max_level_hint()
    }

    #[test]
    fn unset_env_uses_config_level() {
        assert_eq!(max_level(None, LogLevel::Debug), Some(LevelFilter::DEBUG));
        assert_eq!(max_level(None, LogLevel::Warn), Some(LevelFilter::WARN));
    }

    #[test]
    fn env_level_overrides_config_level() {
        assert_eq!(
            max_level(Some("trace"), LogLevel::Error),
            Some(LevelFilter::TRACE)
        );
        assert_eq!(max_level(Some("DEBUG"), LogLevel::Warn), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn env_module_directive_is_accepted() {
        assert!(env_directives("email_presets=debug,warn").is_some());
        assert_eq!(
            max_level(Some("email_presets=trace,warn"), LogLevel::Error),
            Some(LevelFilter::TRACE)
        );
    }

    #[test]
    fn unknown_bare_word_falls_back_to_config_level() {
        assert!(env_directives("loud").is_none());
        assert_eq!(max_level(Some("loud"), LogLevel::Info), Some(LevelFilter::INFO));
    }

    #[test]
    fn unparseable_directive_falls_back_to_config_level() {
        assert!(env_directives("email_presets=shouty").is_none());
        assert_eq!(
            max_level(Some("email_presets=shouty"), LogLevel::Warn),
            Some(LevelFilter::WARN)
        );
    }

    #[test]
    fn blank_env_value_is_unusable() {
        assert!(env_directives("").is_none());
        assert!(env_directives(" , ").is_none());
    }
}
