//! Email Presets CLI library
//!
//! Command implementations, configuration and logging setup behind the
//! `email-presets` binary. Commands write to a caller-supplied writer and
//! return [`commands::CommandError`]; the binary owns process exit codes.

/// Subcommand implementations (`list`, `show`, `build`).
pub mod commands;

/// Configuration loading, defaults and XDG path resolution.
pub mod config;

/// Tracing subscriber setup.
pub mod logging;
