use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to read, parse, write or render `config.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("Failed to read configuration file: {path}")]
    ReadError {
        /// File that was read
        path: PathBuf,
        /// I/O cause
        #[source]
        source: io::Error,
    },

    /// TOML syntax or schema error. `line`/`column` are 1-based, 0 if unknown.
    #[error("Invalid configuration at {path}:{line}:{column}: {message}")]
    ParseError {
        /// File containing the error
        path: PathBuf,
        /// Line of the error
        line: usize,
        /// Column of the error
        column: usize,
        /// Parser message
        message: String,
    },

    /// `--config` named a file that does not exist.
    #[error("Configuration file not found: {path}")]
    NotFound {
        /// Requested path
        path: PathBuf,
    },

    /// `config init` found a file already in place.
    #[error("Configuration file already exists: {path}")]
    AlreadyExists {
        /// Existing file
        path: PathBuf,
    },

    /// The file or its directory could not be written.
    #[error("Failed to write configuration file: {path}")]
    WriteError {
        /// Target file
        path: PathBuf,
        /// I/O cause
        #[source]
        source: io::Error,
    },

    /// `config show` could not render the effective config.
    #[error("Failed to serialize configuration: {message}")]
    SerializeError {
        /// Serializer message
        message: String,
    },
}

impl ConfigError {
    /// Classifies a read failure; a missing file becomes [`ConfigError::NotFound`].
    pub fn read(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound { path }
        } else {
            ConfigError::ReadError { path, source }
        }
    }

    /// Wraps a write failure for `path`.
    pub fn write(path: &Path, source: io::Error) -> Self {
        ConfigError::WriteError {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_maps_missing_file_to_not_found() {
        let path = Path::new("/missing/config.toml");
        let err = ConfigError::read(path, io::Error::from(io::ErrorKind::NotFound));
        match err {
            ConfigError::NotFound { path: p } => assert_eq!(p, path),
            other => panic!("expected NotFound, got: {other:?}"),
        }
    }

    #[test]
    fn read_keeps_other_io_errors_as_source() {
        let err = ConfigError::read(
            Path::new("/secret/config.toml"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, ConfigError::ReadError { .. }));
        assert!(err.to_string().contains("/secret/config.toml"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn parse_error_points_at_line_and_column() {
        let err = ConfigError::ParseError {
            path: PathBuf::from("config.toml"),
            line: 3,
            column: 8,
            message: "invalid type: string, expected a boolean".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration at config.toml:3:8: invalid type: string, expected a boolean"
        );
    }
}
