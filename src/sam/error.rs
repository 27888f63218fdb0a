//! Error types for samtext

use std::path::PathBuf;

use thiserror::Error;

use crate::sam::parser::ParseError;

/// Result type alias for samtext operations
pub type Result<T> = std::result::Result<T, SamError>;

/// Errors surfaced by file handling, processing and configuration
#[derive(Debug, Error)]
pub enum SamError {
    /// A file could not be opened, read or written
    #[error("I/O error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The text does not match the SAM grammar
    #[error("parse error at {0}")]
    Parse(#[from] ParseError),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// JSON or YAML rendering failed
    #[error("serialization error: {0}")]
    Serialize(String),

    #[error("unknown output format `{0}`")]
    UnknownFormat(String),

    /// A sample document is not in the catalog
    #[error("sample error: {0}")]
    Sample(String),
}

impl SamError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SamError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_message_names_path() {
        let err = SamError::io(
            "reads.sam",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(err.to_string(), "I/O error on reads.sam: no such file");
    }

    #[test]
    fn test_parse_error_converts() {
        let parse = ParseError::new("r1\tx", 3, "invalid FLAG: expected digit, found `x`");
        let err: SamError = parse.into();
        assert_eq!(
            err.to_string(),
            "parse error at line 1, column 4: invalid FLAG: expected digit, found `x`"
        );
    }
}
