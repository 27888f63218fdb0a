//! File processing API for SAM text
//!
//! Turns SAM text into one of several output formats: the re-serialized SAM
//! text, JSON or YAML dumps of the data model, a statistics summary, a tree
//! outline, or the raw token stream.
//!
//! # Sample Sources
//!
//! The [`sam_sources`] module gives tests access to the curated sample
//! documents in `docs/samples`. Tests should load SAM text from there rather
//! than spelling out documents inline.
//!
//! ```rust-example
//! use samtext::sam::processor::sam_sources::SamSources;
//!
//! let content = SamSources::get_string("020-paired-reads.sam")?;
//! let file = SamSources::get_sam_file("030-full-header.sam")?;
//! let summary = SamSources::get_processed("020-paired-reads.sam", "summary")?;
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::sam::error::{Result, SamError};
use crate::sam::formats::{format_sam_file, to_treeviz_str};
use crate::sam::io::read_to_string;
use crate::sam::lexer::{tokenize, Token};
use crate::sam::parser::parse_sam_file;
use crate::sam::stats::summarize;

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Re-serialized SAM text
    Sam,
    Json,
    Yaml,
    /// Counts from [`crate::sam::stats::summarize`]
    Summary,
    Treeviz,
    /// One token per item, line breaks kept
    Tokens,
    TokensJson,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 7] = [
        OutputFormat::Sam,
        OutputFormat::Json,
        OutputFormat::Yaml,
        OutputFormat::Summary,
        OutputFormat::Treeviz,
        OutputFormat::Tokens,
        OutputFormat::TokensJson,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Sam => "sam",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Summary => "summary",
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Tokens => "tokens",
            OutputFormat::TokensJson => "tokens-json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = SamError;

    fn from_str(s: &str) -> Result<Self> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| SamError::UnknownFormat(s.to_string()))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<&'static str> {
    OutputFormat::ALL.iter().map(|f| f.as_str()).collect()
}

/// Format tokens according to the specified format
fn format_tokens(tokens: &[Token], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::TokensJson => {
            serde_json::to_string_pretty(tokens).map_err(|e| SamError::Serialize(e.to_string()))
        }
        _ => {
            let mut result = String::new();
            for token in tokens {
                result.push_str(&token.to_string());
                if token.is_newline() {
                    result.push('\n');
                }
            }
            Ok(result)
        }
    }
}

/// Process SAM text according to the given format
pub fn process_source(source: &str, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Tokens | OutputFormat::TokensJson => {
            format_tokens(&tokenize(source), format)
        }
        OutputFormat::Sam => Ok(format_sam_file(&parse_sam_file(source)?)),
        OutputFormat::Json => serde_json::to_string_pretty(&parse_sam_file(source)?)
            .map_err(|e| SamError::Serialize(e.to_string())),
        OutputFormat::Yaml => serde_yaml::to_string(&parse_sam_file(source)?)
            .map_err(|e| SamError::Serialize(e.to_string())),
        OutputFormat::Summary => Ok(summarize(&parse_sam_file(source)?).to_string()),
        OutputFormat::Treeviz => Ok(to_treeviz_str(&parse_sam_file(source)?)),
    }
}

/// Process a SAM file according to the given format
pub fn process_file(path: impl AsRef<Path>, format: OutputFormat) -> Result<String> {
    let content = read_to_string(path)?;
    process_source(&content, format)
}

/// Sample sources module for accessing the curated SAM documents
pub mod sam_sources {
    use super::*;
    use crate::sam::ast::SamFile;

    /// Available sample files (canonical sources)
    pub const AVAILABLE_SAMPLES: &[&str] = &[
        "000-minimal-alignment.sam",
        "010-header-only.sam",
        "020-paired-reads.sam",
        "030-full-header.sam",
        "040-crlf-line-endings.sam",
    ];

    /// Main interface for accessing SAM sample files
    pub struct SamSources;

    impl SamSources {
        /// Get the path to the samples directory
        pub fn samples_dir() -> &'static Path {
            Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/docs/samples"))
        }

        /// Validate that a sample file exists and is available
        fn validate_sample(filename: &str) -> Result<()> {
            if !AVAILABLE_SAMPLES.contains(&filename) {
                return Err(SamError::Sample(format!(
                    "sample '{}' is not available; available samples: {:?}",
                    filename, AVAILABLE_SAMPLES
                )));
            }
            Ok(())
        }

        /// Get sample content as raw string
        pub fn get_string(filename: &str) -> Result<String> {
            Self::validate_sample(filename)?;
            read_to_string(Self::samples_dir().join(filename))
        }

        /// Get a sample parsed into a [`SamFile`]
        pub fn get_sam_file(filename: &str) -> Result<SamFile> {
            let content = Self::get_string(filename)?;
            Ok(parse_sam_file(&content)?)
        }

        /// Get sample content processed with the specified format
        pub fn get_processed(filename: &str, format: &str) -> Result<String> {
            let format = format.parse::<OutputFormat>()?;
            process_source(&Self::get_string(filename)?, format)
        }

        /// List all available sample files
        pub fn list_samples() -> Vec<&'static str> {
            AVAILABLE_SAMPLES.to_vec()
        }
    }
}
