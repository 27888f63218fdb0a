//! Error types for data-model construction

use thiserror::Error;

/// Errors raised by the validating constructors of the data model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Character is not one of `MIDNSHP=X`
    #[error("invalid CIGAR operation `{0}` (expected one of MIDNSHP=X)")]
    InvalidCigarOp(char),
    /// Character is not one of `AifZHB`
    #[error("invalid optional tag type `{0}` (expected one of AifZHB)")]
    InvalidTagType(char),
    /// Tag names are exactly two characters and contain no colon or tab
    #[error("invalid tag name `{0}` (expected exactly two characters, no colon or tab)")]
    InvalidTagName(String),
}
