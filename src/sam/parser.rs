//! Parser module for SAM text
//!
//! Parsing runs in two levels. The line grammar works on the token stream
//! produced by [`crate::sam::lexer`]: one rule per header line type, one for
//! alignment lines, and the document sequence that ties them together. The
//! contents of individual fields (integers, CIGAR strings, `TAG:VALUE` pairs,
//! optional tags) are decoded by small character grammars in [`fields`], and
//! their failures are reported at the byte where they occur.
//!
//! ## Testing
//!
//! Parser tests use the sample documents in `docs/samples` through
//! [`SamSources`](crate::sam::processor::sam_sources::SamSources) and verify
//! results with the fluent assertions in `crate::sam::testing`.

pub mod alignment;
pub mod api;
pub mod combinators;
pub mod document;
pub mod error;
pub mod fields;
pub mod header;

pub use api::{parse_alignment, parse_header, parse_sam_file};
pub use error::ParseError;
pub use fields::FieldError;
