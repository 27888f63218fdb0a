//! # samtext
//!
//! A grammar-driven parser and serializer for the SAM (Sequence
//! Alignment/Map) text format.
//!
//! ```rust-example
//! use samtext::{format_sam_file, parse_sam_file};
//!
//! let file = parse_sam_file("@HD\tVN:1.6\nr1\t4\t*\t0\t0\t*\t*\t0\t0\tACGT\t****\n")?;
//! assert_eq!(file.alignments[0].qname, "r1");
//! assert_eq!(format_sam_file(&file), "@HD\tVN:1.6\nr1\t4\t*\t0\t0\t*\t*\t0\t0\tACGT\t****\n");
//! ```
//!
//! ## Testing
//!
//! See the [testing module](sam::testing) for the fluent assertions and the
//! sample documents tests are expected to use.

pub mod sam;

pub use sam::ast::{
    has_flag, Alignment, CigarOp, CigarOperation, Header, OptionalTag, SamFile, SamFlag,
    SortingOrder, TagType,
};
pub use sam::error::{Result, SamError};
pub use sam::formats::{format_alignment, format_header, format_sam_file, write_sam};
pub use sam::parser::{parse_alignment, parse_header, parse_sam_file, ParseError};
