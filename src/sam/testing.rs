//! Testing utilities for parsed SAM documents
//!
//! Tests should take their SAM text from the sample documents in
//! `docs/samples` (through
//! [`SamSources`](crate::sam::processor::sam_sources::SamSources)) and check
//! results with the fluent assertions below rather than field-by-field
//! `assert_eq!` chains:
//!
//! ```rust-example
//! let file = parse_sam_file(&SamSources::get_string("020-paired-reads.sam")?)?;
//!
//! assert_sam_file(&file)
//!     .alignment_count(4)
//!     .header(|h| {
//!         h.sorting_order(SortingOrder::QueryName).sq_count(1);
//!     })
//!     .alignment(1, |a| {
//!         a.qname("pair1").flag(147).cigar("4M2I2M").tlen(-208).tag(0, "NM", 'i', "2");
//!     });
//! ```
//!
//! Each assertion panics with the path of the failing element
//! (`alignments[1].cigar`, `header.sq[0]`, ...).

mod assertions;
mod matchers;

pub use assertions::{
    assert_alignment, assert_header, assert_sam_file, AlignmentAssertion, HeaderAssertion,
    SamFileAssertion,
};
pub use matchers::assert_text;
