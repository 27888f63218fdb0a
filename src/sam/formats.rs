//! Output formats for parsed SAM documents
//!
//! - [`sam_text`]: SAM text, the inverse of the parser
//! - [`treeviz`]: a one-line-per-node outline for inspecting a document

pub mod sam_text;
pub mod treeviz;

pub use sam_text::{format_alignment, format_header, format_sam_file, write_sam};
pub use treeviz::to_treeviz_str;
