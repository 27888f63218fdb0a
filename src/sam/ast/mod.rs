//! Data model for parsed SAM documents
//!
//! Plain value types produced by the parser and consumed by the formatter:
//!
//! - [`SamFile`]: header plus ordered alignment records
//! - [`Header`]: `@HD`, `@SQ`, `@RG`, `@PG`, `@CO` and user-defined lines
//! - [`Alignment`]: the 11 mandatory fields and the optional tags
//! - [`CigarOperation`] / [`OptionalTag`]: decoded field contents
//!
//! Behaviour is limited to small derived queries (flag bits, sorting order,
//! reference lengths).

pub mod alignment;
pub mod cigar;
pub mod error;
pub mod flags;
pub mod header;
pub mod position;
pub mod sam_file;
pub mod span;
pub mod tag;

pub use alignment::Alignment;
pub use cigar::{cigar_to_string, CigarOp, CigarOperation};
pub use error::ModelError;
pub use flags::{flags_set, has_flag, SamFlag};
pub use header::{Header, HeaderRecord, SortingOrder};
pub use position::SourceLocation;
pub use sam_file::SamFile;
pub use span::Position;
pub use tag::{OptionalTag, TagType};
