use serde::Serialize;

use super::alignment::Alignment;
use super::header::Header;

/// A parsed SAM document: header section followed by alignment records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SamFile {
    pub header: Header,
    pub alignments: Vec<Alignment>,
}

impl SamFile {
    pub fn new(header: Header, alignments: Vec<Alignment>) -> Self {
        Self { header, alignments }
    }
}
