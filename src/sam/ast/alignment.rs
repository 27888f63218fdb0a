//! Alignment records

use serde::Serialize;

use super::cigar::{self, CigarOperation};
use super::flags::SamFlag;
use super::tag::OptionalTag;

/// One alignment line: the 11 mandatory fields followed by optional tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alignment {
    pub qname: String,
    pub flag: u16,
    pub rname: String,
    /// 1-based leftmost position, 0 when unplaced
    pub pos: u32,
    pub mapq: u8,
    pub cigar: Vec<CigarOperation>,
    pub rnext: String,
    pub pnext: i32,
    pub tlen: i32,
    pub seq: String,
    pub qual: String,
    pub tags: Vec<OptionalTag>,
}

impl Alignment {
    pub fn has_flag(&self, flag: SamFlag) -> bool {
        flag.is_set(self.flag)
    }

    pub fn is_mapped(&self) -> bool {
        !self.has_flag(SamFlag::Unmapped)
    }

    /// First tag with the given name
    pub fn tag(&self, name: &str) -> Option<&OptionalTag> {
        self.tags.iter().find(|t| t.tag() == name)
    }

    /// CIGAR field as it appears in SAM text
    pub fn cigar_string(&self) -> String {
        cigar::cigar_to_string(&self.cigar)
    }

    /// 1-based inclusive end on the reference, if the record is placed with a CIGAR
    pub fn reference_end(&self) -> Option<u64> {
        let span = cigar::reference_length(&self.cigar);
        if self.pos == 0 || span == 0 {
            return None;
        }
        Some(u64::from(self.pos) + span - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sam::ast::{CigarOp, TagType};

    fn sample() -> Alignment {
        Alignment {
            qname: "r1".to_string(),
            flag: 0x11,
            rname: "chr1".to_string(),
            pos: 100,
            mapq: 60,
            cigar: vec![
                CigarOperation::new(2, CigarOp::SoftClip),
                CigarOperation::new(8, CigarOp::Match),
            ],
            rnext: "=".to_string(),
            pnext: 200,
            tlen: -50,
            seq: "ACGTACGTAC".to_string(),
            qual: "IIIIIIIIII".to_string(),
            tags: vec![
                OptionalTag::new("NM", TagType::Integer, "0").unwrap(),
                OptionalTag::new("RG", TagType::String, "grp1").unwrap(),
            ],
        }
    }

    #[test]
    fn test_flag_queries() {
        let aln = sample();
        assert!(aln.has_flag(SamFlag::PairedRead));
        assert!(aln.has_flag(SamFlag::ReverseStrand));
        assert!(!aln.has_flag(SamFlag::ProperPair));
        assert!(aln.is_mapped());
    }

    #[test]
    fn test_tag_lookup() {
        let aln = sample();
        assert_eq!(aln.tag("RG").map(|t| t.value()), Some("grp1"));
        assert!(aln.tag("XS").is_none());
    }

    #[test]
    fn test_reference_end() {
        let mut aln = sample();
        assert_eq!(aln.reference_end(), Some(107));
        aln.pos = 0;
        assert_eq!(aln.reference_end(), None);
        assert_eq!(aln.cigar_string(), "2S8M");
    }
}
