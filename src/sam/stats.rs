//! Summary statistics over a parsed document

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::sam::ast::{flags_set, SamFile, SamFlag};

/// Counts gathered in one pass over the alignments
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SamSummary {
    pub total: usize,
    pub mapped: usize,
    pub unmapped: usize,
    pub paired: usize,
    /// Records with each FLAG bit set, in bit order; bits never seen are left out
    pub flag_counts: Vec<(SamFlag, usize)>,
    /// Records per RNAME in first-seen order (`*` for unplaced records)
    pub per_reference: IndexMap<String, usize>,
    /// Mean MAPQ of mapped records
    pub mean_mapq: Option<f64>,
    pub reference_sequences: usize,
    pub read_groups: usize,
    pub programs: usize,
    pub comments: usize,
}

pub fn summarize(file: &SamFile) -> SamSummary {
    let mut summary = SamSummary {
        total: file.alignments.len(),
        reference_sequences: file.header.sq.len(),
        read_groups: file.header.rg.len(),
        programs: file.header.pg.len(),
        comments: file.header.co.len(),
        ..SamSummary::default()
    };

    let mut bit_counts = [0usize; SamFlag::ALL.len()];
    let mut mapq_total = 0u64;

    for alignment in &file.alignments {
        if alignment.is_mapped() {
            summary.mapped += 1;
            mapq_total += u64::from(alignment.mapq);
        } else {
            summary.unmapped += 1;
        }
        if alignment.has_flag(SamFlag::PairedRead) {
            summary.paired += 1;
        }
        for (count, flag) in bit_counts.iter_mut().zip(SamFlag::ALL) {
            if flag.is_set(alignment.flag) {
                *count += 1;
            }
        }
        *summary
            .per_reference
            .entry(alignment.rname.clone())
            .or_insert(0) += 1;
    }

    summary.flag_counts = SamFlag::ALL
        .into_iter()
        .zip(bit_counts)
        .filter(|(_, count)| *count > 0)
        .collect();
    if summary.mapped > 0 {
        summary.mean_mapq = Some(mapq_total as f64 / summary.mapped as f64);
    }
    summary
}

/// Descriptions of the bits set in a FLAG value, in bit order
pub fn describe_flags(flag: u16) -> Vec<&'static str> {
    flags_set(flag).into_iter().map(SamFlag::description).collect()
}

impl fmt::Display for SamSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "header: {} @SQ, {} @RG, {} @PG, {} @CO",
            self.reference_sequences, self.read_groups, self.programs, self.comments
        )?;
        writeln!(
            f,
            "alignments: {} total, {} mapped, {} unmapped, {} paired",
            self.total, self.mapped, self.unmapped, self.paired
        )?;
        match self.mean_mapq {
            Some(mean) => writeln!(f, "mean MAPQ (mapped): {:.2}", mean)?,
            None => writeln!(f, "mean MAPQ (mapped): n/a")?,
        }
        for (flag, count) in &self.flag_counts {
            writeln!(f, "  0x{:03x} {:?}: {}", flag.mask(), flag, count)?;
        }
        for (reference, count) in &self.per_reference {
            writeln!(f, "  {}: {}", reference, count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sam::parser::parse_sam_file;

    const SOURCE: &str = "@SQ\tSN:chr1\tLN:100\n\
        a\t99\tchr1\t10\t60\t4M\t=\t20\t14\tACGT\t*\n\
        a\t147\tchr1\t20\t20\t4M\t=\t10\t-14\tACGT\t*\n\
        b\t4\t*\t0\t0\t*\t*\t0\t0\tACGT\t*\n";

    #[test]
    fn test_summarize() {
        let summary = summarize(&parse_sam_file(SOURCE).unwrap());
        assert_eq!(summary.total, 3);
        assert_eq!(summary.mapped, 2);
        assert_eq!(summary.unmapped, 1);
        assert_eq!(summary.paired, 2);
        assert_eq!(summary.mean_mapq, Some(40.0));
        assert_eq!(summary.reference_sequences, 1);
        assert_eq!(
            summary.per_reference.iter().collect::<Vec<_>>(),
            vec![(&"chr1".to_string(), &2), (&"*".to_string(), &1)]
        );
        assert_eq!(
            summary.flag_counts,
            vec![
                (SamFlag::PairedRead, 2),
                (SamFlag::ProperPair, 2),
                (SamFlag::Unmapped, 1),
                (SamFlag::ReverseStrand, 1),
                (SamFlag::MateReverseStrand, 1),
                (SamFlag::FirstInPair, 1),
                (SamFlag::SecondInPair, 1),
            ]
        );
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&SamFile::default());
        assert_eq!(summary.total, 0);
        assert_eq!(summary.mean_mapq, None);
        assert!(summary.flag_counts.is_empty());
    }

    #[test]
    fn test_describe_flags() {
        assert_eq!(
            describe_flags(0x11),
            vec![
                "template having multiple segments in sequencing",
                "SEQ being reverse complemented"
            ]
        );
        assert!(describe_flags(0).is_empty());
    }

    #[test]
    fn test_display() {
        let text = summarize(&parse_sam_file(SOURCE).unwrap()).to_string();
        assert!(text.contains("alignments: 3 total, 2 mapped, 1 unmapped, 2 paired"));
        assert!(text.contains("mean MAPQ (mapped): 40.00"));
        assert!(text.contains("0x004 Unmapped: 1"));
    }
}
