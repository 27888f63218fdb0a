//! FLAG bit masks (SAM v1.6 §1.4)

use serde::Serialize;

use super::alignment::Alignment;

/// A single bit of the FLAG field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SamFlag {
    PairedRead,
    ProperPair,
    Unmapped,
    MateUnmapped,
    ReverseStrand,
    MateReverseStrand,
    FirstInPair,
    SecondInPair,
    SecondaryAlignment,
    QcFail,
    Duplicate,
    SupplementaryAlignment,
}

impl SamFlag {
    /// All flags in bit order
    pub const ALL: [SamFlag; 12] = [
        SamFlag::PairedRead,
        SamFlag::ProperPair,
        SamFlag::Unmapped,
        SamFlag::MateUnmapped,
        SamFlag::ReverseStrand,
        SamFlag::MateReverseStrand,
        SamFlag::FirstInPair,
        SamFlag::SecondInPair,
        SamFlag::SecondaryAlignment,
        SamFlag::QcFail,
        SamFlag::Duplicate,
        SamFlag::SupplementaryAlignment,
    ];

    pub fn mask(self) -> u16 {
        match self {
            SamFlag::PairedRead => 0x1,
            SamFlag::ProperPair => 0x2,
            SamFlag::Unmapped => 0x4,
            SamFlag::MateUnmapped => 0x8,
            SamFlag::ReverseStrand => 0x10,
            SamFlag::MateReverseStrand => 0x20,
            SamFlag::FirstInPair => 0x40,
            SamFlag::SecondInPair => 0x80,
            SamFlag::SecondaryAlignment => 0x100,
            SamFlag::QcFail => 0x200,
            SamFlag::Duplicate => 0x400,
            SamFlag::SupplementaryAlignment => 0x800,
        }
    }

    /// Bit description as worded in SAM v1.6 §1.4
    pub fn description(self) -> &'static str {
        match self {
            SamFlag::PairedRead => "template having multiple segments in sequencing",
            SamFlag::ProperPair => "each segment properly aligned according to the aligner",
            SamFlag::Unmapped => "segment unmapped",
            SamFlag::MateUnmapped => "next segment in the template unmapped",
            SamFlag::ReverseStrand => "SEQ being reverse complemented",
            SamFlag::MateReverseStrand => "SEQ of the next segment in the template being reverse complemented",
            SamFlag::FirstInPair => "the first segment in the template",
            SamFlag::SecondInPair => "the last segment in the template",
            SamFlag::SecondaryAlignment => "secondary alignment",
            SamFlag::QcFail => "not passing filters, such as platform/vendor quality controls",
            SamFlag::Duplicate => "PCR or optical duplicate",
            SamFlag::SupplementaryAlignment => "supplementary alignment",
        }
    }

    pub fn is_set(self, flag: u16) -> bool {
        flag & self.mask() != 0
    }
}

/// Test one bit of an alignment's FLAG
pub fn has_flag(alignment: &Alignment, flag: SamFlag) -> bool {
    flag.is_set(alignment.flag)
}

/// Flags set in a raw FLAG value, in bit order
pub fn flags_set(flag: u16) -> Vec<SamFlag> {
    SamFlag::ALL
        .into_iter()
        .filter(|f| f.is_set(flag))
        .collect()
}
