//! CIGAR operations
//!
//! A CIGAR string is a run of `<length><op>` pairs with no separator, or the
//! literal `*` when no operations are recorded. The op character is decoded
//! into [`CigarOp`] at parse time so an invalid operation can't be represented.

use std::fmt;

use serde::Serialize;

use super::error::ModelError;

/// The nine operations allowed in a SAM CIGAR string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum CigarOp {
    /// Alignment match, sequence match or mismatch (`M`)
    Match,
    /// Insertion to the reference (`I`)
    Insertion,
    /// Deletion from the reference (`D`)
    Deletion,
    /// Skipped region from the reference (`N`)
    Skip,
    /// Soft clipping, clipped bases present in SEQ (`S`)
    SoftClip,
    /// Hard clipping, clipped bases absent from SEQ (`H`)
    HardClip,
    /// Silent deletion from the padded reference (`P`)
    Padding,
    /// Sequence match (`=`)
    SequenceMatch,
    /// Sequence mismatch (`X`)
    SequenceMismatch,
}

impl CigarOp {
    pub const ALL: [CigarOp; 9] = [
        CigarOp::Match,
        CigarOp::Insertion,
        CigarOp::Deletion,
        CigarOp::Skip,
        CigarOp::SoftClip,
        CigarOp::HardClip,
        CigarOp::Padding,
        CigarOp::SequenceMatch,
        CigarOp::SequenceMismatch,
    ];

    /// Decode an operation character
    pub fn from_char(c: char) -> Result<Self, ModelError> {
        match c {
            'M' => Ok(CigarOp::Match),
            'I' => Ok(CigarOp::Insertion),
            'D' => Ok(CigarOp::Deletion),
            'N' => Ok(CigarOp::Skip),
            'S' => Ok(CigarOp::SoftClip),
            'H' => Ok(CigarOp::HardClip),
            'P' => Ok(CigarOp::Padding),
            '=' => Ok(CigarOp::SequenceMatch),
            'X' => Ok(CigarOp::SequenceMismatch),
            other => Err(ModelError::InvalidCigarOp(other)),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            CigarOp::Match => 'M',
            CigarOp::Insertion => 'I',
            CigarOp::Deletion => 'D',
            CigarOp::Skip => 'N',
            CigarOp::SoftClip => 'S',
            CigarOp::HardClip => 'H',
            CigarOp::Padding => 'P',
            CigarOp::SequenceMatch => '=',
            CigarOp::SequenceMismatch => 'X',
        }
    }

    /// Whether the operation advances along the reference
    pub fn consumes_reference(self) -> bool {
        matches!(
            self,
            CigarOp::Match
                | CigarOp::Deletion
                | CigarOp::Skip
                | CigarOp::SequenceMatch
                | CigarOp::SequenceMismatch
        )
    }

    /// Whether the operation consumes bases of SEQ
    pub fn consumes_query(self) -> bool {
        matches!(
            self,
            CigarOp::Match
                | CigarOp::Insertion
                | CigarOp::SoftClip
                | CigarOp::SequenceMatch
                | CigarOp::SequenceMismatch
        )
    }
}

impl TryFrom<char> for CigarOp {
    type Error = ModelError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        CigarOp::from_char(c)
    }
}

impl fmt::Display for CigarOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One `<length><op>` element of a CIGAR string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CigarOperation {
    pub length: u32,
    pub op: CigarOp,
}

impl CigarOperation {
    pub fn new(length: u32, op: CigarOp) -> Self {
        Self { length, op }
    }
}

impl fmt::Display for CigarOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.length, self.op)
    }
}

/// Render operations as a CIGAR string; an empty slice renders as `*`
pub fn cigar_to_string(operations: &[CigarOperation]) -> String {
    if operations.is_empty() {
        return "*".to_string();
    }
    operations.iter().map(|op| op.to_string()).collect()
}

/// Number of reference bases spanned by the operations
pub fn reference_length(operations: &[CigarOperation]) -> u64 {
    operations
        .iter()
        .filter(|op| op.op.consumes_reference())
        .map(|op| u64::from(op.length))
        .sum()
}

/// Number of SEQ bases described by the operations
pub fn query_length(operations: &[CigarOperation]) -> u64 {
    operations
        .iter()
        .filter(|op| op.op.consumes_query())
        .map(|op| u64::from(op.length))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_op_chars_round_trip() {
        for op in CigarOp::ALL {
            assert_eq!(CigarOp::from_char(op.as_char()).unwrap(), op);
        }
    }

    #[test]
    fn test_invalid_op_char() {
        assert_eq!(
            CigarOp::from_char('Q'),
            Err(ModelError::InvalidCigarOp('Q'))
        );
        assert!(CigarOp::try_from('m').is_err());
    }

    #[test]
    fn test_cigar_to_string() {
        let ops = vec![
            CigarOperation::new(10, CigarOp::Match),
            CigarOperation::new(5, CigarOp::Insertion),
            CigarOperation::new(2, CigarOp::Deletion),
        ];
        assert_eq!(cigar_to_string(&ops), "10M5I2D");
        assert_eq!(cigar_to_string(&[]), "*");
    }

    #[test]
    fn test_lengths() {
        // 3S 10M 2I 4D 5N 6= 1X 7H
        let ops = vec![
            CigarOperation::new(3, CigarOp::SoftClip),
            CigarOperation::new(10, CigarOp::Match),
            CigarOperation::new(2, CigarOp::Insertion),
            CigarOperation::new(4, CigarOp::Deletion),
            CigarOperation::new(5, CigarOp::Skip),
            CigarOperation::new(6, CigarOp::SequenceMatch),
            CigarOperation::new(1, CigarOp::SequenceMismatch),
            CigarOperation::new(7, CigarOp::HardClip),
        ];
        assert_eq!(reference_length(&ops), 10 + 4 + 5 + 6 + 1);
        assert_eq!(query_length(&ops), 3 + 10 + 2 + 6 + 1);
    }
}
