//! Fluent assertion API for parsed SAM documents

use super::matchers::assert_text;
use crate::sam::ast::{
    cigar_to_string, flags_set, Alignment, Header, HeaderRecord, SamFile, SamFlag, SortingOrder,
};

// ============================================================================
// Entry Points
// ============================================================================

/// Create an assertion builder for a whole document
pub fn assert_sam_file(file: &SamFile) -> SamFileAssertion<'_> {
    SamFileAssertion { file }
}

/// Create an assertion builder for a single alignment
pub fn assert_alignment(alignment: &Alignment) -> AlignmentAssertion<'_> {
    AlignmentAssertion {
        alignment,
        context: "alignment".to_string(),
    }
}

/// Create an assertion builder for a header section
pub fn assert_header(header: &Header) -> HeaderAssertion<'_> {
    HeaderAssertion {
        header,
        context: "header".to_string(),
    }
}

// ============================================================================
// Document Assertions
// ============================================================================

pub struct SamFileAssertion<'a> {
    file: &'a SamFile,
}

impl<'a> SamFileAssertion<'a> {
    pub fn alignment_count(self, expected: usize) -> Self {
        let actual = self.file.alignments.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} alignments, found {}: [{}]",
            expected,
            actual,
            self.file
                .alignments
                .iter()
                .map(|a| a.qname.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        self
    }

    /// Assert on a specific alignment by index
    pub fn alignment<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(AlignmentAssertion<'a>),
    {
        assert!(
            index < self.file.alignments.len(),
            "Alignment index {} out of bounds (document has {} alignments)",
            index,
            self.file.alignments.len()
        );
        assertion(AlignmentAssertion {
            alignment: &self.file.alignments[index],
            context: format!("alignments[{}]", index),
        });
        self
    }

    pub fn header<F>(self, assertion: F) -> Self
    where
        F: FnOnce(HeaderAssertion<'a>),
    {
        assertion(HeaderAssertion {
            header: &self.file.header,
            context: "header".to_string(),
        });
        self
    }

    pub fn header_is_empty(self) -> Self {
        assert!(
            self.file.header.is_empty(),
            "Expected an empty header, found {:?}",
            self.file.header
        );
        self
    }
}

// ============================================================================
// Alignment Assertions
// ============================================================================

pub struct AlignmentAssertion<'a> {
    alignment: &'a Alignment,
    context: String,
}

impl<'a> AlignmentAssertion<'a> {
    fn field(&self, name: &str) -> String {
        format!("{}.{}", self.context, name)
    }

    pub fn qname(self, expected: &str) -> Self {
        assert_text(&self.alignment.qname, expected, &self.field("qname"));
        self
    }

    pub fn flag(self, expected: u16) -> Self {
        assert_eq!(
            self.alignment.flag,
            expected,
            "{}: expected {}, got {} ({:?})",
            self.field("flag"),
            expected,
            self.alignment.flag,
            flags_set(self.alignment.flag)
        );
        self
    }

    pub fn has_flag(self, flag: SamFlag) -> Self {
        assert!(
            self.alignment.has_flag(flag),
            "{}: expected {:?} to be set in {}",
            self.field("flag"),
            flag,
            self.alignment.flag
        );
        self
    }

    pub fn lacks_flag(self, flag: SamFlag) -> Self {
        assert!(
            !self.alignment.has_flag(flag),
            "{}: expected {:?} to be clear in {}",
            self.field("flag"),
            flag,
            self.alignment.flag
        );
        self
    }

    pub fn rname(self, expected: &str) -> Self {
        assert_text(&self.alignment.rname, expected, &self.field("rname"));
        self
    }

    pub fn pos(self, expected: u32) -> Self {
        assert_eq!(self.alignment.pos, expected, "{}", self.field("pos"));
        self
    }

    pub fn mapq(self, expected: u8) -> Self {
        assert_eq!(self.alignment.mapq, expected, "{}", self.field("mapq"));
        self
    }

    /// Compare the CIGAR in its text form (`*` when empty)
    pub fn cigar(self, expected: &str) -> Self {
        let actual = cigar_to_string(&self.alignment.cigar);
        assert_text(&actual, expected, &self.field("cigar"));
        self
    }

    pub fn rnext(self, expected: &str) -> Self {
        assert_text(&self.alignment.rnext, expected, &self.field("rnext"));
        self
    }

    pub fn pnext(self, expected: i32) -> Self {
        assert_eq!(self.alignment.pnext, expected, "{}", self.field("pnext"));
        self
    }

    pub fn tlen(self, expected: i32) -> Self {
        assert_eq!(self.alignment.tlen, expected, "{}", self.field("tlen"));
        self
    }

    pub fn seq(self, expected: &str) -> Self {
        assert_text(&self.alignment.seq, expected, &self.field("seq"));
        self
    }

    pub fn qual(self, expected: &str) -> Self {
        assert_text(&self.alignment.qual, expected, &self.field("qual"));
        self
    }

    pub fn tag_count(self, expected: usize) -> Self {
        let actual = self.alignment.tags.len();
        assert_eq!(
            actual,
            expected,
            "{}: expected {} tags, found {}: [{}]",
            self.field("tags"),
            expected,
            actual,
            self.alignment
                .tags
                .iter()
                .map(|t| t.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        self
    }

    /// Assert the tag at `index` is `name:tag_type:value`
    pub fn tag(self, index: usize, name: &str, tag_type: char, value: &str) -> Self {
        let context = format!("{}.tags[{}]", self.context, index);
        let tag = self.alignment.tags.get(index).unwrap_or_else(|| {
            panic!(
                "{}: out of bounds ({} tags)",
                context,
                self.alignment.tags.len()
            )
        });
        assert_text(tag.tag(), name, &context);
        assert_eq!(tag.tag_type().as_char(), tag_type, "{}: type", context);
        assert_text(tag.value(), value, &context);
        self
    }
}

// ============================================================================
// Header Assertions
// ============================================================================

pub struct HeaderAssertion<'a> {
    header: &'a Header,
    context: String,
}

fn assert_record(record: &HeaderRecord, key: &str, expected: &str, context: &str) {
    match record.get(key) {
        Some(actual) => assert_text(actual, expected, context),
        None => panic!(
            "{}: missing {} (keys: {:?})",
            context,
            key,
            record.keys().collect::<Vec<_>>()
        ),
    }
}

fn record_at<'r>(records: &'r [HeaderRecord], index: usize, context: &str) -> &'r HeaderRecord {
    records.get(index).unwrap_or_else(|| {
        panic!(
            "{}: index {} out of bounds ({} records)",
            context,
            index,
            records.len()
        )
    })
}

impl<'a> HeaderAssertion<'a> {
    pub fn has_hd(self) -> Self {
        assert!(
            self.header.hd.is_some(),
            "{}.hd: expected an @HD line",
            self.context
        );
        self
    }

    pub fn no_hd(self) -> Self {
        assert!(
            self.header.hd.is_none(),
            "{}.hd: expected no @HD line, found {:?}",
            self.context,
            self.header.hd
        );
        self
    }

    pub fn hd_field(self, key: &str, expected: &str) -> Self {
        let context = format!("{}.hd.{}", self.context, key);
        match &self.header.hd {
            Some(hd) => assert_record(hd, key, expected, &context),
            None => panic!("{}: no @HD line", context),
        }
        self
    }

    pub fn sorting_order(self, expected: SortingOrder) -> Self {
        assert_eq!(
            self.header.sorting_order(),
            expected,
            "{}.sorting_order",
            self.context
        );
        self
    }

    pub fn sq_count(self, expected: usize) -> Self {
        assert_eq!(self.header.sq.len(), expected, "{}.sq", self.context);
        self
    }

    pub fn sq_field(self, index: usize, key: &str, expected: &str) -> Self {
        let context = format!("{}.sq[{}]", self.context, index);
        assert_record(record_at(&self.header.sq, index, &context), key, expected, &context);
        self
    }

    pub fn rg_count(self, expected: usize) -> Self {
        assert_eq!(self.header.rg.len(), expected, "{}.rg", self.context);
        self
    }

    pub fn rg_field(self, index: usize, key: &str, expected: &str) -> Self {
        let context = format!("{}.rg[{}]", self.context, index);
        assert_record(record_at(&self.header.rg, index, &context), key, expected, &context);
        self
    }

    pub fn pg_count(self, expected: usize) -> Self {
        assert_eq!(self.header.pg.len(), expected, "{}.pg", self.context);
        self
    }

    pub fn pg_field(self, index: usize, key: &str, expected: &str) -> Self {
        let context = format!("{}.pg[{}]", self.context, index);
        assert_record(record_at(&self.header.pg, index, &context), key, expected, &context);
        self
    }

    pub fn comments(self, expected: &[&str]) -> Self {
        assert_eq!(self.header.co, expected, "{}.co", self.context);
        self
    }

    /// Assert the number of lines recorded under a user-defined tag
    pub fn user_count(self, tag: &str, expected: usize) -> Self {
        let actual = self.header.user_records.get(tag).map_or(0, Vec::len);
        assert_eq!(
            actual, expected,
            "{}.user_records[{}]",
            self.context, tag
        );
        self
    }

    pub fn user_field(self, tag: &str, index: usize, key: &str, expected: &str) -> Self {
        let context = format!("{}.user_records[{}][{}]", self.context, tag, index);
        let records = self
            .header
            .user_records
            .get(tag)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        assert_record(record_at(records, index, &context), key, expected, &context);
        self
    }
}
