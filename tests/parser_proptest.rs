//! Property-based tests for the parser and serializer
//!
//! Generated documents are formatted, parsed back and compared. Field
//! strategies only produce text the grammar can carry: no tabs or line
//! breaks inside fields, QNAMEs never starting with `@`, two-character tags.

use indexmap::IndexMap;
use proptest::prelude::*;
use samtext::sam::ast::HeaderRecord;
use samtext::{
    format_alignment, format_sam_file, parse_alignment, parse_sam_file, Alignment, CigarOp,
    CigarOperation, Header, OptionalTag, SamFile, TagType,
};

fn value_strategy() -> impl Strategy<Value = String> {
    "[ -~]{1,10}"
}

fn record_strategy() -> impl Strategy<Value = HeaderRecord> {
    prop::collection::vec(("[A-Z][A-Z0-9]", value_strategy()), 1..4)
        .prop_map(|fields| fields.into_iter().collect())
}

fn user_records_strategy() -> impl Strategy<Value = IndexMap<String, Vec<HeaderRecord>>> {
    prop::collection::vec(
        ("[a-z]{2}", prop::collection::vec(record_strategy(), 1..3)),
        0..3,
    )
    .prop_map(|groups| {
        let mut user_records: IndexMap<String, Vec<HeaderRecord>> = IndexMap::new();
        for (tag, records) in groups {
            user_records.entry(tag).or_default().extend(records);
        }
        user_records
    })
}

fn header_strategy() -> impl Strategy<Value = Header> {
    (
        prop::option::of(record_strategy()),
        prop::collection::vec(record_strategy(), 0..3),
        prop::collection::vec(record_strategy(), 0..2),
        prop::collection::vec(record_strategy(), 0..2),
        prop::collection::vec("[ -~\t]{0,12}", 0..3),
        user_records_strategy(),
    )
        .prop_map(|(hd, sq, rg, pg, co, user_records)| Header {
            hd,
            sq,
            rg,
            pg,
            co,
            user_records,
        })
}

fn cigar_strategy() -> impl Strategy<Value = Vec<CigarOperation>> {
    prop::collection::vec(
        (any::<u32>(), prop::sample::select(CigarOp::ALL.to_vec())),
        0..5,
    )
    .prop_map(|ops| {
        ops.into_iter()
            .map(|(length, op)| CigarOperation::new(length, op))
            .collect()
    })
}

fn tag_strategy() -> impl Strategy<Value = OptionalTag> {
    (
        "[A-Za-z][A-Za-z0-9]",
        prop::sample::select(vec![
            TagType::Character,
            TagType::Integer,
            TagType::Float,
            TagType::String,
            TagType::Hex,
            TagType::Array,
        ]),
        value_strategy(),
    )
        .prop_map(|(tag, tag_type, value)| {
            OptionalTag::new(tag, tag_type, value).expect("generated tag names are valid")
        })
}

prop_compose! {
    fn alignment_strategy()(
        qname in "[!-?A-~][!-~]{0,9}",
        flag in any::<u16>(),
        rname in "\\*|[A-Za-z0-9_.]{1,6}",
        pos in any::<u32>(),
        mapq in any::<u8>(),
        cigar in cigar_strategy(),
        rnext in "\\*|=|[A-Za-z0-9_.]{1,6}",
        pnext in any::<i32>(),
        tlen in any::<i32>(),
        seq in "\\*|[ACGTN=.]{1,12}",
        qual in "\\*|[!-~]{1,12}",
        tags in prop::collection::vec(tag_strategy(), 0..4),
    ) -> Alignment {
        Alignment { qname, flag, rname, pos, mapq, cigar, rnext, pnext, tlen, seq, qual, tags }
    }
}

fn sam_file_strategy() -> impl Strategy<Value = SamFile> {
    (
        header_strategy(),
        prop::collection::vec(alignment_strategy(), 0..5),
    )
        .prop_map(|(header, alignments)| SamFile::new(header, alignments))
}

proptest! {
    #[test]
    fn test_sam_file_round_trip(file in sam_file_strategy()) {
        let text = format_sam_file(&file);
        let parsed = parse_sam_file(&text)
            .unwrap_or_else(|e| panic!("failed to parse {:?}: {}", text, e));
        prop_assert_eq!(&parsed.header, &file.header.normalized());
        prop_assert_eq!(&parsed.alignments, &file.alignments);
        // Map equality ignores key order, the text does not
        prop_assert_eq!(format_sam_file(&parsed), text);
    }

    #[test]
    fn test_alignment_format_is_idempotent(alignment in alignment_strategy()) {
        let text = format_alignment(&alignment);
        let reparsed = parse_alignment(&text)
            .unwrap_or_else(|e| panic!("failed to parse {:?}: {}", text, e));
        prop_assert_eq!(format_alignment(&reparsed), text);
    }

    #[test]
    fn test_parser_never_panics(input in "[ -~\t\r\n]{0,200}") {
        let _ = parse_sam_file(&input);
    }
}
