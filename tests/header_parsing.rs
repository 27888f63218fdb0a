//! Header section parsing, case by case

use rstest::rstest;
use samtext::sam::testing::assert_header;
use samtext::{format_header, parse_header, parse_sam_file, SortingOrder};

#[rstest]
#[case("coordinate", SortingOrder::Coordinate)]
#[case("queryname", SortingOrder::QueryName)]
#[case("unsorted", SortingOrder::Unsorted)]
#[case("unknown", SortingOrder::Unknown)]
#[case("by-colour", SortingOrder::Unknown)]
fn test_sorting_order(#[case] value: &str, #[case] expected: SortingOrder) {
    let header = parse_header(&format!("@HD\tVN:1.6\tSO:{}", value)).unwrap();
    assert_header(&header).sorting_order(expected);
}

#[test]
fn test_sorting_order_without_so_or_hd() {
    let header = parse_header("@HD\tVN:1.6").unwrap();
    assert_header(&header).sorting_order(SortingOrder::Unknown);
    let header = parse_header("@SQ\tSN:chr1\tLN:10").unwrap();
    assert_header(&header).no_hd().sorting_order(SortingOrder::Unknown);
}

#[rstest]
#[case::lf("\n")]
#[case::crlf("\r\n")]
#[case::cr("\r")]
fn test_line_endings(#[case] ending: &str) {
    let source = ["@HD\tVN:1.6", "@SQ\tSN:chr1\tLN:10", "@CO\tnote"].join(ending);
    let header = parse_header(&source).unwrap();
    assert_header(&header)
        .hd_field("VN", "1.6")
        .sq_field(0, "LN", "10")
        .comments(&["note"]);
    assert_eq!(
        format_header(&header),
        "@HD\tVN:1.6\n@SQ\tSN:chr1\tLN:10\n@CO\tnote"
    );
}

#[rstest]
#[case::empty_value("@SQ\tSN:\tLN:5", "SN", "")]
#[case::colon_in_value("@PG\tID:x\tCL:samtools view -o a:b", "CL", "samtools view -o a:b")]
#[case::spaces_in_value("@RG\tID:g1\tDS:first read group", "DS", "first read group")]
fn test_field_values(#[case] source: &str, #[case] key: &str, #[case] value: &str) {
    let header = parse_header(source).unwrap();
    let record = header
        .sq
        .first()
        .or(header.pg.first())
        .or(header.rg.first())
        .unwrap();
    assert_eq!(record.get(key).map(String::as_str), Some(value));
}

#[rstest]
#[case::missing_colon("@SQ\tSNchr1")]
#[case::one_letter_tag("@SQ\tS:chr1")]
#[case::no_tab("@SQ")]
#[case::unknown_uppercase_tag("@XX\tAB:c")]
#[case::user_tag_with_digit("@x1\tAB:c")]
#[case::empty_field("@SQ\tSN:chr1\t\tLN:1")]
fn test_malformed_headers(#[case] source: &str) {
    assert!(parse_header(source).is_err(), "{:?} should not parse", source);
}

#[rstest]
#[case::sq_after_rg("@RG\tID:a\n@SQ\tSN:c\tLN:1")]
#[case::hd_after_sq("@SQ\tSN:c\tLN:1\n@HD\tVN:1.6")]
#[case::co_before_pg("@CO\tx\n@PG\tID:p")]
#[case::typed_after_user("@ab\tXY:1\n@CO\tx")]
fn test_line_order_is_fixed(#[case] source: &str) {
    let err = parse_header(source).unwrap_err();
    assert_eq!(err.line, 2);
}

#[test]
fn test_user_records_interleaved_tags() {
    let header = parse_header("@ab\tK1:a\n@cd\tK1:b\n@ab\tK1:c").unwrap();
    assert_header(&header)
        .user_count("ab", 2)
        .user_count("cd", 1)
        .user_field("ab", 1, "K1", "c");
    // Grouped by tag on output
    assert_eq!(
        format_header(&header),
        "@ab\tK1:a\n@ab\tK1:c\n@cd\tK1:b"
    );
}

#[test]
fn test_header_then_alignments() {
    let file = parse_sam_file(
        "@SQ\tSN:chr1\tLN:10\n@zz\tAA:1\nr1\t0\tchr1\t1\t0\t*\t*\t0\t0\t*\t*\n",
    )
    .unwrap();
    assert_header(&file.header).sq_count(1).user_count("zz", 1);
    assert_eq!(file.alignments.len(), 1);
}
