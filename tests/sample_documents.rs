//! The curated sample documents through every processing path

use samtext::sam::processor::process_source;
use samtext::sam::processor::sam_sources::SamSources;
use samtext::sam::processor::OutputFormat;
use samtext::sam::stats::summarize;
use samtext::sam::validate::validate;
use samtext::SamFlag;

#[test]
fn test_every_sample_in_every_format() {
    for name in SamSources::list_samples() {
        let source = SamSources::get_string(name).unwrap();
        for format in OutputFormat::ALL {
            process_source(&source, format)
                .unwrap_or_else(|e| panic!("{} as {} failed: {}", name, format, e));
        }
    }
}

#[test]
fn test_samples_are_valid() {
    for name in SamSources::list_samples() {
        let file = SamSources::get_sam_file(name).unwrap();
        let issues = validate(&file);
        assert!(issues.is_empty(), "{}: {:?}", name, issues);
    }
}

#[test]
fn test_paired_reads_summary() {
    let file = SamSources::get_sam_file("020-paired-reads.sam").unwrap();
    let summary = summarize(&file);
    assert_eq!(summary.total, 4);
    assert_eq!(summary.mapped, 2);
    assert_eq!(summary.unmapped, 2);
    assert_eq!(summary.paired, 4);
    assert_eq!(summary.mean_mapq, Some(60.0));
    assert_eq!(summary.per_reference.get("chr1"), Some(&2));
    assert_eq!(summary.per_reference.get("*"), Some(&2));
    assert!(summary
        .flag_counts
        .contains(&(SamFlag::MateUnmapped, 2)));
    assert_eq!(summary.read_groups, 1);
    assert_eq!(summary.programs, 1);
}

#[test]
fn test_full_header_reference_lengths() {
    let file = SamSources::get_sam_file("030-full-header.sam").unwrap();
    assert_eq!(file.header.reference_names(), vec!["chr1", "chr2"]);
    assert_eq!(file.header.reference_length("chr2"), Some(800));
    assert_eq!(file.header.reference_length("chr3"), None);
    // 3S5M1D4M covers 10 reference bases starting at 7
    assert_eq!(file.alignments[0].reference_end(), Some(16));
}

#[test]
fn test_summary_output_mentions_counts() {
    let output = SamSources::get_processed("030-full-header.sam", "summary").unwrap();
    assert!(output.contains("header: 2 @SQ, 2 @RG, 2 @PG, 2 @CO"), "{}", output);
    assert!(output.contains("alignments: 4 total, 3 mapped, 1 unmapped, 0 paired"));
}

#[test]
fn test_token_output_keeps_line_structure() {
    let output = SamSources::get_processed("010-header-only.sam", "tokens").unwrap();
    assert_eq!(output.lines().count(), 3);
    assert!(output.starts_with("<text:@HD><tab><text:VN:1.6>"), "{}", output);
}
