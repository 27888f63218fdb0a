//! SAM text serializer
//!
//! Renders the data model back into SAM text. Header lines come out in the
//! fixed order `@HD`, `@SQ`, `@RG`, `@PG`, `@CO`, then user-defined lines;
//! fields inside a line keep the order of their [`HeaderRecord`]. Output
//! always uses `\n` line endings.

use std::io::{self, Write};

use crate::sam::ast::{cigar_to_string, Alignment, Header, HeaderRecord, SamFile};

fn record_line(tag: &str, record: &HeaderRecord) -> String {
    let fields: Vec<String> = record
        .iter()
        .map(|(key, value)| format!("{}:{}", key, value))
        .collect();
    format!("@{}\t{}", tag, fields.join("\t"))
}

/// Every header line, without terminators
fn header_lines(header: &Header) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(hd) = &header.hd {
        lines.push(record_line("HD", hd));
    }
    lines.extend(header.sq.iter().map(|record| record_line("SQ", record)));
    lines.extend(header.rg.iter().map(|record| record_line("RG", record)));
    lines.extend(header.pg.iter().map(|record| record_line("PG", record)));
    lines.extend(header.co.iter().map(|comment| format!("@CO\t{}", comment)));
    for (tag, records) in &header.user_records {
        lines.extend(records.iter().map(|record| record_line(tag, record)));
    }
    lines
}

/// Render the header section, lines joined by `\n` with no trailing newline
pub fn format_header(header: &Header) -> String {
    header_lines(header).join("\n")
}

/// Render one alignment line without its terminator
pub fn format_alignment(alignment: &Alignment) -> String {
    let mut fields = vec![
        alignment.qname.clone(),
        alignment.flag.to_string(),
        alignment.rname.clone(),
        alignment.pos.to_string(),
        alignment.mapq.to_string(),
        cigar_to_string(&alignment.cigar),
        alignment.rnext.clone(),
        alignment.pnext.to_string(),
        alignment.tlen.to_string(),
        alignment.seq.clone(),
        alignment.qual.clone(),
    ];
    fields.extend(alignment.tags.iter().map(|tag| tag.to_string()));
    fields.join("\t")
}

/// Render a whole document; every line, the last included, ends with `\n`
pub fn format_sam_file(file: &SamFile) -> String {
    let mut out = String::new();
    for line in header_lines(&file.header) {
        out.push_str(&line);
        out.push('\n');
    }
    for alignment in &file.alignments {
        out.push_str(&format_alignment(alignment));
        out.push('\n');
    }
    out
}

/// Stream the same bytes as [`format_sam_file`] to `writer`
pub fn write_sam<W: Write>(writer: &mut W, file: &SamFile) -> io::Result<()> {
    for line in header_lines(&file.header) {
        writeln!(writer, "{}", line)?;
    }
    for alignment in &file.alignments {
        writeln!(writer, "{}", format_alignment(alignment))?;
    }
    Ok(())
}
