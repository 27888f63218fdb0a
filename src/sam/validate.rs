//! Opt-in semantic checks (SAM v1.6 §1.3-§1.5)
//!
//! The parser accepts any field text that fits the grammar. These checks look
//! at what it produced: field character sets, required header keys, value
//! ranges, and whether SEQ, QUAL and CIGAR agree on the read length. They
//! report problems and never change the parsed document.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::sam::ast::cigar::query_length;
use crate::sam::ast::{Alignment, Header, HeaderRecord, OptionalTag, SamFile, TagType};

static QNAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\*|[!-?A-~]{1,254})$").unwrap());
static RNAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\*|[0-9A-Za-z!#$%&+./:;?@^_|~-][0-9A-Za-z!#$%&*+./:;=?@^_|~-]*)$").unwrap()
});
static RNEXT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\*|=|[0-9A-Za-z!#$%&+./:;?@^_|~-][0-9A-Za-z!#$%&*+./:;=?@^_|~-]*)$").unwrap()
});
static SEQ_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\*|[A-Za-z=.]+)$").unwrap());
static QUAL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[!-~]+$").unwrap());

static CHAR_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[!-~]$").unwrap());
static INT_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-+]?[0-9]+$").unwrap());
static FLOAT_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-+]?[0-9]*\.?[0-9]+([eE][-+]?[0-9]+)?$").unwrap());
static STRING_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[ !-~]*$").unwrap());
static HEX_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9A-F][0-9A-F])*$").unwrap());
static ARRAY_VALUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[cCsSiIf](,[-+]?[0-9]*\.?[0-9]+([eE][-+]?[0-9]+)?)*$").unwrap()
});

const MAX_POSITION: u32 = i32::MAX as u32;

/// One problem found in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Where the problem is, e.g. `@SQ[1]` or `alignment 3 (r001)`
    pub context: String,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.context, self.message)
    }
}

struct Issues(Vec<ValidationIssue>);

impl Issues {
    fn push(&mut self, context: &str, message: impl Into<String>) {
        self.0.push(ValidationIssue {
            context: context.to_string(),
            message: message.into(),
        });
    }
}

fn require_keys(issues: &mut Issues, context: &str, record: &HeaderRecord, keys: &[&str]) {
    for key in keys {
        if !record.contains_key(*key) {
            issues.push(context, format!("missing required field {}", key));
        }
    }
}

/// Check the header section
pub fn validate_header(header: &Header) -> Vec<ValidationIssue> {
    let mut issues = Issues(Vec::new());

    if let Some(hd) = &header.hd {
        require_keys(&mut issues, "@HD", hd, &["VN"]);
    }
    for (i, sq) in header.sq.iter().enumerate() {
        let context = format!("@SQ[{}]", i);
        require_keys(&mut issues, &context, sq, &["SN", "LN"]);
        if let Some(ln) = sq.get("LN") {
            match ln.parse::<u32>() {
                Ok(length) if (1..=MAX_POSITION).contains(&length) => {}
                _ => issues.push(&context, format!("LN `{}` is not in 1..=2^31-1", ln)),
            }
        }
    }
    for (i, rg) in header.rg.iter().enumerate() {
        require_keys(&mut issues, &format!("@RG[{}]", i), rg, &["ID"]);
    }
    for (i, pg) in header.pg.iter().enumerate() {
        require_keys(&mut issues, &format!("@PG[{}]", i), pg, &["ID"]);
    }

    issues.0
}

fn tag_value_matches(tag: &OptionalTag) -> bool {
    let regex = match tag.tag_type() {
        TagType::Character => &CHAR_VALUE,
        TagType::Integer => &INT_VALUE,
        TagType::Float => &FLOAT_VALUE,
        TagType::String => &STRING_VALUE,
        TagType::Hex => &HEX_VALUE,
        TagType::Array => &ARRAY_VALUE,
    };
    regex.is_match(tag.value())
}

/// Check one alignment record
///
/// `references` are the `@SQ` names of the header; when it is empty RNAME
/// and RNEXT are not cross-checked.
pub fn validate_alignment(
    alignment: &Alignment,
    context: &str,
    references: &[&str],
) -> Vec<ValidationIssue> {
    let mut issues = Issues(Vec::new());

    let patterns: [(&str, &str, &Lazy<Regex>); 5] = [
        ("QNAME", &alignment.qname, &QNAME_REGEX),
        ("RNAME", &alignment.rname, &RNAME_REGEX),
        ("RNEXT", &alignment.rnext, &RNEXT_REGEX),
        ("SEQ", &alignment.seq, &SEQ_REGEX),
        ("QUAL", &alignment.qual, &QUAL_REGEX),
    ];
    for (name, value, regex) in patterns {
        if !regex.is_match(value) {
            issues.push(context, format!("{} `{}` has invalid characters", name, value));
        }
    }

    if alignment.pos > MAX_POSITION {
        issues.push(context, format!("POS {} exceeds 2^31-1", alignment.pos));
    }
    if alignment.pnext < 0 {
        issues.push(context, format!("PNEXT {} is negative", alignment.pnext));
    }
    if alignment.tlen == i32::MIN {
        issues.push(context, "TLEN is below -(2^31-1)");
    }

    if !references.is_empty() {
        if alignment.rname != "*" && !references.contains(&alignment.rname.as_str()) {
            issues.push(
                context,
                format!("RNAME `{}` is not an @SQ reference", alignment.rname),
            );
        }
        if !matches!(alignment.rnext.as_str(), "*" | "=")
            && !references.contains(&alignment.rnext.as_str())
        {
            issues.push(
                context,
                format!("RNEXT `{}` is not an @SQ reference", alignment.rnext),
            );
        }
    }

    if alignment.seq != "*" {
        let seq_len = alignment.seq.len();
        if alignment.qual != "*" && alignment.qual.len() != seq_len {
            issues.push(
                context,
                format!(
                    "QUAL length {} differs from SEQ length {}",
                    alignment.qual.len(),
                    seq_len
                ),
            );
        }
        if !alignment.cigar.is_empty() {
            let cigar_len = query_length(&alignment.cigar);
            if cigar_len != seq_len as u64 {
                issues.push(
                    context,
                    format!(
                        "CIGAR {} covers {} bases but SEQ has {}",
                        alignment.cigar_string(),
                        cigar_len,
                        seq_len
                    ),
                );
            }
        }
    }

    for tag in &alignment.tags {
        if !tag_value_matches(tag) {
            issues.push(
                context,
                format!("tag {} value does not match type {}", tag.tag(), tag.tag_type()),
            );
        }
    }

    issues.0
}

/// Check a whole document; header issues come first
pub fn validate(file: &SamFile) -> Vec<ValidationIssue> {
    let mut issues = validate_header(&file.header);
    let references = file.header.reference_names();
    for (i, alignment) in file.alignments.iter().enumerate() {
        let context = format!("alignment {} ({})", i + 1, alignment.qname);
        issues.extend(validate_alignment(alignment, &context, &references));
    }
    log::debug!("validation found {} issues", issues.len());
    issues
}
