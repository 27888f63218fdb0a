//! Treeviz formatter for SAM documents
//!
//! One line per node, nesting drawn with box characters:
//!
//! ```text
//! ⧉ SamFile
//! ├─ Header (coordinate)
//! │ ├─ @HD VN:1.6 SO:coordinate
//! │ └─ @SQ SN:chr1 LN:1000
//! └─ Alignments (1)
//!   └─ r001 chr1:7 3S5M1D4M
//!     └─ NM:i:1
//! ```
//!
//! Labels are truncated to 40 characters.

use crate::sam::ast::{cigar_to_string, Alignment, Header, HeaderRecord, SamFile};

const MAX_LABEL: usize = 40;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

struct Node {
    label: String,
    children: Vec<Node>,
}

impl Node {
    fn leaf(label: String) -> Self {
        Node {
            label,
            children: Vec::new(),
        }
    }
}

fn record_label(tag: &str, record: &HeaderRecord) -> String {
    let fields: Vec<String> = record.iter().map(|(k, v)| format!("{}:{}", k, v)).collect();
    format!("@{} {}", tag, fields.join(" "))
}

fn header_node(header: &Header) -> Node {
    let mut children = Vec::new();
    if let Some(hd) = &header.hd {
        children.push(Node::leaf(record_label("HD", hd)));
    }
    for (tag, records) in [("SQ", &header.sq), ("RG", &header.rg), ("PG", &header.pg)] {
        children.extend(records.iter().map(|r| Node::leaf(record_label(tag, r))));
    }
    children.extend(
        header
            .co
            .iter()
            .map(|comment| Node::leaf(format!("@CO {}", comment))),
    );
    for (tag, records) in &header.user_records {
        children.extend(records.iter().map(|r| Node::leaf(record_label(tag, r))));
    }
    Node {
        label: format!("Header ({})", header.sorting_order().as_str()),
        children,
    }
}

fn alignment_node(alignment: &Alignment) -> Node {
    Node {
        label: format!(
            "{} {}:{} {}",
            alignment.qname,
            alignment.rname,
            alignment.pos,
            cigar_to_string(&alignment.cigar)
        ),
        children: alignment
            .tags
            .iter()
            .map(|tag| Node::leaf(tag.to_string()))
            .collect(),
    }
}

fn append_node(result: &mut String, node: &Node, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    result.push_str(&format!(
        "{}{} {}\n",
        prefix,
        connector,
        truncate(&node.label, MAX_LABEL)
    ));
    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    append_children(result, &node.children, &child_prefix);
}

fn append_children(result: &mut String, children: &[Node], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        append_node(result, child, prefix, i + 1 == children.len());
    }
}

pub fn to_treeviz_str(file: &SamFile) -> String {
    let top = vec![
        header_node(&file.header),
        Node {
            label: format!("Alignments ({})", file.alignments.len()),
            children: file.alignments.iter().map(alignment_node).collect(),
        },
    ];
    let mut result = String::from("⧉ SamFile\n");
    append_children(&mut result, &top, "");
    result
}
