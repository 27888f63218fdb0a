//! Field-level grammar
//!
//! Character parsers for the contents of a single tab-delimited field. The
//! line grammar hands each field's text to one of the `decode_*` functions;
//! a failure comes back as a [`FieldError`] whose offset is relative to the
//! start of the field.
//!
//! ```text
//! integer        = digit+
//! signed-integer = "-"? digit+
//! cigar          = "*" | (integer op)+          op  = M I D N S H P = X
//! header-field   = tag ":" any*                 tag = 2 * (any - ":")
//! optional-tag   = tag ":" type ":" any*        type = A i f Z H B
//! ```

use std::ops::Range;
use std::str::FromStr;

use chumsky::prelude::*;

use super::error::describe_error;
use crate::sam::ast::{CigarOp, CigarOperation, OptionalTag, TagType};

type CharError = Simple<char>;

/// A failure inside one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Byte offset from the start of the field
    pub offset: usize,
    pub message: String,
}

impl FieldError {
    fn from_errors(text: &str, errors: Vec<CharError>) -> Self {
        match errors.into_iter().max_by_key(|e| e.span().start) {
            Some(error) => {
                let char_index = error.span().start;
                let offset = text
                    .char_indices()
                    .nth(char_index)
                    .map(|(byte, _)| byte)
                    .unwrap_or(text.len());
                FieldError {
                    offset,
                    message: describe_error(&error, |c| format!("`{}`", c), "end of field"),
                }
            }
            None => FieldError {
                offset: 0,
                message: "malformed field".to_string(),
            },
        }
    }
}

fn digits() -> impl Parser<char, String, Error = CharError> + Clone {
    filter(|c: &char| c.is_ascii_digit())
        .repeated()
        .at_least(1)
        .collect::<String>()
        .labelled("digit")
}

/// Digits with an optional leading `-`
fn signed_digits() -> impl Parser<char, String, Error = CharError> + Clone {
    just('-')
        .or_not()
        .then(digits())
        .map(|(sign, digits)| match sign {
            Some(_) => format!("-{}", digits),
            None => digits,
        })
}

/// Convert digits to `T`; width is checked here rather than in the grammar
fn to_integer<T: FromStr>(digits: &str, offset: usize) -> Result<T, FieldError> {
    digits.parse::<T>().map_err(|_| FieldError {
        offset,
        message: format!("integer {} out of range", digits),
    })
}

fn colon() -> impl Parser<char, char, Error = CharError> + Clone {
    just(':').labelled("`:`")
}

/// Exactly two characters, neither of them a colon
fn tag_name() -> impl Parser<char, String, Error = CharError> + Clone {
    filter(|c: &char| *c != ':')
        .repeated()
        .exactly(2)
        .collect::<String>()
        .labelled("two-character tag")
}

fn rest() -> impl Parser<char, String, Error = CharError> + Clone {
    any::<char, CharError>().repeated().collect::<String>()
}

fn cigar_op() -> impl Parser<char, CigarOp, Error = CharError> + Clone {
    filter_map(|span, c: char| {
        CigarOp::from_char(c).map_err(|e| Simple::custom(span, e.to_string()))
    })
}

fn tag_type() -> impl Parser<char, TagType, Error = CharError> + Clone {
    filter_map(|span, c: char| {
        TagType::from_char(c).map_err(|e| Simple::custom(span, e.to_string()))
    })
}

/// `*`, or `<digits><op>` pairs; lengths stay as text with their offsets
fn cigar() -> impl Parser<char, Vec<(String, usize, CigarOp)>, Error = CharError> + Clone {
    let operation = digits()
        .map_with_span(|digits, span: Range<usize>| (digits, span.start))
        .then(cigar_op())
        .map(|((digits, start), op)| (digits, start, op));

    just('*')
        .to(Vec::new())
        .or(operation.repeated().at_least(1))
}

fn header_field() -> impl Parser<char, (String, String), Error = CharError> + Clone {
    tag_name().then_ignore(colon()).then(rest())
}

fn optional_tag() -> impl Parser<char, ((String, TagType), String), Error = CharError> + Clone {
    tag_name()
        .then_ignore(colon())
        .then(tag_type())
        .then_ignore(colon())
        .then(rest())
}

/// Run a field parser over the whole of `text`
fn decode<O>(text: &str, parser: impl Parser<char, O, Error = CharError>) -> Result<O, FieldError> {
    parser
        .then_ignore(end())
        .parse(text)
        .map_err(|errors| FieldError::from_errors(text, errors))
}

pub(crate) fn decode_integer<T: FromStr>(text: &str) -> Result<T, FieldError> {
    let digits = decode(text, digits())?;
    to_integer(&digits, 0)
}

pub(crate) fn decode_signed_integer<T: FromStr>(text: &str) -> Result<T, FieldError> {
    let digits = decode(text, signed_digits())?;
    to_integer(&digits, 0)
}

pub(crate) fn decode_cigar(text: &str) -> Result<Vec<CigarOperation>, FieldError> {
    // Everything before an operation length is ASCII, so char and byte offsets agree
    decode(text, cigar())?
        .into_iter()
        .map(|(digits, offset, op)| {
            to_integer::<u32>(&digits, offset).map(|length| CigarOperation::new(length, op))
        })
        .collect()
}

pub(crate) fn decode_header_field(text: &str) -> Result<(String, String), FieldError> {
    decode(text, header_field())
}

pub(crate) fn decode_optional_tag(text: &str) -> Result<OptionalTag, FieldError> {
    let ((tag, tag_type), value) = decode(text, optional_tag())?;
    OptionalTag::new(tag, tag_type, value).map_err(|e| FieldError {
        offset: 0,
        message: e.to_string(),
    })
}
