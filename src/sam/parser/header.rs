//! Header section grammar
//!
//! ```text
//! header      = hd-line? sq-line* rg-line* pg-line* co-line* user-line*
//! typed-line  = "@HD" | "@SQ" | "@RG" | "@PG"  TAB fields  NEWLINE?
//! co-line     = "@CO" TAB (TEXT | TAB)*  NEWLINE?
//! user-line   = "@" lower lower  TAB fields  NEWLINE?
//! fields      = header-field (TAB header-field)*
//! ```
//!
//! The order of line types is fixed: an `@SQ` after a `@PG` ends the header
//! and is then read (and rejected) as an alignment line.

use chumsky::prelude::*;
use indexmap::IndexMap;

use super::combinators::{decoded, line_end, literal, tab, ParserError};
use super::fields::decode_header_field;
use crate::sam::ast::{Header, HeaderRecord};
use crate::sam::lexer::{Token, TokenSpan};

/// `@` followed by two lowercase ASCII letters
pub(crate) fn is_user_tag(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 3 && bytes[0] == b'@' && bytes[1..].iter().all(u8::is_ascii_lowercase)
}

/// Tab-separated `TAG:VALUE` fields; a repeated tag keeps its last value
fn header_fields() -> impl Parser<TokenSpan, HeaderRecord, Error = ParserError> + Clone {
    decoded("header field", decode_header_field)
        .separated_by(tab())
        .map(|fields| fields.into_iter().collect::<HeaderRecord>())
}

fn typed_line(tag: &'static str) -> impl Parser<TokenSpan, HeaderRecord, Error = ParserError> + Clone {
    literal(tag)
        .ignore_then(tab())
        .ignore_then(header_fields())
        .then_ignore(line_end())
}

pub(crate) fn hd_line() -> impl Parser<TokenSpan, HeaderRecord, Error = ParserError> + Clone {
    typed_line("@HD")
}

pub(crate) fn sq_line() -> impl Parser<TokenSpan, HeaderRecord, Error = ParserError> + Clone {
    typed_line("@SQ")
}

pub(crate) fn rg_line() -> impl Parser<TokenSpan, HeaderRecord, Error = ParserError> + Clone {
    typed_line("@RG")
}

pub(crate) fn pg_line() -> impl Parser<TokenSpan, HeaderRecord, Error = ParserError> + Clone {
    typed_line("@PG")
}

/// `@CO` keeps the rest of the line verbatim, tabs included
pub(crate) fn co_line() -> impl Parser<TokenSpan, String, Error = ParserError> + Clone {
    let verbatim = filter(|(token, _): &TokenSpan| !token.is_newline())
        .map(|(token, _)| match token {
            Token::Text(text) => text,
            _ => "\t".to_string(),
        })
        .repeated()
        .map(|parts: Vec<String>| parts.concat());

    literal("@CO")
        .ignore_then(tab())
        .ignore_then(verbatim)
        .then_ignore(line_end())
}

/// A user-defined line, returned as (two-letter tag, fields)
pub(crate) fn user_line(
) -> impl Parser<TokenSpan, (String, HeaderRecord), Error = ParserError> + Clone {
    let user_tag = filter_map(|span, token: TokenSpan| {
        let tag = token
            .0
            .text()
            .filter(|text| is_user_tag(text))
            .map(|text| text[1..].to_string());
        match tag {
            Some(tag) => Ok(tag),
            None => Err(ParserError::expected_input_found(
                span,
                Vec::new(),
                Some(token),
            )),
        }
    })
    .labelled("header tag");

    user_tag
        .then_ignore(tab())
        .then(header_fields())
        .then_ignore(line_end())
}

/// The whole header section; matches nothing when the input has no header
pub(crate) fn header() -> BoxedParser<'static, TokenSpan, Header, ParserError> {
    hd_line()
        .or_not()
        .then(sq_line().repeated())
        .then(rg_line().repeated())
        .then(pg_line().repeated())
        .then(co_line().repeated())
        .then(user_line().repeated())
        .map(|(((((hd, sq), rg), pg), co), user)| {
            let mut user_records: IndexMap<String, Vec<HeaderRecord>> = IndexMap::new();
            for (tag, record) in user {
                user_records.entry(tag).or_default().push(record);
            }
            log::trace!(
                "header: {} @SQ, {} @RG, {} @PG, {} @CO, {} user groups",
                sq.len(),
                rg.len(),
                pg.len(),
                co.len(),
                user_records.len()
            );
            Header {
                hd,
                sq,
                rg,
                pg,
                co,
                user_records,
            }
        })
        .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_user_tag() {
        assert!(is_user_tag("@xy"));
        assert!(!is_user_tag("@XY"));
        assert!(!is_user_tag("@x1"));
        assert!(!is_user_tag("@xyz"));
        assert!(!is_user_tag("xy"));
        assert!(!is_user_tag("@é"));
    }
}
