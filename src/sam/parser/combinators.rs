//! Token-level building blocks shared by the line grammars

use chumsky::prelude::*;
use std::ops::Range;

use super::fields::FieldError;
use crate::sam::lexer::{Token, TokenSpan};

/// Type alias for parser error
pub(crate) type ParserError = Simple<TokenSpan>;

pub(crate) fn tab() -> impl Parser<TokenSpan, (), Error = ParserError> + Clone {
    filter(|(token, _): &TokenSpan| token.is_tab())
        .ignored()
        .labelled("tab")
}

pub(crate) fn newline() -> impl Parser<TokenSpan, (), Error = ParserError> + Clone {
    filter(|(token, _): &TokenSpan| token.is_newline())
        .ignored()
        .labelled("line break")
}

/// Line terminator; the last line of a document may omit it
pub(crate) fn line_end() -> impl Parser<TokenSpan, (), Error = ParserError> + Clone {
    newline().or_not().ignored()
}

/// Any `Text` token, with its byte span
pub(crate) fn text() -> impl Parser<TokenSpan, (String, Range<usize>), Error = ParserError> + Clone
{
    filter_map(|span: Range<usize>, token: TokenSpan| match token {
        (Token::Text(text), _) => Ok((text, span)),
        other => Err(ParserError::expected_input_found(
            span,
            Vec::new(),
            Some(other),
        )),
    })
}

/// An opaque field such as QNAME or SEQ
pub(crate) fn field(name: &'static str) -> impl Parser<TokenSpan, String, Error = ParserError> + Clone {
    text().labelled(name).map(|(text, _)| text)
}

/// A `Text` token equal to `expected`
pub(crate) fn literal(expected: &'static str) -> impl Parser<TokenSpan, (), Error = ParserError> + Clone {
    filter(move |(token, _): &TokenSpan| token.text() == Some(expected))
        .ignored()
        .labelled(expected)
}

/// A field whose contents are decoded by a field-level grammar
///
/// A decoding failure is reported at the exact byte inside the field, as
/// `invalid <name>: <reason>`.
pub(crate) fn decoded<T, F>(
    name: &'static str,
    decode: F,
) -> impl Parser<TokenSpan, T, Error = ParserError> + Clone
where
    F: Fn(&str) -> Result<T, FieldError> + Clone,
{
    text()
        .labelled(name)
        .try_map(move |(text, span), _| {
            decode(&text).map_err(|error: FieldError| {
                let at = span.start + error.offset;
                ParserError::custom(at..at + 1, format!("invalid {}: {}", name, error.message))
            })
        })
}
