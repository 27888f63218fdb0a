//! Public API for the parser.
//!
//! Every entry point lexes the whole input, runs one grammar rule to end of
//! input and reports the furthest failure as a [`ParseError`]. No partial
//! result is ever returned.

use chumsky::{prelude::*, Stream};

use super::alignment::alignment_line;
use super::combinators::ParserError;
use super::document::sam_file;
use super::error::ParseError;
use super::header::header;
use crate::sam::ast::{Alignment, Header, SamFile};
use crate::sam::lexer::{lex_with_spans, TokenSpan};

/// Lex `source` and run `parser` over the tokens
fn run<O>(
    source: &str,
    parser: impl Parser<TokenSpan, O, Error = ParserError>,
) -> Result<O, ParseError> {
    let tokens = lex_with_spans(source);
    let eoi = source.len()..source.len();
    let stream = Stream::from_iter(
        eoi,
        tokens
            .into_iter()
            .map(|(token, span)| ((token, span.clone()), span)),
    );

    parser
        .parse(stream)
        .map_err(|errors| ParseError::from_token_errors(source, errors))
}

/// Parse a complete SAM document: header section, alignments, end of input
pub fn parse_sam_file(source: &str) -> Result<SamFile, ParseError> {
    let file = run(source, sam_file())?;
    log::debug!(
        "parsed SAM document: {} reference sequences, {} alignments",
        file.header.sq.len(),
        file.alignments.len()
    );
    Ok(file)
}

/// Parse text that holds only header lines
///
/// Callers reading a full file should pass just its leading `@` lines
/// (see [`crate::sam::io::read_header_text`]); anything that is not part of
/// the header grammar is an error.
pub fn parse_header(source: &str) -> Result<Header, ParseError> {
    run(source, header().then_ignore(end()))
}

/// Parse exactly one alignment line, with or without its line terminator
pub fn parse_alignment(source: &str) -> Result<Alignment, ParseError> {
    run(source, alignment_line().then_ignore(end()))
}
