//! Whole-document grammar: the header section, then alignment lines, then end of input

use chumsky::prelude::*;

use super::alignment::alignment_line;
use super::combinators::ParserError;
use super::header::header;
use crate::sam::ast::SamFile;
use crate::sam::lexer::TokenSpan;

pub(crate) fn sam_file() -> impl Parser<TokenSpan, SamFile, Error = ParserError> {
    header()
        .then(alignment_line().repeated())
        .then_ignore(end())
        .map(|(header, alignments)| SamFile::new(header, alignments))
}
