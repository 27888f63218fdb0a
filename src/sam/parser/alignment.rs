//! Alignment line grammar
//!
//! ```text
//! alignment = QNAME TAB FLAG TAB RNAME TAB POS TAB MAPQ TAB CIGAR TAB
//!             RNEXT TAB PNEXT TAB TLEN TAB SEQ TAB QUAL (TAB optional-tag)* NEWLINE?
//! ```

use chumsky::prelude::*;

use super::combinators::{decoded, field, line_end, tab, ParserError};
use super::fields::{decode_cigar, decode_integer, decode_optional_tag, decode_signed_integer};
use crate::sam::ast::Alignment;
use crate::sam::lexer::TokenSpan;

pub(crate) fn alignment_line() -> BoxedParser<'static, TokenSpan, Alignment, ParserError> {
    let tags = tab()
        .ignore_then(decoded("optional tag", decode_optional_tag))
        .repeated();

    field("QNAME")
        .then_ignore(tab())
        .then(decoded("FLAG", decode_integer::<u16>))
        .then_ignore(tab())
        .then(field("RNAME"))
        .then_ignore(tab())
        .then(decoded("POS", decode_integer::<u32>))
        .then_ignore(tab())
        .then(decoded("MAPQ", decode_integer::<u8>))
        .then_ignore(tab())
        .then(decoded("CIGAR", decode_cigar))
        .then_ignore(tab())
        .then(field("RNEXT"))
        .then_ignore(tab())
        .then(decoded("PNEXT", decode_signed_integer::<i32>))
        .then_ignore(tab())
        .then(decoded("TLEN", decode_signed_integer::<i32>))
        .then_ignore(tab())
        .then(field("SEQ"))
        .then_ignore(tab())
        .then(field("QUAL"))
        .then(tags)
        .then_ignore(line_end())
        .map(
            |(
                (
                    (((((((((qname, flag), rname), pos), mapq), cigar), rnext), pnext), tlen), seq),
                    qual,
                ),
                tags,
            )| Alignment {
                qname,
                flag,
                rname,
                pos,
                mapq,
                cigar,
                rnext,
                pnext,
                tlen,
                seq,
                qual,
                tags,
            },
        )
        .boxed()
}
