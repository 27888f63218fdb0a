//! Lexer module for SAM text
//!
//! This module contains the tokenization logic for SAM text. The lexer only
//! separates tabs, line breaks and the text between them; every lexical rule
//! that depends on which field a run of text occupies (integers, CIGAR,
//! `TAG:TYPE:VALUE`) belongs to the grammar.
//!
//! Because every character belongs to some token, lexing never fails. The whole
//! input is tokenized up front: the grammar needs the document in memory.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{tokenize, tokenize_with_spans};
pub use tokens::Token;

/// Token paired with its byte span in the source
pub type TokenSpan = (Token, std::ops::Range<usize>);

/// Lexing function that preserves source spans for the parser
pub fn lex_with_spans(source: &str) -> Vec<TokenSpan> {
    let tokens = tokenize_with_spans(source);
    log::trace!("lexed {} bytes into {} tokens", source.len(), tokens.len());
    tokens
}
