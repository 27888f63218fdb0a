//! Parse errors
//!
//! Chumsky reports every alternative that failed at the furthest position it
//! reached. [`ParseError`] keeps only that furthest failure and renders it as
//! a line/column diagnostic, which is what callers print.

use std::hash::Hash;

use chumsky::error::{Simple, SimpleReason};
use thiserror::Error;

use crate::sam::ast::SourceLocation;
use crate::sam::lexer::TokenSpan;

/// A grammar failure at a specific position of the input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}, column {column}: {message}")]
pub struct ParseError {
    /// 1-based line number
    pub line: usize,
    /// 1-based column, counted in bytes
    pub column: usize,
    /// Byte offset into the input
    pub offset: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(source: &str, offset: usize, message: impl Into<String>) -> Self {
        let offset = offset.min(source.len());
        let position = SourceLocation::new(source).byte_to_position(offset);
        Self {
            line: position.line + 1,
            column: position.column + 1,
            offset,
            message: message.into(),
        }
    }

    /// Build from the errors of a token-level parse, keeping the furthest one
    pub(crate) fn from_token_errors(source: &str, errors: Vec<Simple<TokenSpan>>) -> Self {
        match errors.into_iter().max_by_key(|e| e.span().start) {
            Some(error) => {
                let message =
                    describe_error(&error, |(token, _)| token.describe(), "end of input");
                Self::new(source, error.span().start, message)
            }
            None => Self::new(source, 0, "input does not match the SAM grammar"),
        }
    }
}

/// Render one chumsky error as `expected X, found Y`, or its custom message
pub(crate) fn describe_error<I, F>(error: &Simple<I>, show: F, end: &str) -> String
where
    I: Hash + Eq,
    F: Fn(&I) -> String,
{
    if let SimpleReason::Custom(message) = error.reason() {
        return message.clone();
    }

    let found = error
        .found()
        .map(&show)
        .unwrap_or_else(|| end.to_string());

    let expected = match error.label() {
        Some(label) => Some(label.to_string()),
        None => {
            let mut alternatives: Vec<String> = error
                .expected()
                .map(|item| item.as_ref().map(&show).unwrap_or_else(|| end.to_string()))
                .collect();
            alternatives.sort();
            alternatives.dedup();
            match alternatives.len() {
                0 => None,
                _ => Some(alternatives.join(" or ")),
            }
        }
    };

    match expected {
        Some(expected) => format!("expected {}, found {}", expected, found),
        None => format!("unexpected {}", found),
    }
}
