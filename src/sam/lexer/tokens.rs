//! Token definitions for SAM text
//!
//! SAM is line-oriented and tab-delimited, so tokenization only needs to find
//! the structural characters. Everything else is a `Text` run whose meaning is
//! decided by the grammar (header tag, integer, CIGAR, optional tag, ...).
use logos::Logos;
use serde::Serialize;
use std::fmt;

/// All possible tokens in SAM text
#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone, Serialize)]
pub enum Token {
    // Field separator
    #[token("\t")]
    Tab,

    // Line breaks, all three conventions; `\r\n` wins over a lone `\r`
    #[regex(r"\r\n|\n|\r")]
    Newline,

    // Any run of characters that is neither a tab nor a line break
    #[regex(r"[^\t\r\n]+", |lex| lex.slice().to_owned())]
    Text(String),
}

impl Token {
    pub fn is_tab(&self) -> bool {
        matches!(self, Token::Tab)
    }

    pub fn is_newline(&self) -> bool {
        matches!(self, Token::Newline)
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Token::Text(_))
    }

    /// Text of a `Text` token
    pub fn text(&self) -> Option<&str> {
        match self {
            Token::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Short description used in parse error messages
    pub fn describe(&self) -> String {
        match self {
            Token::Tab => "tab".to_string(),
            Token::Newline => "line break".to_string(),
            Token::Text(s) => format!("`{}`", s),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Tab => write!(f, "<tab>"),
            Token::Newline => write!(f, "<newline>"),
            Token::Text(s) => write!(f, "<text:{}>", s),
        }
    }
}
