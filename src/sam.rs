//! Main module for samtext library functionality

pub mod ast;
pub mod config;
pub mod error;
pub mod formats;
pub mod io;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod stats;
#[doc(hidden)]
pub mod testing;
pub mod validate;
