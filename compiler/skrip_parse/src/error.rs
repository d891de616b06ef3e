//! Parse error representation.
//!
//! Errors accumulate on the parser instead of aborting it; the driver
//! inspects the list after `parse` and refuses evaluation if non-empty.

use std::error::Error;
use std::fmt;

use skrip_ir::TokenKind;

/// A single parse error with the source line it was detected on.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
    pub line: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        ParseError {
            line,
            message: message.into(),
        }
    }

    /// The wrong token followed the current one.
    pub fn expected_peek(line: usize, expected: TokenKind, got: TokenKind) -> Self {
        ParseError::new(
            line,
            format!("expected next token to be {expected}, got {got} instead"),
        )
    }

    /// No expression can start with this token. This is also how `ILLEGAL`
    /// tokens from the lexer surface.
    pub fn no_prefix(line: usize, kind: TokenKind) -> Self {
        ParseError::new(line, format!("no prefix parse function for {kind} found"))
    }

    /// A numeric literal failed conversion.
    pub fn bad_literal(line: usize, literal: &str, target: &str) -> Self {
        ParseError::new(line, format!("could not parse \"{literal}\" as {target}"))
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message)
    }
}

impl Error for ParseError {}
