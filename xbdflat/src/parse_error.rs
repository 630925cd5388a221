// SPDX-License-Identifier: Apache-2.0

use bdtok::{ErrKind, Tokenizer};

/// A fatal error encountered while flattening a document.
///
/// Wraps the tokenizer error together with where in the text it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    error: bdtok::Error,
    line: usize,
    column: usize,
}

impl ParseError {
    pub(crate) fn locate(error: bdtok::Error, tokenizer: &Tokenizer<'_>) -> Self {
        let (line, column) = tokenizer.line_column(error.position());
        ParseError {
            error,
            line,
            column,
        }
    }

    pub fn kind(&self) -> ErrKind {
        self.error.kind()
    }

    /// Byte offset into the input.
    pub fn position(&self) -> usize {
        self.error.position()
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// The underlying tokenizer error.
    pub fn tokenizer_error(&self) -> &bdtok::Error {
        &self.error
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} at line {}, column {}",
            self.error, self.line, self.column
        )
    }
}

impl core::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.error)
    }
}
