use crate::{error::InterpretError, interpreter::lexer::Token};

/// An immutable position into a token sequence.
///
/// Every parse step takes a marker and returns a new marker advanced past the
/// tokens it consumed; markers are never mutated in place. This keeps the
/// evaluator re-entrant and makes one-token lookahead trivial, with no hidden
/// state between calls.
#[derive(Debug, Clone, Copy)]
pub struct TokenMarker<'a> {
    tokens: &'a [Token],
    cursor: usize,
}

impl<'a> TokenMarker<'a> {
    /// Creates a marker at the start of `tokens`.
    #[must_use]
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, cursor: 0 }
    }

    /// Returns the token under the cursor, or `None` when the sequence is
    /// exhausted.
    #[must_use]
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.cursor)
    }

    /// Returns a marker advanced past the current token.
    #[must_use]
    pub const fn advance(self) -> Self {
        Self { tokens: self.tokens,
               cursor: self.cursor + 1, }
    }

    /// Reads the current token and returns it together with the advanced
    /// marker.
    ///
    /// # Errors
    /// Returns [`InterpretError::UnexpectedEndOfInput`] when the sequence is
    /// exhausted.
    pub fn read(self) -> Result<(&'a Token, Self), InterpretError> {
        match self.current() {
            Some(token) => Ok((token, self.advance())),
            None => Err(InterpretError::UnexpectedEndOfInput),
        }
    }
}
