use thiserror::Error;

use crate::token::{Punct, Token};

/// Everything that can go wrong while turning bytes into a [`Value`] tree.
///
/// Errors are reported as soon as they are detected and no partial tree is
/// ever handed back alongside them.
///
/// [`Value`]: crate::Value
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The input is empty, does not start with `{`, does not end with `}`, or
    /// carries tokens after the closing brace of the root object.
    #[error("invalid document: expected a single top-level object")]
    InvalidDocument,
    /// Two adjacent punctuation tokens form an illegal pair.
    #[error("invalid syntax: '{0}' followed by '{1}'")]
    InvalidSyntax(Punct, Punct),
    /// No lexing rule matched the character at `offset`.
    #[error("unexpected character '{ch}' at byte {offset}")]
    UnexpectedCharacter {
        /// The offending character (U+FFFD for invalid UTF-8).
        ch: char,
        /// Byte offset of the character in the input.
        offset: usize,
    },
    /// A string literal opened at `offset` was never closed.
    #[error("unterminated string starting at byte {offset}")]
    UnterminatedString {
        /// Byte offset of the opening quote.
        offset: usize,
    },
    /// A `:` was preceded by something other than a string key.
    #[error("expected a string key before ':', found {0}")]
    ExpectedKey(Token),
    /// A structural token appeared in a scope where it cannot belong.
    #[error("unexpected token {0}")]
    UnexpectedToken(Token),
    /// An object or array was still open when the tokens ran out.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// Containers are nested deeper than the configured limit.
    #[error("nesting depth exceeds the limit of {0}")]
    DepthLimitExceeded(usize),
}

impl ParseError {
    /// Returns `true` if the error was raised by the tokenizer rather than the
    /// parser.
    #[must_use]
    pub fn is_lexical(&self) -> bool {
        matches!(
            self,
            Self::UnexpectedCharacter { .. } | Self::UnterminatedString { .. }
        )
    }

    pub(crate) fn invalid_syntax(current: Punct, next: Punct) -> Self {
        log::trace!("illegal pair '{current}{next}'");
        Self::InvalidSyntax(current, next)
    }
}
