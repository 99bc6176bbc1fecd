//! Lexical tokens shared between the tokenizer and the parser.

use alloc::string::String;
use core::fmt;

/// One of the six structural characters of JSON.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Punct {
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `,`
    Comma,
    /// `:`
    Colon,
}

impl Punct {
    /// Maps a structural character to its punctuation kind.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '{' => Some(Self::LeftBrace),
            '}' => Some(Self::RightBrace),
            '[' => Some(Self::LeftBracket),
            ']' => Some(Self::RightBracket),
            ',' => Some(Self::Comma),
            ':' => Some(Self::Colon),
            _ => None,
        }
    }

    /// The literal character this punctuation stands for.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::LeftBrace => '{',
            Self::RightBrace => '}',
            Self::LeftBracket => '[',
            Self::RightBracket => ']',
            Self::Comma => ',',
            Self::Colon => ':',
        }
    }
}

impl fmt::Display for Punct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Write::write_char(f, self.as_char())
    }
}

/// A minimal lexical unit, in source order.
///
/// Tokens carry no position information; whitespace never produces one.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Structural punctuation.
    Punct(Punct),
    /// The raw text between two quotes. Escapes are not interpreted.
    String(String),
    /// A numeric literal that reads as a plain `i64`.
    Integer(i64),
    /// A numeric literal that only reads as an `f64`.
    Float(f64),
    /// `true` or `false`.
    Boolean(bool),
    /// `null`.
    Null,
}

impl Token {
    /// Returns the punctuation kind if this is a structural token.
    #[must_use]
    pub fn as_punct(&self) -> Option<Punct> {
        match self {
            Self::Punct(p) => Some(*p),
            _ => None,
        }
    }

    /// Returns `true` if this token is the given punctuation.
    #[must_use]
    pub fn is_punct(&self, punct: Punct) -> bool {
        self.as_punct() == Some(punct)
    }
}

impl From<Punct> for Token {
    fn from(p: Punct) -> Self {
        Self::Punct(p)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Punct(p) => write!(f, "'{p}'"),
            Self::String(s) => write!(f, "\"{s}\""),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n:?}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => f.write_str("null"),
        }
    }
}
