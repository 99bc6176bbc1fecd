//! Tokenizer: raw bytes to a flat [`Token`] sequence.
//!
//! At every scan position the rules are tried in a fixed priority order:
//! quoted string, integer, float, `true`/`false`, `null`, whitespace, and
//! finally a single punctuation character. The first rule that matches emits
//! its token (whitespace emits nothing) and the scan advances past the matched
//! bytes. If nothing matches the whole call fails.
//!
//! Numbers
//! - Integer and float lexing read the same greedy run of `-`, `e`, `.` and
//!   ASCII digits. The run becomes an [`Token::Integer`] if it parses as an
//!   `i64`, otherwise a [`Token::Float`] if it parses as a finite `f64`. A run that
//!   is neither produces no token, and the scan falls through to the later
//!   rules (which will reject it).
//!
//! Strings
//! - A string runs from one `"` to the next. Backslashes are not special, so
//!   `"a\"` is the string `a\`. Contents are decoded as UTF-8 with invalid
//!   sequences replaced by U+FFFD.

use alloc::vec::Vec;

use bstr::ByteSlice;

use crate::{
    error::ParseError,
    options::ParserOptions,
    token::{Punct, Token},
};

/// Tokenizes `input` with default options.
///
/// # Errors
///
/// [`ParseError::UnexpectedCharacter`] when no rule matches a position and
/// [`ParseError::UnterminatedString`] when a string is never closed. No
/// partial token sequence is returned.
///
/// # Examples
///
/// ```
/// use jsontree::{tokenize, Punct, Token};
///
/// let tokens = tokenize(br#"{"n": -1.5e3}"#).unwrap();
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Punct(Punct::LeftBrace),
///         Token::String("n".into()),
///         Token::Punct(Punct::Colon),
///         Token::Float(-1500.0),
///         Token::Punct(Punct::RightBrace),
///     ]
/// );
/// ```
pub fn tokenize(input: &[u8]) -> Result<Vec<Token>, ParseError> {
    tokenize_with(input, &ParserOptions::default())
}

/// Tokenizes `input`.
///
/// # Errors
///
/// See [`tokenize`].
pub fn tokenize_with(input: &[u8], options: &ParserOptions) -> Result<Vec<Token>, ParseError> {
    Tokenizer::new(input, options).run()
}

struct Tokenizer<'a> {
    input: &'a [u8],
    pos: usize,
    options: &'a ParserOptions,
    tokens: Vec<Token>,
}

impl<'a> Tokenizer<'a> {
    fn new(input: &'a [u8], options: &'a ParserOptions) -> Self {
        Self {
            input,
            pos: 0,
            options,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Token>, ParseError> {
        while self.pos < self.input.len() {
            let rest = &self.input[self.pos..];

            if let Some((token, len)) = self.lex_string(rest)? {
                self.emit(token, len);
                continue;
            }
            if let Some((value, len)) = lex_integer(rest) {
                self.emit(Token::Integer(value), len);
                continue;
            }
            if let Some((value, len)) = lex_float(rest) {
                self.emit(Token::Float(value), len);
                continue;
            }
            if let Some((value, len)) = self.lex_bool(rest) {
                self.emit(Token::Boolean(value), len);
                continue;
            }
            if let Some(len) = self.lex_null(rest) {
                self.emit(Token::Null, len);
                continue;
            }

            let (ch, ch_len) = bstr::decode_utf8(rest);
            let ch = ch.unwrap_or(char::REPLACEMENT_CHARACTER);
            if self.is_whitespace(ch) {
                self.pos += ch_len;
                continue;
            }
            if let Some(punct) = Punct::from_char(ch) {
                self.emit(Token::Punct(punct), ch_len);
                continue;
            }

            log::trace!("no lexing rule matches {ch:?} at byte {}", self.pos);
            return Err(ParseError::UnexpectedCharacter {
                ch,
                offset: self.pos,
            });
        }

        log::trace!("tokenized {} bytes into {} tokens", self.input.len(), self.tokens.len());
        Ok(self.tokens)
    }

    fn emit(&mut self, token: Token, len: usize) {
        log::trace!("token {token} at byte {}", self.pos);
        self.tokens.push(token);
        self.pos += len;
    }

    /// Returns the string token and the number of bytes it spans, quotes
    /// included.
    fn lex_string(&self, rest: &[u8]) -> Result<Option<(Token, usize)>, ParseError> {
        if rest.first() != Some(&b'"') {
            return Ok(None);
        }
        let Some(end) = rest[1..].find_byte(b'"') else {
            return Err(ParseError::UnterminatedString { offset: self.pos });
        };
        let contents = rest[1..=end].to_str_lossy().into_owned();
        Ok(Some((Token::String(contents), end + 2)))
    }

    fn lex_bool(&self, rest: &[u8]) -> Option<(bool, usize)> {
        self.lex_literal(rest, b"true")
            .map(|len| (true, len))
            .or_else(|| self.lex_literal(rest, b"false").map(|len| (false, len)))
    }

    fn lex_null(&self, rest: &[u8]) -> Option<usize> {
        self.lex_literal(rest, b"null")
    }

    fn lex_literal(&self, rest: &[u8], literal: &[u8]) -> Option<usize> {
        if !rest.starts_with(literal) {
            return None;
        }
        let continues_word = rest
            .get(literal.len())
            .is_some_and(|b| b.is_ascii_alphanumeric() || *b == b'_');
        if continues_word && self.options.strict_literal_boundaries {
            return None;
        }
        Some(literal.len())
    }

    fn is_whitespace(&self, ch: char) -> bool {
        matches!(ch, ' ' | '\n' | '\r' | '\t')
            || (self.options.allow_unicode_whitespace && ch.is_whitespace())
    }
}

/// Length of the greedy run of number characters at the start of `rest`.
fn numeric_run(rest: &[u8]) -> usize {
    rest.iter()
        .take_while(|b| matches!(b, b'-' | b'e' | b'.' | b'0'..=b'9'))
        .count()
}

fn lex_integer(rest: &[u8]) -> Option<(i64, usize)> {
    let len = numeric_run(rest);
    let text = rest[..len].to_str().ok()?;
    text.parse().ok().map(|value| (value, len))
}

/// Out-of-range runs such as `1e400` are rejected rather than rounded to an
/// infinity.
fn lex_float(rest: &[u8]) -> Option<(f64, usize)> {
    let len = numeric_run(rest);
    let text = rest[..len].to_str().ok()?;
    let value: f64 = text.parse().ok()?;
    value.is_finite().then_some((value, len))
}
