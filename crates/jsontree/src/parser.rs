//! Recursive-descent parser: [`Token`] sequence to [`Value`] tree.
//!
//! Every scope (object or array) scans forward from just inside its opener
//! until it reaches its own closer. Before a position is acted upon, the
//! token there and its successor are checked against [`ILLEGAL_PAIRS`] when
//! both are punctuation. Nested scopes report the position of their closer
//! and the enclosing scan resumes right after it, so all scopes share one
//! cursor into one immutable token slice and every position is visited
//! exactly once.
//!
//! Inside an object only `:` binds anything: the token before it is the key
//! and the token after it (or the container it opens) is the value. Keys,
//! scalars already bound and commas need no action of their own.

use crate::{
    error::ParseError,
    options::ParserOptions,
    token::{Punct, Token},
    value::{Array, Map, Value},
};

/// Adjacent punctuation pairs `(current, next)` that can never appear in a
/// document.
///
/// Pairs missing from this table are accepted at the adjacency level, so for
/// example `[,1]` parses as `[1]`.
pub const ILLEGAL_PAIRS: [(Punct, Punct); 14] = {
    use Punct::{Colon, Comma, LeftBrace, LeftBracket, RightBrace, RightBracket};
    [
        (LeftBrace, Colon),
        (RightBrace, Colon),
        (Colon, RightBrace),
        (Comma, Colon),
        (Colon, Comma),
        (LeftBrace, Comma),
        (Comma, RightBrace),
        (LeftBracket, Colon),
        (Colon, RightBracket),
        (RightBracket, Colon),
        (Comma, RightBracket),
        (LeftBrace, RightBracket),
        (RightBracket, LeftBrace),
        (LeftBrace, LeftBrace),
    ]
};

/// Returns `false` if `current` immediately followed by `next` is one of the
/// [`ILLEGAL_PAIRS`].
#[must_use]
pub fn is_legal_pair(current: Punct, next: Punct) -> bool {
    !ILLEGAL_PAIRS.contains(&(current, next))
}

/// Parses a token sequence with default options.
///
/// # Errors
///
/// [`ParseError::InvalidDocument`] unless the sequence is a single object
/// from its first token to its last, otherwise the first structural error
/// found by the scan.
pub fn parse(tokens: &[Token]) -> Result<Value, ParseError> {
    parse_with(tokens, &ParserOptions::default())
}

/// Parses a token sequence. The result is always a [`Value::Object`].
///
/// # Errors
///
/// See [`parse`].
pub fn parse_with(tokens: &[Token], options: &ParserOptions) -> Result<Value, ParseError> {
    let (Some(first), Some(last)) = (tokens.first(), tokens.last()) else {
        return Err(ParseError::InvalidDocument);
    };
    if !first.is_punct(Punct::LeftBrace) || !last.is_punct(Punct::RightBrace) {
        return Err(ParseError::InvalidDocument);
    }

    let mut parser = Parser::new(tokens, options);
    parser.check_adjacent(0)?;
    let (map, close) = parser.parse_object(0)?;
    if close != tokens.len() - 1 {
        log::trace!("root object closes at {close} of {}", tokens.len());
        return Err(ParseError::InvalidDocument);
    }
    Ok(Value::Object(map))
}

struct Parser<'t> {
    tokens: &'t [Token],
    options: &'t ParserOptions,
    depth: usize,
}

impl<'t> Parser<'t> {
    fn new(tokens: &'t [Token], options: &'t ParserOptions) -> Self {
        Self {
            tokens,
            options,
            depth: 0,
        }
    }

    /// Parses the object whose `{` sits at `open`, returning its entries and
    /// the position of its `}`.
    fn parse_object(&mut self, open: usize) -> Result<(Map, usize), ParseError> {
        self.descend(open)?;
        let mut map = Map::new();
        let mut pos = open + 1;

        loop {
            let token = self.token(pos)?;
            self.check_adjacent(pos)?;

            match token.as_punct() {
                Some(Punct::Colon) => {
                    let key = self.key_before(pos)?;
                    let value_pos = pos + 1;
                    match self.token(value_pos)? {
                        Token::Punct(Punct::LeftBrace) => {
                            self.check_adjacent(value_pos)?;
                            let (nested, close) = self.parse_object(value_pos)?;
                            map.insert(key, Value::Object(nested));
                            pos = close + 1;
                            continue;
                        }
                        Token::Punct(Punct::LeftBracket) => {
                            self.check_adjacent(value_pos)?;
                            let (nested, close) = self.parse_array(value_pos)?;
                            map.insert(key, Value::Array(nested));
                            pos = close + 1;
                            continue;
                        }
                        value => {
                            let value = scalar_value(value)
                                .ok_or_else(|| ParseError::UnexpectedToken(value.clone()))?;
                            map.insert(key, value);
                        }
                    }
                }
                Some(Punct::RightBrace) => {
                    self.ascend();
                    return Ok((map, pos));
                }
                Some(Punct::RightBracket | Punct::LeftBrace | Punct::LeftBracket) => {
                    return Err(ParseError::UnexpectedToken(token.clone()));
                }
                Some(Punct::Comma) | None => {}
            }
            pos += 1;
        }
    }

    /// Parses the array whose `[` sits at `open`, returning its elements and
    /// the position of its `]`.
    fn parse_array(&mut self, open: usize) -> Result<(Array, usize), ParseError> {
        self.descend(open)?;
        let mut items = Array::new();
        let mut pos = open + 1;

        loop {
            let token = self.token(pos)?;
            self.check_adjacent(pos)?;

            match token.as_punct() {
                Some(Punct::LeftBracket) => {
                    let (nested, close) = self.parse_array(pos)?;
                    items.push(Value::Array(nested));
                    pos = close;
                }
                Some(Punct::LeftBrace) => {
                    let (nested, close) = self.parse_object(pos)?;
                    items.push(Value::Object(nested));
                    pos = close;
                }
                Some(Punct::RightBracket) => {
                    self.ascend();
                    return Ok((items, pos));
                }
                Some(Punct::RightBrace | Punct::Colon) => {
                    return Err(ParseError::UnexpectedToken(token.clone()));
                }
                Some(Punct::Comma) => {}
                None => {
                    if let Some(value) = scalar_value(token) {
                        items.push(value);
                    }
                }
            }
            pos += 1;
        }
    }

    fn token(&self, pos: usize) -> Result<&'t Token, ParseError> {
        self.tokens.get(pos).ok_or(ParseError::UnexpectedEndOfInput)
    }

    /// Fails if the tokens at `pos` and `pos + 1` form an illegal pair.
    fn check_adjacent(&self, pos: usize) -> Result<(), ParseError> {
        let current = self.tokens.get(pos).and_then(Token::as_punct);
        let next = self.tokens.get(pos + 1).and_then(Token::as_punct);
        match (current, next) {
            (Some(current), Some(next)) if !is_legal_pair(current, next) => {
                Err(ParseError::invalid_syntax(current, next))
            }
            _ => Ok(()),
        }
    }

    fn key_before(&self, colon: usize) -> Result<alloc::string::String, ParseError> {
        match &self.tokens[colon - 1] {
            Token::String(key) => Ok(key.clone()),
            other => Err(ParseError::ExpectedKey(other.clone())),
        }
    }

    fn descend(&mut self, open: usize) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(ParseError::DepthLimitExceeded(self.options.max_depth));
        }
        log::trace!("entering {} at {open}, depth {}", self.tokens[open], self.depth);
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }
}

fn scalar_value(token: &Token) -> Option<Value> {
    Some(match token {
        Token::Punct(_) => return None,
        Token::String(s) => Value::String(s.clone()),
        Token::Integer(n) => Value::Integer(*n),
        Token::Float(n) => Value::Float(*n),
        Token::Boolean(b) => Value::Boolean(*b),
        Token::Null => Value::Null,
    })
}
