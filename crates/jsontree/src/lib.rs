//! A two-stage JSON document parser.
//!
//! Raw bytes are first split into a flat sequence of [`Token`]s by the
//! [tokenizer](tokenize), then a recursive-descent [parser](parse) turns that
//! sequence into a [`Value`] tree. A document must be a single top-level
//! object; the root of every successful parse is a [`Value::Object`].
//!
//! ```rust
//! use jsontree::{parse_document, Value};
//!
//! let value = parse_document(br#"{"key-l":[[1,2],[3,4]]}"#).unwrap();
//! let list = value.as_object().unwrap()["key-l"].as_array().unwrap();
//! assert_eq!(list[1], Value::Array(vec![Value::Integer(3), Value::Integer(4)]));
//! ```
//!
//! Strings are taken verbatim between quotes (no escape decoding), numbers
//! are read as `i64` when possible and `f64` otherwise, and a fixed table of
//! illegal punctuation pairs ([`ILLEGAL_PAIRS`]) guards the structure.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod options;
mod parser;
mod token;
mod tokenizer;
mod value;

#[cfg(test)]
mod tests;

pub use error::ParseError;
pub use options::ParserOptions;
pub use parser::{ILLEGAL_PAIRS, is_legal_pair, parse, parse_with};
pub use token::{Punct, Token};
pub use tokenizer::{tokenize, tokenize_with};
pub use value::{Array, Map, Value};

/// Tokenizes and parses a complete JSON document with default options.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered; no partial tree is ever
/// returned.
pub fn parse_document(input: &[u8]) -> Result<Value, ParseError> {
    parse_document_with(input, &ParserOptions::default())
}

/// Tokenizes and parses a complete JSON document.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered; no partial tree is ever
/// returned.
pub fn parse_document_with(input: &[u8], options: &ParserOptions) -> Result<Value, ParseError> {
    log::debug!("parsing document of {} bytes", input.len());
    if input.is_empty() {
        log::debug!("rejecting empty document");
        return Err(ParseError::InvalidDocument);
    }

    let result = tokenize_with(input, options).and_then(|tokens| parse_with(&tokens, options));
    match &result {
        Ok(_) => log::debug!("document parsed"),
        Err(err) => log::debug!("document rejected: {err}"),
    }
    result
}
