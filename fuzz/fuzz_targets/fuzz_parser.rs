#![no_main]
use std::cell::RefCell;

use arbitrary::{Arbitrary, Unstructured};
use jsontree::{ParseError, ParserOptions, parse_document_with, tokenize_with};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde_json::{Map, Number, Value};

/// Leading option-flag byte.
const HEADER: usize = 1;

thread_local! {
    static RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_os_rng());
}

/// Separators the tokenizer skips: the JSON four always, the rest only with
/// `allow_unicode_whitespace`.
static SEPARATORS: &[&str] = &[" ", "\t", "\n", "\r", "\u{00A0}", "\u{2028}", "\u{3000}"];

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size >= HEADER && !seed.is_multiple_of(10) {
        return fuzzer_mutate(data, size, max_size);
    }

    RNG.with(|rng| {
        let rng = &mut *rng.borrow_mut();
        let mut out = vec![rng.random::<u8>() & 0x07];
        let pad = |rng: &mut SmallRng, out: &mut Vec<u8>| {
            for _ in 0..rng.random_range(0..3) {
                out.extend_from_slice(SEPARATORS[rng.random_range(0..SEPARATORS.len())].as_bytes());
            }
        };

        pad(rng, &mut out);
        out.extend(generate_document(rng, size.max(16)));
        pad(rng, &mut out);

        let len = out.len().min(max_size);
        data[..len].copy_from_slice(&out[..len]);
        len
    })
}

/// Serializes a random object document. Strings may contain `\"` escapes,
/// which the tokenizer does not decode and so ends the string early.
fn generate_document(rng: &mut SmallRng, budget: usize) -> Vec<u8> {
    let seed: Vec<u8> = (0..budget).map(|_| rng.random()).collect();
    let mut u = Unstructured::new(&seed);
    let root = match Node::arbitrary(&mut u).map(|n| n.0) {
        Ok(Value::Object(map)) => Value::Object(map),
        Ok(other) => Value::Object(Map::from_iter([("v".to_owned(), other)])),
        Err(_) => Value::Object(Map::new()),
    };
    serde_json::to_vec(&root).unwrap_or_default()
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

/// A document node limited to what the grammar has: `i64` and finite `f64`
/// numbers, strings, literals and containers.
struct Node(Value);

impl<'a> Arbitrary<'a> for Node {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let value = match u.choose_index(10)? {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => Value::from(u.arbitrary::<i64>()?),
            3 => Number::from_f64(u.arbitrary()?).map_or(Value::Null, Value::Number),
            4..=5 => Value::String(u.arbitrary()?),
            6..=7 => Value::Array(
                u.arbitrary_iter::<Node>()?
                    .map(|n| n.map(|n| n.0))
                    .collect::<arbitrary::Result<_>>()?,
            ),
            _ => Value::Object(
                u.arbitrary_iter::<(String, Node)>()?
                    .map(|e| e.map(|(k, n)| (k, n.0)))
                    .collect::<arbitrary::Result<_>>()?,
            ),
        };
        Ok(Node(value))
    }
}

fn parser(data: &[u8]) {
    let Some((&flags, data)) = data.split_first() else {
        return;
    };

    let options = ParserOptions {
        strict_literal_boundaries: flags & 1 == 0,
        allow_unicode_whitespace: flags & 2 != 0,
        max_depth: if flags & 4 != 0 { 8 } else { ParserOptions::DEFAULT_MAX_DEPTH },
    };

    let result = parse_document_with(data, &options);

    // A lexical failure must be the tokenizer's own verdict, and anything
    // accepted must have an object root.
    match &result {
        Ok(value) => {
            assert!(value.is_object());
            assert!(value.depth() <= options.max_depth);
        }
        Err(err) if err.is_lexical() => {
            assert_eq!(tokenize_with(data, &options).as_ref().err(), Some(err));
        }
        Err(ParseError::InvalidDocument) if data.is_empty() => {}
        Err(_) => assert!(tokenize_with(data, &options).is_ok()),
    }
}

fuzz_target!(|data: &[u8]| parser(data));
