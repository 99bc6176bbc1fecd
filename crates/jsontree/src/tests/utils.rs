use alloc::string::String;
use core::fmt::Write;

use crate::Value;

/// Renders a value as compact JSON text. Strings are written verbatim
/// between quotes, which is exactly what the tokenizer reads back.
pub(crate) fn render(value: &Value) -> String {
    let mut out = String::new();
    render_into(value, &mut out);
    out
}

fn render_into(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Boolean(b) => write!(out, "{b}").unwrap(),
        Value::Integer(n) => write!(out, "{n}").unwrap(),
        Value::Float(n) => write!(out, "{n:?}").unwrap(),
        Value::String(s) => write!(out, "\"{s}\"").unwrap(),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                render_into(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write!(out, "\"{key}\":").unwrap();
                render_into(item, out);
            }
            out.push('}');
        }
    }
}

/// Builds an object value from `(key, value)` pairs.
pub(crate) fn object<const N: usize>(entries: [(&str, Value); N]) -> Value {
    Value::Object(
        entries
            .into_iter()
            .map(|(k, v)| (String::from(k), v))
            .collect(),
    )
}
