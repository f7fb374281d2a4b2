//! Canonical text writer.
//!
//! Walks a [`Value`] depth-first and appends its canonical form to a `String`:
//!
//! - `null`, `true`, `false`
//! - numbers as the shortest decimal text that reads back to the same `f32`,
//!   never in exponent form (`2`, `0.5`, `123456790000`)
//! - strings quoted, with `"` `\` and control characters escaped; everything
//!   else, including `/` and non-ASCII, written as-is
//! - lists as `[a, b]`
//! - maps as `{"key" : value, "other" : value}` in insertion order
//!
//! The output is always accepted by [`crate::parse`], and parsing it yields a
//! tree equal to the one written.

use std::fmt::Write;

use crate::error::{Result, ValueError};
use crate::value::{Map, Value};

const ITEM_SEPARATOR: &str = ", ";
const KEY_SEPARATOR: &str = " : ";

/// Append the canonical text of `value` to `out`.
///
/// Fails with [`ValueError::Malformed`] if the tree holds a number that has
/// no JSON spelling (NaN or an infinity). Nothing the parser produces can
/// trigger this; it only guards trees assembled by hand.
pub fn write_value(value: &Value, out: &mut String) -> Result<()> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => write_number(*n, out)?,
        Value::String(s) => write_string(s, out),
        Value::List(items) => write_list(items, out)?,
        Value::Map(map) => write_map(map, out)?,
    }
    Ok(())
}

fn write_number(n: f32, out: &mut String) -> Result<()> {
    if !n.is_finite() {
        return Err(ValueError::Malformed(format!(
            "number {n} has no JSON representation"
        )));
    }
    // f32's Display is the shortest round-trip form and never uses exponents.
    let _ = write!(out, "{n}");
    Ok(())
}

fn write_list(items: &[Value], out: &mut String) -> Result<()> {
    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(ITEM_SEPARATOR);
        }
        write_value(item, out)?;
    }
    out.push(']');
    Ok(())
}

fn write_map(map: &Map, out: &mut String) -> Result<()> {
    out.push('{');
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            out.push_str(ITEM_SEPARATOR);
        }
        write_string(key, out);
        out.push_str(KEY_SEPARATOR);
        write_value(value, out)?;
    }
    out.push('}');
    Ok(())
}

/// Quote and escape a string.
pub fn write_string(s: &str, out: &mut String) {
    out.reserve(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
