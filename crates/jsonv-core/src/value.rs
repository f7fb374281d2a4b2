//! The dynamically-typed JSON value model.
//!
//! A [`Value`] is a closed sum type over the six JSON shapes. Parsed documents
//! and hand-built trees use the same representation, so anything the parser
//! produces can be inspected, edited in place and written back out with
//! [`Value::to_text`].
//!
//! # Accessors come in pairs
//!
//! Every typed accessor exists in a strict and a lenient form:
//!
//! | strict (fails on mismatch) | lenient (never fails)  | lenient default |
//! |----------------------------|------------------------|-----------------|
//! | [`Value::as_string`]       | [`Value::string_or_empty`] | `""`        |
//! | [`Value::as_number`]       | [`Value::number_or_zero`]  | `0.0`       |
//! | [`Value::as_bool`]         | [`Value::bool_or_false`]   | `false`     |
//! | [`Value::as_list`]         | [`Value::list_or_empty`]   | `[]`        |
//! | [`Value::as_map`]          | [`Value::map_or_empty`]    | `{}`        |
//!
//! Neither form converts between variants: a `Number` is never read as a
//! `String` or the other way round.
//!
//! # Numbers
//!
//! All numbers are `f32`. Integers above 2^24 lose precision, e.g. the text
//! `123456789012` reads back as `123456790528.0`.

use std::sync::LazyLock;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{Result, ValueError};
use crate::writer;

/// Key/value storage for [`Value::Map`], iterated in insertion order.
pub type Map = IndexMap<String, Value>;

static NULL: Value = Value::Null;
static EMPTY_MAP: LazyLock<Map> = LazyLock::new(Map::new);

/// A JSON value.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    /// The only numeric representation; integral and fractional input are
    /// not distinguished.
    Number(f32),
    /// Fully escape-decoded text.
    String(String),
    List(Vec<Value>),
    /// Keys are unique. Re-inserting a key replaces the value in place.
    Map(Map),
}

impl Value {
    // ---------------------------------------------------------------------
    // Construction
    // ---------------------------------------------------------------------

    pub fn new_string(value: impl Into<String>) -> Self {
        Value::String(value.into())
    }

    pub fn new_number(value: f32) -> Self {
        Value::Number(value)
    }

    pub fn new_bool(value: bool) -> Self {
        Value::Bool(value)
    }

    pub fn new_null() -> Self {
        Value::Null
    }

    /// An empty list.
    pub fn new_list() -> Self {
        Value::List(Vec::new())
    }

    /// An empty map.
    pub fn new_map() -> Self {
        Value::Map(Map::new())
    }

    /// Explicit conversion from text. Same as [`Value::new_string`].
    pub fn from_string(value: impl Into<String>) -> Self {
        Self::new_string(value)
    }

    /// Explicit conversion from a number. Same as [`Value::new_number`].
    pub fn from_number(value: f32) -> Self {
        Self::new_number(value)
    }

    /// Explicit conversion from a boolean. Same as [`Value::new_bool`].
    pub fn from_bool(value: bool) -> Self {
        Self::new_bool(value)
    }

    /// `None` becomes [`Value::Null`], never an empty string.
    pub fn from_optional_string<S: Into<String>>(value: Option<S>) -> Self {
        match value {
            Some(s) => Value::String(s.into()),
            None => Value::Null,
        }
    }

    // ---------------------------------------------------------------------
    // Type inspection
    // ---------------------------------------------------------------------

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Name of the active variant, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    fn mismatch(&self, expected: &'static str) -> ValueError {
        ValueError::TypeMismatch {
            expected,
            found: self.type_name(),
        }
    }

    // ---------------------------------------------------------------------
    // Strict accessors
    // ---------------------------------------------------------------------

    pub fn as_string(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other.mismatch("string")),
        }
    }

    pub fn as_number(&self) -> Result<f32> {
        match self {
            Value::Number(n) => Ok(*n),
            other => Err(other.mismatch("number")),
        }
    }

    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(other.mismatch("bool")),
        }
    }

    pub fn as_list(&self) -> Result<&[Value]> {
        match self {
            Value::List(items) => Ok(items),
            other => Err(other.mismatch("list")),
        }
    }

    pub fn as_list_mut(&mut self) -> Result<&mut Vec<Value>> {
        match self {
            Value::List(items) => Ok(items),
            other => Err(other.mismatch("list")),
        }
    }

    pub fn as_map(&self) -> Result<&Map> {
        match self {
            Value::Map(map) => Ok(map),
            other => Err(other.mismatch("map")),
        }
    }

    pub fn as_map_mut(&mut self) -> Result<&mut Map> {
        match self {
            Value::Map(map) => Ok(map),
            other => Err(other.mismatch("map")),
        }
    }

    // ---------------------------------------------------------------------
    // Lenient accessors
    // ---------------------------------------------------------------------

    pub fn string_or_empty(&self) -> &str {
        match self {
            Value::String(s) => s,
            _ => "",
        }
    }

    pub fn number_or_zero(&self) -> f32 {
        match self {
            Value::Number(n) => *n,
            _ => 0.0,
        }
    }

    pub fn bool_or_false(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            _ => false,
        }
    }

    pub fn list_or_empty(&self) -> &[Value] {
        match self {
            Value::List(items) => items,
            _ => &[],
        }
    }

    pub fn map_or_empty(&self) -> &Map {
        match self {
            Value::Map(map) => map,
            _ => &EMPTY_MAP,
        }
    }

    // ---------------------------------------------------------------------
    // Keyed access
    // ---------------------------------------------------------------------

    /// Strict single-key lookup.
    ///
    /// Fails with [`ValueError::TypeMismatch`] on anything but a map and with
    /// [`ValueError::MissingKey`] when the key is absent. Use
    /// [`Value::contains_key`] first, or [`Value::get`] for a lookup that
    /// cannot fail.
    pub fn get_key(&self, key: &str) -> Result<&Value> {
        self.as_map()?
            .get(key)
            .ok_or_else(|| ValueError::MissingKey(key.to_string()))
    }

    /// `false` for missing keys and for anything that is not a map.
    pub fn contains_key(&self, key: &str) -> bool {
        match self {
            Value::Map(map) => map.contains_key(key),
            _ => false,
        }
    }

    /// Insert or replace `key`.
    ///
    /// A `Null` receiver is first promoted to an empty map. That is the only
    /// implicit variant change the model performs; any other non-map receiver
    /// is a [`ValueError::TypeMismatch`].
    pub fn set(&mut self, key: impl Into<String>, value: Value) -> Result<()> {
        if self.is_null() {
            *self = Value::new_map();
        }
        self.as_map_mut()?.insert(key.into(), value);
        Ok(())
    }

    /// Remove `key`, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Result<Option<Value>> {
        Ok(self.as_map_mut()?.shift_remove(key))
    }

    /// Nested lookup along a `.`-separated path of map keys.
    ///
    /// Returns [`Value::Null`] when a segment is missing or when an
    /// intermediate node is not a map. Keys that contain `.` cannot be reached
    /// this way; use [`Value::get_key`] for those.
    ///
    /// ```
    /// use jsonv_core::parse;
    ///
    /// let doc = parse(r#"{"dependencies":{"core":"1.2.0"}}"#).unwrap();
    /// assert_eq!(doc.get("dependencies.core").string_or_empty(), "1.2.0");
    /// assert!(doc.get("dependencies.missing.deeper").is_null());
    /// ```
    pub fn get(&self, path: &str) -> &Value {
        let mut current = self;
        for segment in path.split('.') {
            current = match current {
                Value::Map(map) => match map.get(segment) {
                    Some(child) => child,
                    None => return &NULL,
                },
                _ => return &NULL,
            };
        }
        current
    }

    // ---------------------------------------------------------------------
    // List access
    // ---------------------------------------------------------------------

    /// Append to a list. `Null` is not promoted here.
    pub fn push(&mut self, value: Value) -> Result<()> {
        self.as_list_mut()?.push(value);
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Convenience mutators
    // ---------------------------------------------------------------------

    pub fn add_string(&mut self, value: impl Into<String>) -> Result<()> {
        self.push(Value::new_string(value))
    }

    pub fn add_optional_string<S: Into<String>>(&mut self, value: Option<S>) -> Result<()> {
        self.push(Value::from_optional_string(value))
    }

    pub fn add_number(&mut self, value: f32) -> Result<()> {
        self.push(Value::new_number(value))
    }

    pub fn add_bool(&mut self, value: bool) -> Result<()> {
        self.push(Value::new_bool(value))
    }

    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        self.set(key, Value::new_string(value))
    }

    pub fn set_optional_string<S: Into<String>>(
        &mut self,
        key: impl Into<String>,
        value: Option<S>,
    ) -> Result<()> {
        self.set(key, Value::from_optional_string(value))
    }

    pub fn set_number(&mut self, key: impl Into<String>, value: f32) -> Result<()> {
        self.set(key, Value::new_number(value))
    }

    pub fn set_bool(&mut self, key: impl Into<String>, value: bool) -> Result<()> {
        self.set(key, Value::new_bool(value))
    }

    // ---------------------------------------------------------------------
    // Serialization
    // ---------------------------------------------------------------------

    /// Render the canonical text form. See [`crate::writer`].
    pub fn to_text(&self) -> Result<String> {
        let mut out = String::new();
        writer::write_value(self, &mut out)?;
        Ok(out)
    }
}
