//! Recursive-descent JSON parser.
//!
//! Text is scanned one character at a time by a [`Scanner`] that is created
//! for a single call and dropped at the end of it. There is no token pass:
//! each `parse_*` method looks at the current character, consumes what it
//! owns and leaves the cursor on the first character it does not.
//!
//! # Key design decisions
//!
//! - **Positions**: the scanner keeps 1-based line and column counters.
//!   Column advances per character; a newline bumps the line and resets the
//!   column. Every [`ParseError`] reports where the cursor stood.
//! - **End of input**: explicit bounds checks. Running out of text inside a
//!   construct names that construct (`array`, `object`, `string`,
//!   `unicode escape`, `literal`, `value`).
//! - **No recovery**: the first error aborts the parse. Callers either get a
//!   whole tree or an error, never a truncated tree.
//! - **Keys**: an object key is parsed as a full value and then required to be
//!   a string. Duplicate keys are last-write-wins.
//! - **Numbers**: always `f32`. After `e`/`E` one character is consumed as the
//!   exponent sign even when it is not `+` or `-`, so `1e5` reads as
//!   `100000` and `1ex` fails at conversion.
//! - **Surrogates**: a `\u` high surrogate directly followed by a `\u` low
//!   surrogate is combined; any unpaired half decodes to U+FFFD.
//! - **Trailing input** after the root value is ignored.

use std::str::FromStr;

use crate::config::ParserConfig;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::ParseError;
use crate::value::{Map, Value};

const REPLACEMENT: char = '\u{FFFD}';
const LITERALS: [&str; 3] = ["true", "false", "null"];

/// Parse `text` into a [`Value`] tree with the default [`ParserConfig`].
///
/// # Example
/// ```
/// use jsonv_core::parse;
///
/// let doc = parse(r#"{"name": "com.example.tools", "version": "1.0.0"}"#).unwrap();
/// assert_eq!(doc.get("name").as_string().unwrap(), "com.example.tools");
///
/// let err = parse(r#"{"k": }"#).unwrap_err();
/// assert_eq!((err.line, err.column), (1, 7));
/// ```
pub fn parse(text: &str) -> Result<Value, ParseError> {
    parse_with_config(text, &ParserConfig::default())
}

/// Parse `text` with explicit settings.
pub fn parse_with_config(text: &str, config: &ParserConfig) -> Result<Value, ParseError> {
    let mut scanner = Scanner::new(text, *config);
    let value = scanner.parse_value()?;

    scanner.skip_whitespace();
    if !scanner.at_end() {
        tracing::debug!(
            line = scanner.line,
            column = scanner.column,
            "ignoring trailing input after the root value"
        );
    }
    tracing::trace!(bytes = text.len(), kind = value.type_name(), "parsed JSON document");
    Ok(value)
}

/// Best-effort parse: malformed input is logged as a warning and yields
/// [`Value::Null`].
pub fn parse_or_default(text: &str) -> Value {
    parse_or_default_with(text, &mut TracingSink)
}

/// Best-effort parse reporting through `sink`.
///
/// The sink receives exactly one report per failed call and none on success.
pub fn parse_or_default_with<S>(text: &str, sink: &mut S) -> Value
where
    S: DiagnosticSink + ?Sized,
{
    match parse(text) {
        Ok(value) => value,
        Err(err) => {
            sink.report(&err);
            Value::Null
        }
    }
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Per-call cursor over the input text.
struct Scanner<'a> {
    text: &'a str,
    /// Byte offset of the current character.
    pos: usize,
    line: usize,
    column: usize,
    depth: usize,
    config: ParserConfig,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str, config: ParserConfig) -> Self {
        Self {
            text,
            pos: 0,
            line: 1,
            column: 1,
            depth: 0,
            config,
        }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume the current character, keeping line and column in step.
    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\n' | '\r') = self.peek() {
            self.bump();
        }
    }

    /// Up to five characters from the cursor, for error messages.
    fn snippet(&self) -> String {
        self.rest().chars().take(5).collect()
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError {
            line: self.line,
            column: self.column,
            message: message.into(),
        }
    }

    fn unexpected_end(&self, construct: &str) -> ParseError {
        self.error(format!("unexpected end of input while parsing {construct}"))
    }

    fn enter(&mut self, construct: &str) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.config.max_depth {
            return Err(self.error(format!(
                "nesting too deep while parsing {construct} (limit {})",
                self.config.max_depth
            )));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(self.unexpected_end("value")),
            Some('[') => self.parse_array(),
            Some('{') => self.parse_object(),
            Some('"') => self.parse_string().map(Value::String),
            Some('-' | '0'..='9') => self.parse_number(),
            Some('t' | 'f' | 'n') => self.parse_literal(),
            Some(_) => Err(self.error(format!(
                "cannot parse value starting with '{}'",
                self.snippet()
            ))),
        }
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.bump();
        self.enter("array")?;
        let mut items = Vec::new();

        self.skip_whitespace();
        match self.peek() {
            None => return Err(self.unexpected_end("array")),
            Some(']') => {
                self.bump();
                self.leave();
                return Ok(Value::List(items));
            }
            Some(_) => {}
        }

        loop {
            items.push(self.parse_value()?);
            self.skip_whitespace();
            match self.peek() {
                None => return Err(self.unexpected_end("array")),
                Some(',') => {
                    self.bump();
                    self.skip_whitespace();
                    match self.peek() {
                        None => return Err(self.unexpected_end("array")),
                        Some(']') => return Err(self.error("trailing comma in array")),
                        Some(_) => {}
                    }
                }
                Some(']') => {
                    self.bump();
                    break;
                }
                Some(c) => {
                    return Err(self.error(format!("expected ',' or ']' in array, found '{c}'")))
                }
            }
        }

        self.leave();
        Ok(Value::List(items))
    }

    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.bump();
        self.enter("object")?;
        let mut map = Map::new();

        self.skip_whitespace();
        match self.peek() {
            None => return Err(self.unexpected_end("object")),
            Some('}') => {
                self.bump();
                self.leave();
                return Ok(Value::Map(map));
            }
            Some(_) => {}
        }

        loop {
            self.skip_whitespace();
            let (line, column) = (self.line, self.column);
            let key = match self.parse_value()? {
                Value::String(key) => key,
                other => {
                    return Err(ParseError {
                        line,
                        column,
                        message: format!("object key must be a string, found {}", other.type_name()),
                    })
                }
            };

            self.skip_whitespace();
            match self.peek() {
                None => return Err(self.unexpected_end("object")),
                Some(':') => {
                    self.bump();
                }
                Some(_) => return Err(self.error(format!("missing ':' after object key {key:?}"))),
            }

            let value = self.parse_value()?;
            map.insert(key, value);

            self.skip_whitespace();
            match self.peek() {
                None => return Err(self.unexpected_end("object")),
                Some(',') => {
                    self.bump();
                    self.skip_whitespace();
                    match self.peek() {
                        None => return Err(self.unexpected_end("object")),
                        Some('}') => return Err(self.error("trailing comma in object")),
                        Some(_) => {}
                    }
                }
                Some('}') => {
                    self.bump();
                    break;
                }
                Some(c) => {
                    return Err(self.error(format!("expected ',' or '}}' in object, found '{c}'")))
                }
            }
        }

        self.leave();
        Ok(Value::Map(map))
    }

    /// Parse a quoted string, returning the decoded text.
    fn parse_string(&mut self) -> Result<String, ParseError> {
        self.bump();
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(self.error("unterminated string")),
                Some('"') => return Ok(out),
                Some('\\') => self.parse_escape(&mut out)?,
                Some(c) => out.push(c),
            }
        }
    }

    fn parse_escape(&mut self, out: &mut String) -> Result<(), ParseError> {
        match self.bump() {
            None => return Err(self.unexpected_end("string")),
            Some(c @ ('"' | '\\' | '/')) => out.push(c),
            Some('b') => out.push('\u{08}'),
            Some('f') => out.push('\u{0C}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('u') => {
                let c = self.parse_unicode_escape()?;
                out.push(c);
            }
            Some(c) => return Err(self.error(format!("invalid escape character '{c}'"))),
        }
        Ok(())
    }

    /// Decode the four hex digits after `\u`, pairing surrogates when the
    /// low half follows immediately.
    fn parse_unicode_escape(&mut self) -> Result<char, ParseError> {
        let unit = self.parse_hex4()?;
        let c = match unit {
            0xD800..=0xDBFF => match self.peek_low_surrogate() {
                Some(low) => {
                    for _ in 0..6 {
                        self.bump();
                    }
                    let combined =
                        0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
                    char::from_u32(combined).unwrap_or(REPLACEMENT)
                }
                None => REPLACEMENT,
            },
            0xDC00..=0xDFFF => REPLACEMENT,
            unit => char::from_u32(u32::from(unit)).unwrap_or(REPLACEMENT),
        };
        Ok(c)
    }

    fn parse_hex4(&mut self) -> Result<u16, ParseError> {
        if self.rest().chars().take(4).count() < 4 {
            return Err(self.unexpected_end("unicode escape"));
        }
        let digits: String = self.rest().chars().take(4).collect();
        let mut unit: u16 = 0;
        for _ in 0..4 {
            let digit = self
                .peek()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| self.error(format!("invalid unicode escape '\\u{digits}'")))?;
            self.bump();
            unit = (unit << 4) | digit as u16;
        }
        Ok(unit)
    }

    /// Look ahead for `\uXXXX` holding a low surrogate, without consuming it.
    fn peek_low_surrogate(&self) -> Option<u16> {
        let hex = self.rest().strip_prefix("\\u")?.get(..4)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let unit = u16::from_str_radix(hex, 16).ok()?;
        (0xDC00..=0xDFFF).contains(&unit).then_some(unit)
    }

    /// Consume a run of ASCII digits, reporting whether there was at least one.
    fn eat_digits(&mut self) -> bool {
        let mut any = false;
        while let Some('0'..='9') = self.peek() {
            self.bump();
            any = true;
        }
        any
    }

    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let start = self.pos;

        if self.peek() == Some('-') {
            self.bump();
        }
        if !self.eat_digits() {
            return Err(self.error("expected digit in number"));
        }

        if self.peek() == Some('.') {
            self.bump();
            if !self.eat_digits() {
                return Err(self.error("expected digit after decimal point"));
            }
        }

        if let Some('e' | 'E') = self.peek() {
            self.bump();
            // The sign slot always takes one character, sign or not.
            self.bump();
            self.eat_digits();
        }

        let literal = &self.text[start..self.pos];
        let n: f32 = literal
            .parse()
            .map_err(|_| self.error(format!("cannot convert '{literal}' to a number")))?;
        if !n.is_finite() {
            return Err(self.error(format!("number '{literal}' is out of range")));
        }
        Ok(Value::Number(n))
    }

    fn parse_literal(&mut self) -> Result<Value, ParseError> {
        let rest = self.rest();
        for word in LITERALS {
            if rest.starts_with(word) {
                for _ in 0..word.len() {
                    self.bump();
                }
                return Ok(match word {
                    "true" => Value::Bool(true),
                    "false" => Value::Bool(false),
                    _ => Value::Null,
                });
            }
        }

        if LITERALS.iter().any(|word| word.starts_with(rest)) {
            return Err(self.unexpected_end("literal"));
        }
        Err(self.error(format!("invalid literal starting with '{}'", self.snippet())))
    }
}
