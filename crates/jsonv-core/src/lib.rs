//! # jsonv-core
//!
//! A small, self-contained JSON parser and the dynamically-typed value model it
//! produces and consumes.
//!
//! Parsing is a single recursive-descent pass over the input with line/column
//! tracking, so malformed documents fail with a positioned [`ParseError`].
//! The resulting [`Value`] tree can be queried with typed accessors and dotted
//! paths, edited in place, and written back out in canonical form.
//!
//! ## Quick start
//!
//! ```rust
//! use jsonv_core::{parse, Value};
//!
//! // Text → tree
//! let doc = parse(r#"{"name":"com.example.tools","keywords":["editor"]}"#).unwrap();
//! assert_eq!(doc.get("name").string_or_empty(), "com.example.tools");
//! assert_eq!(doc.get("keywords").list_or_empty().len(), 1);
//!
//! // Tree → text
//! let mut manifest = Value::new_map();
//! manifest.set_string("name", "com.example.tools").unwrap();
//! manifest.set_bool("autoReferenced", true).unwrap();
//! assert_eq!(
//!     manifest.to_text().unwrap(),
//!     r#"{"name" : "com.example.tools", "autoReferenced" : true}"#
//! );
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the `Value` sum type, accessors, mutators and path lookup
//! - [`parser`] — text → `Value`, strict and best-effort entry points
//! - [`writer`] — `Value` → canonical text
//! - [`config`] — parser settings
//! - [`diagnostics`] — sinks for errors swallowed by [`parse_or_default`]
//! - [`error`] — error types for parse and access failures

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod parser;
pub mod value;
pub mod writer;

pub use config::ParserConfig;
pub use diagnostics::{DiagnosticSink, TracingSink};
pub use error::{ParseError, ValueError};
pub use parser::{parse, parse_or_default, parse_or_default_with, parse_with_config};
pub use value::{Map, Value};
