//! Parser configuration.

/// Default bound on array/object nesting.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Settings for a single parse call.
///
/// The parser recurses once per nested array or object, so `max_depth` bounds
/// stack usage on hostile input. Exceeding it is an ordinary positioned parse
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    pub max_depth: usize,
}

impl ParserConfig {
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}
