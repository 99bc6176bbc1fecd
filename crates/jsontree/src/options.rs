/// Configuration options for the tokenizer and parser.
///
/// # Examples
///
/// ```rust
/// use jsontree::{parse_document_with, ParserOptions};
///
/// let options = ParserOptions {
///     allow_unicode_whitespace: true,
///     ..Default::default()
/// };
/// assert!(parse_document_with("{\u{3000}}".as_bytes(), &options).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Whether `true`, `false` and `null` must end at a word boundary.
    ///
    /// When enabled, a literal immediately followed by an ASCII letter, digit
    /// or `_` is not recognized, so `truex` is rejected at its first
    /// character. When disabled, the literal is accepted on a fixed-length
    /// match and the trailing characters are lexed on their own.
    ///
    /// # Default
    ///
    /// `true`
    pub strict_literal_boundaries: bool,

    /// Whether to skip any Unicode whitespace between tokens.
    ///
    /// By default only the four whitespace characters defined by JSON are
    /// skipped: space (U+0020), line feed (U+000A), carriage return (U+000D)
    /// and horizontal tab (U+0009).
    ///
    /// # Default
    ///
    /// `false`
    pub allow_unicode_whitespace: bool,

    /// Maximum nesting depth of objects and arrays. The root object counts as
    /// depth 1.
    ///
    /// Well-formed documents nested deeper than this are rejected with
    /// [`ParseError::DepthLimitExceeded`](crate::ParseError::DepthLimitExceeded)
    /// instead of parsing. Raise the limit to accept them; the parser recurses
    /// once per level, so very large limits trade that guarantee for stack
    /// usage.
    ///
    /// # Default
    ///
    /// `128`
    pub max_depth: usize,
}

impl ParserOptions {
    /// Default nesting limit.
    pub const DEFAULT_MAX_DEPTH: usize = 128;
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            strict_literal_boundaries: true,
            allow_unicode_whitespace: false,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
