//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a RawToken instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler that emits the matched
//!   text as a single token
//!
//! These macros reduce boilerplate in the lexer pattern table.

/// Creates a RawToken instance.
///
/// # Arguments
///
/// * `$kind` - The RawKind
/// * `$spelling` - The token's text
/// * `$position` - The byte offset of the token
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(RawKind::Literal, "42", Position(0));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $spelling:expr, $position:expr) => {
        $crate::lexer::tokens::RawToken {
            kind: $kind,
            spelling: String::from($spelling),
            position: Some($position),
        }
    };
}

/// Creates a lexer handler for patterns that map to exactly one token.
///
/// The generated handler pushes a token of the given kind spelled as the
/// matched text and advances the lexer past it.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^[0-9]+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(RawKind::Literal),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer<'_>, matched: &str| {
            let position = $crate::Position(lexer.pos);
            lexer.push($crate::MK_TOKEN!($kind, matched, position));
            lexer.advance_n(matched.len());
        }
    };
}
