//! Lexical analysis module.
//!
//! The parser only needs a stream of `(kind, spelling)` pairs; this module
//! provides one such stream for a small Python-flavoured expression
//! language. It handles:
//!
//! - Tokenization of source text using an ordered table of regex patterns
//! - Recognition of identifiers, numeric and string literals, and operators
//! - Byte offsets on every token for error reporting
//! - Comments and whitespace handling
//!
//! Keywords are not recognised here: they are scanned as names and resolved
//! by the parser's symbol table.

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
