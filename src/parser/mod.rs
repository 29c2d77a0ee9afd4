//! Parser module for building expression trees.
//!
//! This module contains a top-down operator precedence (Pratt) parser that
//! turns a stream of tokens into a single expression tree. It handles:
//!
//! - Prefix, infix, right-associative and two-word operators
//! - Grouping, tuple, list and dict literals
//! - Attribute access, indexing and calls
//! - The `if`/`else` ternary and `lambda`
//!
//! Every token id maps to a symbol carrying a binding power and optional
//! NUD (null denotation, prefix) and LED (left denotation, infix) handlers.
//! The default table is built once in [`lookups::SYMBOL_TABLE`].

pub mod cursor;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod symbols;
