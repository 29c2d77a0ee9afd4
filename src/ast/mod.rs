//! Abstract Syntax Tree for expressions.
//!
//! A parsed expression is a single [`node::Node`] tree. Every variant owns
//! its children; there is no sharing between subtrees.
//!
//! Nodes render as s-expressions (`(+ (literal 1) (name x))`) through their
//! `Display` implementation, which is what the CLI prints and what the tests
//! compare against.

pub mod node;
