use std::fmt::Display;

use crate::Position;

/// Lookup key of the symbol shared by every literal token.
pub const LITERAL: &str = "(literal)";
/// Lookup key of the symbol shared by every identifier token.
pub const NAME: &str = "(name)";
/// Lookup key and spelling of the end-of-input token.
pub const END: &str = "(end)";

/// Kind of a token as it comes out of the lexer, before the symbol table
/// has been consulted.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum RawKind {
    Literal,
    Name,
    Operator,
    End,
}

/// A `(kind, spelling)` pair produced by a lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct RawToken {
    pub kind: RawKind,
    pub spelling: String,
    pub position: Option<Position>,
}

impl RawToken {
    pub fn new(kind: RawKind, spelling: impl Into<String>) -> Self {
        RawToken {
            kind,
            spelling: spelling.into(),
            position: None,
        }
    }

    pub fn literal(spelling: impl Into<String>) -> Self {
        RawToken::new(RawKind::Literal, spelling)
    }

    pub fn name(spelling: impl Into<String>) -> Self {
        RawToken::new(RawKind::Name, spelling)
    }

    pub fn operator(spelling: impl Into<String>) -> Self {
        RawToken::new(RawKind::Operator, spelling)
    }

    pub fn end() -> Self {
        RawToken::new(RawKind::End, END)
    }
}

/// Kind of a token once resolved against the symbol table.
///
/// Keywords such as `and` or `lambda` are scanned as names but resolve to
/// [`TokenKind::Operator`] because they have a symbol of their own.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Literal,
    Name,
    Operator,
    End,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Option<Position>,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, position: Option<Position>) -> Self {
        Token {
            kind,
            value: value.into(),
            position,
        }
    }

    pub fn end(position: Option<Position>) -> Self {
        Token::new(TokenKind::End, END, position)
    }

    /// The key this token's behavior is registered under.
    pub fn id(&self) -> &str {
        match self.kind {
            TokenKind::Literal => LITERAL,
            TokenKind::Name => NAME,
            TokenKind::Operator => &self.value,
            TokenKind::End => END,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
