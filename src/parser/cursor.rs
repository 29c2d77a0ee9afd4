//! Single-token lookahead over a stream of raw tokens.
//!
//! The cursor pulls raw `(kind, spelling)` pairs lazily and resolves each
//! one against the symbol table as it comes into position, so an unknown
//! operator is reported only when the parser reaches it.

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{RawKind, RawToken, Token, TokenKind},
};

use super::symbols::SymbolTable;

pub struct TokenCursor<'a> {
    table: &'a SymbolTable,
    source: Box<dyn Iterator<Item = RawToken> + 'a>,
    current: Token,
}

impl<'a> TokenCursor<'a> {
    /// Creates a cursor positioned on the first token of `tokens`.
    pub fn new<I>(table: &'a SymbolTable, tokens: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = RawToken>,
        I::IntoIter: 'a,
    {
        let mut source: Box<dyn Iterator<Item = RawToken> + 'a> = Box::new(tokens.into_iter().fuse());
        let current = resolve(table, source.next())?;

        Ok(TokenCursor {
            table,
            source,
            current,
        })
    }

    pub fn current(&self) -> &Token {
        &self.current
    }

    /// Returns the current token and moves to the next one.
    ///
    /// With `Some(expected)`, fails with `UnexpectedToken` unless the current
    /// token's id is `expected`. Once the end token is reached, advancing
    /// keeps returning it.
    pub fn advance(&mut self, expected: Option<&str>) -> Result<Token, Error> {
        if let Some(expected) = expected {
            if self.current.id() != expected {
                return Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        expected: expected.to_string(),
                        found: self.current.to_string(),
                    },
                    self.current.position,
                ));
            }
        }

        let next = if self.current.kind == TokenKind::End {
            self.current.clone()
        } else {
            resolve(self.table, self.source.next())?
        };
        log::trace!("advance: {} -> {}", self.current, next);

        Ok(std::mem::replace(&mut self.current, next))
    }
}

fn resolve(table: &SymbolTable, raw: Option<RawToken>) -> Result<Token, Error> {
    let Some(raw) = raw else {
        return Ok(Token::end(None));
    };

    let kind = match raw.kind {
        RawKind::Literal => TokenKind::Literal,
        RawKind::Name if table.contains(&raw.spelling) => TokenKind::Operator,
        RawKind::Name => TokenKind::Name,
        RawKind::Operator if table.contains(&raw.spelling) => TokenKind::Operator,
        RawKind::Operator => {
            return Err(Error::new(
                ErrorImpl::UnknownToken {
                    token: raw.spelling,
                },
                raw.position,
            ))
        }
        RawKind::End => return Ok(Token::end(raw.position)),
    };

    Ok(Token::new(kind, raw.spelling, raw.position))
}
