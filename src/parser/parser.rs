//! Parser state and entry points.
//!
//! The Parser owns a token cursor and borrows the symbol table that
//! decides, for every token, its binding power and its prefix and infix
//! handlers. The precedence-climbing loop itself lives in
//! [`super::expr::parse_expr`].

use crate::{
    ast::node::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::tokenize,
        tokens::{RawToken, Token, END},
    },
};

use super::{
    cursor::TokenCursor,
    expr::parse_expr,
    lookups::{BindingPower, SYMBOL_TABLE},
    symbols::SymbolTable,
};

/// How many [`Parser::parse_expr`] calls may be active at once. Every
/// operand, group and collection item nests one level deeper, and going past
/// this fails with `NestingTooDeep` instead of exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser<'a> {
    /// Lookahead over the raw token stream
    cursor: TokenCursor<'a>,
    /// Binding powers and handlers, keyed by token id
    table: &'a SymbolTable,
    /// Active `parse_expr` calls
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `tokens` using the default symbol table.
    pub fn new<I>(tokens: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = RawToken>,
        I::IntoIter: 'a,
    {
        Parser::with_table(tokens, &SYMBOL_TABLE)
    }

    /// Creates a parser over `tokens` using a caller-built symbol table.
    ///
    /// Fails if the first token cannot be resolved against `table`.
    pub fn with_table<I>(tokens: I, table: &'a SymbolTable) -> Result<Self, Error>
    where
        I: IntoIterator<Item = RawToken>,
        I::IntoIter: 'a,
    {
        Ok(Parser {
            cursor: TokenCursor::new(table, tokens)?,
            table,
            depth: 0,
        })
    }

    pub fn table(&self) -> &'a SymbolTable {
        self.table
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.cursor.current()
    }

    /// Returns the id of the current token (its spelling for operators).
    pub fn current_token_id(&self) -> &str {
        self.current_token().id()
    }

    /// Left binding power of the current token.
    pub fn current_binding_power(&self) -> BindingPower {
        self.table.binding_power(self.current_token_id())
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Result<Token, Error> {
        self.cursor.advance(None)
    }

    /// Consumes the current token if its id is `expected`, otherwise fails
    /// with `UnexpectedToken`.
    pub fn expect(&mut self, expected: &str) -> Result<Token, Error> {
        self.cursor.advance(Some(expected))
    }

    /// Parses one expression whose operators all bind tighter than `bp`.
    pub fn parse_expr(&mut self, bp: BindingPower) -> Result<Node, Error> {
        parse_expr(self, bp)
    }

    pub(crate) fn enter(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.current_token().position,
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth -= 1;
    }
}

/// Parses `tokens` as exactly one expression with the default symbol table.
pub fn parse<'a, I>(tokens: I) -> Result<Node, Error>
where
    I: IntoIterator<Item = RawToken>,
    I::IntoIter: 'a,
{
    parse_with_table(tokens, &SYMBOL_TABLE)
}

/// Parses `tokens` as exactly one expression with `table`.
///
/// Anything left over after the expression is an error.
pub fn parse_with_table<'a, I>(tokens: I, table: &'a SymbolTable) -> Result<Node, Error>
where
    I: IntoIterator<Item = RawToken>,
    I::IntoIter: 'a,
{
    let mut parser = Parser::with_table(tokens, table)?;
    let node = parser.parse_expr(BindingPower::DEFAULT)?;
    parser.expect(END)?;

    log::debug!("parsed {}", node);
    Ok(node)
}

/// Tokenizes and parses `source`.
pub fn parse_str(source: &str) -> Result<Node, Error> {
    parse(tokenize(source)?)
}
