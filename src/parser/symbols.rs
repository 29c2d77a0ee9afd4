//! The symbol table: one entry per operator, keyword or token class.
//!
//! Each [`Symbol`] carries the left binding power of its token plus an
//! optional prefix (NUD) and infix (LED) handler. Registering a spelling that
//! is already known merges into the existing entry, so a symbol can be
//! declared as plain punctuation first and given behaviors later.

use std::{collections::HashMap, fmt};

use crate::{
    ast::node::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::Token,
};

use super::{
    expr::{parse_binary_expr, parse_binary_right_expr, parse_constant_expr, parse_prefix_expr},
    lookups::{BindingPower, LEDHandler, NUDHandler},
    parser::Parser,
};

/// A prefix handler together with the power its operand is parsed at.
#[derive(Clone, Copy)]
pub struct Prefix {
    pub handler: NUDHandler,
    pub binding_power: BindingPower,
}

#[derive(Clone)]
pub struct Symbol {
    pub id: String,
    pub binding_power: BindingPower,
    prefix: Option<Prefix>,
    infix: Option<LEDHandler>,
}

impl Symbol {
    fn new(id: &str, binding_power: BindingPower) -> Self {
        Symbol {
            id: id.to_string(),
            binding_power,
            prefix: None,
            infix: None,
        }
    }

    pub fn has_prefix(&self) -> bool {
        self.prefix.is_some()
    }

    pub fn has_infix(&self) -> bool {
        self.infix.is_some()
    }

    /// Runs the prefix handler for `token`, which has just been consumed.
    pub fn nud(&self, parser: &mut Parser<'_>, token: Token) -> Result<Node, Error> {
        match self.prefix {
            Some(prefix) => (prefix.handler)(parser, token, prefix.binding_power),
            None => Err(missing_prefix(&token)),
        }
    }

    /// Runs the infix handler for `token`, which has just been consumed,
    /// with `left` as its left operand.
    pub fn led(&self, parser: &mut Parser<'_>, token: Token, left: Node) -> Result<Node, Error> {
        match self.infix {
            Some(handler) => handler(parser, token, left, self.binding_power),
            None => Err(missing_infix(&token)),
        }
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Symbol")
            .field("id", &self.id)
            .field("binding_power", &self.binding_power)
            .field("prefix", &self.has_prefix())
            .field("infix", &self.has_infix())
            .finish()
    }
}

pub(crate) fn missing_prefix(token: &Token) -> Error {
    Error::new(
        ErrorImpl::MissingPrefixBehavior {
            token: token.to_string(),
        },
        token.position,
    )
}

pub(crate) fn missing_infix(token: &Token) -> Error {
    Error::new(
        ErrorImpl::MissingInfixBehavior {
            token: token.to_string(),
        },
        token.position,
    )
}

#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            symbols: HashMap::new(),
        }
    }

    /// Registers `id`, or raises the binding power of an existing entry to
    /// `max(existing, binding_power)`.
    pub fn symbol(&mut self, id: &str, binding_power: BindingPower) -> &mut Symbol {
        let symbol = self
            .symbols
            .entry(id.to_string())
            .or_insert_with(|| Symbol::new(id, binding_power));
        symbol.binding_power = symbol.binding_power.max(binding_power);
        symbol
    }

    pub fn get(&self, id: &str) -> Option<&Symbol> {
        self.symbols.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.symbols.contains_key(id)
    }

    /// Left binding power of `id`; unregistered spellings bind with zero.
    pub fn binding_power(&self, id: &str) -> BindingPower {
        self.get(id)
            .map(|symbol| symbol.binding_power)
            .unwrap_or(BindingPower::DEFAULT)
    }

    /// Sets the prefix handler of `id`. `binding_power` is handed to the
    /// handler; it does not change the symbol's left binding power.
    pub fn nud(&mut self, id: &str, binding_power: BindingPower, handler: NUDHandler) {
        self.symbol(id, BindingPower::DEFAULT).prefix = Some(Prefix {
            handler,
            binding_power,
        });
    }

    /// Sets the infix handler of `id` and raises its binding power.
    pub fn led(&mut self, id: &str, binding_power: BindingPower, handler: LEDHandler) {
        self.symbol(id, binding_power).infix = Some(handler);
    }

    /// Left-associative binary operator.
    pub fn infix(&mut self, id: &str, binding_power: BindingPower) {
        self.led(id, binding_power, parse_binary_expr);
    }

    /// Right-associative binary operator.
    pub fn infix_r(&mut self, id: &str, binding_power: BindingPower) {
        self.led(id, binding_power, parse_binary_right_expr);
    }

    /// Unary operator whose operand is parsed at `binding_power`.
    pub fn prefix(&mut self, id: &str, binding_power: BindingPower) {
        self.nud(id, binding_power, parse_prefix_expr);
    }

    /// Keyword that stands for a literal value.
    pub fn constant(&mut self, id: &str) {
        self.nud(id, BindingPower::DEFAULT, parse_constant_expr);
    }
}
