use lazy_static::lazy_static;

use crate::{
    ast::node::Node,
    errors::errors::Error,
    lexer::tokens::{Token, END, LITERAL, NAME},
};

use super::{expr::*, parser::Parser, symbols::SymbolTable};

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Default, Hash)]
pub struct BindingPower(pub u32);

impl BindingPower {
    pub const DEFAULT: BindingPower = BindingPower(0);
    pub const LAMBDA: BindingPower = BindingPower(20);
    pub const TERNARY: BindingPower = BindingPower(20);
    pub const OR: BindingPower = BindingPower(30);
    pub const AND: BindingPower = BindingPower(40);
    pub const NOT: BindingPower = BindingPower(50);
    pub const RELATIONAL: BindingPower = BindingPower(60);
    pub const BITWISE_OR: BindingPower = BindingPower(70);
    pub const BITWISE_XOR: BindingPower = BindingPower(80);
    pub const BITWISE_AND: BindingPower = BindingPower(90);
    pub const SHIFT: BindingPower = BindingPower(100);
    pub const ADDITIVE: BindingPower = BindingPower(110);
    pub const MULTIPLICATIVE: BindingPower = BindingPower(120);
    pub const UNARY: BindingPower = BindingPower(130);
    pub const POWER: BindingPower = BindingPower(140);
    pub const PRIMARY: BindingPower = BindingPower(150);

    /// One less than `self`: recursing at this power lets an operator of
    /// equal power on the right bind first.
    pub fn weaker(self) -> BindingPower {
        BindingPower(self.0.saturating_sub(1))
    }
}

pub type NUDHandler = fn(&mut Parser<'_>, Token, BindingPower) -> Result<Node, Error>;
pub type LEDHandler = fn(&mut Parser<'_>, Token, Node, BindingPower) -> Result<Node, Error>;

lazy_static! {
    /// The operator table every parser uses unless given another one.
    pub static ref SYMBOL_TABLE: SymbolTable = {
        let mut table = SymbolTable::new();
        create_token_lookups(&mut table);
        table
    };
}

pub fn create_token_lookups(table: &mut SymbolTable) {
    table.nud(LITERAL, BindingPower::DEFAULT, parse_primary_expr);
    table.nud(NAME, BindingPower::DEFAULT, parse_primary_expr);
    table.symbol(END, BindingPower::DEFAULT);

    // Punctuation that only ever terminates something
    for id in [")", "]", "}", ",", ":", "else"] {
        table.symbol(id, BindingPower::DEFAULT);
    }

    // Relational, including the two-word `is not` and `not in`
    table.infix("in", BindingPower::RELATIONAL);
    table.led("not", BindingPower::RELATIONAL, parse_not_in_expr);
    table.led("is", BindingPower::RELATIONAL, parse_is_expr);
    for id in ["<", "<=", ">", ">=", "<>", "!=", "=="] {
        table.infix(id, BindingPower::RELATIONAL);
    }

    // Bitwise
    table.infix("|", BindingPower::BITWISE_OR);
    table.infix("^", BindingPower::BITWISE_XOR);
    table.infix("&", BindingPower::BITWISE_AND);
    table.infix("<<", BindingPower::SHIFT);
    table.infix(">>", BindingPower::SHIFT);

    // Additive and multiplicative
    table.infix("+", BindingPower::ADDITIVE);
    table.infix("-", BindingPower::ADDITIVE);
    for id in ["*", "/", "//", "%"] {
        table.infix(id, BindingPower::MULTIPLICATIVE);
    }

    table.prefix("-", BindingPower::UNARY);
    table.prefix("+", BindingPower::UNARY);
    table.prefix("~", BindingPower::UNARY);

    // Logical
    table.infix_r("or", BindingPower::OR);
    table.infix_r("and", BindingPower::AND);
    table.prefix("not", BindingPower::NOT);

    table.infix_r("**", BindingPower::POWER);

    table.led("if", BindingPower::TERNARY, parse_ternary_expr);

    // Member, index and call
    table.led(".", BindingPower::PRIMARY, parse_attribute_expr);
    table.led("[", BindingPower::PRIMARY, parse_index_expr);
    table.led("(", BindingPower::PRIMARY, parse_call_expr);

    // Grouping and collection literals
    table.nud("(", BindingPower::DEFAULT, parse_tuple_expr);
    table.nud("[", BindingPower::DEFAULT, parse_list_expr);
    table.nud("{", BindingPower::DEFAULT, parse_dict_expr);

    table.symbol("lambda", BindingPower::LAMBDA);
    table.nud("lambda", BindingPower::DEFAULT, parse_lambda_expr);

    for id in ["None", "True", "False"] {
        table.constant(id);
    }
}
