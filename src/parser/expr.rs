use crate::{
    ast::node::Node,
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind, NAME},
};

use super::{
    lookups::BindingPower,
    parser::Parser,
    symbols::{missing_infix, missing_prefix},
};

pub fn parse_expr(parser: &mut Parser<'_>, bp: BindingPower) -> Result<Node, Error> {
    parser.enter()?;
    let result = climb(parser, bp);
    parser.leave();

    result
}

fn climb(parser: &mut Parser<'_>, bp: BindingPower) -> Result<Node, Error> {
    let table = parser.table();

    // First parse NUD
    let token = parser.advance()?;
    log::trace!("nud {} (bp {})", token, bp.0);
    let mut left = match table.get(token.id()) {
        Some(symbol) => symbol.nud(parser, token)?,
        None => return Err(missing_prefix(&token)),
    };

    // While the current token binds tighter than bp, it takes left as its left operand
    while parser.current_binding_power() > bp {
        let token = parser.advance()?;
        log::trace!("led {} (bp {})", token, bp.0);
        left = match table.get(token.id()) {
            Some(symbol) => symbol.led(parser, token, left)?,
            None => return Err(missing_infix(&token)),
        };
    }

    Ok(left)
}

pub fn parse_primary_expr(
    _parser: &mut Parser<'_>,
    token: Token,
    _bp: BindingPower,
) -> Result<Node, Error> {
    match token.kind {
        TokenKind::Literal => Ok(Node::Literal(token.value)),
        TokenKind::Name => Ok(Node::Name(token.value)),
        _ => Err(missing_prefix(&token)),
    }
}

pub fn parse_constant_expr(
    _parser: &mut Parser<'_>,
    token: Token,
    _bp: BindingPower,
) -> Result<Node, Error> {
    Ok(Node::Literal(token.value))
}

pub fn parse_prefix_expr(
    parser: &mut Parser<'_>,
    token: Token,
    bp: BindingPower,
) -> Result<Node, Error> {
    let operand = parse_expr(parser, bp)?;

    Ok(Node::unary(token.value, operand))
}

pub fn parse_binary_expr(
    parser: &mut Parser<'_>,
    token: Token,
    left: Node,
    bp: BindingPower,
) -> Result<Node, Error> {
    let right = parse_expr(parser, bp)?;

    Ok(Node::binary(token.value, left, right))
}

pub fn parse_binary_right_expr(
    parser: &mut Parser<'_>,
    token: Token,
    left: Node,
    bp: BindingPower,
) -> Result<Node, Error> {
    let right = parse_expr(parser, bp.weaker())?;

    Ok(Node::binary(token.value, left, right))
}

/// `a is b` and `a is not b`
pub fn parse_is_expr(
    parser: &mut Parser<'_>,
    _token: Token,
    left: Node,
    bp: BindingPower,
) -> Result<Node, Error> {
    let operator = if parser.current_token_id() == "not" {
        parser.advance()?;
        "is not"
    } else {
        "is"
    };
    let right = parse_expr(parser, bp)?;

    Ok(Node::binary(operator, left, right))
}

/// `a not in b`; infix `not` is only valid in front of `in`.
pub fn parse_not_in_expr(
    parser: &mut Parser<'_>,
    _token: Token,
    left: Node,
    bp: BindingPower,
) -> Result<Node, Error> {
    parser.expect("in")?;
    let right = parse_expr(parser, bp)?;

    Ok(Node::binary("not in", left, right))
}

pub fn parse_ternary_expr(
    parser: &mut Parser<'_>,
    _token: Token,
    left: Node,
    _bp: BindingPower,
) -> Result<Node, Error> {
    let condition = parse_expr(parser, BindingPower::DEFAULT)?;
    parser.expect("else")?;
    let otherwise = parse_expr(parser, BindingPower::DEFAULT)?;

    Ok(Node::Ternary {
        then: Box::new(left),
        condition: Box::new(condition),
        otherwise: Box::new(otherwise),
    })
}

pub fn parse_attribute_expr(
    parser: &mut Parser<'_>,
    _token: Token,
    left: Node,
    _bp: BindingPower,
) -> Result<Node, Error> {
    let name = parser.expect(NAME)?.value;

    Ok(Node::Attribute {
        object: Box::new(left),
        name,
    })
}

pub fn parse_index_expr(
    parser: &mut Parser<'_>,
    _token: Token,
    left: Node,
    _bp: BindingPower,
) -> Result<Node, Error> {
    let index = parse_expr(parser, BindingPower::DEFAULT)?;
    parser.expect("]")?;

    Ok(Node::Index {
        object: Box::new(left),
        index: Box::new(index),
    })
}

pub fn parse_call_expr(
    parser: &mut Parser<'_>,
    _token: Token,
    left: Node,
    _bp: BindingPower,
) -> Result<Node, Error> {
    let (arguments, _) = parse_sequence(parser, ")", |parser| {
        parse_expr(parser, BindingPower::DEFAULT)
    })?;

    Ok(Node::Call {
        callee: Box::new(left),
        arguments,
    })
}

/// `(x)` is just `x`; `()`, `(x,)` and `(x, y)` are tuples.
pub fn parse_tuple_expr(
    parser: &mut Parser<'_>,
    _token: Token,
    _bp: BindingPower,
) -> Result<Node, Error> {
    let (mut items, comma) = parse_sequence(parser, ")", |parser| {
        parse_expr(parser, BindingPower::DEFAULT)
    })?;

    if items.len() == 1 && !comma {
        return Ok(items.remove(0));
    }

    Ok(Node::Tuple(items))
}

pub fn parse_list_expr(
    parser: &mut Parser<'_>,
    _token: Token,
    _bp: BindingPower,
) -> Result<Node, Error> {
    let (items, _) = parse_sequence(parser, "]", |parser| {
        parse_expr(parser, BindingPower::DEFAULT)
    })?;

    Ok(Node::List(items))
}

pub fn parse_dict_expr(
    parser: &mut Parser<'_>,
    _token: Token,
    _bp: BindingPower,
) -> Result<Node, Error> {
    let (pairs, _) = parse_sequence(parser, "}", |parser| {
        let key = parse_expr(parser, BindingPower::DEFAULT)?;
        parser.expect(":")?;
        let value = parse_expr(parser, BindingPower::DEFAULT)?;
        Ok((key, value))
    })?;

    Ok(Node::Dict(pairs))
}

pub fn parse_lambda_expr(
    parser: &mut Parser<'_>,
    _token: Token,
    _bp: BindingPower,
) -> Result<Node, Error> {
    let mut parameters = vec![];

    if parser.current_token_id() != ":" {
        loop {
            parameters.push(parser.expect(NAME)?.value);
            if parser.current_token_id() != "," {
                break;
            }
            parser.expect(",")?;
        }
    }

    parser.expect(":")?;
    let body = parse_expr(parser, BindingPower::DEFAULT)?;

    Ok(Node::Lambda {
        parameters,
        body: Box::new(body),
    })
}

/// Parses comma-separated items up to and including `closer`, allowing a
/// trailing comma. Also reports whether any comma was seen.
fn parse_sequence<'a, T, F>(
    parser: &mut Parser<'a>,
    closer: &str,
    mut item: F,
) -> Result<(Vec<T>, bool), Error>
where
    F: FnMut(&mut Parser<'a>) -> Result<T, Error>,
{
    let mut items = vec![];
    let mut comma = false;

    while parser.current_token_id() != closer {
        items.push(item(parser)?);
        if parser.current_token_id() != "," {
            break;
        }
        parser.expect(",")?;
        comma = true;
    }

    parser.expect(closer)?;
    Ok((items, comma))
}
