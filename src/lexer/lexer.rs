use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{RawKind, RawToken, END};

pub type RegexHandler = fn(&mut Lexer<'_>, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried in order, first match wins: multi-character operators must come
    // before their single-character prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^#[^\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*").unwrap(), handler: MK_DEFAULT_HANDLER!(RawKind::Name) },
        RegexPattern { regex: Regex::new(r"^[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?").unwrap(), handler: MK_DEFAULT_HANDLER!(RawKind::Literal) },
        RegexPattern { regex: Regex::new(r#"^"([^"\\\n]|\\.)*""#).unwrap(), handler: MK_DEFAULT_HANDLER!(RawKind::Literal) },
        RegexPattern { regex: Regex::new(r"^'([^'\\\n]|\\.)*'").unwrap(), handler: MK_DEFAULT_HANDLER!(RawKind::Literal) },
        RegexPattern { regex: Regex::new(r"^(\*\*|//|<<|>>|<=|>=|<>|!=|==)").unwrap(), handler: MK_DEFAULT_HANDLER!(RawKind::Operator) },
        RegexPattern { regex: Regex::new(r"^[-+*/%~&|^<>()\[\]{},:.=;@]").unwrap(), handler: MK_DEFAULT_HANDLER!(RawKind::Operator) },
    ];
}

pub struct Lexer<'s> {
    tokens: Vec<RawToken>,
    source: &'s str,
    pos: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(source: &'s str) -> Lexer<'s> {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: RawToken) {
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &'s str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn skip_handler(lexer: &mut Lexer<'_>, matched: &str) {
    lexer.advance_n(matched.len());
}

/// Scans `source` into raw tokens, terminated by an end token.
pub fn tokenize(source: &str) -> Result<Vec<RawToken>, Error> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let remainder = lex.remainder();
        let matched = PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(remainder)
                .map(|found| (pattern.handler, found.as_str()))
        });

        match matched {
            Some((handler, text)) => handler(&mut lex, text),
            None => {
                let token = remainder.chars().next().map(String::from).unwrap_or_default();
                return Err(Error::new(
                    ErrorImpl::UnrecognisedCharacter { token },
                    Some(Position(lex.pos)),
                ));
            }
        }
    }

    lex.push(MK_TOKEN!(RawKind::End, END, Position(lex.pos)));
    log::debug!("tokenized {} tokens", lex.tokens.len());

    Ok(lex.tokens)
}
