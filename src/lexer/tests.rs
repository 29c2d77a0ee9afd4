//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Identifiers and keywords (both scanned as names)
//! - Numeric literals (integers, floats, exponents)
//! - String literals with either quote style
//! - Operators, including longest-match of multi-character operators
//! - Comments and whitespace
//! - Error cases

use super::{
    lexer::tokenize,
    tokens::{RawKind, RawToken},
};
use crate::{errors::errors::ErrorImpl, Position};

fn kinds_and_spellings(tokens: &[RawToken]) -> Vec<(RawKind, &str)> {
    tokens
        .iter()
        .map(|token| (token.kind, token.spelling.as_str()))
        .collect()
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 _underscore CamelCase").unwrap();

    assert_eq!(
        kinds_and_spellings(&tokens),
        vec![
            (RawKind::Name, "foo"),
            (RawKind::Name, "bar"),
            (RawKind::Name, "baz_123"),
            (RawKind::Name, "_underscore"),
            (RawKind::Name, "CamelCase"),
            (RawKind::End, "(end)"),
        ]
    );
}

#[test]
fn test_tokenize_keywords_are_names() {
    let tokens = tokenize("lambda not and or is in None").unwrap();

    assert!(tokens[..7].iter().all(|token| token.kind == RawKind::Name));
    assert_eq!(tokens[7].kind, RawKind::End);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0 1e10 2.5E-3").unwrap();

    assert_eq!(
        kinds_and_spellings(&tokens),
        vec![
            (RawKind::Literal, "42"),
            (RawKind::Literal, "3.14"),
            (RawKind::Literal, "0"),
            (RawKind::Literal, "1e10"),
            (RawKind::Literal, "2.5E-3"),
            (RawKind::End, "(end)"),
        ]
    );
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hello" 'world' "esc\"aped" 'it''s'"#).unwrap();

    assert_eq!(
        kinds_and_spellings(&tokens),
        vec![
            (RawKind::Literal, r#""hello""#),
            (RawKind::Literal, "'world'"),
            (RawKind::Literal, r#""esc\"aped""#),
            (RawKind::Literal, "'it'"),
            (RawKind::Literal, "'s'"),
            (RawKind::End, "(end)"),
        ]
    );
}

#[test]
fn test_tokenize_multi_character_operators() {
    let tokens = tokenize("** // << >> <= >= <> != ==").unwrap();

    let spellings: Vec<&str> = tokens.iter().map(|t| t.spelling.as_str()).collect();
    assert_eq!(
        spellings,
        vec!["**", "//", "<<", ">>", "<=", ">=", "<>", "!=", "==", "(end)"]
    );
    assert!(tokens[..9].iter().all(|t| t.kind == RawKind::Operator));
}

#[test]
fn test_tokenize_longest_match_without_spaces() {
    let tokens = tokenize("2**3*4").unwrap();

    assert_eq!(
        kinds_and_spellings(&tokens),
        vec![
            (RawKind::Literal, "2"),
            (RawKind::Operator, "**"),
            (RawKind::Literal, "3"),
            (RawKind::Operator, "*"),
            (RawKind::Literal, "4"),
            (RawKind::End, "(end)"),
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = tokenize("a.b[0](x, y): {}").unwrap();

    let spellings: Vec<&str> = tokens.iter().map(|t| t.spelling.as_str()).collect();
    assert_eq!(
        spellings,
        vec!["a", ".", "b", "[", "0", "]", "(", "x", ",", "y", ")", ":", "{", "}", "(end)"]
    );
}

#[test]
fn test_tokenize_comments_and_whitespace() {
    let tokens = tokenize("1 +  # the rest is ignored\n\t2").unwrap();

    assert_eq!(
        kinds_and_spellings(&tokens),
        vec![
            (RawKind::Literal, "1"),
            (RawKind::Operator, "+"),
            (RawKind::Literal, "2"),
            (RawKind::End, "(end)"),
        ]
    );
}

#[test]
fn test_tokenize_positions() {
    let tokens = tokenize("ab + 12").unwrap();

    let positions: Vec<Option<Position>> = tokens.iter().map(|t| t.position).collect();
    assert_eq!(
        positions,
        vec![
            Some(Position(0)),
            Some(Position(3)),
            Some(Position(5)),
            Some(Position(7)),
        ]
    );
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = tokenize("").unwrap();

    assert_eq!(tokens, vec![RawToken {
        kind: RawKind::End,
        spelling: "(end)".to_string(),
        position: Some(Position(0)),
    }]);
}

#[test]
fn test_tokenize_unrecognised_character() {
    let error = tokenize("1 + $").unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
    assert_eq!(error.get_position(), Some(Position(4)));
    assert_eq!(
        error.kind(),
        &ErrorImpl::UnrecognisedCharacter {
            token: "$".to_string()
        }
    );
}

#[test]
fn test_tokenize_unterminated_string() {
    let error = tokenize("'abc").unwrap_err();

    assert_eq!(
        error.kind(),
        &ErrorImpl::UnrecognisedCharacter {
            token: "'".to_string()
        }
    );
}
