//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter {
            token: "$".to_string(),
        },
        Some(Position(10)),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnknownToken {
            token: "=".to_string(),
        },
        Some(Position(42)),
    );

    assert_eq!(error.get_position(), Some(Position(42)));

    let error = Error::new(
        ErrorImpl::UnknownToken {
            token: "=".to_string(),
        },
        None,
    );

    assert_eq!(error.get_position(), None);
}

#[test]
fn test_error_names() {
    let cases = [
        (
            ErrorImpl::UnknownToken {
                token: "=".to_string(),
            },
            "UnknownToken",
        ),
        (
            ErrorImpl::MissingPrefixBehavior {
                token: ")".to_string(),
            },
            "MissingPrefixBehavior",
        ),
        (
            ErrorImpl::MissingInfixBehavior {
                token: "lambda".to_string(),
            },
            "MissingInfixBehavior",
        ),
        (
            ErrorImpl::UnexpectedToken {
                expected: ")".to_string(),
                found: "(end)".to_string(),
            },
            "UnexpectedToken",
        ),
        (ErrorImpl::NestingTooDeep { limit: 256 }, "NestingTooDeep"),
    ];

    for (error_impl, name) in cases {
        assert_eq!(Error::new(error_impl, None).get_error_name(), name);
    }
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter {
            token: "$".to_string(),
        },
        None,
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "else".to_string(),
            found: "(end)".to_string(),
        },
        None,
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "expected `else`, got `(end)`"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::MissingPrefixBehavior {
            token: "(end)".to_string(),
        },
        Some(Position(4)),
    );
    assert_eq!(error.to_string(), "no prefix behavior for \"(end)\" at offset 4");

    let error = Error::new(
        ErrorImpl::MissingInfixBehavior {
            token: "lambda".to_string(),
        },
        None,
    );
    assert_eq!(error.to_string(), "no infix behavior for \"lambda\"");
}

#[test]
fn test_error_kind() {
    let error = Error::new(
        ErrorImpl::UnknownToken {
            token: "@".to_string(),
        },
        None,
    );

    assert!(matches!(error.kind(), ErrorImpl::UnknownToken { token } if token == "@"));
}

#[test]
fn test_error_position_past_u32() {
    let offset = u32::MAX as usize + 1;
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter {
            token: "$".to_string(),
        },
        Some(Position(offset)),
    );

    assert_eq!(error.get_position(), Some(Position(4_294_967_296)));
    assert_eq!(
        error.to_string(),
        "unrecognised character: \"$\" at offset 4294967296"
    );
}

#[test]
fn test_nesting_error_tip() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 256 }, None);

    assert_eq!(error.to_string(), "expression nested more than 256 levels deep");
    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "expressions may nest at most 256 levels deep"),
        _ => panic!("Expected suggestion tip"),
    }
}
