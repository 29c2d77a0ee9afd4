use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Option<Position>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Option<Position>) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// The kind of failure, for callers that want to match on it.
    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> Option<Position> {
        self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::UnknownToken { .. } => "UnknownToken",
            ErrorImpl::MissingPrefixBehavior { .. } => "MissingPrefixBehavior",
            ErrorImpl::MissingInfixBehavior { .. } => "MissingInfixBehavior",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnknownToken { token } => {
                ErrorTip::Suggestion(format!("`{}` is not a known operator", token))
            }
            ErrorImpl::MissingPrefixBehavior { token } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression, is an operand missing?",
                token
            )),
            ErrorImpl::MissingInfixBehavior { token } => ErrorTip::Suggestion(format!(
                "`{}` cannot follow an expression, is an operator missing?",
                token
            )),
            ErrorImpl::UnexpectedToken { expected, found } => {
                ErrorTip::Suggestion(format!("expected `{}`, got `{}`", expected, found))
            }
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "expressions may nest at most {} levels deep",
                limit
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position {
            Some(position) => write!(f, "{} at offset {}", self.internal_error, position.0),
            None => write!(f, "{}", self.internal_error),
        }
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised character: {token:?}")]
    UnrecognisedCharacter { token: String },
    #[error("unknown operator: {token:?}")]
    UnknownToken { token: String },
    #[error("no prefix behavior for {token:?}")]
    MissingPrefixBehavior { token: String },
    #[error("no infix behavior for {token:?}")]
    MissingInfixBehavior { token: String },
    #[error("expected {expected:?}, got {found:?}")]
    UnexpectedToken { expected: String, found: String },
    #[error("expression nested more than {limit} levels deep")]
    NestingTooDeep { limit: usize },
}
