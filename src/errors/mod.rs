//! Error types and error handling for the parser.
//!
//! This module defines the errors produced while scanning and parsing an
//! expression. It includes:
//!
//! - An error structure with optional source position information
//! - One variant per failure kind (unknown token, missing prefix or infix
//!   behavior, unexpected token, unrecognised character)
//! - Error names and suggestions for reporting

pub mod errors;

#[cfg(test)]
mod tests;
