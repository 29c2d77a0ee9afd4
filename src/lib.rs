#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset of a token in the source it was scanned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(pub usize);

/// Finds the line containing byte offset `pos`.
///
/// Returns the 1-based line number, the line text and the offset of
/// `pos` inside that line, or `None` if `pos` is past the end of
/// `source`.
pub fn get_line_at_position(source: &str, pos: usize) -> Option<(usize, String, usize)> {
    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    // End of input: point just past the last character of the last line.
    let last = source.split_inclusive('\n').last().unwrap_or("");
    Some(((line_number - 1).max(1), last.to_string(), last.len()))
}


/// Prints `error` to stderr, pointing at the offending token in `source`.
pub fn display_error(error: &Error, source: &str) {
    /*
        Error: UnexpectedToken (expected `)`, got `(end)`)
           |
        1 | (1 + 2
          | ------^
    */

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }

    let Some(position) = error.get_position() else {
        return;
    };
    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    eprintln!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    eprintln!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = caret_column(&line_text, removed_whitespace, line_pos) + 1;

    eprintln!("{:>padding$} {:->arrows$}", "|", "^");
}

/// Strips the same leading whitespace the lexer skips, returning the rest
/// and the number of bytes removed.
fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start();

    (trimmed, string.len() - trimmed.len())
}

/// Number of characters between the `removed` leading bytes of `line` and
/// byte offset `line_pos`.
fn caret_column(line: &str, removed: usize, line_pos: usize) -> usize {
    line.get(removed..line_pos.max(removed))
        .map_or(0, |text| text.chars().count())
}
