//! Line lexing and input acquisition.
//!
//! Input is read once into memory; every later stage works on the
//! resulting slice of lines.

use std::io::BufRead;

/// Token marking a vertex with no children.
pub const LEAF_TOKEN: &str = "-";

/// Splits one line into its non-empty whitespace-separated tokens.
///
/// Trailing `\r`/`\n` never end up in a token. An empty or blank line
/// yields no tokens.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.trim_end_matches(['\r', '\n']).split_whitespace().collect()
}

/// True if `token` is a non-empty run of ASCII decimal digits.
///
/// Signs, letters and empty tokens are rejected.
pub fn is_decimal(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a plain decimal token. `None` for anything else, including
/// values that overflow `usize`.
pub fn parse_decimal(token: &str) -> Option<usize> {
    if is_decimal(token) {
        token.parse().ok()
    } else {
        None
    }
}

/// Reads every line of `reader` into memory with line terminators removed.
pub fn read_lines<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    reader
        .lines()
        .map(|line| line.map(|l| l.trim_end_matches('\r').to_string()))
        .collect()
}
