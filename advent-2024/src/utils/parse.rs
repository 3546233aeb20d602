//! Input parsing helpers shared by the puzzle parsers

use std::fmt::Display;
use std::str::FromStr;
use std::sync::LazyLock;

use aoc_solver::ParseError;
use regex::Regex;

/// Convert any displayable error into `ParseError::InvalidFormat`
pub fn invalid_input(err: impl Display) -> ParseError {
    ParseError::InvalidFormat(err.to_string())
}

static INTEGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-?\d+").expect("integer regex"));

/// Extract every (optionally negative) integer embedded in `text`
///
/// A `-` only counts as a sign when it directly precedes a digit.
/// Runs too large for `T` are skipped.
pub fn numbers<T>(text: &str) -> impl Iterator<Item = T> + '_
where
    T: FromStr,
{
    INTEGER
        .find_iter(text)
        .filter_map(|m| m.as_str().parse().ok())
}

/// Parse each non-empty line with `f`, tagging failures with the 1-based line number
pub fn lines_with<'a, T, F>(input: &'a str, mut f: F) -> Result<Vec<T>, ParseError>
where
    F: FnMut(&'a str) -> anyhow::Result<T>,
{
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            f(line.trim()).map_err(|e| invalid_input(format!("(line {}) {}", idx + 1, e)))
        })
        .collect()
}
