//! Utility functions and errors for parsing input.

use std::str::FromStr;

use thiserror::Error;

use crate::{PuzzleError, PuzzleResult};

/// A value parsing error with context of the string that was being parsed.
#[derive(Error, Debug)]
#[error("failed to parse value: {string:?}")]
pub struct ParseValueError<E>
where
    E: std::error::Error,
{
    /// The string that was being parsed.
    string: String,
    source: E,
}

/// Parse a string slice into another type.
///
/// This wraps [`str::parse`] and maps errors to [`ParseValueError`].
///
/// # Errors
///
/// Will return a [`ParseValueError`] with the given string as context and
/// [`F::Err`][FromStr::Err] as the source if it's not possible to parse the
/// string into the desired type.
pub fn parse_value<F>(string: &str) -> Result<F, ParseValueError<F::Err>>
where
    F: FromStr,
    F::Err: std::error::Error,
{
    string.parse::<F>().map_err(|source| ParseValueError {
        string: string.to_string(),
        source,
    })
}

/// Parse every whitespace-separated token of a line into another type.
///
/// Tokens are split on any amount of whitespace, so leading and trailing
/// whitespace is ignored.
///
/// # Errors
///
/// Will return a [`ParseValueError`] for the first token that fails to parse.
pub fn parse_whitespace_values<F>(line: &str) -> Result<Vec<F>, ParseValueError<F::Err>>
where
    F: FromStr,
    F::Err: std::error::Error,
{
    line.split_whitespace().map(parse_value).collect()
}

/// A line in an input string caused a parsing error.
#[derive(Error, Debug)]
#[error("failure parsing line {}", .line_index.saturating_add(1))]
pub struct LineError {
    /// The line index, zero based.
    /// This will be formatted to a one-based number for display.
    line_index: usize,
    source: PuzzleError,
}

/// Parse lines with a closure, mapping any line's dynamic error to a
/// [`LineError`].
///
/// The closure is passed each line's zero-based index alongside the line, for
/// parsers that track position; it can be ignored with `_`.
///
/// # Errors
///
/// If parsing a line fails, a [`LineError`] is returned for it, sourcing the
/// original error.
///
/// # Returns
///
/// An iterator of parsing results for each line.
pub fn parse_input_lines<'input, T, F>(
    input: &'input str,
    mut parser: F,
) -> impl Iterator<Item = Result<T, LineError>> + 'input
where
    F: FnMut(usize, &str) -> PuzzleResult<T> + 'input,
{
    input.lines().enumerate().map(move |(index, line)| {
        parser(index, line).map_err(|source| LineError {
            line_index: index,
            source,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_value_adds_string_context() {
        let result = parse_value::<u8>("not a number");
        let Err(error) = result else {
            panic!("expected parse to fail");
        };
        assert!(error.to_string().contains("\"not a number\""));
    }

    #[test]
    fn parse_whitespace_values_splits_any_whitespace() -> PuzzleResult<()> {
        let values: Vec<u32> = parse_whitespace_values("  3 \t 4    5 ")?;
        assert_eq!(values, vec![3, 4, 5]);
        Ok(())
    }

    #[test]
    fn parse_input_lines_reports_one_based_line_number() {
        let mut results = parse_input_lines("1\nx\n3", |_, line| {
            parse_value::<u32>(line).map_err(Into::into)
        });

        assert!(matches!(results.next(), Some(Ok(1))));
        let Some(Err(error)) = results.next() else {
            panic!("expected second line to fail");
        };
        assert!(error.to_string().contains("line 2"));
        assert!(matches!(results.next(), Some(Ok(3))));
    }
}
