//! Functions and traits for running puzzle solutions.
//!
//! # Quick Start
//!
//! A structure or impl-block can be annotated with the
//! [`#[puzzle_runner]`][puzzle_runner] attribute macro with appropriate
//! properties:
//!
//! ```
//! # use puzzle_framework::runner::puzzle_runner;
//! # use puzzle_framework::{PartOne, PartTwo, Puzzle, PuzzleResult};
//! #
//! struct Day01;
//!
//! impl Puzzle<PartOne> for Day01 {
//!     type Input = str;
//!     /* ... */
//! #    type Output = usize;
//! #    fn solve(_input: &Self::Input) -> PuzzleResult<usize> {
//! #        Ok(0)
//! #    }
//! }
//!
//! impl Puzzle<PartTwo> for Day01 {
//!     type Input = str;
//!     /* ... */
//! #    type Output = usize;
//! #    fn solve(_input: &Self::Input) -> PuzzleResult<usize> {
//! #        Ok(0)
//! #    }
//! }
//!
//! #[puzzle_runner(title = "Day 1", part_one = Day01, part_two = Day01)]
//! struct Day01Runner;
//! ```

use std::fmt::Display;
use std::time::Duration;

use crate::{ParseInput, Part, PartKind, PartOne, PartTwo, Puzzle, PuzzleResult};

// re-export procedural macro
pub use puzzle_framework_macros::puzzle_runner;

/// A trait for an output events handler.
///
/// When a puzzle runs, the steps of running lead to events reported through
/// this trait as feedback and logging. The runner itself never prints.
pub trait RunReporter {
    /// Called with the puzzle's display title, at the start of a run.
    fn puzzle_title(&mut self, title: &str);

    /// Called when parsing input is finished.
    ///
    /// The duration taken to parse is passed when timing is enabled.
    fn parse_finished(&mut self, duration_opt: Option<Duration>);

    /// Called when a puzzle part starts, with a [`PartKind`] to identify the
    /// part.
    fn part_started(&mut self, part: PartKind);

    /// Called when a part finishes, with its output.
    ///
    /// The duration taken to solve the part is passed when timing is enabled.
    fn part_solved(&mut self, part: PartKind, output: &dyn Display, duration_opt: Option<Duration>);
}

/// Measure the duration of an expression.
///
/// Evaluates the given expression once and returns a tuple of the
/// expression's result and the elapsed [`Duration`][std::time::Duration].
macro_rules! measure_duration {
    ($expr:expr) => {{
        let start = ::std::time::Instant::now();
        let result = $expr;
        let elapsed = start.elapsed();
        (result, elapsed)
    }};
}

/// Optionally measure the duration of an expression.
///
/// Returns a tuple of the expression's result and an optional
/// [`Duration`][std::time::Duration]: the elapsed time if `$timed` evaluates
/// to `true`, otherwise `None`.
macro_rules! measure_if_timed {
    ($expr:expr, $timed:expr) => {{
        if $timed {
            let (result, duration) = measure_duration!($expr);
            (result, Some(duration))
        } else {
            ($expr, None)
        }
    }};
}

/// Run one puzzle part, reporting events.
///
/// # Errors
///
/// Any dynamically dispatched error from the solution is propagated.
fn run_part<S, P>(input: &S::Input, reporter: &mut dyn RunReporter, timed: bool) -> PuzzleResult<()>
where
    P: Part,
    S: Puzzle<P>,
{
    let part = P::kind();
    reporter.part_started(part);
    let (result, duration_opt) = measure_if_timed!(S::solve(input), timed);
    let output = result?;
    reporter.part_solved(part, &output, duration_opt);
    Ok(())
}

/// Run a puzzle's parse step, reporting events.
///
/// # Errors
///
/// Any dynamically dispatched error from parsing is propagated.
fn run_parse<D: ParseInput>(
    input: &str,
    reporter: &mut dyn RunReporter,
    timed: bool,
) -> PuzzleResult<D> {
    let (result, duration_opt) = measure_if_timed!(D::parse(input), timed);
    let parsed = result?;
    reporter.parse_finished(duration_opt);
    Ok(parsed)
}

/// Run both parts of a puzzle that accepts string input.
///
/// # Arguments
///
/// - `title` - The puzzle's display title.
/// - `input` - The input string to solve.
/// - `reporter` - The handler to report events to.
/// - `timed` - A flag to measure solve times and report the elapsed times.
///
/// # Errors
///
/// Any dynamically dispatched error from the puzzle parts is propagated.
pub fn run_puzzle<S1, S2>(
    title: &str,
    input: &str,
    reporter: &mut dyn RunReporter,
    timed: bool,
) -> PuzzleResult<()>
where
    S1: Puzzle<PartOne, Input = str>,
    S2: Puzzle<PartTwo, Input = str>,
{
    reporter.puzzle_title(title);
    run_part::<S1, PartOne>(input, reporter, timed)?;
    run_part::<S2, PartTwo>(input, reporter, timed)
}

/// Run both parts of a puzzle that has a parse step for input.
///
/// The input is parsed once through [`ParseInput`] and the parsed data is
/// shared by both parts.
///
/// # Arguments
///
/// - `title` - The puzzle's display title.
/// - `input` - The input string to parse and solve.
/// - `reporter` - The handler to report events to.
/// - `timed` - A flag to measure parse & solve times and report the elapsed
///   times.
///
/// # Errors
///
/// Any dynamically dispatched error from parsing or the puzzle parts is
/// propagated.
pub fn run_parsed_puzzle<D, S1, S2>(
    title: &str,
    input: &str,
    reporter: &mut dyn RunReporter,
    timed: bool,
) -> PuzzleResult<()>
where
    D: ParseInput,
    S1: Puzzle<PartOne, Input = D>,
    S2: Puzzle<PartTwo, Input = D>,
{
    reporter.puzzle_title(title);
    let parsed = run_parse::<D>(input, reporter, timed)?;
    run_part::<S1, PartOne>(&parsed, reporter, timed)?;
    run_part::<S2, PartTwo>(&parsed, reporter, timed)
}

/// A trait for a day's puzzle that can be run from an input string.
///
/// The trait can be implemented with the [`puzzle_runner`] attribute macro.
pub trait DayRunner {
    /// Run the puzzle.
    ///
    /// # Arguments
    ///
    /// - `input` - The input string to solve.
    /// - `reporter` - The handler to report events to.
    /// - `timed` - A flag to measure step times and report the elapsed times.
    ///
    /// # Errors
    ///
    /// Any dynamically dispatched error from running the puzzle is
    /// propagated.
    fn run(input: &str, reporter: &mut dyn RunReporter, timed: bool) -> PuzzleResult<()>;
}
