//! Solutions implemented for Advent of Code 2024.
//!
//! This module provides [`run_day`] to dynamically run a solution by its day,
//! and [`AVAILABLE_DAYS`] to enumerate the days that can run.
//!
//! Steps to make a solution available to run:
//! 1. Make a submodule to hold the solution implementation.
//! 2. Have the submodule implement [`Advent2024<DAY>`] for its day as a
//!    [`DayRunner`].
//! 3. Import the submodule below `IMPORT SUBMODULES HERE`
//! 4. Add a match case to run [`Advent2024<DAY>`] for the day, below
//!    `MATCH SOLUTIONS HERE`, and list the day in [`AVAILABLE_DAYS`]:
//!
//! ```ignore
//! // matching for day 1
//! 1 => Advent2024::<1>::run(input, reporter, timed),
//! ```

#![warn(clippy::dbg_macro, clippy::print_stderr, clippy::print_stdout)]

use puzzle_framework::PuzzleResult;
use puzzle_framework::runner::{DayRunner, RunReporter};
use thiserror::Error;

// --- IMPORT SUBMODULES HERE ---
mod day01;
mod day02;
mod day03;
mod day04;

/// A structure collecting solutions by day.
///
/// In a submodule, implement this as a [`DayRunner`] for the day.
///
/// Use [`#[puzzle_runner]`][puzzle_framework::runner::puzzle_runner] for
/// convenience:
///
/// ```ignore
/// // in a submodule "day01.rs"
/// use puzzle_framework::runner::puzzle_runner;
/// use puzzle_framework::{PartOne, PartTwo, Puzzle};
///
/// struct Day01;
/// impl Puzzle<PartOne> for Day01 {
///     /* ... */
/// }
/// impl Puzzle<PartTwo> for Day01 {
///     /* ... */
/// }
///
/// #[puzzle_runner(title = "Day 1", part_one = Day01, part_two = Day01)]
/// impl super::Advent2024<1> {}
/// ```
struct Advent2024<const DAY: u8>;

/// The days with solutions available to run, in running order.
pub const AVAILABLE_DAYS: &[u8] = &[1, 2, 3, 4];

/// A solution for a day is not available.
#[derive(Error, Debug)]
#[error("no solution available for day {0}")]
pub struct DayNotAvailable(u8);

/// Run a solution based on the day.
///
/// # Errors
///
/// If the solution for the given day is not available, a [`DayNotAvailable`]
/// error is returned.
///
/// Any dynamically dispatched error from running the solution is propagated.
pub fn run_day(
    day: u8,
    input: &str,
    reporter: &mut dyn RunReporter,
    timed: bool,
) -> PuzzleResult<()> {
    match day {
        // --- MATCH SOLUTIONS HERE ---
        1 => Advent2024::<1>::run(input, reporter, timed),
        2 => Advent2024::<2>::run(input, reporter, timed),
        3 => Advent2024::<3>::run(input, reporter, timed),
        4 => Advent2024::<4>::run(input, reporter, timed),
        _ => Err(DayNotAvailable(day).into()),
    }
}
