//! Traits and utilities shared by Advent of Code puzzle solutions.
//!
//! # Quick Start
//!
//! 1. Define your input type and implement [`ParseInput`]:
//!
//! ```
//! # use puzzle_framework::{ParseInput, PuzzleResult};
//! #
//! struct Lines(Vec<String>);
//!
//! impl ParseInput for Lines {
//!     fn parse(input: &str) -> PuzzleResult<Self> {
//!         Ok(Self(input.lines().map(String::from).collect()))
//!     }
//! }
//! ```
//!
//! 2. Implement [`Puzzle`] for each part:
//!
//! ```
//! # use puzzle_framework::{ParseInput, PartOne, Puzzle, PuzzleResult};
//! #
//! # struct Lines(Vec<String>);
//! # impl ParseInput for Lines {
//! #     fn parse(input: &str) -> PuzzleResult<Self> {
//! #         Ok(Self(input.lines().map(String::from).collect()))
//! #     }
//! # }
//! #
//! struct Day01;
//!
//! impl Puzzle<PartOne> for Day01 {
//!     type Input = Lines;
//!     type Output = usize;
//!
//!     fn solve(input: &Self::Input) -> PuzzleResult<usize> {
//!         Ok(input.0.len())
//!     }
//! }
//! ```
//!
//! 3. Use the [`runner`] module to execute the solution.
//!
//! Puzzles that want the raw input can set `Input = str` and skip the
//! [`ParseInput`] step:
//!
//! ```
//! use puzzle_framework::{PartOne, Puzzle, PuzzleResult};
//!
//! struct Day02;
//!
//! impl Puzzle<PartOne> for Day02 {
//!     type Input = str;
//!     type Output = usize;
//!
//!     fn solve(input: &str) -> PuzzleResult<usize> {
//!         Ok(input.lines().count())
//!     }
//! }
//! ```

#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::branches_sharing_code,
    clippy::collection_is_never_read,
    clippy::equatable_if_let,
    clippy::needless_collect,
    clippy::needless_pass_by_ref_mut,
    clippy::option_if_let_else,
    clippy::set_contains_or_insert,
    clippy::suboptimal_flops,
    clippy::suspicious_operation_groupings,
    clippy::trait_duplication_in_bounds,
    clippy::type_repetition_in_bounds,
    clippy::use_self,
    clippy::useless_let_if_seq
)]
#![deny(
    clippy::expect_used,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::unwrap_used
)]

use std::error::Error;
use std::fmt::Display;

pub mod parsing;
pub mod runner;

mod private {
    /// A sealed trait to prevent external implementations of public traits.
    ///
    /// Keeps the set of [`Part`][super::Part] markers closed so the runner can
    /// rely on it being exactly part one and part two.
    pub trait Sealed {}
}

/// A dynamically dispatched error, wrapped in a [`Box`].
pub type PuzzleError = Box<dyn Error + Send + Sync + 'static>;
/// A result that can return a [`PuzzleError`] as an error.
pub type PuzzleResult<T> = Result<T, PuzzleError>;

/// An enum to identify a puzzle part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    One,
    Two,
}

impl Display for PartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::One => write!(f, "Part 1"),
            Self::Two => write!(f, "Part 2"),
        }
    }
}

/// A marker trait identifying which part a [`Puzzle`] implementation solves.
pub trait Part: private::Sealed {
    /// Get the related [`PartKind`] for this part.
    fn kind() -> PartKind;
}

/// Marks a [`Puzzle`] implementation as solving part one.
///
/// This zero-sized marker struct has no runtime impact.
pub struct PartOne;
impl private::Sealed for PartOne {}
impl Part for PartOne {
    fn kind() -> PartKind {
        PartKind::One
    }
}

/// Marks a [`Puzzle`] implementation as solving part two.
///
/// This zero-sized marker struct has no runtime impact.
pub struct PartTwo;
impl private::Sealed for PartTwo {}
impl Part for PartTwo {
    fn kind() -> PartKind {
        PartKind::Two
    }
}

/// A generic trait for a solution that solves one [`Part`] of a puzzle.
///
/// It is expected implementations are for the marker structs [`PartOne`] or
/// [`PartTwo`].
pub trait Puzzle<P: Part> {
    /// The input data type passed to the solution.
    ///
    /// [`Puzzle::solve`] accepts a reference to this type, so consider
    /// avoiding reference nesting.
    ///
    /// For direct string input, set to `str`.
    type Input: ?Sized;

    /// The output data type returned from the solution.
    type Output: Display;

    /// Solve with the given input.
    ///
    /// # Errors
    ///
    /// A solution can encounter varying errors while solving, like invalid
    /// input or a logical error. It is returned as a dynamically dispatched
    /// error.
    fn solve(input: &Self::Input) -> PuzzleResult<Self::Output>;
}

/// A trait for data structures created by parsing string input.
///
/// Solutions can be passed parsed data constructed through this trait by
/// setting [`Puzzle::Input`] to the implementing struct.
pub trait ParseInput {
    /// Parse an input string into an instance of self.
    ///
    /// # Errors
    ///
    /// If parsing fails, the resulting error is returned as a dynamically
    /// dispatched error.
    fn parse(input: &str) -> PuzzleResult<Self>
    where
        Self: Sized;
}
