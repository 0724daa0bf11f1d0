use std::collections::HashMap;

use checked_sum::CheckedSum;
use puzzle_framework::parsing::{parse_input_lines, parse_whitespace_values};
use puzzle_framework::runner::puzzle_runner;
use puzzle_framework::{ParseInput, PartOne, PartTwo, Puzzle, PuzzleResult};
use thiserror::Error;

#[puzzle_runner(
    title = "Day 1: Historian Hysteria",
    parsed = LocationLists,
    part_one = Day01,
    part_two = Day01
)]
impl super::Advent2024<1> {}

#[derive(Error, Debug)]
enum Day01Error {
    /// A line paired anything other than one left ID with one right ID.
    #[error("expected two location IDs on a line, found {found}")]
    UnevenLine { found: usize },
}

/*
Input is two lists of location IDs written side by side: each line holds one
ID from the left list and one from the right list, separated by whitespace.
Blank lines carry nothing.
*/

/// Type for location IDs.
///
/// Observed IDs with at most 5 digits from input, so is sized to hold such.
type LocationId = u32;

struct LocationLists {
    left: Vec<LocationId>,
    right: Vec<LocationId>,
}

impl ParseInput for LocationLists {
    fn parse(input: &str) -> PuzzleResult<Self>
    where
        Self: Sized,
    {
        let mut left = Vec::new();
        let mut right = Vec::new();

        parse_input_lines(input, |_, line| {
            if line.trim().is_empty() {
                return Ok(());
            }

            let ids: Vec<LocationId> = parse_whitespace_values(line)?;
            match ids[..] {
                [left_id, right_id] => {
                    left.push(left_id);
                    right.push(right_id);
                    Ok(())
                }
                _ => Err(Day01Error::UnevenLine { found: ids.len() }.into()),
            }
        })
        .collect::<Result<(), _>>()?;

        Ok(Self { left, right })
    }
}

/*
For part 1, pair the smallest left ID with the smallest right ID, the second
smallest with the second smallest, and so on. The solution is the total
distance: the sum of how far apart the IDs in each pair are.
*/

/// Type for summed distances between paired IDs.
///
/// With [`LocationId`] expected to hold at most a 5 digit number and inputs
/// observed at 1000 lines, this is sized to hold the total.
type TotalDistance = u32;

impl LocationLists {
    fn total_distance(&self) -> TotalDistance {
        let mut left_ascending = self.left.clone();
        let mut right_ascending = self.right.clone();
        left_ascending.sort_unstable();
        right_ascending.sort_unstable();

        left_ascending
            .into_iter()
            .zip(right_ascending)
            .map(|(left_id, right_id)| left_id.abs_diff(right_id))
            .checked_sum()
            .expect("should not have integer overflow during summation")
    }
}

struct Day01;

impl Puzzle<PartOne> for Day01 {
    type Input = LocationLists;
    type Output = TotalDistance;

    fn solve(input: &Self::Input) -> PuzzleResult<Self::Output> {
        Ok(input.total_distance())
    }
}

/*
For part 2, calculate a similarity score instead: each left ID contributes
itself multiplied by how many times that ID appears in the right list.
*/

/// Type for the similarity score, a sum of ID-times-count products.
type SimilarityScore = u64;

impl LocationLists {
    fn similarity_score(&self) -> SimilarityScore {
        // count right-list occurrences once for fast lookup
        let mut right_counts: HashMap<LocationId, SimilarityScore> = HashMap::new();
        for &right_id in &self.right {
            *right_counts.entry(right_id).or_insert(0) += 1;
        }

        self.left
            .iter()
            .map(|&left_id| {
                SimilarityScore::from(left_id) * right_counts.get(&left_id).copied().unwrap_or(0)
            })
            .checked_sum()
            .expect("should not have integer overflow during summation")
    }
}

impl Puzzle<PartTwo> for Day01 {
    type Input = LocationLists;
    type Output = SimilarityScore;

    fn solve(input: &Self::Input) -> PuzzleResult<Self::Output> {
        Ok(input.similarity_score())
    }
}
