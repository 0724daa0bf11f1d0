use std::collections::HashMap;

use nalgebra::{Point2, Vector2};
use puzzle_framework::parsing::parse_input_lines;
use puzzle_framework::runner::puzzle_runner;
use puzzle_framework::{ParseInput, PartOne, PartTwo, Puzzle, PuzzleResult};
use thiserror::Error;

#[puzzle_runner(
    title = "Day 4: Ceres Search",
    parsed = WordSearch,
    part_one = Day04,
    part_two = Day04
)]
impl super::Advent2024<4> {}

#[derive(Error, Debug)]
enum Day04Error {
    /// The length of the line does not match the first non-blank line's.
    #[error("grid lines are not equal length: expected {expected} characters, found {found}")]
    MismatchedLineLength { expected: usize, found: usize },
}

/*
Input is a word search: a rectangular grid of letters. Words read in
straight lines along any of the eight directions, including backwards.
*/

/// Integer type for x/y coordinates in the grid.
///
/// Observed dimensions of 140 from input, so is sized to hold such with
/// room for signed off-grid steps.
type Coordinate = i32;

/// The eight directions a word can read along, as unit steps.
///
/// The order is fixed and is the per-cell scan order: right, down-right,
/// down, down-left, left, up-left, up, up-right. `x` steps columns and `y`
/// steps rows.
const SCAN_DIRECTIONS: [Vector2<Coordinate>; 8] = [
    Vector2::new(1, 0),
    Vector2::new(1, 1),
    Vector2::new(0, 1),
    Vector2::new(-1, 1),
    Vector2::new(-1, 0),
    Vector2::new(-1, -1),
    Vector2::new(0, -1),
    Vector2::new(1, -1),
];

/// A confirmed occurrence of a target word in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GridMatch<'t> {
    /// The word that was found.
    text: &'t str,
    /// The cell the word starts at: `x` is the column, `y` the row.
    start: Point2<Coordinate>,
    /// The unit step the word reads along.
    direction: Vector2<Coordinate>,
}

/// The letter grid formed by the input.
struct WordSearch {
    /// Rows of single-character cells, all of equal length.
    rows: Vec<Vec<char>>,
}

impl ParseInput for WordSearch {
    fn parse(input: &str) -> PuzzleResult<Self>
    where
        Self: Sized,
    {
        let mut expected_length = None;

        let rows = parse_input_lines(input, |_, line| {
            // surrounding whitespace is not part of the grid
            let line = line.trim();
            if line.is_empty() {
                return Ok(None);
            }

            let cells: Vec<char> = line.chars().collect();
            if let Some(expected) = expected_length {
                if cells.len() != expected {
                    return Err(Day04Error::MismatchedLineLength {
                        expected,
                        found: cells.len(),
                    }
                    .into());
                }
            } else {
                expected_length = Some(cells.len());
            }
            Ok(Some(cells))
        })
        .filter_map(Result::transpose)
        .collect::<Result<_, _>>()?;

        Ok(Self { rows })
    }
}

impl WordSearch {
    fn height(&self) -> Coordinate {
        Coordinate::try_from(self.rows.len())
            .expect("grid height should fit within coordinate type")
    }

    fn width(&self) -> Coordinate {
        self.rows.first().map_or(0, |row| {
            Coordinate::try_from(row.len()).expect("grid width should fit within coordinate type")
        })
    }

    /// Get the character at a cell, or `None` outside the grid.
    fn cell(&self, at: Point2<Coordinate>) -> Option<char> {
        let row = usize::try_from(at.y).ok()?;
        let col = usize::try_from(at.x).ok()?;
        self.rows.get(row)?.get(col).copied()
    }

    /// Check whether `text` reads off character by character from `start`,
    /// stepping by `direction`.
    ///
    /// Any step that leaves the grid rejects the candidate; words never
    /// wrap around an edge.
    fn reads_along(
        &self,
        text: &str,
        start: Point2<Coordinate>,
        direction: Vector2<Coordinate>,
    ) -> bool {
        text.chars().enumerate().all(|(step, expected)| {
            let offset =
                Coordinate::try_from(step).expect("target length should fit within coordinate");
            self.cell(start + direction * offset) == Some(expected)
        })
    }

    /// Find every start cell and direction at which `target` reads off
    /// within the grid.
    ///
    /// Matches are collected in a deterministic order: row-major over start
    /// cells, then [`SCAN_DIRECTIONS`] order within a cell. An empty target
    /// has no matches.
    fn find_matches<'t>(&self, target: &'t str) -> Vec<GridMatch<'t>> {
        let mut matches = Vec::new();
        if target.is_empty() {
            return matches;
        }

        for y in 0..self.height() {
            for x in 0..self.width() {
                let start = Point2::new(x, y);
                for direction in SCAN_DIRECTIONS {
                    if self.reads_along(target, start, direction) {
                        matches.push(GridMatch {
                            text: target,
                            start,
                            direction,
                        });
                    }
                }
            }
        }

        matches
    }
}

struct Day04;

/*
For part 1, count every occurrence of the word `XMAS` in the grid.
*/

impl Puzzle<PartOne> for Day04 {
    type Input = WordSearch;
    type Output = usize;

    fn solve(input: &Self::Input) -> PuzzleResult<Self::Output> {
        Ok(input.find_matches("XMAS").len())
    }
}

/*
For part 2, the word is `MAS` and the shape is an X: two diagonal `MAS`
occurrences crossing at their shared middle `A`. Count the crossings.
*/

/// Count grid cells where two diagonal matches cross at a shared middle
/// character.
///
/// All matches are expected to come from one search, so the midpoint offset
/// is taken from the first diagonal match's text. Each crossing is seen from
/// both of its matches, halving the count of matches with a shared midpoint.
fn count_crossovers(matches: &[GridMatch<'_>]) -> usize {
    let diagonal: Vec<&GridMatch<'_>> = matches
        .iter()
        .filter(|found| found.direction.x != 0 && found.direction.y != 0)
        .collect();
    let Some(first) = diagonal.first() else {
        return 0;
    };

    let midpoint_offset = Coordinate::try_from(first.text.chars().count() / 2)
        .expect("target length should fit within coordinate");
    let midpoints: Vec<Point2<Coordinate>> = diagonal
        .iter()
        .map(|found| found.start + found.direction * midpoint_offset)
        .collect();

    let mut counts: HashMap<Point2<Coordinate>, usize> = HashMap::new();
    for &midpoint in &midpoints {
        *counts.entry(midpoint).or_insert(0) += 1;
    }

    let crossing_matches = midpoints
        .iter()
        .filter(|midpoint| counts[*midpoint] > 1)
        .count();
    crossing_matches / 2
}

impl Puzzle<PartTwo> for Day04 {
    type Input = WordSearch;
    type Output = usize;

    fn solve(input: &Self::Input) -> PuzzleResult<Self::Output> {
        let matches = input.find_matches("MAS");
        Ok(count_crossovers(&matches))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX
";

    fn three_by_three() -> PuzzleResult<WordSearch> {
        WordSearch::parse("ABC\nDEF\nGHI\n")
    }

    #[test]
    fn parse_builds_rectangular_grid() -> PuzzleResult<()> {
        let grid = WordSearch::parse(
            r"
    ABCDEF
    FEDCBA
    AFGAFG
    RTSDVD
    ",
        )?;
        assert_eq!(grid.rows.len(), 4);
        assert_eq!(grid.rows[0], vec!['A', 'B', 'C', 'D', 'E', 'F']);
        assert_eq!(grid.rows[3], vec!['R', 'T', 'S', 'D', 'V', 'D']);
        Ok(())
    }

    #[test]
    fn parse_round_trips_uniform_grid() -> PuzzleResult<()> {
        let input = "ABC\nDEF\nGHI";
        let grid = WordSearch::parse(input)?;
        let rejoined = grid
            .rows
            .iter()
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(rejoined, input);
        Ok(())
    }

    #[test]
    fn parse_yields_empty_grid_for_empty_input() -> PuzzleResult<()> {
        let grid = WordSearch::parse("")?;
        assert!(grid.rows.is_empty());
        assert!(grid.find_matches("XMAS").is_empty());
        Ok(())
    }

    #[test]
    fn parse_rejects_uneven_lines() {
        let result = WordSearch::parse("ABCDEF\nSDEFT\nASDGAS\n");
        let Err(error) = result else {
            panic!("expected parse to fail");
        };
        assert!(error.to_string().contains("line 2"));
    }

    #[test]
    fn finds_word_reading_in_each_direction() -> PuzzleResult<()> {
        let grid = three_by_three()?;

        // one case per scan direction, in scan order
        let cases = [
            ("DEF", (0, 1), Vector2::new(1, 0)),
            ("AEI", (0, 0), Vector2::new(1, 1)),
            ("BEH", (1, 0), Vector2::new(0, 1)),
            ("CEG", (2, 0), Vector2::new(-1, 1)),
            ("CBA", (2, 0), Vector2::new(-1, 0)),
            ("IEA", (2, 2), Vector2::new(-1, -1)),
            ("IFC", (2, 2), Vector2::new(0, -1)),
            ("GEC", (0, 2), Vector2::new(1, -1)),
        ];
        for (text, (col, row), direction) in cases {
            let matches = grid.find_matches(text);
            assert_eq!(
                matches,
                vec![GridMatch {
                    text,
                    start: Point2::new(col, row),
                    direction,
                }],
                "expected exactly one match for {text:?}"
            );
        }
        Ok(())
    }

    #[test]
    fn rejects_word_offset_from_its_cells() -> PuzzleResult<()> {
        let grid = three_by_three()?;
        assert!(!grid.reads_along("DEF", Point2::new(0, 0), Vector2::new(1, 0)));
        assert!(!grid.reads_along("AEI", Point2::new(0, 1), Vector2::new(1, 1)));
        assert!(!grid.reads_along("HEB", Point2::new(1, 1), Vector2::new(0, -1)));
        Ok(())
    }

    #[test]
    fn rejects_word_crossing_grid_edge() -> PuzzleResult<()> {
        let grid = three_by_three()?;
        // word longer than the remaining row; must not wrap
        assert!(!grid.reads_along("EFG", Point2::new(1, 1), Vector2::new(1, 0)));
        assert!(!grid.reads_along("ABC", Point2::new(0, 0), Vector2::new(0, -1)));
        Ok(())
    }

    #[test]
    fn empty_target_has_no_matches() -> PuzzleResult<()> {
        let grid = three_by_three()?;
        assert!(grid.find_matches("").is_empty());
        Ok(())
    }

    #[test]
    fn missing_word_has_no_matches() -> PuzzleResult<()> {
        let grid = three_by_three()?;
        assert!(grid.find_matches("NONE").is_empty());
        Ok(())
    }

    #[test]
    fn collects_matches_in_scan_order() -> PuzzleResult<()> {
        let grid = WordSearch::parse("ABC\nCBA\nGVC\n")?;
        let matches = grid.find_matches("ABC");
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].start, Point2::new(0, 0));
        assert_eq!(matches[0].direction, Vector2::new(1, 0));
        assert_eq!(matches[1].start, Point2::new(0, 0));
        assert_eq!(matches[1].direction, Vector2::new(1, 1));
        assert_eq!(matches[2].start, Point2::new(2, 1));
        assert_eq!(matches[2].direction, Vector2::new(-1, 0));
        Ok(())
    }

    #[test]
    fn every_match_walks_its_cells() -> PuzzleResult<()> {
        let grid = WordSearch::parse(EXAMPLE_INPUT)?;
        let matches = grid.find_matches("XMAS");
        assert_eq!(matches.len(), 18);

        for found in &matches {
            for (step, expected) in found.text.chars().enumerate() {
                let offset = Coordinate::try_from(step)?;
                let at = found.start + found.direction * offset;
                assert_eq!(grid.cell(at), Some(expected), "match strayed at {at}");
            }
        }
        Ok(())
    }

    #[test]
    fn counts_single_crossover() -> PuzzleResult<()> {
        let grid = WordSearch::parse(
            r"
    .......
    ..M.M..
    ...A...
    ..S.S..
    .......
    ",
        )?;
        let matches = grid.find_matches("MAS");
        assert_eq!(count_crossovers(&matches), 1);
        Ok(())
    }

    #[test]
    fn counts_separated_crossovers() -> PuzzleResult<()> {
        let grid = WordSearch::parse("M.S.S.M\n.A...A.\nM.S.S.M\n")?;
        let matches = grid.find_matches("MAS");
        assert_eq!(count_crossovers(&matches), 2);
        Ok(())
    }

    #[test]
    fn shared_midpoints_count_pairwise() -> PuzzleResult<()> {
        // four diagonal matches meeting at two shared centers
        let grid = WordSearch::parse("M.M.M\n.A.A.\nS.S.S\n")?;
        let matches = grid.find_matches("MAS");
        assert_eq!(count_crossovers(&matches), 2);
        Ok(())
    }

    #[test]
    fn straight_matches_never_cross() -> PuzzleResult<()> {
        let grid = three_by_three()?;
        let matches = grid.find_matches("DEF");
        assert_eq!(count_crossovers(&matches), 0);
        Ok(())
    }

    #[test]
    fn counts_crossovers_of_complex_pattern() -> PuzzleResult<()> {
        let grid = WordSearch::parse(
            r"
    .M.S......
    ..A..MSMS.
    .M.S.MAA..
    ..A.ASMSM.
    .M.S.M....
    ..........
    S.S.S.S.S.
    .A.A.A.A..
    M.M.M.M.M.
    ..........
    ",
        )?;
        let matches = grid.find_matches("MAS");
        assert_eq!(count_crossovers(&matches), 9);
        Ok(())
    }

    #[test]
    fn part_one_solves_example() -> PuzzleResult<()> {
        let parsed = WordSearch::parse(EXAMPLE_INPUT)?;
        let result = <Day04 as Puzzle<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 18);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> PuzzleResult<()> {
        let parsed = WordSearch::parse(EXAMPLE_INPUT)?;
        let result = <Day04 as Puzzle<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 9);
        Ok(())
    }
}
