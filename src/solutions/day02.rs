use puzzle_framework::parsing::{parse_input_lines, parse_whitespace_values};
use puzzle_framework::runner::puzzle_runner;
use puzzle_framework::{ParseInput, PartOne, PartTwo, Puzzle, PuzzleResult};

#[puzzle_runner(
    title = "Day 2: Red-Nosed Reports",
    parsed = Reports,
    part_one = Day02,
    part_two = Day02
)]
impl super::Advent2024<2> {}

/*
Input is reactor data: one report per line, each a whitespace-separated
sequence of levels. Blank lines carry nothing.
*/

/// Type for a single level reading.
///
/// Observed levels with at most 2 digits from input, so is sized to hold
/// such.
type Level = u8;

struct Reports {
    reports: Vec<Vec<Level>>,
}

impl ParseInput for Reports {
    fn parse(input: &str) -> PuzzleResult<Self>
    where
        Self: Sized,
    {
        let reports = parse_input_lines(input, |_, line| {
            if line.trim().is_empty() {
                return Ok(None);
            }
            let levels: Vec<Level> = parse_whitespace_values(line)?;
            Ok(Some(levels))
        })
        .filter_map(Result::transpose)
        .collect::<Result<_, _>>()?;

        Ok(Self { reports })
    }
}

/*
For part 1, count the safe reports. A report is safe when its levels are
either all increasing or all decreasing, and each adjacent pair of levels
differs by at least 1 and at most 3.
*/

/// Check whether a report's levels change gradually in one direction.
///
/// Reports with fewer than two levels have no transitions to violate, so
/// they are safe.
fn is_safe(levels: &[Level]) -> bool {
    let mut deltas = levels
        .windows(2)
        .map(|pair| i16::from(pair[1]) - i16::from(pair[0]));

    let Some(first_delta) = deltas.next() else {
        return true;
    };
    if !(1..=3).contains(&first_delta.abs()) {
        return false;
    }

    let ascending = first_delta > 0;
    deltas.all(|delta| (1..=3).contains(&delta.abs()) && (delta > 0) == ascending)
}

struct Day02;

impl Puzzle<PartOne> for Day02 {
    type Input = Reports;
    type Output = usize;

    fn solve(input: &Self::Input) -> PuzzleResult<Self::Output> {
        let safe_count = input
            .reports
            .iter()
            .filter(|report| is_safe(report))
            .count();
        Ok(safe_count)
    }
}

/*
For part 2, the Problem Dampener tolerates one bad level: a report also
counts as safe if removing any single level from it leaves a safe report.
*/

fn is_safe_with_dampener(levels: &[Level]) -> bool {
    if is_safe(levels) {
        return true;
    }

    (0..levels.len()).any(|skip_index| {
        let dampened: Vec<Level> = levels
            .iter()
            .enumerate()
            .filter_map(|(index, &level)| (index != skip_index).then_some(level))
            .collect();
        is_safe(&dampened)
    })
}

impl Puzzle<PartTwo> for Day02 {
    type Input = Reports;
    type Output = usize;

    fn solve(input: &Self::Input) -> PuzzleResult<Self::Output> {
        let safe_count = input
            .reports
            .iter()
            .filter(|report| is_safe_with_dampener(report))
            .count();
        Ok(safe_count)
    }
}
