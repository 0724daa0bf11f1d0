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
#![deny(clippy::unwrap_used)]

use std::fmt::Display;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Error, Result};
use clap::{ArgAction, Parser};
use puzzle_framework::PartKind;
use puzzle_framework::runner::RunReporter;

mod solutions;

/// Advent of Code 2024 puzzle solver.
#[derive(Parser, Debug)]
struct Cli {
    /// The day's solution to run (e.g. 1, 2, etc).
    /// Every available day runs in sequence when omitted.
    day: Option<u8>,

    /// Sets an alternative input file to use over default input.
    #[arg(short, long, value_name = "FILE", requires = "day")]
    input: Option<PathBuf>,

    /// Measure and print the durations of parsing and solving parts.
    #[arg(short, long, action = ArgAction::SetTrue)]
    timed: bool,

    /// Minimum duration (in milliseconds) required to print timing.
    /// 0 = always print.
    #[arg(long, value_name = "NUMBER", default_value_t)]
    min_timing_ms: u64,
}

/// Read the default input file for a day to a string.
fn get_default_input(day: u8) -> Result<String> {
    let filename = format!("day{day:02}.txt");
    let path = PathBuf::from("inputs").join(filename);

    fs::read_to_string(&path).with_context(|| {
        format!(
            "default input file missing: {}\n\n\
            please create the file or provide the input file argument",
            path.display()
        )
    })
}

/// Read the given input file to a string.
fn get_input(input_file: &PathBuf) -> Result<String> {
    fs::read_to_string(input_file)
        .with_context(|| format!("could not read input file at: {}", input_file.display()))
}

struct CliReporter {
    /// A minimum duration to filter any outputs of duration by.
    min_duration: Duration,
    /// Whether a title was printed already, to space out consecutive days.
    printed_title: bool,
}

impl CliReporter {
    fn new(min_duration: Duration) -> Self {
        Self {
            min_duration,
            printed_title: false,
        }
    }

    fn format_duration(duration: Duration) -> String {
        const ONE_SECOND: Duration = Duration::from_secs(1);
        const ONE_MILLISECOND: Duration = Duration::from_millis(1);
        const ONE_MICROSECOND: Duration = Duration::from_micros(1);
        const DECIMAL_PLACES: usize = 3;

        if duration >= ONE_SECOND {
            format!("{:.*} seconds", DECIMAL_PLACES, duration.as_secs_f32())
        } else {
            let nanos = duration.subsec_nanos();
            if duration >= ONE_MILLISECOND {
                format!("{:.*} milliseconds", DECIMAL_PLACES, f64::from(nanos) / 1e6)
            } else if duration >= ONE_MICROSECOND {
                format!("{:.*} microseconds", DECIMAL_PLACES, f64::from(nanos) / 1e3)
            } else {
                format!("{nanos} nanoseconds")
            }
        }
    }

    /// Convert an optional duration into a formatted duration, filtering out
    /// if the duration is shorter than the minimum duration.
    fn format_optional_duration_above_min(&self, duration: Option<Duration>) -> Option<String> {
        duration
            .filter(|d| *d >= self.min_duration)
            .map(Self::format_duration)
    }
}

impl RunReporter for CliReporter {
    fn puzzle_title(&mut self, title: &str) {
        if self.printed_title {
            println!();
        }
        self.printed_title = true;
        println!("= {title} =");
    }

    fn parse_finished(&mut self, duration_opt: Option<Duration>) {
        if let Some(formatted_duration) = self.format_optional_duration_above_min(duration_opt) {
            println!("Input parsed in {formatted_duration}");
        }
    }

    fn part_started(&mut self, part: PartKind) {
        println!("-- {part} --");
    }

    fn part_solved(
        &mut self,
        _part: PartKind,
        output: &dyn Display,
        duration_opt: Option<Duration>,
    ) {
        if let Some(formatted_duration) = self.format_optional_duration_above_min(duration_opt) {
            println!("{output} ({formatted_duration})");
        } else {
            println!("{output}");
        }
    }
}

/// Run a day's solution, bridging its dynamic error into an [`anyhow`] error
/// with the day as context.
fn run_day_reported(day: u8, input: &str, reporter: &mut CliReporter, timed: bool) -> Result<()> {
    solutions::run_day(day, input, reporter, timed).map_err(|dyn_error| {
        let anyhow_error = Error::from_boxed(dyn_error);
        anyhow_error.context(format!("failed to run solution for day {day}"))
    })
}

fn main() -> Result<()> {
    let args = Cli::parse();
    let mut reporter = CliReporter::new(Duration::from_millis(args.min_timing_ms));

    if let Some(day) = args.day {
        let input_str = args.input.map_or_else(
            || get_default_input(day),
            |input_file| get_input(&input_file),
        )?;
        run_day_reported(day, &input_str, &mut reporter, args.timed)
    } else {
        // no day given: run everything in order, halting at the first failure
        for &day in solutions::AVAILABLE_DAYS {
            let input_str = get_default_input(day)?;
            run_day_reported(day, &input_str, &mut reporter, args.timed)?;
        }
        Ok(())
    }
}
