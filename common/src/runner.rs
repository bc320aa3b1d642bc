//! The command line shared by every year's binary: pick a day, load its input,
//! run one or both parts and check them against the recorded answers.

use crate::error::{AocError, Result};
use crate::{input, logger};
use clap::{CommandFactory, FromArgMatches, Parser};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

pub type Solver = fn(u8, &str) -> Result<String>;

/// One day's solver plus the answers it produced for the author's input.
pub struct Puzzle {
    pub solve: Solver,
    pub answers: [Option<&'static str>; 2],
}

#[derive(Debug, Parser)]
#[command(version, about = "Solve one day's puzzle and print the answer")]
pub struct Args {
    /// Day number, 1-based
    pub day: u32,

    /// Part to run; both when omitted, printing the second
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Input file [default: <day>_input.txt]
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Don't compare answers against the recorded ones
    #[arg(long)]
    pub no_verify: bool,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_for(bin_name: &'static str) -> Self {
        let matches = Self::command().name(bin_name).get_matches();
        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }
}

pub fn run(args: &Args, puzzles: &[Puzzle]) -> Result<String> {
    let puzzle = usize::try_from(args.day)
        .ok()
        .and_then(|day| day.checked_sub(1))
        .and_then(|ix| puzzles.get(ix))
        .ok_or(AocError::UnknownDay(args.day))?;

    let path = args.input.clone().unwrap_or_else(|| input::default_path(args.day));
    tracing::debug!(path = %path.display(), "reading input");
    let text = input::read(&path)?;

    let parts = match args.part {
        Some(part) => part..=part,
        None => 1..=2,
    };
    let mut answer = String::new();
    for part in parts {
        let time = Instant::now();
        answer = match (puzzle.solve)(part, &text) {
            Ok(answer) => answer,
            // part 1 is only a check on the way to part 2 when no part was asked for
            Err(e) if args.part.is_none() && part == 1 => {
                tracing::warn!(day = args.day, "skipping part 1: {e}");
                continue;
            }
            Err(e) => return Err(e),
        };
        tracing::info!(
            day = args.day,
            part,
            %answer,
            "{} seconds elapsed",
            time.elapsed().as_secs_f32()
        );

        match puzzle.answers[usize::from(part - 1)] {
            Some(expected) if !args.no_verify && expected != answer => {
                return Err(AocError::AnswerMismatch {
                    day: args.day,
                    part,
                    expected: expected.to_owned(),
                    actual: answer,
                });
            }
            Some(_) if !args.no_verify => tracing::debug!(part, "matches recorded answer"),
            _ => {}
        }
    }
    Ok(answer)
}

/// Entry point for a year binary. Everything that goes wrong maps to exit code 1.
pub fn main(bin_name: &'static str, puzzles: &[Puzzle]) -> ExitCode {
    let args = Args::parse_for(bin_name);
    logger::init(args.verbose);

    match run(&args, puzzles) {
        Ok(answer) => {
            println!("Result: {answer}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
