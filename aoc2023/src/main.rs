use aoc_common::{input, AocError, Puzzle, Result};
use std::process::ExitCode;

const DIGIT_NAMES: [&str; 9] = ["one", "two", "three", "four", "five", "six", "seven", "eight", "nine"];

fn digit_at(line: &[u8], pos: usize, spelled: bool) -> Option<u32> {
    let rest = &line[pos..];
    match rest.first()? {
        d @ b'0' ..= b'9' => Some(u32::from(d - b'0')),
        _ if spelled => DIGIT_NAMES.iter()
            .position(|name| rest.starts_with(name.as_bytes()))
            .map(|ix| ix as u32 + 1),
        _ => None
    }
}

fn day1(part: u8, input: &str) -> Result<String> {
    let mut sum = 0u64;
    for (line_no, line) in input::lines(input) {
        let bytes = line.as_bytes();
        // names may share letters ("eightwo"), so every position gets a look
        let mut digits = (0 .. bytes.len()).filter_map(|pos| digit_at(bytes, pos, part == 2));
        let Some(first) = digits.next() else {
            return Err(AocError::parse(line_no, format!("no digit in {line:?}")));
        };
        let last = digits.last().unwrap_or(first);
        sum += u64::from(first * 10 + last);
    }
    tracing::debug!(sum, spelled = part == 2, "summed calibration values");
    Ok(sum.to_string())
}

const PUZZLES: [Puzzle; 1] = [
    Puzzle { solve: day1, answers: [None, Some("56017")] },
];

fn main() -> ExitCode {
    aoc_common::runner::main("aoc2023", &PUZZLES)
}
