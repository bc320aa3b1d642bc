use aoc_common::{input, AocError, Puzzle, Result};
use bitvec::prelude::*;
use itertools::Itertools;
use regex::Regex;
use rustc_hash::FxHashMap;
use std::iter::zip;
use std::process::ExitCode;

fn day1(part: u8, input: &str) -> Result<String> {
    let mut lefts: Vec<i32> = vec![];
    let mut rights: Vec<i32> = vec![];
    for (line_no, line) in input::lines(input) {
        let [left, right] = input::numbers::<i32>(line_no, line.split_whitespace())?[..] else {
            return Err(AocError::parse(line_no, format!("cannot parse {line:?} as two numbers")));
        };
        lefts.push(left);
        rights.push(right);
    }
    tracing::debug!(pairs = lefts.len(), "parsed location lists");

    if part == 1 {
        lefts.sort_unstable();
        rights.sort_unstable();
        Ok(zip(lefts, rights).map(|(left, right)| u64::from(left.abs_diff(right))).sum::<u64>().to_string())
    } else {
        let mut freqs = FxHashMap::<i32, i64>::default();
        for right in rights {
            *freqs.entry(right).or_default() += 1;
        }
        Ok(lefts.iter().map(|left| i64::from(*left) * freqs.get(left).copied().unwrap_or(0)).sum::<i64>().to_string())
    }
}

fn is_safe(levels: &[i64]) -> bool {
    let mut diffs = levels.iter().tuple_windows().map(|(x, y)| y - x);
    let Some(first) = diffs.next() else {return true};
    (1 ..= 3).contains(&first.abs()) &&
        diffs.all(|d| d.signum() == first.signum() && (1 ..= 3).contains(&d.abs()))
}

fn day2(part: u8, input: &str) -> Result<String> {
    let reports = input::lines(input)
        .map(|(line_no, line)| input::numbers::<i64>(line_no, line.split_whitespace()))
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(reports = reports.len(), "parsed reports");

    Ok(reports.iter().filter(|levels| {
        is_safe(levels) || part == 2 && (0 .. levels.len()).any(|skip| {
            let mut dampened = levels.to_vec();
            dampened.remove(skip);
            is_safe(&dampened)
        })
    }).count().to_string())
}

fn day3(part: u8, input: &str) -> Result<String> {
    let mut enabled = true;
    Ok(Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)")?
        .captures_iter(input)
        .map(|m| {
            match &m[0] {
                "do()" => {enabled = true; 0},
                "don't()" => {if part == 2 {enabled = false}; 0},
                // at most three digits each, so these always parse
                _ if enabled => m[1].parse::<u64>().unwrap_or(0) * m[2].parse::<u64>().unwrap_or(0),
                _ => 0
            }
        })
        .sum::<u64>().to_string())
}

const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

fn day4(part: u8, input: &str) -> Result<String> {
    let grid = input.trim().lines().map(str::as_bytes).collect::<Vec<_>>();
    let cell = |ri: usize, ci: usize, rd: isize, cd: isize| -> Option<u8> {
        let row = grid.get(ri.checked_add_signed(rd)?)?;
        row.get(ci.checked_add_signed(cd)?).copied()
    };
    let cells = (0 .. grid.len()).flat_map(|ri| (0 .. grid[ri].len()).map(move |ci| (ri, ci)));

    let count = if part == 1 {
        cells.map(|(ri, ci)| {
            DIRECTIONS.iter().filter(|&&(rd, cd)|
                zip(0isize .., *b"XMAS").all(|(n, letter)| cell(ri, ci, n * rd, n * cd) == Some(letter))
            ).count()
        }).sum::<usize>()
    } else {
        cells.filter(|&(ri, ci)| {
            cell(ri, ci, 0, 0) == Some(b'A') && [(-1, -1), (-1, 1)].iter().all(|&(rd, cd)|
                matches!(
                    (cell(ri, ci, rd, cd), cell(ri, ci, -rd, -cd)),
                    (Some(b'M'), Some(b'S')) | (Some(b'S'), Some(b'M'))
                )
            )
        }).count()
    };
    Ok(count.to_string())
}

const PAGE_LIMIT: usize = 100;

fn page(line_no: usize, field: &str) -> Result<usize> {
    let page = input::number::<usize>(line_no, field)?;
    if page >= PAGE_LIMIT {
        return Err(AocError::parse(line_no, format!("page {page} out of range 0..{PAGE_LIMIT}")));
    }
    Ok(page)
}

fn day5(part: u8, input: &str) -> Result<String> {
    let mut lines = input::lines(input);
    // bit `PAGE_LIMIT * x + y` set iff x must be printed before y
    let mut rules = bitarr![0; 10000];
    for (line_no, line) in lines.by_ref().take_while(|(_, line)| !line.trim().is_empty()) {
        let Some((x, y)) = line.split_once('|') else {
            return Err(AocError::parse(line_no, format!("expected a rule X|Y, got {line:?}")));
        };
        rules.set(PAGE_LIMIT * page(line_no, x)? + page(line_no, y)?, true);
    }

    let updates = lines.map(|(line_no, line)|
        line.split(',').map(|s| page(line_no, s)).collect::<Result<Vec<_>>>()
    ).collect::<Result<Vec<_>>>()?;
    tracing::debug!(rules = rules.count_ones(), updates = updates.len(), "parsed print queue");

    let in_order = |update: &[usize]| (0 .. update.len()).all(|x|
        (x + 1 .. update.len()).all(|y| !rules[PAGE_LIMIT * update[y] + update[x]])
    );

    if part == 1 {
        Ok(updates.iter()
            .filter(|update| in_order(update))
            .map(|update| update[update.len() / 2])
            .sum::<usize>().to_string())
    } else {
        let mut sum = 0;
        for update in updates.iter().filter(|update| !in_order(update)) {
            let mut unsorted = update.clone();
            let mut sorted = Vec::with_capacity(unsorted.len());
            while !unsorted.is_empty() {
                let Some(x_at) = unsorted.iter().position(|&x|
                    unsorted.iter().all(|&y| !rules[PAGE_LIMIT * y + x])
                ) else {
                    return Err(AocError::Puzzle(format!("rules among pages {unsorted:?} form a cycle")));
                };
                sorted.push(unsorted.swap_remove(x_at));
            }
            sum += sorted[sorted.len() / 2];
        }
        Ok(sum.to_string())
    }
}

const PUZZLES: [Puzzle; 5] = [
    Puzzle { solve: day1, answers: [Some("1579939"), Some("20351745")] },
    Puzzle { solve: day2, answers: [Some("585"), None] },
    Puzzle { solve: day3, answers: [None, None] },
    Puzzle { solve: day4, answers: [None, None] },
    Puzzle { solve: day5, answers: [None, None] },
];

fn main() -> ExitCode {
    aoc_common::runner::main("aoc2024", &PUZZLES)
}
