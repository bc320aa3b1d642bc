//! Reading puzzle input and splitting it into typed fields.

use crate::error::{AocError, Result};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Where a day's input lives when no `--input` is given: `<day>_input.txt`
/// in the working directory.
pub fn default_path(day: u32) -> PathBuf {
    PathBuf::from(format!("{day}_input.txt"))
}

pub fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| AocError::Input {
        path: path.to_owned(),
        source,
    })
}

/// Lines of the trimmed input, numbered from 1.
pub fn lines(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input.trim().lines().enumerate().map(|(ix, line)| (ix + 1, line))
}

pub fn number<T>(line_no: usize, field: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let field = field.trim();
    field
        .parse()
        .map_err(|e| AocError::parse(line_no, format!("cannot parse {field:?}: {e}")))
}

pub fn numbers<'a, T>(line_no: usize, fields: impl IntoIterator<Item = &'a str>) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: Display,
{
    fields.into_iter().map(|field| number(line_no, field)).collect()
}
