use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AocError {
    #[error("cannot read input file {}: {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no puzzle for day {0}")]
    UnknownDay(u32),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("puzzle has no answer: {0}")]
    Puzzle(String),

    #[error("bad token pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("day {day} part {part}: expected {expected}, got {actual}")]
    AnswerMismatch {
        day: u32,
        part: u8,
        expected: String,
        actual: String,
    },
}

impl AocError {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse { line, message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, AocError>;
