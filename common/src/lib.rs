//! Shared plumbing for the per-year puzzle binaries: the command-line runner,
//! input loading and splitting helpers, the error type and logger setup.

pub mod error;
pub mod input;
pub mod logger;
pub mod runner;

pub use error::{AocError, Result};
pub use runner::{Args, Puzzle, Solver};
