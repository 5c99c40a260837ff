use std::{error, fmt::Display};

use crate::puzzle::PuzzleId;

#[derive(Debug)]
pub enum Error {
    InvalidYear(u16),
    InvalidDay(u8),
    NoSolution(PuzzleId),
    QueueFull(usize),
    NoSession,
    FetchFailed(String, PuzzleId, u16),
    InvalidTemplateRule(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidYear(year) => {
                write!(f, "Invalid year({}), puzzles start from 2015.", year)
            }
            Error::InvalidDay(day) => write!(f, "Invalid day({}), expect 1 to 25.", day),
            Error::NoSolution(id) => write!(f, "No solution registered for {}.", id),
            Error::QueueFull(capacity) => write!(
                f,
                "Queue has reached max capacity({}), can't add more items.",
                capacity
            ),
            Error::NoSession => write!(
                f,
                "No session cookie given, set AOC_SESSION or pass --session."
            ),
            Error::FetchFailed(what, id, status) => {
                write!(f, "Fetching {} for {} failed: {}.", what, id, status)
            }
            Error::InvalidTemplateRule(pattern) => {
                write!(f, "Invalid replacement pattern({}) for template.", pattern)
            }
        }
    }
}

impl error::Error for Error {}
