use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::Result;

use crate::{check::Example, error::Error};

pub const FIRST_YEAR: u16 = 2015;
pub const LAST_DAY: u8 = 25;

/// Identifies one puzzle by its event year and day of month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleId {
    year: u16,
    day: u8,
}

impl Display for PuzzleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} day {:02}", self.year, self.day)
    }
}

impl PuzzleId {
    pub fn new(year: u16, day: u8) -> Result<Self, Error> {
        if year < FIRST_YEAR {
            return Err(Error::InvalidYear(year));
        }
        if day == 0 || day > LAST_DAY {
            return Err(Error::InvalidDay(day));
        }

        Ok(Self { year, day })
    }

    pub(crate) const fn known(year: u16, day: u8) -> Self {
        Self { year, day }
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// Directory holding sample, input and puzzle text, `<root>/aoc/<year>/day<NN>`.
    pub fn day_dir<P: AsRef<Path>>(&self, root: P) -> PathBuf {
        root.as_ref()
            .join("aoc")
            .join(self.year.to_string())
            .join(format!("day{:02}", self.day))
    }

    pub fn sample_path<P: AsRef<Path>>(&self, root: P) -> PathBuf {
        self.day_dir(root).join("sample.txt")
    }

    pub fn input_path<P: AsRef<Path>>(&self, root: P) -> PathBuf {
        self.day_dir(root).join("input.txt")
    }

    pub fn puzzle_path<P: AsRef<Path>>(&self, root: P) -> PathBuf {
        self.day_dir(root).join("puzzle.md")
    }

    /// Source file of the solution, relative to the crate root.
    pub fn solution_path<P: AsRef<Path>>(&self, root: P) -> PathBuf {
        root.as_ref()
            .join("src")
            .join("solutions")
            .join(format!("y{}", self.year))
            .join(format!("day{:02}.rs", self.day))
    }

    pub fn test_path<P: AsRef<Path>>(&self, root: P) -> PathBuf {
        root.as_ref()
            .join("tests")
            .join(format!("y{}_day{:02}.rs", self.year, self.day))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    One,
    Two,
}

impl Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Part::One => write!(f, "p1"),
            Part::Two => write!(f, "p2"),
        }
    }
}

/// Which input a solution is running against. Some puzzles use different
/// parameters for the example than for the real input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Sample,
    Real,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Number(i64),
    Text(String),
}

impl Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Answer::Number(n) => write!(f, "{}", n),
            Answer::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Answer {
    fn from(value: i64) -> Self {
        Answer::Number(value)
    }
}

impl From<i32> for Answer {
    fn from(value: i32) -> Self {
        Answer::Number(i64::from(value))
    }
}

impl From<usize> for Answer {
    fn from(value: usize) -> Self {
        Answer::Number(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<u64> for Answer {
    fn from(value: u64) -> Self {
        Answer::Number(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Answer::Text(value)
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::Text(value.to_string())
    }
}

pub trait Solution: Sync {
    fn part1(&self, input: &str, mode: RunMode) -> Result<Answer>;

    fn part2(&self, input: &str, mode: RunMode) -> Result<Answer>;

    fn run(&self, part: Part, input: &str, mode: RunMode) -> Result<Answer> {
        match part {
            Part::One => self.part1(input, mode),
            Part::Two => self.part2(input, mode),
        }
    }

    /// Worked examples from the puzzle text, checked by `aoc check`.
    fn examples(&self) -> Vec<Example> {
        Vec::new()
    }
}
