use std::{error, fmt::Display, str::FromStr};

use anyhow::Result;

use crate::{
    check::Example,
    puzzle::{Answer, Part, RunMode, Solution},
};

#[derive(Debug)]
pub enum Error {
    InvalidBoxText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidBoxText(s) => write!(f, "Invalid text({}) for box, expect LxWxH.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Present {
    l: u64,
    w: u64,
    h: u64,
}

impl FromStr for Present {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let dims = s
            .trim()
            .split('x')
            .map(|n| n.parse::<u64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| Error::InvalidBoxText(s.to_string()))?;
        match dims[..] {
            [l, w, h] => Ok(Self { l, w, h }),
            _ => Err(Error::InvalidBoxText(s.to_string())),
        }
    }
}

impl Present {
    pub fn new(l: u64, w: u64, h: u64) -> Self {
        Self { l, w, h }
    }

    fn side_areas(&self) -> [u64; 3] {
        [self.l * self.w, self.w * self.h, self.h * self.l]
    }

    fn sorted_dims(&self) -> [u64; 3] {
        let mut dims = [self.l, self.w, self.h];
        dims.sort_unstable();
        dims
    }

    /// Surface area plus the area of the smallest side as slack.
    pub fn paper(&self) -> u64 {
        let areas = self.side_areas();
        2 * areas.iter().sum::<u64>() + areas.iter().min().copied().unwrap_or(0)
    }

    /// Smallest perimeter plus volume for the bow.
    pub fn ribbon(&self) -> u64 {
        let [a, b, _] = self.sorted_dims();
        2 * (a + b) + self.l * self.w * self.h
    }
}

pub fn read_presents(input: &str) -> Result<Vec<Present>, Error> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(Present::from_str)
        .collect()
}

#[derive(Debug)]
pub struct Day02;

impl Solution for Day02 {
    fn part1(&self, input: &str, _mode: RunMode) -> Result<Answer> {
        let presents = read_presents(input)?;
        Ok(presents.iter().map(Present::paper).sum::<u64>().into())
    }

    fn part2(&self, input: &str, _mode: RunMode) -> Result<Answer> {
        let presents = read_presents(input)?;
        Ok(presents.iter().map(Present::ribbon).sum::<u64>().into())
    }

    fn examples(&self) -> Vec<Example> {
        vec![
            Example::new(Part::One, "2x3x4", 58),
            Example::new(Part::One, "1x1x10", 43),
            Example::new(Part::Two, "2x3x4", 34),
            Example::new(Part::Two, "1x1x10", 14),
        ]
    }
}
