use std::{collections::HashSet, error, fmt::Display};

use anyhow::Result;

use crate::{
    check::Example,
    puzzle::{Answer, Part, RunMode, Solution},
    utils::grid::{self, Direction, Point},
};

#[derive(Debug)]
pub enum Error {
    InvalidCharforDirection(char),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidCharforDirection(c) => {
                write!(f, "Invalid character({}) for direction.", c)
            }
        }
    }
}

impl error::Error for Error {}

pub fn read_moves(input: &str) -> Result<Vec<Direction>, Error> {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| grid::arrow_direction(c).ok_or(Error::InvalidCharforDirection(c)))
        .collect()
}

/// Houses that get at least one present when `walker_n` walkers take turns
/// following the moves, all starting at the origin.
pub fn visited_houses(moves: &[Direction], walker_n: usize) -> usize {
    let mut walkers = vec![Point::new(0, 0); walker_n.max(1)];
    let mut visited = HashSet::from([Point::new(0, 0)]);
    for (ind, dir) in moves.iter().enumerate() {
        let walker = &mut walkers[ind % walker_n.max(1)];
        *walker = walker.step(*dir);
        visited.insert(*walker);
    }

    visited.len()
}

#[derive(Debug)]
pub struct Day03;

impl Solution for Day03 {
    fn part1(&self, input: &str, _mode: RunMode) -> Result<Answer> {
        Ok(visited_houses(&read_moves(input)?, 1).into())
    }

    fn part2(&self, input: &str, _mode: RunMode) -> Result<Answer> {
        Ok(visited_houses(&read_moves(input)?, 2).into())
    }

    fn examples(&self) -> Vec<Example> {
        vec![
            Example::new(Part::One, ">", 2),
            Example::new(Part::One, "^>v<", 4),
            Example::new(Part::One, "^v^v^v^v^v", 2),
            Example::new(Part::Two, "^v", 3),
            Example::new(Part::Two, "^>v<", 3),
            Example::new(Part::Two, "^v^v^v^v^v", 11),
        ]
    }
}
