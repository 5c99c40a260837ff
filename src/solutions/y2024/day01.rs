use std::{collections::HashMap, error, fmt::Display};

use anyhow::Result;

use crate::{
    check::Example,
    puzzle::{Answer, Part, RunMode, Solution},
};

const SAMPLE: &str = "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n";

#[derive(Debug)]
pub enum Error {
    InvalidPairText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidPairText(s) => write!(f, "Invalid text({}) for location pair.", s),
        }
    }
}

impl error::Error for Error {}

pub fn read_lists(input: &str) -> Result<(Vec<i64>, Vec<i64>), Error> {
    let mut left = Vec::new();
    let mut right = Vec::new();
    for line in input.lines().filter(|l| !l.trim().is_empty()) {
        let mut parts = line.split_whitespace().map(|s| s.parse::<i64>());
        match (parts.next(), parts.next(), parts.next()) {
            (Some(Ok(l)), Some(Ok(r)), None) => {
                left.push(l);
                right.push(r);
            }
            _ => return Err(Error::InvalidPairText(line.to_string())),
        }
    }

    Ok((left, right))
}

pub fn total_distance(mut left: Vec<i64>, mut right: Vec<i64>) -> i64 {
    left.sort_unstable();
    right.sort_unstable();
    left.iter().zip(right.iter()).map(|(l, r)| (l - r).abs()).sum()
}

pub fn similarity(left: &[i64], right: &[i64]) -> i64 {
    let mut counts = HashMap::new();
    for n in right {
        *counts.entry(*n).or_insert(0) += 1;
    }

    left.iter().map(|n| n * counts.get(n).copied().unwrap_or(0)).sum()
}

#[derive(Debug)]
pub struct Day01;

impl Solution for Day01 {
    fn part1(&self, input: &str, _mode: RunMode) -> Result<Answer> {
        let (left, right) = read_lists(input)?;
        Ok(total_distance(left, right).into())
    }

    fn part2(&self, input: &str, _mode: RunMode) -> Result<Answer> {
        let (left, right) = read_lists(input)?;
        Ok(similarity(&left, &right).into())
    }

    fn examples(&self) -> Vec<Example> {
        vec![
            Example::new(Part::One, SAMPLE, 11).named("sample => 11"),
            Example::new(Part::Two, SAMPLE, 31).named("sample => 31"),
        ]
    }
}
