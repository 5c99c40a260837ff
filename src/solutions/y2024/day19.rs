use std::{error, fmt::Display};

use anyhow::Result;

use crate::{
    check::Example,
    puzzle::{Answer, Part, RunMode, Solution},
};

const SAMPLE: &str = "\
r, wr, b, g, bwu, rb, gb, br

brwrr
bggr
gbbr
rrbgbr
ubwu
bwurrg
brgr
bbrgwb
";

#[derive(Debug)]
pub enum Error {
    NoPatterns,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoPatterns => write!(
                f,
                "Expect one line for patterns at the start of given input."
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug)]
pub struct Onsen {
    patterns: Vec<String>,
    designs: Vec<String>,
}

impl Onsen {
    pub fn parse(input: &str) -> Result<Self, Error> {
        let mut lines = input.lines().map(str::trim);
        let patterns = lines
            .next()
            .filter(|line| !line.is_empty())
            .ok_or(Error::NoPatterns)?
            .split(',')
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();
        let designs = lines
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self { patterns, designs })
    }

    /// Number of ways to lay out `design` as a sequence of patterns.
    pub fn arrangements(&self, design: &str) -> u64 {
        // ways[i]: arrangements of design[i..], indexed by byte
        let design = design.as_bytes();
        let len = design.len();
        let mut ways = vec![0u64; len + 1];
        ways[len] = 1;
        for start in (0..len).rev() {
            ways[start] = self
                .patterns
                .iter()
                .filter(|p| design[start..].starts_with(p.as_bytes()))
                .map(|p| ways[start + p.len()])
                .sum();
        }

        ways[0]
    }

    pub fn possible_count(&self) -> usize {
        self.designs
            .iter()
            .filter(|d| self.arrangements(d) > 0)
            .count()
    }

    pub fn total_arrangements(&self) -> u64 {
        self.designs.iter().map(|d| self.arrangements(d)).sum()
    }
}

#[derive(Debug)]
pub struct Day19;

impl Solution for Day19 {
    fn part1(&self, input: &str, _mode: RunMode) -> Result<Answer> {
        Ok(Onsen::parse(input)?.possible_count().into())
    }

    fn part2(&self, input: &str, _mode: RunMode) -> Result<Answer> {
        Ok(Onsen::parse(input)?.total_arrangements().into())
    }

    fn examples(&self) -> Vec<Example> {
        vec![
            Example::new(Part::One, SAMPLE, 6).named("sample => 6"),
            Example::new(Part::Two, SAMPLE, 16).named("sample => 16"),
        ]
    }
}
