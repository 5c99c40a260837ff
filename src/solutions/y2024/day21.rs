use std::{collections::HashMap, error, fmt::Display};

use anyhow::Result;

use crate::{
    check::Example,
    puzzle::{Answer, Part, RunMode, Solution},
    utils::{
        grid::{DirLabel, Point},
        queue::Queue,
    },
};

const SAMPLE: &str = "029A\n980A\n179A\n456A\n379A\n";

#[derive(Debug)]
pub enum Error {
    InvalidKey(char),
    InvalidCode(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidKey(key) => write!(f, "Invalid key({}).", key),
            Error::InvalidCode(code) => write!(f, "Invalid door code({}).", code),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug)]
pub struct Keypad {
    keys: Vec<Vec<Option<char>>>,
}

impl Keypad {
    fn from_layout(layout: &[&str]) -> Self {
        let keys = layout
            .iter()
            .map(|row| row.chars().map(|c| (c != '.').then_some(c)).collect())
            .collect();

        Self { keys }
    }

    pub fn numeric() -> Self {
        Self::from_layout(&["789", "456", "123", ".0A"])
    }

    pub fn directional() -> Self {
        Self::from_layout(&[".^A", "<v>"])
    }

    fn key_at(&self, p: Point) -> Option<char> {
        if p.x < 0 || p.y < 0 {
            return None;
        }

        self.keys
            .get(p.y as usize)
            .and_then(|row| row.get(p.x as usize))
            .copied()
            .flatten()
    }

    fn position(&self, key: char) -> Result<Point, Error> {
        self.keys
            .iter()
            .enumerate()
            .find_map(|(y, row)| {
                row.iter()
                    .position(|k| *k == Some(key))
                    .map(|x| Point::new(x as i64, y as i64))
            })
            .ok_or(Error::InvalidKey(key))
    }

    /// Every shortest sequence of arrow presses from `from` to `to`, each
    /// followed by `A`. Paths never pass over the gap.
    pub fn shortest_paths(&self, from: char, to: char) -> Result<Vec<String>, Error> {
        let start = self.position(from)?;
        let target = self.position(to)?;
        let mut distances = HashMap::from([(start, 0usize)]);
        let mut pending = Queue::from_items([(start, String::new())]);
        let mut paths = Vec::new();
        let mut min_len = None;

        while let Some((pos, path)) = pending.dequeue() {
            if min_len.is_some_and(|len| path.len() > len) {
                break;
            }
            if pos == target {
                min_len.get_or_insert(path.len());
                paths.push(format!("{}A", path));
                continue;
            }

            for label in DirLabel::cardinals() {
                let next = pos.step(label.direction());
                if self.key_at(next).is_none() {
                    continue;
                }
                let next_len = path.len() + 1;
                if *distances.entry(next).or_insert(next_len) == next_len {
                    pending.enqueue((next, format!("{}{}", path, arrow(*label)))).ok();
                }
            }
        }

        Ok(paths)
    }
}

fn arrow(label: DirLabel) -> char {
    match label {
        DirLabel::Up => '^',
        DirLabel::Down => 'v',
        DirLabel::Left => '<',
        _ => '>',
    }
}

/// A numeric keypad operated through a chain of directional keypads.
#[derive(Debug)]
pub struct KeypadChain {
    numeric: Keypad,
    directional: Keypad,
    robot_n: usize,
    memo: HashMap<(char, char, usize), u64>,
}

impl KeypadChain {
    pub fn new(robot_n: usize) -> Self {
        Self {
            numeric: Keypad::numeric(),
            directional: Keypad::directional(),
            robot_n,
            memo: HashMap::new(),
        }
    }

    // Presses by the human to type `seq` on a directional keypad `level`
    // robots away.
    fn type_cost(&mut self, seq: &str, level: usize) -> Result<u64, Error> {
        let mut cost = 0;
        let mut last = 'A';
        for key in seq.chars() {
            cost += self.move_cost(last, key, level)?;
            last = key;
        }

        Ok(cost)
    }

    fn move_cost(&mut self, from: char, to: char, level: usize) -> Result<u64, Error> {
        if level == 0 {
            return Ok(1);
        }
        if let Some(cost) = self.memo.get(&(from, to, level)) {
            return Ok(*cost);
        }

        let mut best = u64::MAX;
        for path in self.directional.shortest_paths(from, to)? {
            best = best.min(self.type_cost(&path, level - 1)?);
        }
        self.memo.insert((from, to, level), best);

        Ok(best)
    }

    /// Length of the shortest human sequence that types `code` on the door.
    pub fn sequence_len(&mut self, code: &str) -> Result<u64, Error> {
        let mut total = 0;
        let mut last = 'A';
        for key in code.chars() {
            let mut best = u64::MAX;
            for path in self.numeric.shortest_paths(last, key)? {
                best = best.min(self.type_cost(&path, self.robot_n)?);
            }
            total += best;
            last = key;
        }

        Ok(total)
    }

    pub fn complexity(&mut self, code: &str) -> Result<u64, Error> {
        let digits = code
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect::<String>();
        let numeric_part = digits
            .parse::<u64>()
            .map_err(|_| Error::InvalidCode(code.to_string()))?;

        Ok(self.sequence_len(code)? * numeric_part)
    }
}

pub fn complexity_sum(input: &str, robot_n: usize) -> Result<u64, Error> {
    let mut chain = KeypadChain::new(robot_n);
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|code| chain.complexity(code))
        .sum()
}

#[derive(Debug)]
pub struct Day21;

impl Solution for Day21 {
    fn part1(&self, input: &str, _mode: RunMode) -> Result<Answer> {
        Ok(complexity_sum(input, 2)?.into())
    }

    fn part2(&self, input: &str, _mode: RunMode) -> Result<Answer> {
        Ok(complexity_sum(input, 25)?.into())
    }

    fn examples(&self) -> Vec<Example> {
        vec![Example::new(Part::One, SAMPLE, 126384).named("sample => 126384")]
    }
}
