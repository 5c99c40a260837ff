use std::{collections::HashMap, error, fmt::Display};

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    check::Example,
    puzzle::{Answer, Part, RunMode, Solution},
    utils::{queue, seq},
};

const SAMPLE: &str = "\
[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}
[...#.] (0,2,3,4) (2,3) (0,4) (0,1,2) (1,2,3,4) {7,5,12,7,2}
[.###.#] (0,1,2,3,4) (0,3,4) (0,1,2,4,5) (1,2) {10,11,11,5,10,5}
";

#[derive(Debug)]
pub enum Error {
    InvalidMachineText(String),
    InvalidButtonIndex(usize, String),
    UnreachableLights(String),
    UnreachableJoltages(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidMachineText(s) => write!(f, "Invalid text({}) for machine.", s),
            Error::InvalidButtonIndex(ind, s) => {
                write!(f, "Button index({}) is out of range in machine({}).", ind, s)
            }
            Error::UnreachableLights(s) => {
                write!(f, "No button combination lights up machine({}).", s)
            }
            Error::UnreachableJoltages(s) => {
                write!(f, "No button presses reach the joltages of machine({}).", s)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Clone)]
pub struct Machine {
    text: String,
    lights: u64,
    buttons: Vec<Vec<usize>>,
    joltages: Vec<i64>,
}

impl Machine {
    pub fn parse(text: &str) -> Result<Self, Error> {
        static LIGHTS_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[([.#]+)\]").unwrap());
        static BUTTON_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([\d,]+)\)").unwrap());
        static JOLTAGE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([\d,]+)\}$").unwrap());

        let text = text.trim();
        let invalid = || Error::InvalidMachineText(text.to_string());
        let light_caps = LIGHTS_PATTERN.captures(text).ok_or_else(invalid)?;
        if light_caps[1].len() > u64::BITS as usize {
            return Err(invalid());
        }
        let lights = light_caps[1]
            .chars()
            .enumerate()
            .filter(|(_, c)| *c == '#')
            .fold(0u64, |acc, (ind, _)| acc | (1 << ind));
        let light_n = light_caps[1].len();

        let buttons = BUTTON_PATTERN
            .captures_iter(text)
            .map(|caps| read_numbers::<usize>(&caps[1]).ok_or_else(invalid))
            .collect::<Result<Vec<_>, _>>()?;
        if let Some(ind) = buttons.iter().flatten().find(|ind| **ind >= light_n) {
            return Err(Error::InvalidButtonIndex(*ind, text.to_string()));
        }

        let joltage_caps = JOLTAGE_PATTERN.captures(text).ok_or_else(invalid)?;
        let joltages = read_numbers::<i64>(&joltage_caps[1]).ok_or_else(invalid)?;
        if joltages.len() != light_n {
            return Err(invalid());
        }

        Ok(Self {
            text: text.to_string(),
            lights,
            buttons,
            joltages,
        })
    }

    fn button_mask(&self, button_ind: usize) -> u64 {
        self.buttons[button_ind]
            .iter()
            .fold(0, |acc, ind| acc ^ (1 << ind))
    }

    /// Fewest presses that toggle the indicator lights into their pattern.
    ///
    /// Pressing a button twice cancels out, so only subsets of buttons
    /// matter. They are tried from the smallest size up.
    pub fn fewest_light_presses(&self) -> Result<usize, Error> {
        let button_inds = (0..self.buttons.len()).collect::<Vec<_>>();
        (0..=self.buttons.len())
            .find(|size| {
                seq::combinations(&button_inds, *size).iter().any(|combo| {
                    combo
                        .iter()
                        .fold(0, |acc, ind| acc ^ self.button_mask(*ind))
                        == self.lights
                })
            })
            .ok_or(Error::UnreachableLights(self.text.clone()))
    }

    /// Joltage increase and press count of every button subset, each
    /// button pressed at most once.
    fn single_press_patterns(&self) -> Vec<(Vec<i64>, u64)> {
        let counters = self
            .buttons
            .iter()
            .map(|button| button.iter().map(|ind| (*ind, 1)).collect::<HashMap<_, _>>())
            .collect::<Vec<_>>();

        (0..=counters.len())
            .flat_map(|size| seq::combinations(&counters, size))
            .map(|combo| {
                let total = combo
                    .iter()
                    .fold(HashMap::new(), |acc, button| queue::add_counters(&acc, button));
                let effect = (0..self.joltages.len())
                    .map(|ind| total.get(&ind).copied().unwrap_or(0))
                    .collect();
                (effect, combo.len() as u64)
            })
            .collect()
    }

    /// Fewest presses that raise every counter exactly to its joltage.
    ///
    /// Any press plan splits into the buttons pressed an odd number of
    /// times plus twice some smaller plan. The odd set is fixed by the
    /// parity of the targets, so the search halves the targets at each level.
    pub fn fewest_joltage_presses(&self) -> Result<u64, Error> {
        let patterns = self.single_press_patterns();
        let mut memo = HashMap::new();
        fewest_presses_recur(&self.joltages, &patterns, &mut memo)
            .ok_or(Error::UnreachableJoltages(self.text.clone()))
    }
}

fn fewest_presses_recur(
    target: &[i64],
    patterns: &[(Vec<i64>, u64)],
    memo: &mut HashMap<Vec<i64>, Option<u64>>,
) -> Option<u64> {
    if target.iter().all(|t| *t == 0) {
        return Some(0);
    }
    if let Some(known) = memo.get(target) {
        return *known;
    }

    let mut best: Option<u64> = None;
    for (effect, cost) in patterns {
        let fits = effect
            .iter()
            .zip(target)
            .all(|(e, t)| e <= t && (t - e) % 2 == 0);
        if !fits {
            continue;
        }

        let half = target
            .iter()
            .zip(effect)
            .map(|(t, e)| (t - e) / 2)
            .collect::<Vec<_>>();
        if let Some(rest) = fewest_presses_recur(&half, patterns, memo) {
            let presses = cost + 2 * rest;
            best = Some(best.map_or(presses, |b| b.min(presses)));
        }
    }
    memo.insert(target.to_vec(), best);

    best
}

fn read_numbers<T: std::str::FromStr>(text: &str) -> Option<Vec<T>> {
    text.split(',')
        .map(|n| n.trim().parse::<T>().ok())
        .collect()
}

pub fn read_machines(input: &str) -> Result<Vec<Machine>, Error> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(Machine::parse)
        .collect()
}

#[derive(Debug)]
pub struct Day10;

impl Solution for Day10 {
    fn part1(&self, input: &str, _mode: RunMode) -> Result<Answer> {
        let mut total = 0;
        for machine in read_machines(input)? {
            total += machine.fewest_light_presses()?;
        }

        Ok(total.into())
    }

    fn part2(&self, input: &str, _mode: RunMode) -> Result<Answer> {
        let mut total = 0;
        for machine in read_machines(input)? {
            total += machine.fewest_joltage_presses()?;
        }

        Ok(total.into())
    }

    fn examples(&self) -> Vec<Example> {
        vec![
            Example::new(Part::One, SAMPLE, 7).named("sample => 7"),
            Example::new(Part::Two, SAMPLE, 33).named("sample => 33"),
        ]
    }
}
