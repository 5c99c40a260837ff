use anyhow::Result;

use crate::{
    check::Example,
    puzzle::{Answer, Part, RunMode, Solution},
};

const VOWELS: &str = "aeiou";
const NAUGHTY_PAIRS: [&str; 4] = ["ab", "cd", "pq", "xy"];

/// Old rules: three vowels, a doubled letter, no forbidden pair.
pub fn is_nice(s: &str) -> bool {
    let bytes = s.as_bytes();
    let vowel_n = s.chars().filter(|c| VOWELS.contains(*c)).count();
    let has_double = bytes.windows(2).any(|w| w[0] == w[1]);
    let has_naughty = NAUGHTY_PAIRS.iter().any(|pair| s.contains(pair));

    vowel_n >= 3 && has_double && !has_naughty
}

/// New rules: a pair appearing twice without overlap, and a letter repeating
/// with one letter between.
pub fn is_nicer(s: &str) -> bool {
    let bytes = s.as_bytes();
    let has_repeated_pair = (0..bytes.len().saturating_sub(1)).any(|ind| {
        let pair = &bytes[ind..(ind + 2)];
        bytes[(ind + 2)..].windows(2).any(|w| w == pair)
    });
    let has_sandwich = bytes.windows(3).any(|w| w[0] == w[2]);

    has_repeated_pair && has_sandwich
}

fn count_lines(input: &str, rule: fn(&str) -> bool) -> usize {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && rule(line))
        .count()
}

#[derive(Debug)]
pub struct Day05;

impl Solution for Day05 {
    fn part1(&self, input: &str, _mode: RunMode) -> Result<Answer> {
        Ok(count_lines(input, is_nice).into())
    }

    fn part2(&self, input: &str, _mode: RunMode) -> Result<Answer> {
        Ok(count_lines(input, is_nicer).into())
    }

    fn examples(&self) -> Vec<Example> {
        vec![
            Example::new(Part::One, "ugknbfddgicrmopn", 1),
            Example::new(Part::One, "aaa", 1),
            Example::new(Part::One, "jchzalrnumimnmhp", 0),
            Example::new(Part::One, "haegwjzuvuyypxyu", 0),
            Example::new(Part::One, "dvszwmarrgswjxmb", 0),
            Example::new(Part::Two, "qjhvhtzxzqqjkmpb", 1),
            Example::new(Part::Two, "xxyxx", 1),
            Example::new(Part::Two, "uurcxstgmygtbstg", 0),
            Example::new(Part::Two, "ieodomkazucvgmuy", 0),
        ]
    }
}
