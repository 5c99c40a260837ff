use std::{
    collections::{HashMap, HashSet},
    error,
    fmt::Display,
};

use anyhow::Result;

use crate::{
    check::Example,
    puzzle::{Answer, Part, RunMode, Solution},
    utils::{queue::Queue, seq},
};

const SAMPLE: &str = "\
47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47
";

#[derive(Debug)]
pub enum Error {
    InvalidRuleText(String),
    InvalidUpdateText(String),
    NoUpdates,
    CyclicRules(Vec<usize>),
    EmptyUpdate,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidRuleText(s) => write!(f, "Invalid rule text({}) for printer.", s),
            Error::InvalidUpdateText(s) => write!(f, "Invalid update text({}) for printer.", s),
            Error::NoUpdates => write!(f, "Expect a blank line between rules and updates."),
            Error::CyclicRules(update) => {
                write!(f, "Rules for update({:?}) contain a cycle.", update)
            }
            Error::EmptyUpdate => write!(f, "Given update has no pages."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Default)]
pub struct PrinterRules {
    rules: Vec<(usize, usize)>,
}

impl PrinterRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_rule(&mut self, rule_text: &str) -> Result<(), Error> {
        let (before, after) = rule_text
            .trim()
            .split_once('|')
            .ok_or(Error::InvalidRuleText(rule_text.to_string()))?;
        let before = before
            .parse::<usize>()
            .map_err(|_| Error::InvalidRuleText(rule_text.to_string()))?;
        let after = after
            .parse::<usize>()
            .map_err(|_| Error::InvalidRuleText(rule_text.to_string()))?;
        self.rules.push((before, after));

        Ok(())
    }

    /// Rules whose both pages appear in `update`.
    fn applicable<'a>(&'a self, update: &'a [usize]) -> impl Iterator<Item = (usize, usize)> + 'a {
        self.rules
            .iter()
            .copied()
            .filter(move |(before, after)| update.contains(before) && update.contains(after))
    }

    pub fn is_valid(&self, update: &[usize]) -> bool {
        let positions = update
            .iter()
            .enumerate()
            .map(|(ind, page)| (*page, ind))
            .collect::<HashMap<_, _>>();

        self.applicable(update)
            .all(|(before, after)| positions[&before] < positions[&after])
    }

    /// Orders the pages of `update` by a topological sort of the applicable rules.
    pub fn correct(&self, update: &[usize]) -> Result<Vec<usize>, Error> {
        let mut successors: HashMap<usize, Vec<usize>> = HashMap::new();
        let mut in_degrees = update
            .iter()
            .map(|page| (*page, 0usize))
            .collect::<HashMap<_, _>>();
        let edges = self.applicable(update).collect::<HashSet<_>>();
        for (before, after) in edges {
            successors.entry(before).or_default().push(after);
            *in_degrees.entry(after).or_insert(0) += 1;
        }

        let mut ready = Queue::from_items(
            update
                .iter()
                .copied()
                .filter(|page| in_degrees.get(page) == Some(&0)),
        );
        let mut sorted = Vec::with_capacity(update.len());
        while let Some(page) = ready.dequeue() {
            sorted.push(page);
            for next in successors.get(&page).map(Vec::as_slice).unwrap_or(&[]) {
                if let Some(degree) = in_degrees.get_mut(next) {
                    *degree -= 1;
                    if *degree == 0 {
                        ready.enqueue(*next).ok();
                    }
                }
            }
        }

        if sorted.len() < in_degrees.len() {
            return Err(Error::CyclicRules(update.to_vec()));
        }

        Ok(sorted)
    }
}

pub fn read_printer_settings(input: &str) -> Result<(PrinterRules, Vec<Vec<usize>>), Error> {
    let input = input.replace("\r\n", "\n");
    let (rules_text, updates_text) = input.trim().split_once("\n\n").ok_or(Error::NoUpdates)?;

    let mut rules = PrinterRules::new();
    for line in rules_text.lines() {
        rules.add_rule(line)?;
    }

    let updates = updates_text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.trim()
                .split(',')
                .map(|s| s.parse::<usize>())
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|_| Error::InvalidUpdateText(line.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((rules, updates))
}

fn middle_page(update: &[usize]) -> Result<usize, Error> {
    seq::middle_index(update)
        .map(|ind| update[ind])
        .ok_or(Error::EmptyUpdate)
}

#[derive(Debug)]
pub struct Day05;

impl Solution for Day05 {
    fn part1(&self, input: &str, _mode: RunMode) -> Result<Answer> {
        let (rules, updates) = read_printer_settings(input)?;
        let mut sum = 0;
        for update in updates.iter().filter(|u| rules.is_valid(u)) {
            sum += middle_page(update)?;
        }

        Ok(sum.into())
    }

    fn part2(&self, input: &str, _mode: RunMode) -> Result<Answer> {
        let (rules, updates) = read_printer_settings(input)?;
        let mut sum = 0;
        for update in updates.iter().filter(|u| !rules.is_valid(u)) {
            sum += middle_page(&rules.correct(update)?)?;
        }

        Ok(sum.into())
    }

    fn examples(&self) -> Vec<Example> {
        vec![
            Example::new(Part::One, SAMPLE, 143).named("sample => 143"),
            Example::new(Part::Two, SAMPLE, 123).named("sample => 123"),
        ]
    }
}
