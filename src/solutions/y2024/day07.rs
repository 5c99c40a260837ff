use std::{error, fmt::Display, str::FromStr};

use anyhow::Result;
use rayon::prelude::*;

use crate::{
    check::Example,
    puzzle::{Answer, Part, RunMode, Solution},
};

const SAMPLE: &str = "\
190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20
";

#[derive(Debug)]
pub enum Error {
    InvalidEquationText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidEquationText(s) => write!(f, "Invalid text({}) for equation.", s),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Mul,
    Concat,
}

impl Operator {
    pub fn apply(&self, lhs: u64, rhs: u64) -> Option<u64> {
        match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Mul => lhs.checked_mul(rhs),
            Operator::Concat => lhs
                .checked_mul(digit_base(rhs))
                .and_then(|n| n.checked_add(rhs)),
        }
    }

    /// Operand `lhs` such that `lhs op rhs == result`, if there is one.
    fn unapply(&self, result: u64, rhs: u64) -> Option<u64> {
        match self {
            Operator::Add => result.checked_sub(rhs),
            Operator::Mul => {
                if rhs != 0 && result % rhs == 0 {
                    Some(result / rhs)
                } else {
                    None
                }
            }
            Operator::Concat => {
                let base = digit_base(rhs);
                result
                    .checked_sub(rhs)
                    .filter(|rest| rest % base == 0)
                    .map(|rest| rest / base)
            }
        }
    }
}

fn digit_base(n: u64) -> u64 {
    let mut base = 10;
    while base <= n {
        base *= 10;
    }
    base
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    target: u64,
    operands: Vec<u64>,
}

impl FromStr for Equation {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (target, operands) = s
            .split_once(':')
            .ok_or(Error::InvalidEquationText(s.to_string()))?;
        let target = target
            .trim()
            .parse::<u64>()
            .map_err(|_| Error::InvalidEquationText(s.to_string()))?;
        let operands = operands
            .split_whitespace()
            .map(|n| n.parse::<u64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| Error::InvalidEquationText(s.to_string()))?;
        if operands.is_empty() {
            return Err(Error::InvalidEquationText(s.to_string()));
        }

        Ok(Self { target, operands })
    }
}

impl Equation {
    pub fn target(&self) -> u64 {
        self.target
    }

    /// Whether some choice of `ops`, evaluated left to right, reaches the target.
    pub fn is_solvable(&self, ops: &[Operator]) -> bool {
        Self::solvable_recur(self.target, &self.operands, ops)
    }

    // Works backward from the target, peeling operands off the right.
    fn solvable_recur(target: u64, operands: &[u64], ops: &[Operator]) -> bool {
        match operands {
            [] => false,
            [first] => *first == target,
            [rest @ .., last] => {
                if *last == 0 && target == 0 && ops.contains(&Operator::Mul) {
                    return true;
                }
                ops.iter().any(|op| {
                    op.unapply(target, *last)
                        .is_some_and(|lhs| Self::solvable_recur(lhs, rest, ops))
                })
            }
        }
    }
}

pub fn read_equations(input: &str) -> Result<Vec<Equation>, Error> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(Equation::from_str)
        .collect()
}

pub fn calibration_total(equations: &[Equation], ops: &[Operator]) -> u64 {
    equations
        .par_iter()
        .filter(|eq| eq.is_solvable(ops))
        .map(|eq| eq.target)
        .sum()
}

#[derive(Debug)]
pub struct Day07;

impl Solution for Day07 {
    fn part1(&self, input: &str, _mode: RunMode) -> Result<Answer> {
        let equations = read_equations(input)?;
        Ok(calibration_total(&equations, &[Operator::Add, Operator::Mul]).into())
    }

    fn part2(&self, input: &str, _mode: RunMode) -> Result<Answer> {
        let equations = read_equations(input)?;
        let ops = [Operator::Add, Operator::Mul, Operator::Concat];
        Ok(calibration_total(&equations, &ops).into())
    }

    fn examples(&self) -> Vec<Example> {
        vec![
            Example::new(Part::One, SAMPLE, 3749).named("sample => 3749"),
            Example::new(Part::Two, SAMPLE, 11387).named("sample => 11387"),
        ]
    }
}
