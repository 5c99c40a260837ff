use std::{error, fmt::Display};

use anyhow::Result;
use md5::{Digest, Md5};
use rayon::prelude::*;

use crate::{
    check::Example,
    puzzle::{Answer, Part, RunMode, Solution},
};

const CHUNK_SIZE: u64 = 1 << 14;
const SEARCH_LIMIT: u64 = 1 << 32;

#[derive(Debug)]
pub enum Error {
    EmptyKey,
    NoCoin(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyKey => write!(f, "Given secret key is empty."),
            Error::NoCoin(zeros) => write!(
                f,
                "No number below {} gives a hash with {} leading zeros.",
                SEARCH_LIMIT, zeros
            ),
        }
    }
}

impl error::Error for Error {}

fn has_leading_zeros(digest: &[u8], zeros: usize) -> bool {
    let full_bytes = zeros / 2;
    digest[..full_bytes].iter().all(|b| *b == 0)
        && (zeros % 2 == 0 || digest[full_bytes] >> 4 == 0)
}

pub fn is_coin(key: &str, n: u64, zeros: usize) -> bool {
    let digest = Md5::digest(format!("{}{}", key, n).as_bytes());
    has_leading_zeros(&digest, zeros)
}

/// Lowest positive number whose hash, appended to `key`, starts with `zeros` hex zeros.
pub fn mine(key: &str, zeros: usize) -> Result<u64, Error> {
    let key = key.trim();
    if key.is_empty() {
        return Err(Error::EmptyKey);
    }

    let mut start = 1;
    while start < SEARCH_LIMIT {
        if let Some(n) = (start..(start + CHUNK_SIZE))
            .into_par_iter()
            .find_first(|n| is_coin(key, *n, zeros))
        {
            return Ok(n);
        }
        start += CHUNK_SIZE;
    }

    Err(Error::NoCoin(zeros))
}

#[derive(Debug)]
pub struct Day04;

impl Solution for Day04 {
    fn part1(&self, input: &str, _mode: RunMode) -> Result<Answer> {
        Ok(mine(input, 5)?.into())
    }

    fn part2(&self, input: &str, _mode: RunMode) -> Result<Answer> {
        Ok(mine(input, 6)?.into())
    }

    fn examples(&self) -> Vec<Example> {
        vec![
            Example::new(Part::One, "abcdef", 609043),
            Example::new(Part::One, "pqrstuv", 1048970),
        ]
    }
}
