use std::{
    collections::{HashMap, HashSet},
    error,
    fmt::Display,
};

use anyhow::Result;

use crate::{
    check::Example,
    puzzle::{Answer, Part, RunMode, Solution},
};

const SAMPLE: &str = "\
aaa: you hhh
you: bbb ccc
bbb: ddd eee
ccc: ddd eee fff
ddd: ggg
eee: out
fff: out
ggg: out
hhh: ccc fff iii
iii: out
";

const SERVER_SAMPLE: &str = "\
svr: aaa bbb
aaa: fft
fft: ccc
bbb: tty
tty: ccc
ccc: ddd eee
ddd: hub
hub: fff
eee: dac
dac: fff
fff: ggg hhh
ggg: out
hhh: out
";

#[derive(Debug)]
pub enum Error {
    InvalidDeviceText(String),
    Cycle(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidDeviceText(s) => write!(f, "Invalid text({}) for device.", s),
            Error::Cycle(name) => write!(f, "Found a cycle through device({}).", name),
        }
    }
}

impl error::Error for Error {}

/// Devices and the outputs each one feeds.
#[derive(Debug)]
pub struct Rack {
    outputs: HashMap<String, Vec<String>>,
}

impl Rack {
    pub fn parse(input: &str) -> Result<Self, Error> {
        let outputs = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                let (name, targets) = line
                    .split_once(':')
                    .filter(|(name, _)| !name.trim().is_empty())
                    .ok_or(Error::InvalidDeviceText(line.to_string()))?;
                Ok((
                    name.trim().to_string(),
                    targets.split_whitespace().map(str::to_string).collect(),
                ))
            })
            .collect::<Result<HashMap<_, _>, Error>>()?;

        Ok(Self { outputs })
    }

    /// Number of paths from `start` to `end` passing every device in `required`.
    pub fn count_paths(&self, start: &str, end: &str, required: &[&str]) -> Result<u64, Error> {
        let mut search = PathSearch {
            rack: self,
            end,
            required,
            memo: HashMap::new(),
            on_path: HashSet::new(),
        };
        search.count(start, 0)
    }
}

struct PathSearch<'a> {
    rack: &'a Rack,
    end: &'a str,
    required: &'a [&'a str],
    // (device, bitmask of required devices seen) -> paths to end
    memo: HashMap<(&'a str, u32), u64>,
    on_path: HashSet<&'a str>,
}

impl<'a> PathSearch<'a> {
    fn count(&mut self, device: &'a str, seen: u32) -> Result<u64, Error> {
        let seen = self
            .required
            .iter()
            .position(|r| *r == device)
            .map_or(seen, |ind| seen | (1 << ind));
        if device == self.end {
            let all = (1u32 << self.required.len()) - 1;
            return Ok(u64::from(seen == all));
        }
        if let Some(paths) = self.memo.get(&(device, seen)) {
            return Ok(*paths);
        }
        if !self.on_path.insert(device) {
            return Err(Error::Cycle(device.to_string()));
        }

        let mut paths = 0;
        let rack = self.rack;
        for next in rack.outputs.get(device).into_iter().flatten() {
            paths += self.count(next, seen)?;
        }
        self.on_path.remove(device);
        self.memo.insert((device, seen), paths);

        Ok(paths)
    }
}

#[derive(Debug)]
pub struct Day11;

impl Solution for Day11 {
    fn part1(&self, input: &str, _mode: RunMode) -> Result<Answer> {
        Ok(Rack::parse(input)?.count_paths("you", "out", &[])?.into())
    }

    fn part2(&self, input: &str, _mode: RunMode) -> Result<Answer> {
        Ok(Rack::parse(input)?
            .count_paths("svr", "out", &["dac", "fft"])?
            .into())
    }

    fn examples(&self) -> Vec<Example> {
        vec![
            Example::new(Part::One, SAMPLE, 5).named("sample => 5"),
            Example::new(Part::Two, SERVER_SAMPLE, 2).named("server sample => 2"),
        ]
    }
}
