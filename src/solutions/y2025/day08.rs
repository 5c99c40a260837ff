use std::{error, fmt::Display, str::FromStr};

use anyhow::Result;
use itertools::Itertools;

use crate::{
    check::Example,
    puzzle::{Answer, Part, RunMode, Solution},
    utils::seq,
};

const SAMPLE: &str = "\
162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689
";

const SAMPLE_CONNECTIONS: usize = 10;
const REAL_CONNECTIONS: usize = 1000;

#[derive(Debug)]
pub enum Error {
    InvalidPositionText(String),
    TooFewBoxes(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidPositionText(s) => {
                write!(f, "Invalid text({}) for junction box position.", s)
            }
            Error::TooFewBoxes(n) => write!(f, "Given {} junction box(es), expect at least 2.", n),
        }
    }
}

impl error::Error for Error {}

/// Disjoint sets over `0..n` with union by size and path compression.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    group_n: usize,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            group_n: n,
        }
    }

    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }

        root
    }

    /// Joins the groups of `x` and `y`. Returns false if they were already joined.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let (mut root_x, mut root_y) = (self.find(x), self.find(y));
        if root_x == root_y {
            return false;
        }
        if self.size[root_x] < self.size[root_y] {
            std::mem::swap(&mut root_x, &mut root_y);
        }
        self.parent[root_y] = root_x;
        self.size[root_x] += self.size[root_y];
        self.group_n -= 1;

        true
    }

    pub fn group_size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }

    pub fn group_count(&self) -> usize {
        self.group_n
    }

    pub fn groups(&mut self) -> Vec<Vec<usize>> {
        let n = self.parent.len();
        (0..n)
            .map(|x| (self.find(x), x))
            .into_group_map()
            .into_values()
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    x: i64,
    y: i64,
    z: i64,
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let coords = s
            .trim()
            .split(',')
            .map(|n| n.trim().parse::<i64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| Error::InvalidPositionText(s.to_string()))?;
        match coords[..] {
            [x, y, z] => Ok(Self { x, y, z }),
            _ => Err(Error::InvalidPositionText(s.to_string())),
        }
    }
}

impl Position {
    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Squared straight-line distance, enough for ordering.
    pub fn dist_sq(&self, other: &Position) -> i64 {
        (self.x - other.x).pow(2) + (self.y - other.y).pow(2) + (self.z - other.z).pow(2)
    }
}

pub fn read_positions(input: &str) -> Result<Vec<Position>, Error> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(Position::from_str)
        .collect()
}

/// Index pairs of all boxes, closest first. Ties keep input order.
fn closest_pairs(boxes: &[Position]) -> Vec<(usize, usize)> {
    let indices = (0..boxes.len()).collect::<Vec<_>>();
    let mut pairs = seq::pairs(&indices)
        .map(|(a, b)| (*a, *b))
        .collect::<Vec<_>>();
    pairs.sort_by_key(|(a, b)| boxes[*a].dist_sq(&boxes[*b]));

    pairs
}

/// Product of the three largest circuit sizes after connecting the
/// `connections` closest pairs.
pub fn largest_circuits_product(boxes: &[Position], connections: usize) -> usize {
    let mut circuits = UnionFind::new(boxes.len());
    for (a, b) in closest_pairs(boxes).into_iter().take(connections) {
        circuits.union(a, b);
    }

    circuits
        .groups()
        .iter()
        .map(Vec::len)
        .sorted_unstable_by(|a, b| b.cmp(a))
        .take(3)
        .product()
}

/// Product of the X coordinates of the pair whose connection makes one circuit.
pub fn last_connection_product(boxes: &[Position]) -> Result<i64, Error> {
    if boxes.len() < 2 {
        return Err(Error::TooFewBoxes(boxes.len()));
    }

    let mut circuits = UnionFind::new(boxes.len());
    for (a, b) in closest_pairs(boxes) {
        if circuits.union(a, b) && circuits.group_count() == 1 {
            return Ok(boxes[a].x * boxes[b].x);
        }
    }

    Err(Error::TooFewBoxes(boxes.len()))
}

#[derive(Debug)]
pub struct Day08;

impl Solution for Day08 {
    fn part1(&self, input: &str, mode: RunMode) -> Result<Answer> {
        let boxes = read_positions(input)?;
        let connections = match mode {
            RunMode::Sample => SAMPLE_CONNECTIONS,
            RunMode::Real => REAL_CONNECTIONS,
        };

        Ok(largest_circuits_product(&boxes, connections).into())
    }

    fn part2(&self, input: &str, _mode: RunMode) -> Result<Answer> {
        let boxes = read_positions(input)?;
        Ok(last_connection_product(&boxes)?.into())
    }

    fn examples(&self) -> Vec<Example> {
        vec![
            Example::new(Part::One, SAMPLE, 40).named("sample => 40"),
            Example::new(Part::Two, SAMPLE, 25272).named("sample => 25272"),
        ]
    }
}
