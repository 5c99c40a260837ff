use std::{error, fmt::Display};

use anyhow::Result;

use crate::{
    check::Example,
    puzzle::{Answer, Part, RunMode, Solution},
    utils::{grid::Point, seq},
};

const SAMPLE: &str = "7,1\n11,1\n11,7\n9,7\n9,5\n2,5\n2,3\n7,3\n";

#[derive(Debug)]
pub enum Error {
    InvalidTileText(String),
    TooFewTiles(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidTileText(s) => write!(f, "Invalid text({}) for red tile.", s),
            Error::TooFewTiles(n) => write!(f, "Given {} red tile(s), expect at least 2.", n),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    left: i64,
    right: i64,
    top: i64,
    bottom: i64,
}

impl Rect {
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            left: a.x.min(b.x),
            right: a.x.max(b.x),
            top: a.y.min(b.y),
            bottom: a.y.max(b.y),
        }
    }

    /// Tiles covered, corners included.
    pub fn area(&self) -> i64 {
        (self.right - self.left + 1) * (self.bottom - self.top + 1)
    }

    /// Whether the axis-aligned segment `a-b` passes through the interior.
    pub fn is_crossed_by(&self, a: Point, b: Point) -> bool {
        let edge = Rect::from_corners(a, b);
        if edge.left == edge.right {
            self.left < edge.left
                && edge.left < self.right
                && edge.bottom > self.top
                && self.bottom > edge.top
        } else {
            self.top < edge.top
                && edge.top < self.bottom
                && edge.right > self.left
                && self.right > edge.left
        }
    }
}

/// Closed loop of red tiles joined by axis-aligned runs of green tiles.
#[derive(Debug)]
pub struct Floor {
    corners: Vec<Point>,
}

impl Floor {
    pub fn parse(input: &str) -> Result<Self, Error> {
        let corners = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.split_once(',')
                    .and_then(|(x, y)| Some(Point::new(x.trim().parse().ok()?, y.trim().parse().ok()?)))
                    .ok_or(Error::InvalidTileText(line.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if corners.len() < 2 {
            return Err(Error::TooFewTiles(corners.len()));
        }

        Ok(Self { corners })
    }

    fn edges(&self) -> impl Iterator<Item = (&Point, &Point)> {
        seq::pairwise(&self.corners).chain(self.corners.last().zip(self.corners.first()))
    }

    /// Point-in-polygon test on doubled coordinates; the boundary counts as inside.
    fn contains_doubled(&self, px: i64, py: i64) -> bool {
        let mut crossings = 0;
        for (a, b) in self.edges() {
            let (ax, ay, bx, by) = (a.x * 2, a.y * 2, b.x * 2, b.y * 2);
            let on_edge = px >= ax.min(bx) && px <= ax.max(bx) && py >= ay.min(by) && py <= ay.max(by);
            if on_edge {
                return true;
            }
            if ax == bx && ax > px && py >= ay.min(by) && py < ay.max(by) {
                crossings += 1;
            }
        }

        crossings % 2 == 1
    }

    fn rects(&self) -> impl Iterator<Item = Rect> + '_ {
        seq::pairs(&self.corners).map(|(a, b)| Rect::from_corners(*a, *b))
    }

    pub fn largest_rect(&self) -> i64 {
        self.rects().map(|r| r.area()).max().unwrap_or(0)
    }

    /// Largest rectangle lying on red or green tiles only.
    pub fn largest_inner_rect(&self) -> i64 {
        let mut rects = self.rects().collect::<Vec<_>>();
        rects.sort_by_key(|r| -r.area());
        rects
            .into_iter()
            .find(|r| {
                self.contains_doubled(r.left + r.right, r.top + r.bottom)
                    && !self.edges().any(|(a, b)| r.is_crossed_by(*a, *b))
            })
            .map_or(0, |r| r.area())
    }
}

#[derive(Debug)]
pub struct Day09;

impl Solution for Day09 {
    fn part1(&self, input: &str, _mode: RunMode) -> Result<Answer> {
        Ok(Floor::parse(input)?.largest_rect().into())
    }

    fn part2(&self, input: &str, _mode: RunMode) -> Result<Answer> {
        Ok(Floor::parse(input)?.largest_inner_rect().into())
    }

    fn examples(&self) -> Vec<Example> {
        vec![
            Example::new(Part::One, SAMPLE, 50).named("sample => 50"),
            Example::new(Part::Two, SAMPLE, 24).named("sample => 24"),
        ]
    }
}
