use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn step(&self, dir: Direction) -> Self {
        self.step_n(dir, 1)
    }

    pub fn step_n(&self, dir: Direction, n: i64) -> Self {
        Self::new(self.x + dir.dx * n, self.y + dir.dy * n)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dx: i64,
    pub dy: i64,
}

impl Direction {
    pub const fn new(dx: i64, dy: i64) -> Self {
        Self { dx, dy }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirLabel {
    Right,
    Left,
    Down,
    Up,
    UpRight,
    DownLeft,
    DownRight,
    UpLeft,
}

impl DirLabel {
    pub fn all() -> &'static [DirLabel] {
        static ALL_LABELS: [DirLabel; 8] = [
            DirLabel::Right,
            DirLabel::Left,
            DirLabel::Down,
            DirLabel::Up,
            DirLabel::UpRight,
            DirLabel::DownLeft,
            DirLabel::DownRight,
            DirLabel::UpLeft,
        ];

        &ALL_LABELS
    }

    pub fn cardinals() -> &'static [DirLabel] {
        &Self::all()[..4]
    }

    pub fn corners() -> &'static [DirLabel] {
        &Self::all()[4..]
    }

    pub fn is_cardinal(&self) -> bool {
        matches!(
            self,
            DirLabel::Right | DirLabel::Left | DirLabel::Down | DirLabel::Up
        )
    }

    /// Screen orientation: y grows downward.
    pub fn direction(&self) -> Direction {
        match self {
            DirLabel::Right => Direction::new(1, 0),
            DirLabel::Left => Direction::new(-1, 0),
            DirLabel::Down => Direction::new(0, 1),
            DirLabel::Up => Direction::new(0, -1),
            DirLabel::UpRight => Direction::new(1, -1),
            DirLabel::DownLeft => Direction::new(-1, 1),
            DirLabel::DownRight => Direction::new(1, 1),
            DirLabel::UpLeft => Direction::new(-1, -1),
        }
    }

    pub fn short(&self) -> &'static str {
        match self {
            DirLabel::Right => "r",
            DirLabel::Left => "l",
            DirLabel::Down => "d",
            DirLabel::Up => "u",
            DirLabel::UpRight => "ur",
            DirLabel::DownLeft => "dl",
            DirLabel::DownRight => "dr",
            DirLabel::UpLeft => "ul",
        }
    }
}

pub fn out_of_bounds(x: i64, y: i64, rows: usize, cols: usize) -> bool {
    x < 0 || y < 0 || x as usize >= cols || y as usize >= rows
}

pub fn neighbors(point: Point) -> impl Iterator<Item = Point> {
    DirLabel::cardinals()
        .iter()
        .map(move |label| point.step(label.direction()))
}

/// Direction for one of the arrow characters `^ v > <`.
pub fn arrow_direction(c: char) -> Option<Direction> {
    match c {
        '^' => Some(DirLabel::Up.direction()),
        'v' => Some(DirLabel::Down.direction()),
        '>' => Some(DirLabel::Right.direction()),
        '<' => Some(DirLabel::Left.direction()),
        _ => None,
    }
}

/// Splits text into rows of characters, skipping blank lines.
pub fn char_grid(text: &str) -> Vec<Vec<char>> {
    text.lines()
        .map(|line| line.trim_end())
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().collect())
        .collect()
}
