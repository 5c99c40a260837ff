use std::{collections::HashSet, error, fmt::Display};

use anyhow::Result;

use crate::{
    check::Example,
    puzzle::{Answer, Part, RunMode, Solution},
    utils::{
        grid::{self, DirLabel, Direction, Point},
        queue::Queue,
    },
};

const SMALL_SAMPLE: &str = "\
########
#..O.O.#
##@.O..#
#...O..#
#.#.O..#
#...O..#
#......#
########

<^^>>>vv<v>>v<<
";

const LARGE_SAMPLE: &str = "\
##########
#..O..O.O#
#......O.#
#.OO..O.O#
#..O@..O.#
#O#..O...#
#O..O..O.#
#.OO.O.OO#
#....O...#
##########

<vv>^<v^>v>^vv^v>v<>v^v<v<^vv<<<^><<><>>v<vvv<>^v^>^<<<><<v<<<v^vv^v>^
vvv<<^>^v^^><<>>><>^<<><^vv^^<>vvv<>><^^v>^>vv<>v<<<<v<^v>^<^^>>>^<v<v
><>vv>v^v^<>><>>>><^^>vv>v<^^^>>v^v^<^^>v^^>v^<^v>v<>>v^v^<v>v^^<^^vv<
<<v<^>>^^^^>>>v^<>vvv^><v<<<>^^^vv^<vvv>^>v<^^^^v<>^>vvvv><>>v^<<^^^^^
^><^><>>><>^^<<^^v>>><^<v>^<vv>>v>>>^v><>^v><<<<v>>v<v<v>vvv>^<><<>^><
^>><>^v<><^vvv<^^<><v<<<<<><^v<<<><<<^^<v<^^^><^>>^<v^><<<^>>^v<v^v<v^
>^>>^v>vv>^<<^v<>><<><<v<<v><>v<^vv<<<>^^v^>^^>>><<^v>>v^v><^^>>^<>vv^
<><^^>^^^<><vvvvv^v<v<<>^v<v>v<<^><<><<><<<^^<<<^<<>><<><^^^>^^<>^>v<>
^^>vv<^v^v<vv>^<><v<^v>^^^>>>^^vvv^>vvv<>>>^<^>>>>>^<<^v>^vvv<>^<><<v>
v^^>>><<^^<>>^v^<v^vv<>v^<<>^<^v^v><^<<<><<^<v><v<>vv>>v><v^<vv<>v^<<^
";

const WIDE_SAMPLE: &str = "\
#######
#...#.#
#.....#
#..OO@#
#..O..#
#.....#
#######

<vv<<^^<<^^
";

#[derive(Debug)]
pub enum Error {
    InconsistentRow(usize, usize),
    MultipleRobots(Point, Point),
    InvalidCharforMap(char),
    NoRobotInMap,
    InvalidCharforDirection(char),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} columns in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::MultipleRobots(last_position, this_position) => write!(
                f,
                "Given two robots in map({}, {}), expect only one.",
                last_position, this_position
            ),
            Error::InvalidCharforMap(c) => write!(f, "Invalid character({}) for map.", c),
            Error::NoRobotInMap => write!(f, "No robot found in given map, expect one."),
            Error::InvalidCharforDirection(c) => {
                write!(f, "Invalid character({}) for direction.", c)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Floor,
    Robot,
    Box,
    BoxLeft,
    BoxRight,
}

impl Tile {
    fn from_char(c: char) -> Result<Self, Error> {
        match c {
            '#' => Ok(Tile::Wall),
            '.' => Ok(Tile::Floor),
            '@' => Ok(Tile::Robot),
            'O' => Ok(Tile::Box),
            '[' => Ok(Tile::BoxLeft),
            ']' => Ok(Tile::BoxRight),
            other => Err(Error::InvalidCharforMap(other)),
        }
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tile_char = match self {
            Tile::Wall => '#',
            Tile::Floor => '.',
            Tile::Robot => '@',
            Tile::Box => 'O',
            Tile::BoxLeft => '[',
            Tile::BoxRight => ']',
        };

        write!(f, "{}", tile_char)
    }
}

#[derive(Debug, Clone)]
pub struct Warehouse {
    tiles: Vec<Vec<Tile>>,
    robot_pos: Point,
}

impl Display for Warehouse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.tiles {
            for tile in row {
                write!(f, "{}", tile)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl Warehouse {
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut tiles: Vec<Vec<Tile>> = Vec::new();
        let mut robot_pos: Option<Point> = None;
        for (r, line) in text.lines().map(str::trim_end).enumerate() {
            let row = line
                .chars()
                .map(Tile::from_char)
                .collect::<Result<Vec<_>, _>>()?;
            if let Some(first) = tiles.first() {
                if first.len() != row.len() {
                    return Err(Error::InconsistentRow(first.len(), row.len()));
                }
            }
            if let Some(c) = row.iter().position(|t| *t == Tile::Robot) {
                let this_pos = Point::new(c as i64, r as i64);
                if let Some(last_pos) = robot_pos {
                    return Err(Error::MultipleRobots(last_pos, this_pos));
                }
                robot_pos = Some(this_pos);
            }
            tiles.push(row);
        }

        Ok(Self {
            tiles,
            robot_pos: robot_pos.ok_or(Error::NoRobotInMap)?,
        })
    }

    /// Same warehouse with every tile doubled in width.
    pub fn widen(&self) -> Self {
        let tiles = self
            .tiles
            .iter()
            .map(|row| {
                row.iter()
                    .flat_map(|tile| match tile {
                        Tile::Wall => [Tile::Wall, Tile::Wall],
                        Tile::Robot => [Tile::Robot, Tile::Floor],
                        Tile::Box | Tile::BoxLeft | Tile::BoxRight => {
                            [Tile::BoxLeft, Tile::BoxRight]
                        }
                        Tile::Floor => [Tile::Floor, Tile::Floor],
                    })
                    .collect()
            })
            .collect();

        Self {
            tiles,
            robot_pos: Point::new(self.robot_pos.x * 2, self.robot_pos.y),
        }
    }

    fn tile(&self, p: Point) -> Tile {
        let row_n = self.tiles.len();
        let col_n = self.tiles.first().map_or(0, |row| row.len());
        if grid::out_of_bounds(p.x, p.y, row_n, col_n) {
            Tile::Wall
        } else {
            self.tiles[p.y as usize][p.x as usize]
        }
    }

    fn set_tile(&mut self, p: Point, tile: Tile) {
        self.tiles[p.y as usize][p.x as usize] = tile;
    }

    /// Moves the robot one step, pushing every box in the way. Returns false
    /// when something hits a wall, leaving the warehouse unchanged.
    pub fn try_move(&mut self, dir: Direction) -> bool {
        let mut pending = Queue::from_items([self.robot_pos]);
        let mut seen = HashSet::from([self.robot_pos]);
        let mut moving = Vec::new();
        let left = DirLabel::Left.direction();
        let right = DirLabel::Right.direction();

        while let Some(pos) = pending.dequeue() {
            moving.push(pos);
            let next = pos.step(dir);
            let pushed = match self.tile(next) {
                Tile::Wall => return false,
                Tile::Floor | Tile::Robot => vec![],
                Tile::Box => vec![next],
                Tile::BoxLeft => vec![next, next.step(right)],
                Tile::BoxRight => vec![next, next.step(left)],
            };
            for p in pushed {
                if seen.insert(p) {
                    pending.enqueue(p).ok();
                }
            }
        }

        for pos in moving.iter().rev() {
            let tile = self.tile(*pos);
            self.set_tile(pos.step(dir), tile);
            self.set_tile(*pos, Tile::Floor);
        }
        self.robot_pos = self.robot_pos.step(dir);

        true
    }

    pub fn simulate(&mut self, moves: &[Direction]) {
        for dir in moves {
            self.try_move(*dir);
        }
    }

    pub fn gps_sum(&self) -> usize {
        self.tiles
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, tile)| matches!(tile, Tile::Box | Tile::BoxLeft))
                    .map(move |(c, _)| r * 100 + c)
            })
            .sum()
    }
}

pub fn read_game(input: &str) -> Result<(Warehouse, Vec<Direction>), Error> {
    let input = input.replace("\r\n", "\n");
    let input = input.trim_matches('\n');
    let (map_text, moves_text) = input.split_once("\n\n").unwrap_or((input, ""));
    let warehouse = Warehouse::parse(map_text)?;
    let moves = moves_text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| grid::arrow_direction(c).ok_or(Error::InvalidCharforDirection(c)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok((warehouse, moves))
}

#[derive(Debug)]
pub struct Day15;

impl Solution for Day15 {
    fn part1(&self, input: &str, _mode: RunMode) -> Result<Answer> {
        let (mut warehouse, moves) = read_game(input)?;
        warehouse.simulate(&moves);
        Ok(warehouse.gps_sum().into())
    }

    fn part2(&self, input: &str, _mode: RunMode) -> Result<Answer> {
        let (warehouse, moves) = read_game(input)?;
        let mut warehouse = warehouse.widen();
        warehouse.simulate(&moves);
        Ok(warehouse.gps_sum().into())
    }

    fn examples(&self) -> Vec<Example> {
        vec![
            Example::new(Part::One, SMALL_SAMPLE, 2028).named("small sample => 2028"),
            Example::new(Part::One, LARGE_SAMPLE, 10092).named("large sample => 10092"),
            Example::new(Part::Two, WIDE_SAMPLE, 618).named("wide sample => 618"),
            Example::new(Part::Two, LARGE_SAMPLE, 9021).named("large sample => 9021"),
        ]
    }
}
