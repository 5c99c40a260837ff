use anyhow::Result;

use crate::{
    check::Example,
    puzzle::{Answer, Part, RunMode, Solution},
    utils::grid::{self, DirLabel, Direction, Point},
};

const SAMPLE: &str = "\
MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX
";

#[derive(Debug)]
pub struct WordSearch {
    letters: Vec<Vec<char>>,
    row_n: usize,
    col_n: usize,
}

impl WordSearch {
    pub fn new(text: &str) -> Self {
        let letters = grid::char_grid(text);
        let row_n = letters.len();
        let col_n = letters.iter().map(|row| row.len()).max().unwrap_or(0);
        Self {
            letters,
            row_n,
            col_n,
        }
    }

    fn letter(&self, p: Point) -> Option<char> {
        if grid::out_of_bounds(p.x, p.y, self.row_n, self.col_n) {
            return None;
        }

        self.letters[p.y as usize].get(p.x as usize).copied()
    }

    fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.row_n).flat_map(move |y| {
            (0..self.letters[y].len()).map(move |x| Point::new(x as i64, y as i64))
        })
    }

    /// Whether `word` is spelled from `start` heading in `dir`.
    pub fn spells(&self, word: &str, start: Point, dir: Direction) -> bool {
        word.chars()
            .enumerate()
            .all(|(ind, c)| self.letter(start.step_n(dir, ind as i64)) == Some(c))
    }

    pub fn count_word(&self, word: &str) -> usize {
        self.points()
            .map(|p| {
                DirLabel::all()
                    .iter()
                    .filter(|label| self.spells(word, p, label.direction()))
                    .count()
            })
            .sum()
    }

    /// Whether `center` is the `A` of two crossing `MAS` words.
    pub fn is_cross(&self, center: Point) -> bool {
        if self.letter(center) != Some('A') {
            return false;
        }

        let corner = |label: DirLabel| self.letter(center.step(label.direction()));
        let is_ms = |a: Option<char>, b: Option<char>| {
            matches!((a, b), (Some('M'), Some('S')) | (Some('S'), Some('M')))
        };

        is_ms(corner(DirLabel::UpRight), corner(DirLabel::DownLeft))
            && is_ms(corner(DirLabel::UpLeft), corner(DirLabel::DownRight))
    }

    pub fn count_crosses(&self) -> usize {
        self.points().filter(|p| self.is_cross(*p)).count()
    }
}

#[derive(Debug)]
pub struct Day04;

impl Solution for Day04 {
    fn part1(&self, input: &str, _mode: RunMode) -> Result<Answer> {
        Ok(WordSearch::new(input).count_word("XMAS").into())
    }

    fn part2(&self, input: &str, _mode: RunMode) -> Result<Answer> {
        Ok(WordSearch::new(input).count_crosses().into())
    }

    fn examples(&self) -> Vec<Example> {
        vec![
            Example::new(Part::One, SAMPLE, 18).named("sample => 18"),
            Example::new(Part::Two, SAMPLE, 9).named("sample => 9"),
        ]
    }
}
