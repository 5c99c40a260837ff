use crate::{
    puzzle::{PuzzleId, Solution},
    solutions::{y2015, y2024, y2025},
};

type Entry = (PuzzleId, &'static dyn Solution);

static SOLUTIONS: &[Entry] = &[
    (PuzzleId::known(2015, 2), &y2015::day02::Day02),
    (PuzzleId::known(2015, 3), &y2015::day03::Day03),
    (PuzzleId::known(2015, 4), &y2015::day04::Day04),
    (PuzzleId::known(2015, 5), &y2015::day05::Day05),
    (PuzzleId::known(2024, 1), &y2024::day01::Day01),
    (PuzzleId::known(2024, 4), &y2024::day04::Day04),
    (PuzzleId::known(2024, 5), &y2024::day05::Day05),
    (PuzzleId::known(2024, 7), &y2024::day07::Day07),
    (PuzzleId::known(2024, 15), &y2024::day15::Day15),
    (PuzzleId::known(2024, 17), &y2024::day17::Day17),
    (PuzzleId::known(2024, 19), &y2024::day19::Day19),
    (PuzzleId::known(2024, 21), &y2024::day21::Day21),
    (PuzzleId::known(2025, 8), &y2025::day08::Day08),
    (PuzzleId::known(2025, 9), &y2025::day09::Day09),
    (PuzzleId::known(2025, 10), &y2025::day10::Day10),
    (PuzzleId::known(2025, 11), &y2025::day11::Day11),
];

pub fn find(id: PuzzleId) -> Option<&'static dyn Solution> {
    SOLUTIONS
        .iter()
        .find(|(this_id, _)| *this_id == id)
        .map(|(_, solution)| *solution)
}

/// Registered solutions, ordered by year then day.
pub fn all() -> impl Iterator<Item = (PuzzleId, &'static dyn Solution)> {
    let mut entries = SOLUTIONS.to_vec();
    entries.sort_by_key(|(id, _)| *id);
    entries.into_iter()
}
