use anyhow::{bail, Result};
use aoc_workbench::{
    check::{self, Example, Outcome},
    puzzle::Part,
    Answer, PuzzleId, RunMode, Solution,
};
use tempfile::TempDir;

struct LineCount;

impl Solution for LineCount {
    fn part1(&self, input: &str, _mode: RunMode) -> Result<Answer> {
        Ok(input.lines().count().into())
    }

    fn part2(&self, input: &str, mode: RunMode) -> Result<Answer> {
        if input.is_empty() {
            bail!("empty input");
        }
        Ok(match mode {
            RunMode::Sample => "sample".into(),
            RunMode::Real => "real".into(),
        })
    }

    fn examples(&self) -> Vec<Example> {
        vec![
            Example::new(Part::One, "a\nb", 2),
            Example::new(Part::One, "a", 5).named("wrong"),
            Example::new(Part::Two, "x", "sample"),
            Example::new(Part::Two, "", "sample").named("empty"),
            Example::from_file(Part::One, "sample.txt", 3),
        ]
    }
}

#[test]
fn example_keys_and_replacement() {
    assert_eq!(Example::new(Part::One, "a\nb", 2).key(), "a\\nb = 2");
    assert_eq!(Example::from_file(Part::Two, "big.txt", "x").key(), "big.txt = x");

    let map = check::example_map(vec![
        Example::new(Part::One, "a", 1).named("same"),
        Example::new(Part::One, "b", 2),
        Example::new(Part::Two, "c", 3).named("same"),
    ]);
    let keys = map.iter().map(|(key, _)| key.as_str()).collect::<Vec<_>>();
    assert_eq!(keys, vec!["same", "b = 2"]);
    assert_eq!(map[0].1.part(), Part::Two);
    assert_eq!(map[0].1.expected(), &Answer::Number(3));
}

#[test]
fn reports_every_outcome() {
    let root = TempDir::new().unwrap();
    let id = PuzzleId::new(2024, 2).unwrap();

    let reports = check::run_examples(root.path(), id, &LineCount);
    let outcomes = reports.iter().map(|r| r.outcome.clone()).collect::<Vec<_>>();
    assert_eq!(
        outcomes,
        vec![
            Outcome::Passed,
            Outcome::Failed(Answer::Number(1)),
            Outcome::Passed,
            Outcome::Errored("empty input".to_string()),
            Outcome::Skipped("missing input file".to_string()),
        ]
    );
    assert_eq!(reports[0].to_string(), "2024 day 02 p1 a\\nb = 2 ... ok");
    assert_eq!(reports[1].to_string(), "2024 day 02 p1 wrong ... FAILED (got 1)");
    assert_eq!(
        reports.iter().filter(|r| r.outcome.is_failure()).count(),
        2
    );

    std::fs::create_dir_all(id.day_dir(root.path())).unwrap();
    std::fs::write(id.sample_path(root.path()), "1\n2\n3\n").unwrap();
    let reports = check::run_examples(root.path(), id, &LineCount);
    assert_eq!(reports[4].outcome, Outcome::Passed);
}

#[test]
fn puzzle_ids_and_paths() {
    let id = PuzzleId::new(2024, 7).unwrap();
    assert_eq!(id.to_string(), "2024 day 07");
    assert!(id.sample_path("root").ends_with("aoc/2024/day07/sample.txt"));
    assert!(id.input_path("root").ends_with("aoc/2024/day07/input.txt"));
    assert!(id.puzzle_path("root").ends_with("aoc/2024/day07/puzzle.md"));
    assert!(id.solution_path("root").ends_with("src/solutions/y2024/day07.rs"));
    assert!(id.test_path("root").ends_with("tests/y2024_day07.rs"));

    assert!(PuzzleId::new(2014, 1).is_err());
    assert!(PuzzleId::new(2024, 0).is_err());
    assert!(PuzzleId::new(2024, 26).is_err());
}
