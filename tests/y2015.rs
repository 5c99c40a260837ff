use aoc_workbench::{
    check,
    solutions::y2015::{day02, day03, day04, day05},
    Answer, PuzzleId, RunMode, Solution,
};

fn assert_examples_pass(year: u16, day: u8, solution: &dyn Solution) {
    let id = PuzzleId::new(year, day).unwrap();
    let reports = check::run_examples(env!("CARGO_MANIFEST_DIR"), id, solution);
    assert!(!reports.is_empty());
    for report in reports {
        assert!(!report.outcome.is_failure(), "{}", report);
    }
}

#[test]
fn day02_wrapping_paper_and_ribbon() {
    let present = "2x3x4".parse::<day02::Present>().unwrap();
    assert_eq!(present.paper(), 58);
    assert_eq!(present.ribbon(), 34);

    let presents = day02::read_presents("2x3x4\n1x1x10\n").unwrap();
    assert_eq!(presents.len(), 2);
    assert!(day02::read_presents("2x3\n").is_err());
    assert!(day02::read_presents("2xAx4\n").is_err());

    assert_examples_pass(2015, 2, &day02::Day02);
}

#[test]
fn day03_houses_visited() {
    let moves = day03::read_moves("^>v<").unwrap();
    assert_eq!(day03::visited_houses(&moves, 1), 4);
    assert_eq!(day03::visited_houses(&moves, 2), 3);
    assert!(day03::read_moves("^x").is_err());

    assert_examples_pass(2015, 3, &day03::Day03);
}

#[test]
fn day04_mining() {
    assert!(day04::is_coin("abcdef", 609043, 5));
    assert!(!day04::is_coin("abcdef", 609042, 5));
    assert_eq!(day04::mine("abcdef\n", 5).unwrap(), 609043);
    assert!(day04::mine("  ", 5).is_err());

    assert_examples_pass(2015, 4, &day04::Day04);
}

#[test]
fn day05_nice_strings() {
    assert!(day05::is_nice("ugknbfddgicrmopn"));
    assert!(!day05::is_nice("haegwjzuvuyypxyu"));
    assert!(day05::is_nicer("qjhvhtzxzqqjkmpb"));
    assert!(!day05::is_nicer("aaa"));

    let input = "ugknbfddgicrmopn\naaa\njchzalrnumimnmhp\n";
    assert_eq!(
        day05::Day05.part1(input, RunMode::Real).unwrap(),
        Answer::Number(2)
    );

    assert_examples_pass(2015, 5, &day05::Day05);
}
