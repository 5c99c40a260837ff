use aoc_workbench::{
    check,
    solutions::y2024::{day01, day04, day05, day07, day15, day17, day19, day21},
    utils::grid::{DirLabel, Point},
    Answer, PuzzleId, RunMode, Solution,
};

fn assert_examples_pass(day: u8, solution: &dyn Solution) {
    let id = PuzzleId::new(2024, day).unwrap();
    let reports = check::run_examples(env!("CARGO_MANIFEST_DIR"), id, solution);
    assert!(!reports.is_empty());
    for report in reports {
        assert!(!report.outcome.is_failure(), "{}", report);
    }
}

#[test]
fn day01_location_lists() {
    let (left, right) = day01::read_lists("3   4\n4   3\n2   5\n").unwrap();
    assert_eq!(left, vec![3, 4, 2]);
    assert_eq!(right, vec![4, 3, 5]);
    assert_eq!(day01::total_distance(left.clone(), right.clone()), 3);
    assert_eq!(day01::similarity(&left, &right), 7);
    assert!(day01::read_lists("3 4 5\n").is_err());

    assert_examples_pass(1, &day01::Day01);
}

#[test]
fn day04_word_search() {
    let search = day04::WordSearch::new("XMAS\n....\nSAMX\n");
    assert!(search.spells("XMAS", Point::new(0, 0), DirLabel::Right.direction()));
    assert!(search.spells("XMAS", Point::new(3, 2), DirLabel::Left.direction()));
    assert_eq!(search.count_word("XMAS"), 2);

    let cross = day04::WordSearch::new("M.S\n.A.\nM.S\n");
    assert!(cross.is_cross(Point::new(1, 1)));
    assert_eq!(cross.count_crosses(), 1);

    assert_examples_pass(4, &day04::Day04);
}

#[test]
fn day05_page_ordering() {
    let (rules, updates) = day05::read_printer_settings("1|2\n2|3\n\n1,2,3\n3,1,2\n").unwrap();
    assert!(rules.is_valid(&updates[0]));
    assert!(!rules.is_valid(&updates[1]));
    assert_eq!(rules.correct(&updates[1]).unwrap(), vec![1, 2, 3]);

    let (cyclic, updates) = day05::read_printer_settings("1|2\n2|1\n\n1,2\n").unwrap();
    assert!(cyclic.correct(&updates[0]).is_err());

    assert!(day05::read_printer_settings("1|2\n").is_err());
    assert_examples_pass(5, &day05::Day05);
}

#[test]
fn day07_operators() {
    use day07::Operator;

    assert_eq!(Operator::Concat.apply(12, 345), Some(12345));
    let equation = "156: 15 6".parse::<day07::Equation>().unwrap();
    assert_eq!(equation.target(), 156);
    assert!(!equation.is_solvable(&[Operator::Add, Operator::Mul]));
    assert!(equation.is_solvable(&[Operator::Add, Operator::Mul, Operator::Concat]));
    assert!("156 15 6".parse::<day07::Equation>().is_err());

    assert_examples_pass(7, &day07::Day07);
}

#[test]
fn day15_warehouse_robot() {
    let (mut warehouse, moves) = day15::read_game("#####\n#@O.#\n#####\n\n>>\n").unwrap();
    assert_eq!(moves.len(), 2);
    assert!(warehouse.try_move(moves[0]));
    assert!(!warehouse.try_move(moves[1]));
    assert_eq!(warehouse.gps_sum(), 103);
    assert_eq!(warehouse.to_string(), "#####\n#.@O#\n#####\n");

    let wide = day15::Warehouse::parse("#####\n#@O.#\n#####").unwrap().widen();
    assert_eq!(wide.to_string(), "##########\n##@.[]..##\n##########\n");

    assert!(day15::Warehouse::parse("#####\n#@..#\n#..@#\n#####").is_err());
    assert!(day15::Warehouse::parse("#####\n#...#\n#####").is_err());

    assert_examples_pass(15, &day15::Day15);
}

#[test]
fn day17_computer() {
    let (registers, program) =
        day17::read_debug_info("Register A: 10\nRegister B: 0\nRegister C: 0\n\nProgram: 5,0,5,1,5,4\n")
            .unwrap();
    let mut computer = day17::Computer::new(&registers);
    computer.run(&program).unwrap();
    assert_eq!(computer.output(), &[0, 1, 2]);

    let mut computer = day17::Computer::new(&[0, 2024, 43690]);
    computer.run(&[4, 0]).unwrap();
    assert_eq!(computer.reg(day17::Register::B), 44354);

    let mut computer = day17::Computer::new(&[0, 0, 9]);
    computer.run(&[2, 6]).unwrap();
    assert_eq!(computer.reg(day17::Register::B), 1);

    assert!(matches!(
        day17::Computer::new(&[0, 0, 0]).run(&[2, 7]),
        Err(day17::Error::InvalidComboOperand(7))
    ));

    assert!(day17::read_debug_info("Register A: 1\n").is_err());
    assert_examples_pass(17, &day17::Day17);
}

#[test]
fn day17_quine_search_stops_before_overflow() {
    // Prints A three bits at a time, then runs no-op xors. Matching all 24
    // outputs needs more than 64 bits of A.
    let mut program = vec![0, 3, 5, 4, 3, 0];
    program.extend([1, 0].repeat(9));
    assert!(matches!(
        day17::find_quine_register(&[0, 0, 0], &program),
        Err(day17::Error::NoQuine)
    ));
}

#[test]
fn day19_towel_designs() {
    let onsen = day19::Onsen::parse("r, wr, b, g, bwu, rb, gb, br\n\nbrwrr\nubwu\n").unwrap();
    assert_eq!(onsen.arrangements("brwrr"), 2);
    assert_eq!(onsen.arrangements("ubwu"), 0);
    assert_eq!(onsen.possible_count(), 1);
    assert_eq!(onsen.total_arrangements(), 2);

    let onsen = day19::Onsen::parse("é, ré, r\n\nréé\nbé\n").unwrap();
    assert_eq!(onsen.arrangements("réé"), 2);
    assert_eq!(onsen.arrangements("bé"), 0);

    assert_examples_pass(19, &day19::Day19);
}

#[test]
fn day21_keypads() {
    let numeric = day21::Keypad::numeric();
    let mut paths = numeric.shortest_paths('A', '1').unwrap();
    paths.sort();
    // Going left first along the bottom row would cross the gap.
    assert_eq!(paths, vec!["<^<A".to_string(), "^<<A".to_string()]);

    let mut chain = day21::KeypadChain::new(2);
    assert_eq!(chain.sequence_len("029A").unwrap(), 68);
    assert_eq!(chain.complexity("029A").unwrap(), 68 * 29);
    assert_eq!(day21::complexity_sum("029A\n", 0).unwrap(), 12 * 29);

    assert!(day21::Day21
        .part2("029A\n", RunMode::Real)
        .is_ok_and(|answer| matches!(answer, Answer::Number(n) if n > 0)));
    assert_examples_pass(21, &day21::Day21);
}
