use std::fs;

use assert_cmd::Command;
use predicates::prelude::{predicate::str, PredicateBooleanExt};
use tempfile::TempDir;

// Nothing in these tests may reach the real puzzle site.
const DEAD_BASE_URL: &str = "http://127.0.0.1:9";

fn aoc(root: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("aoc").unwrap();
    cmd.arg("--root")
        .arg(root.path())
        .arg("--base-url")
        .arg(DEAD_BASE_URL)
        .env_remove("AOC_SESSION")
        .env_remove("AOC_TOKEN")
        .env_remove("AOC_ROOT")
        .env_remove("DEBUG")
        .env_remove("RUST_LOG");
    cmd
}

fn write_day_file(root: &TempDir, year: u16, day: u8, name: &str, contents: &str) {
    let dir = root
        .path()
        .join("aoc")
        .join(year.to_string())
        .join(format!("day{:02}", day));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), contents).unwrap();
}

#[test]
fn list_shows_registered_days() {
    let root = TempDir::new().unwrap();
    aoc(&root)
        .arg("list")
        .assert()
        .success()
        .stdout(str::contains("2015 day 02"))
        .stdout(str::contains("2024 day 17"))
        .stdout(str::contains("2025 day 11"));
}

#[test]
fn debug_env_accepts_any_truthy_value() {
    let root = TempDir::new().unwrap();
    for value in ["1", "yes", "*", "true"] {
        aoc(&root)
            .env("DEBUG", value)
            .arg("list")
            .assert()
            .success()
            .stdout(str::contains("2024 day 01"))
            .stderr(str::contains("resolved config"));
    }
}

#[test]
fn debug_env_off_values_keep_logs_quiet() {
    let root = TempDir::new().unwrap();
    for value in ["0", "false", "off"] {
        aoc(&root)
            .env("DEBUG", value)
            .arg("list")
            .assert()
            .success()
            .stderr(str::contains("resolved config").not());
    }
}

#[test]
fn bad_rust_log_falls_back_to_default_level() {
    let root = TempDir::new().unwrap();
    aoc(&root)
        .env("RUST_LOG", "[not a filter")
        .arg("--verbose")
        .arg("list")
        .assert()
        .success()
        .stderr(str::contains("resolved config"));
}

#[test]
fn try_runs_both_parts_on_sample() {
    let root = TempDir::new().unwrap();
    write_day_file(&root, 2024, 1, "sample.txt", "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n");

    aoc(&root)
        .args(["try", "1", "2024"])
        .assert()
        .success()
        .stdout(str::contains("p1: 11"))
        .stdout(str::contains("p2: 31"));
}

#[test]
fn attempt_reports_time() {
    let root = TempDir::new().unwrap();
    write_day_file(&root, 2015, 2, "input.txt", "2x3x4\n1x1x10\n");

    aoc(&root)
        .args(["attempt", "2", "2015"])
        .assert()
        .success()
        .stdout(str::contains("p1: 101"))
        .stdout(str::contains("p2: 48"))
        .stdout(str::contains("Time: "));
}

#[test]
fn attempt_uses_real_parameters() {
    let root = TempDir::new().unwrap();
    let boxes = "0,0,0\n1,0,0\n3,0,0\n10,0,0\n20,0,0\n";
    write_day_file(&root, 2025, 8, "sample.txt", boxes);
    write_day_file(&root, 2025, 8, "input.txt", boxes);

    // 10 connections join every box on the sample, as do 1000 on real input.
    aoc(&root)
        .args(["try", "8", "2025"])
        .assert()
        .success()
        .stdout(str::contains("p1: 5"))
        .stdout(str::contains("p2: 200"));
}

#[test]
fn try_without_solution_fails() {
    let root = TempDir::new().unwrap();
    aoc(&root)
        .args(["try", "25", "2023"])
        .assert()
        .failure()
        .stderr(str::contains("No solution registered for 2023 day 25."));
}

#[test]
fn try_without_sample_fails() {
    let root = TempDir::new().unwrap();
    aoc(&root)
        .args(["try", "1", "2024"])
        .assert()
        .failure()
        .stderr(str::contains("sample.txt"));
}

#[test]
fn invalid_day_is_rejected() {
    let root = TempDir::new().unwrap();
    aoc(&root).args(["try", "26", "2024"]).assert().failure();
}

#[test]
fn check_passes_for_one_day() {
    let root = TempDir::new().unwrap();
    aoc(&root)
        .args(["check", "--year", "2024", "--day", "5"])
        .assert()
        .success()
        .stdout(str::contains("2024 day 05 p1 sample => 143 ... ok"))
        .stdout(str::contains("2024 day 05 p2 sample => 123 ... ok"))
        .stdout(str::contains("2 example(s) checked."));
}

#[test]
fn check_runs_inline_published_samples() {
    let root = TempDir::new().unwrap();
    aoc(&root)
        .args(["check", "--year", "2025", "--day", "8"])
        .assert()
        .success()
        .stdout(str::contains("2025 day 08 p1 sample => 40 ... ok"))
        .stdout(str::contains("2025 day 08 p2 sample => 25272 ... ok"))
        .stdout(str::contains("2 example(s) checked."));
}

#[test]
fn scaffold_creates_stubs_without_session() {
    let root = TempDir::new().unwrap();
    aoc(&root)
        .args(["scaffold", "12", "2025"])
        .assert()
        .success()
        .stdout(str::contains("Scaffolding: 2025 day 12"));

    let solution = fs::read_to_string(root.path().join("src/solutions/y2025/day12.rs")).unwrap();
    assert!(solution.contains("pub struct Day12;"));
    let test = fs::read_to_string(root.path().join("tests/y2025_day12.rs")).unwrap();
    assert!(test.contains("solutions::y2025::day12::Day12"));
    assert!(test.contains("PuzzleId::new(2025, 12)"));
    assert!(root.path().join("aoc/2025/day12/sample.txt").exists());
    assert!(!root.path().join("aoc/2025/day12/input.txt").exists());

    let year_mod = fs::read_to_string(root.path().join("src/solutions/y2025/mod.rs")).unwrap();
    assert_eq!(year_mod, "pub mod day12;\n");
    let solutions_mod = fs::read_to_string(root.path().join("src/solutions/mod.rs")).unwrap();
    assert_eq!(solutions_mod, "pub mod y2025;\n");
}

#[test]
fn scaffold_keeps_existing_day() {
    let root = TempDir::new().unwrap();
    let solution_dir = root.path().join("src/solutions/y2024");
    fs::create_dir_all(&solution_dir).unwrap();
    fs::write(solution_dir.join("day03.rs"), "// mine\n").unwrap();

    aoc(&root)
        .args(["scaffold", "3", "2024"])
        .assert()
        .success()
        .stdout(str::contains(
            "Day exists: 2024 day 03 (use --force to re-scaffold)",
        ));
    assert_eq!(
        fs::read_to_string(solution_dir.join("day03.rs")).unwrap(),
        "// mine\n"
    );
}

#[test]
fn scaffold_force_keeps_sample() {
    let root = TempDir::new().unwrap();
    write_day_file(&root, 2024, 3, "sample.txt", "xmul(2,4)\n");
    let solution_dir = root.path().join("src/solutions/y2024");
    fs::create_dir_all(&solution_dir).unwrap();
    fs::write(solution_dir.join("day03.rs"), "// mine\n").unwrap();
    fs::write(solution_dir.join("mod.rs"), "pub mod day03;").unwrap();

    aoc(&root)
        .args(["scaffold", "3", "2024", "--force"])
        .assert()
        .success()
        .stdout(str::contains("Scaffolding: 2024 day 03"));

    let sample = fs::read_to_string(root.path().join("aoc/2024/day03/sample.txt")).unwrap();
    assert_eq!(sample, "xmul(2,4)\n");
    let solution = fs::read_to_string(solution_dir.join("day03.rs")).unwrap();
    assert!(solution.contains("pub struct Day03;"));
    let year_mod = fs::read_to_string(solution_dir.join("mod.rs")).unwrap();
    assert_eq!(year_mod, "pub mod day03;");
}

#[test]
fn read_skips_existing_puzzle() {
    let root = TempDir::new().unwrap();
    write_day_file(&root, 2024, 1, "puzzle.md", "## Day 1\n");

    aoc(&root)
        .args(["read", "1", "2024"])
        .assert()
        .success()
        .stdout(str::contains("Puzzle already downloaded"));
}

#[test]
fn read_requires_session() {
    let root = TempDir::new().unwrap();
    aoc(&root)
        .args(["read", "1", "2024"])
        .assert()
        .failure()
        .stderr(str::contains("No session cookie given"));
}

#[test]
fn refresh_downloads_even_if_present() {
    let root = TempDir::new().unwrap();
    write_day_file(&root, 2024, 1, "puzzle.md", "## Day 1\n");

    aoc(&root)
        .args(["refresh", "1", "2024"])
        .assert()
        .failure()
        .stderr(str::contains("Failed to refresh puzzle for 2024 day 01."));
}
