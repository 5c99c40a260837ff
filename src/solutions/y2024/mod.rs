pub mod day01;
pub mod day04;
pub mod day05;
pub mod day07;
pub mod day15;
pub mod day17;
pub mod day19;
pub mod day21;
