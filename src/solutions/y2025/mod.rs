pub mod day08;
pub mod day09;
pub mod day10;
pub mod day11;
