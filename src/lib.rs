pub mod check;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod logging;
pub mod markdown;
pub mod puzzle;
pub mod registry;
pub mod runner;
pub mod scaffold;
pub mod solutions;
pub mod utils;

pub use error::Error;
pub use puzzle::{Answer, Part, PuzzleId, RunMode, Solution};
