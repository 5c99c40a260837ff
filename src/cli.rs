use std::path::PathBuf;

use chrono::{Datelike, Local};
use clap::{builder::FalseyValueParser, ArgAction, Args, Parser, Subcommand};

use crate::{
    config::DEFAULT_BASE_URL,
    error::Error,
    puzzle::{PuzzleId, FIRST_YEAR},
};

#[derive(Debug, Parser)]
#[command(name = "aoc", version, about = "Scaffold, download, run and check Advent of Code days.")]
pub struct CLIArgs {
    #[command(flatten)]
    pub global: GlobalArgs,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Workspace root holding `aoc/`, `src/` and `tests/`
    #[arg(long, env = "AOC_ROOT", default_value = ".", global = true)]
    pub root: PathBuf,
    /// Session cookie for adventofcode.com (required for downloads)
    #[arg(long, env = "AOC_SESSION", hide_env_values = true, global = true)]
    pub session: Option<String>,
    #[arg(long, env = "AOC_BASE_URL", default_value = DEFAULT_BASE_URL, hide = true, global = true)]
    pub base_url: String,
    /// Print resolved paths and debug logs. Any `DEBUG` value other than
    /// `0`, `false`, `no`, `off` or empty turns it on.
    #[arg(
        short,
        long,
        env = "DEBUG",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new(),
        global = true
    )]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct DayArgs {
    /// Day number (1-25), defaults to today
    #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,
    /// Event year, defaults to the current year
    #[arg(value_parser = clap::value_parser!(u16).range(i64::from(FIRST_YEAR)..))]
    pub year: Option<u16>,
}

impl DayArgs {
    pub fn puzzle_id(&self) -> Result<PuzzleId, Error> {
        let today = Local::now();
        let day = match self.day {
            Some(day) => day,
            None => u8::try_from(today.day()).map_err(|_| Error::InvalidDay(0))?,
        };
        let year = match self.year {
            Some(year) => year,
            None => u16::try_from(today.year()).map_err(|_| Error::InvalidYear(0))?,
        };

        PuzzleId::new(year, day)
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set up a new day: solution and test stubs, input and puzzle text
    Scaffold {
        #[command(flatten)]
        day: DayArgs,
        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
    /// Run the solution against sample.txt
    Try(DayArgs),
    /// Run the solution against input.txt, with timing
    Attempt(DayArgs),
    /// Download the puzzle description to puzzle.md
    Read {
        #[command(flatten)]
        day: DayArgs,
        /// Download even if puzzle.md exists
        #[arg(short, long)]
        force: bool,
    },
    /// Re-download the puzzle, e.g. after solving part 1
    Refresh(DayArgs),
    /// Run the worked examples of registered solutions
    Check {
        #[arg(long, value_parser = clap::value_parser!(u16).range(i64::from(FIRST_YEAR)..))]
        year: Option<u16>,
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=25))]
        day: Option<u8>,
    },
    /// List registered solutions
    List,
}
