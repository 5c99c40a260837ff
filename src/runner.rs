use std::{path::Path, time::Duration, time::Instant};

use anyhow::{Context, Result};
use tracing::debug;

use crate::{
    error::Error,
    puzzle::{Answer, PuzzleId, RunMode},
    registry, utils,
};

#[derive(Debug)]
pub struct RunOutput {
    pub p1: Answer,
    pub p2: Answer,
    pub elapsed: Duration,
}

/// Runs both parts of a registered day on its sample or real input.
pub fn run_day<P: AsRef<Path>>(root: P, id: PuzzleId, mode: RunMode) -> Result<RunOutput> {
    let solution = registry::find(id).ok_or(Error::NoSolution(id))?;
    let input_path = match mode {
        RunMode::Sample => id.sample_path(&root),
        RunMode::Real => id.input_path(&root),
    };
    debug!(%id, ?mode, input = %input_path.display(), "running solution");

    let start = Instant::now();
    let input = utils::load_file(&input_path)?;
    let p1 = solution
        .part1(&input, mode)
        .with_context(|| format!("Failed to solve part 1 of {}.", id))?;
    let p2 = solution
        .part2(&input, mode)
        .with_context(|| format!("Failed to solve part 2 of {}.", id))?;

    Ok(RunOutput {
        p1,
        p2,
        elapsed: start.elapsed(),
    })
}
