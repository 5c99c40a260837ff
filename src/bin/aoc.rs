use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::debug;

use aoc_workbench::{
    check,
    cli::{CLIArgs, Command},
    config::Config,
    download, logging, registry, runner,
    scaffold::{self, Scaffolded},
    RunMode,
};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    logging::init(args.global.verbose);
    let config = Config::from_args(&args.global);
    debug!(root = %config.root.display(), base_url = config.base_url.as_str(), "resolved config");

    match args.command {
        Command::Scaffold { day, force } => {
            let id = day.puzzle_id()?;
            match scaffold::scaffold(&config, id, force)? {
                Scaffolded::Exists(_) => {
                    println!("Day exists: {} (use --force to re-scaffold)", id)
                }
                Scaffolded::Created(paths) => {
                    println!("Scaffolding: {}", id);
                    for path in paths {
                        debug!(path = %path.display(), "created");
                    }
                }
            }
        }
        Command::Try(day) => {
            let id = day.puzzle_id()?;
            debug!(
                %id,
                sample = %id.sample_path(&config.root).display(),
                solution = %id.solution_path(&config.root).display(),
                "try"
            );
            let output = runner::run_day(&config.root, id, RunMode::Sample)?;
            println!("p1: {}", output.p1);
            println!("p2: {}", output.p2);
        }
        Command::Attempt(day) => {
            let id = day.puzzle_id()?;
            debug!(
                %id,
                input = %id.input_path(&config.root).display(),
                solution = %id.solution_path(&config.root).display(),
                "attempt"
            );
            let output = runner::run_day(&config.root, id, RunMode::Real)?;
            println!("p1: {}", output.p1);
            println!("p2: {}", output.p2);
            println!("Time: {}ms", output.elapsed.as_millis());
        }
        Command::Read { day, force } => {
            let id = day.puzzle_id()?;
            let puzzle_path = id.puzzle_path(&config.root);
            if puzzle_path.exists() && !force {
                println!(
                    "Puzzle already downloaded: {} (use --force to download again)",
                    puzzle_path.display()
                );
            } else {
                let path = download::download_puzzle(&config, id)
                    .with_context(|| format!("Failed to download puzzle for {}.", id))?;
                println!("Saved puzzle to {}", path.display());
            }
        }
        Command::Refresh(day) => {
            let id = day.puzzle_id()?;
            let path = download::download_puzzle(&config, id)
                .with_context(|| format!("Failed to refresh puzzle for {}.", id))?;
            println!("Saved puzzle to {}", path.display());
        }
        Command::Check { year, day } => {
            let mut failure_n = 0;
            let mut report_n = 0;
            for (id, solution) in registry::all()
                .filter(|(id, _)| year.map_or(true, |y| id.year() == y))
                .filter(|(id, _)| day.map_or(true, |d| id.day() == d))
            {
                for report in check::run_examples(&config.root, id, solution) {
                    println!("{}", report);
                    report_n += 1;
                    if report.outcome.is_failure() {
                        failure_n += 1;
                    }
                }
            }

            if failure_n > 0 {
                bail!("{} of {} example(s) failed.", failure_n, report_n);
            }
            println!("{} example(s) checked.", report_n);
        }
        Command::List => {
            for (id, _) in registry::all() {
                println!("{}", id);
            }
        }
    }

    Ok(())
}
