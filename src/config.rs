use std::{env, path::PathBuf};

use crate::cli::GlobalArgs;

pub const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

/// Settings shared by every command, resolved from CLI flags and environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub session: Option<String>,
    pub base_url: String,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            session: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            verbose: false,
        }
    }
}

impl Config {
    pub fn from_args(args: &GlobalArgs) -> Self {
        // AOC_TOKEN is the older name of the session variable.
        let session = args
            .session
            .clone()
            .or_else(|| env::var("AOC_TOKEN").ok())
            .filter(|s| !s.trim().is_empty());

        Self {
            root: args.root.clone(),
            session,
            base_url: args.base_url.trim_end_matches('/').to_string(),
            verbose: args.verbose,
        }
    }

    /// Value for the `Cookie` header. A bare token is sent as `session=<token>`.
    pub fn cookie(&self) -> Option<String> {
        self.session.as_ref().map(|s| {
            let s = s.trim();
            if s.starts_with("session=") {
                s.to_string()
            } else {
                format!("session={}", s)
            }
        })
    }
}
