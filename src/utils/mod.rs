pub mod grid;
pub mod queue;
pub mod seq;

use std::{fs, path::Path};

use anyhow::{Context, Result};

pub fn load_file<P: AsRef<Path>>(path: P) -> Result<String> {
    fs::read_to_string(&path)
        .with_context(|| format!("Failed to read given file({}).", path.as_ref().display()))
}
