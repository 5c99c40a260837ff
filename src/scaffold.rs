use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use regex::Regex;
use tracing::{debug, warn};

use crate::{config::Config, download, error::Error, puzzle::PuzzleId};

static SOLUTION_TEMPLATE: &str = include_str!("../templates/solution.rs.tmpl");
static TESTS_TEMPLATE: &str = include_str!("../templates/tests.rs.tmpl");

#[derive(Debug, Clone)]
pub enum Pattern {
    Literal(String),
    Regex(Regex),
}

/// Replacement applied to a template after its `<%key%>` variables.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Pattern,
    replacement: String,
}

impl Rule {
    pub fn literal(pattern: &str, replacement: &str) -> Self {
        Self {
            pattern: Pattern::Literal(pattern.to_string()),
            replacement: replacement.to_string(),
        }
    }

    pub fn regex(pattern: &str, replacement: &str) -> Result<Self, Error> {
        let re = Regex::new(pattern).map_err(|_| Error::InvalidTemplateRule(pattern.to_string()))?;
        Ok(Self {
            pattern: Pattern::Regex(re),
            replacement: replacement.to_string(),
        })
    }

    pub fn apply(&self, text: &str) -> String {
        match &self.pattern {
            Pattern::Literal(s) => text.replace(s.as_str(), &self.replacement),
            Pattern::Regex(re) => re.replace_all(text, self.replacement.as_str()).into_owned(),
        }
    }
}

pub fn render_template(template: &str, variables: &[(&str, &str)], rules: &[Rule]) -> String {
    let mut output = template.to_string();
    for (key, value) in variables {
        output = output.replace(&format!("<%{}%>", key), value);
    }
    for rule in rules {
        output = rule.apply(&output);
    }

    output
}

#[derive(Debug, PartialEq, Eq)]
pub enum Scaffolded {
    Exists(PathBuf),
    Created(Vec<PathBuf>),
}

/// Creates the stubs and data directory for a day, then downloads its input and text.
pub fn scaffold(config: &Config, id: PuzzleId, force: bool) -> Result<Scaffolded> {
    let solution_path = id.solution_path(&config.root);
    if solution_path.exists() && !force {
        return Ok(Scaffolded::Exists(solution_path));
    }

    let day = format!("{:02}", id.day());
    let year = id.year().to_string();
    let variables = [("day", day.as_str()), ("year", year.as_str())];
    let mut created = Vec::new();

    write_file(
        &solution_path,
        &render_template(SOLUTION_TEMPLATE, &variables, &[]),
    )?;
    created.push(solution_path);

    let test_path = id.test_path(&config.root);
    let module_rule = Rule::literal("runner_template", &format!("day{}", day));
    write_file(
        &test_path,
        &render_template(TESTS_TEMPLATE, &variables, &[module_rule]),
    )?;
    created.push(test_path);

    let solutions_dir = config.root.join("src").join("solutions");
    let year_module = format!("y{}", year);
    declare_module(&solutions_dir.join("mod.rs"), &year_module)?;
    declare_module(&solutions_dir.join(&year_module).join("mod.rs"), &format!("day{}", day))?;

    let sample_path = id.sample_path(&config.root);
    if !sample_path.exists() {
        write_file(&sample_path, "")?;
        created.push(sample_path);
    }

    match download::download_input(config, id) {
        Ok(path) => created.push(path),
        Err(e) => warn!("{:#}", e),
    }
    match download::download_puzzle(config, id) {
        Ok(path) => created.push(path),
        Err(e) => warn!("{:#}", e),
    }

    Ok(Scaffolded::Created(created))
}

/// Appends `pub mod <name>;` to a module file unless already declared.
fn declare_module(mod_path: &Path, name: &str) -> Result<()> {
    let declaration = format!("pub mod {};", name);
    let mut text = if mod_path.exists() {
        fs::read_to_string(mod_path)
            .with_context(|| format!("Failed to read given file({}).", mod_path.display()))?
    } else {
        String::new()
    };
    if text.lines().any(|line| line.trim() == declaration) {
        return Ok(());
    }

    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
    text.push_str(&declaration);
    text.push('\n');

    write_file(mod_path, &text)
}

pub(crate) fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory({}).", parent.display()))?;
    }
    fs::write(path, contents)
        .with_context(|| format!("Failed to write given file({}).", path.display()))?;
    debug!(path = %path.display(), "wrote file");

    Ok(())
}
