use std::{fmt::Display, path::Path};

use tracing::debug;

use crate::{
    puzzle::{Answer, Part, PuzzleId, RunMode, Solution},
    utils,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Inline(String),
    File(String),
}

/// One worked example: an input and the answer the puzzle text gives for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    name: Option<String>,
    part: Part,
    source: Source,
    expected: Answer,
}

impl Example {
    pub fn new(part: Part, input: &str, expected: impl Into<Answer>) -> Self {
        Self {
            name: None,
            part,
            source: Source::Inline(input.to_string()),
            expected: expected.into(),
        }
    }

    /// Example read from `file_name` inside the day directory.
    pub fn from_file(part: Part, file_name: &str, expected: impl Into<Answer>) -> Self {
        Self {
            name: None,
            part,
            source: Source::File(file_name.to_string()),
            expected: expected.into(),
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn part(&self) -> Part {
        self.part
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn expected(&self) -> &Answer {
        &self.expected
    }

    pub fn key(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }

        match &self.source {
            Source::Inline(text) => format!("{} = {}", text.replace('\n', "\\n"), self.expected),
            Source::File(file_name) => format!("{} = {}", file_name, self.expected),
        }
    }
}

/// Keys examples for reporting. Later examples replace earlier ones with the same key.
pub fn example_map(examples: Vec<Example>) -> Vec<(String, Example)> {
    let mut map: Vec<(String, Example)> = Vec::with_capacity(examples.len());
    for example in examples {
        let key = example.key();
        if let Some(entry) = map.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = example;
        } else {
            map.push((key, example));
        }
    }

    map
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed(Answer),
    Errored(String),
    Skipped(String),
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed(_) | Outcome::Errored(_))
    }
}

#[derive(Debug, Clone)]
pub struct Report {
    pub id: PuzzleId,
    pub part: Part,
    pub key: String,
    pub expected: Answer,
    pub outcome: Outcome,
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match &self.outcome {
            Outcome::Passed => "ok".to_string(),
            Outcome::Failed(actual) => format!("FAILED (got {})", actual),
            Outcome::Errored(msg) => format!("ERROR ({})", msg),
            Outcome::Skipped(reason) => format!("skipped ({})", reason),
        };

        write!(f, "{} {} {} ... {}", self.id, self.part, self.key, status)
    }
}

pub fn run_example<P: AsRef<Path>>(
    root: P,
    id: PuzzleId,
    solution: &dyn Solution,
    key: String,
    example: &Example,
) -> Report {
    let input = match example.source() {
        Source::Inline(text) => Some(text.clone()),
        Source::File(file_name) => {
            let path = id.day_dir(&root).join(file_name);
            if path.exists() {
                match utils::load_file(&path) {
                    Ok(text) => Some(text),
                    Err(e) => {
                        return report(id, key, example, Outcome::Errored(format!("{:#}", e)));
                    }
                }
            } else {
                None
            }
        }
    };

    let outcome = match input {
        None => Outcome::Skipped("missing input file".to_string()),
        Some(text) => match solution.run(example.part(), &text, RunMode::Sample) {
            Ok(actual) if actual == *example.expected() => Outcome::Passed,
            Ok(actual) => Outcome::Failed(actual),
            Err(e) => Outcome::Errored(format!("{:#}", e)),
        },
    };
    debug!(%id, key = key.as_str(), ?outcome, "ran example");

    report(id, key, example, outcome)
}

fn report(id: PuzzleId, key: String, example: &Example, outcome: Outcome) -> Report {
    Report {
        id,
        part: example.part(),
        key,
        expected: example.expected().clone(),
        outcome,
    }
}

pub fn run_examples<P: AsRef<Path>>(root: P, id: PuzzleId, solution: &dyn Solution) -> Vec<Report> {
    example_map(solution.examples())
        .into_iter()
        .map(|(key, example)| run_example(&root, id, solution, key, &example))
        .collect()
}
