//! HTML-to-Markdown conversion for puzzle pages, on top of `htmd`.

use anyhow::{Context, Result};
use htmd::{
    options::{BulletListMarker, CodeBlockStyle, HeadingStyle, Options},
    Element, HtmlToMarkdown,
};
use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_DASHES_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:\\?-){3}").unwrap());
static BLANK_LINES_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n(?:[ \t]*\n)+").unwrap());

const SKIPPED_TAGS: &[&str] = &["nav", "header", "title", "script", "style", "head"];
const INPUT_HINT: &str = "Although it hasn't changed, you can still get your puzzle input.";
// Stands in for a share button so its parent block can drop itself.
const SHARE_MARKER: char = '\u{e000}';

fn attr_value<'a>(element: &'a Element<'_>, name: &str) -> Option<&'a str> {
    element
        .attrs
        .iter()
        .find(|attr| &*attr.name.local == name)
        .map(|attr| &*attr.value)
}

fn has_class(element: &Element<'_>, class: &str) -> bool {
    attr_value(element, "class").is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
}

fn block(content: &str) -> Option<String> {
    Some(format!("\n\n{}\n\n", content.trim()))
}

fn converter() -> HtmlToMarkdown {
    let options = Options {
        heading_style: HeadingStyle::Atx,
        code_block_style: CodeBlockStyle::Fenced,
        bullet_list_marker: BulletListMarker::Dash,
        ..Default::default()
    };

    HtmlToMarkdown::builder()
        .options(options)
        .skip_tags(SKIPPED_TAGS.to_vec())
        .add_handler(vec!["h2"], |element: Element| {
            let title = HEADING_DASHES_PATTERN.replace_all(element.content, "");
            Some(format!("\n\n## {}\n\n", title.trim()))
        })
        .add_handler(vec!["a"], |element: Element| Some(element.content.to_string()))
        .add_handler(vec!["em", "i"], |element: Element| {
            Some(wrap_inline(element.content, "*"))
        })
        .add_handler(vec!["strong", "b"], |element: Element| {
            Some(wrap_inline(element.content, "**"))
        })
        .add_handler(vec!["span"], |element: Element| {
            if has_class(&element, "share") {
                Some(SHARE_MARKER.to_string())
            } else {
                Some(element.content.to_string())
            }
        })
        .add_handler(vec!["p", "div"], |element: Element| {
            if attr_value(&element, "id") == Some("sidebar") || element.content.contains(SHARE_MARKER) {
                None
            } else {
                block(element.content)
            }
        })
        .build()
}

fn wrap_inline(content: &str, delimiter: &str) -> String {
    if content.trim().is_empty() {
        content.to_string()
    } else {
        format!("{}{}{}", delimiter, content, delimiter)
    }
}

pub fn html_to_markdown(html: &str) -> Result<String> {
    let converted = converter()
        .convert(html)
        .context("Failed to convert HTML to Markdown.")?;
    let converted = converted
        .replace(SHARE_MARKER, "")
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n");

    Ok(BLANK_LINES_PATTERN
        .replace_all(&converted, "\n\n")
        .trim()
        .to_string())
}

/// Converts a puzzle page, dropping site chrome and the input download hint.
pub fn puzzle_to_markdown(html: &str) -> Result<String> {
    Ok(html_to_markdown(html)?.replace(INPUT_HINT, "").trim().to_string())
}
