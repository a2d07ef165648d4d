//! Problem input parsing.
//!
//! Two line-oriented plain-text formats are understood:
//!
//! - [`InputFormat::Lisp`]: item lines `(w . v)` and a capacity line
//!   `(setq MaxWeight N)`. A line is only recognized when the pattern
//!   starts the whitespace-trimmed line; trailing text is ignored.
//! - [`InputFormat::Plain`]: the first non-empty line is the capacity and
//!   every further line is `weight value`.
//!
//! Lines that match neither pattern are skipped, reported through
//! `log::warn!` and returned in [`Parsed::skipped`].

use crate::error::{KnapsackError, Result};
use crate::item::Item;
use std::fs;
use std::io;
use std::path::Path;

/// A knapsack instance: capacity plus the item catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Problem {
    pub capacity: u64,
    pub items: Vec<Item>,
}

impl Problem {
    pub fn new(capacity: u64, items: Vec<Item>) -> Self {
        Self { capacity, items }
    }
}

/// Input file layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// `(w . v)` item lines and a `(setq MaxWeight N)` capacity line.
    Lisp,
    /// Capacity on the first line, then `weight value` per line.
    Plain,
}

impl InputFormat {
    /// Guesses the format: any line starting with `(` means [`Lisp`](Self::Lisp).
    pub fn detect(text: &str) -> Self {
        if text.lines().any(|line| line.trim_start().starts_with('(')) {
            InputFormat::Lisp
        } else {
            InputFormat::Plain
        }
    }
}

/// A line that was ignored during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number.
    pub line: usize,
    pub content: String,
}

/// Parsing outcome: the problem plus every line that was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    pub problem: Problem,
    pub skipped: Vec<SkippedLine>,
}

/// Parses `text` in the given format.
pub fn parse_str(text: &str, format: InputFormat) -> Result<Parsed> {
    match format {
        InputFormat::Lisp => parse_lisp(text),
        InputFormat::Plain => parse_plain(text),
    }
}

/// Reads and parses a file. `None` detects the format from the content.
///
/// A missing file is reported as [`KnapsackError::MissingInput`].
pub fn parse_file(path: impl AsRef<Path>, format: Option<InputFormat>) -> Result<Parsed> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => KnapsackError::MissingInput(path.to_path_buf()),
        _ => KnapsackError::Io(e),
    })?;
    let format = format.unwrap_or_else(|| InputFormat::detect(&text));
    log::debug!("parsing {} as {:?}", path.display(), format);
    parse_str(&text, format)
}

fn parse_lisp(text: &str) -> Result<Parsed> {
    let mut capacity = None;
    let mut items = Vec::new();
    let mut skipped = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(item) = lisp_pair(line) {
            items.push(item);
        } else if let Some(max_weight) = lisp_max_weight(line) {
            capacity = Some(max_weight);
        } else {
            skip(&mut skipped, idx + 1, line);
        }
    }

    let capacity = capacity.ok_or_else(|| KnapsackError::MalformedInput {
        line: 0,
        content: "no (setq MaxWeight N) line".into(),
    })?;
    Ok(Parsed {
        problem: Problem::new(capacity, items),
        skipped,
    })
}

/// Leading parenthesized group of `line`, split on whitespace.
fn leading_group(line: &str) -> Option<Vec<&str>> {
    let rest = line.strip_prefix('(')?;
    let end = rest.find(')')?;
    Some(rest[..end].split_whitespace().collect())
}

fn lisp_pair(line: &str) -> Option<Item> {
    match leading_group(line)?.as_slice() {
        [weight, ".", value] => Some(Item::new(weight.parse().ok()?, value.parse().ok()?)),
        _ => None,
    }
}

fn lisp_max_weight(line: &str) -> Option<u64> {
    match leading_group(line)?.as_slice() {
        ["setq", "MaxWeight", n] => n.parse().ok(),
        _ => None,
    }
}

fn parse_plain(text: &str) -> Result<Parsed> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(idx, raw)| (idx + 1, raw.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (first, header) = lines.next().ok_or(KnapsackError::MalformedInput {
        line: 0,
        content: String::new(),
    })?;
    let capacity = header.parse().map_err(|_| KnapsackError::MalformedInput {
        line: first,
        content: header.to_string(),
    })?;

    let mut items = Vec::new();
    let mut skipped = Vec::new();
    for (number, line) in lines {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let item = match fields.as_slice() {
            [weight, value] => weight
                .parse::<u64>()
                .ok()
                .zip(value.parse::<u64>().ok())
                .map(|(w, v)| Item::new(w, v)),
            _ => None,
        };
        match item {
            Some(item) => items.push(item),
            None => skip(&mut skipped, number, line),
        }
    }

    Ok(Parsed {
        problem: Problem::new(capacity, items),
        skipped,
    })
}

fn skip(skipped: &mut Vec<SkippedLine>, line: usize, content: &str) {
    log::warn!("skipping malformed input line {line}: {content:?}");
    skipped.push(SkippedLine {
        line,
        content: content.to_string(),
    });
}
