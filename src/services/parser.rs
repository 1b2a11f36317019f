use crate::cli::BlankLinePolicy;
use crate::domain::error::GlossaryError;
use crate::domain::models::{Entry, Glossary};
use std::path::Path;

/// A classified input line. Line numbers are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEvent<'a> {
    Text { line: usize, text: &'a str },
    Blank { line: usize },
}

/// Splits `source` into line events. Only empty lines are blank (a
/// whitespace-only line is text), and blank lines after the last text line
/// are dropped.
pub fn scan_lines(source: &str) -> Vec<LineEvent<'_>> {
    let mut events: Vec<LineEvent<'_>> = source
        .lines()
        .enumerate()
        .map(|(idx, text)| {
            if text.is_empty() {
                LineEvent::Blank { line: idx + 1 }
            } else {
                LineEvent::Text {
                    line: idx + 1,
                    text,
                }
            }
        })
        .collect();
    while matches!(events.last(), Some(LineEvent::Blank { .. })) {
        events.pop();
    }
    events
}

/// Assembles `term / definition lines / blank` blocks into a [`Glossary`].
///
/// Definition lines are concatenated without a separator. A term with no
/// definition line is always rejected; blank lines where a term is expected
/// are rejected or skipped depending on `policy`.
pub fn parse_glossary(source: &str, policy: BlankLinePolicy) -> Result<Glossary, GlossaryError> {
    let mut entries = Vec::new();
    let mut current: Option<Entry> = None;

    for event in scan_lines(source) {
        match (event, current.take()) {
            (LineEvent::Text { line, text }, None) if text.trim().is_empty() => match policy {
                BlankLinePolicy::Strict => {
                    return Err(GlossaryError::malformed(line, "term line is blank"));
                }
                BlankLinePolicy::Skip => {
                    tracing::debug!(line, "skipping whitespace-only line before a term");
                }
            },
            (LineEvent::Text { line, text }, None) => {
                current = Some(Entry {
                    term: text.to_string(),
                    definition: String::new(),
                    line,
                });
            }
            (LineEvent::Text { text, .. }, Some(mut entry)) => {
                entry.definition.push_str(text);
                current = Some(entry);
            }
            (LineEvent::Blank { .. }, Some(entry)) => {
                entries.push(finish_block(entry)?);
            }
            (LineEvent::Blank { line }, None) => match policy {
                BlankLinePolicy::Strict => {
                    return Err(GlossaryError::malformed(
                        line,
                        "blank line where a term was expected (block without a term)",
                    ));
                }
                BlankLinePolicy::Skip => {
                    tracing::debug!(line, "skipping extra blank line");
                }
            },
        }
    }
    if let Some(entry) = current {
        entries.push(finish_block(entry)?);
    }

    Ok(Glossary::new(entries))
}

fn finish_block(entry: Entry) -> Result<Entry, GlossaryError> {
    if entry.definition.is_empty() {
        return Err(GlossaryError::malformed(
            entry.line,
            format!("term '{}' has no definition", entry.term),
        ));
    }
    Ok(entry)
}

/// Reads and parses the glossary file at `path` in one pass.
pub fn read_glossary(path: &Path, policy: BlankLinePolicy) -> Result<Glossary, GlossaryError> {
    let raw = std::fs::read_to_string(path).map_err(|source| GlossaryError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let glossary = parse_glossary(&raw, policy)?;
    tracing::info!(
        terms = glossary.len(),
        path = %path.display(),
        "parsed glossary"
    );
    Ok(glossary)
}
