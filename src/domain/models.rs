use crate::cli::BlankLinePolicy;
use serde::Serialize;
use std::path::PathBuf;

pub const DEFAULT_TITLE: &str = "Glossary";
pub const INDEX_FILE: &str = "index.html";

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub stage: String,
    pub message: String,
}

/// One term and its definition, exactly as read from the input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub term: String,
    pub definition: String,
    /// 1-based line of the term in the source text.
    pub line: usize,
}

/// Entries in input order. Built once per run and shared by every renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Glossary {
    pub entries: Vec<Entry>,
}

impl Glossary {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.term.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub title: String,
    pub blank_lines: BlankLinePolicy,
}

#[derive(Debug, Serialize)]
pub struct BuildReport {
    pub input: String,
    pub output_dir: String,
    pub title: String,
    pub term_count: usize,
    pub index: String,
    /// Page file names in write order, without repeats.
    pub pages: Vec<String>,
    pub duplicates: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub input: String,
    pub term_count: usize,
    pub terms: Vec<String>,
    pub duplicates: Vec<String>,
}
