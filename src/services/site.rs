use crate::domain::error::GlossaryError;
use crate::domain::models::{BuildConfig, BuildReport, Glossary, INDEX_FILE};
use crate::services::definition::{render_definition, TermSet};
use crate::services::html::page_file_name;
use crate::services::index::render_index;
use crate::services::parser::read_glossary;
use crate::services::sorter::{duplicate_terms, sorted_terms};
use std::path::{Path, PathBuf};

/// Pipeline entry point: parse the input once, then write the index and
/// every definition page into the output folder.
pub fn build_site(config: &BuildConfig) -> Result<BuildReport, GlossaryError> {
    let glossary = read_glossary(&config.input_path, config.blank_lines)?;
    let pages = write_site(&glossary, &config.title, &config.output_dir)?;
    Ok(BuildReport {
        input: config.input_path.to_string_lossy().to_string(),
        output_dir: config.output_dir.to_string_lossy().to_string(),
        title: config.title.clone(),
        term_count: glossary.len(),
        index: INDEX_FILE.to_string(),
        pages,
        duplicates: duplicate_terms(&glossary),
    })
}

/// Rejects glossaries whose pages cannot all be written next to the index:
/// a term whose page file would be `index.html` is refused.
pub fn validate_page_names(glossary: &Glossary) -> Result<(), GlossaryError> {
    match glossary
        .entries
        .iter()
        .find(|e| page_file_name(&e.term) == INDEX_FILE)
    {
        Some(entry) => Err(GlossaryError::ReservedTerm {
            term: entry.term.clone(),
        }),
        None => Ok(()),
    }
}

/// Writes `index.html` and one page per entry. Returns the page file names
/// in write order, without repeats. A repeated term rewrites its page, so
/// the last definition wins.
pub fn write_site(
    glossary: &Glossary,
    title: &str,
    output_dir: &Path,
) -> Result<Vec<String>, GlossaryError> {
    validate_page_names(glossary)?;
    if glossary.is_empty() {
        tracing::warn!("glossary has no terms; the index will be empty");
    }
    for dup in duplicate_terms(glossary) {
        tracing::warn!(term = %dup, "duplicate term; the last definition wins");
    }

    std::fs::create_dir_all(output_dir).map_err(|source| GlossaryError::WriteOutput {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let index_path = output_dir.join(INDEX_FILE);
    let index_html = render_index(title, &sorted_terms(glossary));
    std::fs::write(&index_path, index_html).map_err(|source| GlossaryError::WriteOutput {
        path: index_path.clone(),
        source,
    })?;
    tracing::info!(path = %index_path.display(), terms = glossary.len(), "wrote index");

    let terms = TermSet::from_glossary(glossary);
    let mut pages: Vec<String> = Vec::new();
    for entry in &glossary.entries {
        let file_name = page_file_name(&entry.term);
        let path: PathBuf = output_dir.join(&file_name);
        std::fs::write(&path, render_definition(entry, &terms)).map_err(|source| {
            GlossaryError::Write {
                path: path.clone(),
                term: entry.term.clone(),
                source,
            }
        })?;
        tracing::debug!(term = %entry.term, path = %path.display(), "wrote definition page");
        if !pages.contains(&file_name) {
            pages.push(file_name);
        }
    }
    tracing::info!(pages = pages.len(), dir = %output_dir.display(), "site written");
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::{build_site, validate_page_names, write_site};
    use crate::cli::BlankLinePolicy;
    use crate::domain::error::GlossaryError;
    use crate::domain::models::{BuildConfig, Entry, Glossary};
    use std::fs;
    use tempfile::TempDir;

    fn entry(term: &str, definition: &str) -> Entry {
        Entry {
            term: term.to_string(),
            definition: definition.to_string(),
            line: 1,
        }
    }

    #[test]
    fn writes_index_and_one_page_per_term() {
        let tmp = TempDir::new().expect("temp dir");
        let out = tmp.path().join("site");
        let g = Glossary::new(vec![entry("b", "see a"), entry("a", "see b")]);

        let pages = write_site(&g, "T", &out).expect("site written");
        assert_eq!(pages, vec!["b.html".to_string(), "a.html".to_string()]);
        assert!(out.join("index.html").is_file());
        let a = fs::read_to_string(out.join("a.html")).expect("read a");
        assert!(a.contains("<a href=\"b.html\">b</a>"));
    }

    #[test]
    fn reserved_term_is_rejected_before_anything_is_written() {
        let tmp = TempDir::new().expect("temp dir");
        let out = tmp.path().join("site");
        let g = Glossary::new(vec![entry("index", "the list")]);

        let err = write_site(&g, "T", &out).unwrap_err();
        assert!(matches!(err, GlossaryError::ReservedTerm { .. }));
        assert!(!out.exists());
    }

    #[test]
    fn page_name_validation_flags_only_the_index_collision() {
        let ok = Glossary::new(vec![entry("Index", "capitalised"), entry("indexes", "plural")]);
        assert!(validate_page_names(&ok).is_ok());

        let bad = Glossary::new(vec![entry("a", "b"), entry("index", "the list")]);
        match validate_page_names(&bad).unwrap_err() {
            GlossaryError::ReservedTerm { term } => assert_eq!(term, "index"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unwritable_output_reports_the_path() {
        let tmp = TempDir::new().expect("temp dir");
        let blocker = tmp.path().join("file");
        fs::write(&blocker, "not a dir").expect("write blocker");
        let g = Glossary::new(vec![entry("a", "b")]);

        let err = write_site(&g, "T", &blocker.join("site")).unwrap_err();
        assert_eq!(err.stage(), "write");
        assert!(err.to_string().contains("site"));
    }

    #[test]
    fn build_reports_missing_input_as_read_error() {
        let tmp = TempDir::new().expect("temp dir");
        let config = BuildConfig {
            input_path: tmp.path().join("missing.txt"),
            output_dir: tmp.path().join("out"),
            title: "T".to_string(),
            blank_lines: BlankLinePolicy::Strict,
        };
        let err = build_site(&config).unwrap_err();
        assert_eq!(err.code(), "IO_READ");
        assert!(!config.output_dir.exists());
    }

    #[test]
    fn build_report_counts_terms_and_duplicates() {
        let tmp = TempDir::new().expect("temp dir");
        let input = tmp.path().join("g.txt");
        fs::write(&input, "a\nfirst\n\nb\nsee a\n\na\nsecond\n").expect("write input");
        let config = BuildConfig {
            input_path: input,
            output_dir: tmp.path().join("out"),
            title: "T".to_string(),
            blank_lines: BlankLinePolicy::Strict,
        };

        let report = build_site(&config).expect("build ok");
        assert_eq!(report.term_count, 3);
        assert_eq!(report.pages, vec!["a.html".to_string(), "b.html".to_string()]);
        assert_eq!(report.duplicates, vec!["a".to_string()]);
        let a = fs::read_to_string(config.output_dir.join("a.html")).expect("read a");
        assert!(a.contains("<p>second</p>"));
    }
}
