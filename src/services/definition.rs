use crate::domain::models::{Entry, Glossary, INDEX_FILE};
use crate::services::html::{escape_html, open_document, term_link, CLOSE_DOCUMENT};
use std::collections::HashSet;

/// One space-delimited token of a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    Plain(&'a str),
    Link(&'a str),
}

/// Exact-match lookup over every term of one glossary.
pub struct TermSet<'g> {
    terms: HashSet<&'g str>,
}

impl<'g> TermSet<'g> {
    pub fn from_glossary(glossary: &'g Glossary) -> Self {
        Self {
            terms: glossary.terms().collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.terms.contains(word)
    }
}

/// Splits `definition` on single spaces and tags each token as a term link
/// or plain text. Repeated spaces yield empty plain tokens so that joining
/// the spans with `' '` reproduces the input spacing.
pub fn classify_definition<'a>(definition: &'a str, terms: &TermSet<'_>) -> Vec<Span<'a>> {
    let classify = |word: &'a str| {
        if terms.contains(word) {
            Span::Link(word)
        } else {
            Span::Plain(word)
        }
    };

    let mut spans = Vec::new();
    let mut start = 0;
    for (idx, ch) in definition.char_indices() {
        if ch == ' ' {
            spans.push(classify(&definition[start..idx]));
            start = idx + 1;
        }
    }
    spans.push(classify(&definition[start..]));
    spans
}

/// Renders the page for a single entry, linking every token found in `terms`.
pub fn render_definition(entry: &Entry, terms: &TermSet<'_>) -> String {
    let body: Vec<String> = classify_definition(&entry.definition, terms)
        .into_iter()
        .map(|span| match span {
            Span::Link(word) => term_link(word),
            Span::Plain(word) => escape_html(word),
        })
        .collect();

    let mut html = open_document(&entry.term);
    html.push_str(&format!(
        "<h1><font color=\"#FF0000\"><b><i>{}</i></b></font></h1>\n",
        escape_html(&entry.term)
    ));
    html.push_str(&format!("<p>{}</p>\n", body.join(" ")));
    html.push_str("<hr/>\n");
    html.push_str(&format!(
        "<p>Return to <a href=\"{INDEX_FILE}\">Index</a></p>\n"
    ));
    html.push_str(CLOSE_DOCUMENT);
    html
}
