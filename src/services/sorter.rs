use crate::domain::models::Glossary;
use std::collections::HashMap;

/// Terms in ordinal (byte) order, case-sensitive. Duplicates keep input order.
pub fn sorted_terms(glossary: &Glossary) -> Vec<&str> {
    let mut terms: Vec<&str> = glossary.terms().collect();
    terms.sort();
    terms
}

/// Terms that occur more than once, in order of first occurrence.
pub fn duplicate_terms(glossary: &Glossary) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for term in glossary.terms() {
        *counts.entry(term).or_default() += 1;
    }
    let mut dups: Vec<String> = Vec::new();
    for term in glossary.terms() {
        if counts.get(term).copied().unwrap_or(0) > 1 && !dups.iter().any(|d| d == term) {
            dups.push(term.to_string());
        }
    }
    dups
}
