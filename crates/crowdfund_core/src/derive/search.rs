//! Case-insensitive text search over project name and description.
//!
//! # Invariants
//! - The term is matched as a literal substring; regex syntax has no effect.
//! - An empty term matches every project.
//! - Matches keep their original relative order.

use crate::model::project::Project;
use log::warn;
use regex::{Regex, RegexBuilder};

/// Compiled search term.
#[derive(Debug, Clone)]
pub struct SearchTerm {
    matcher: Matcher,
}

#[derive(Debug, Clone)]
enum Matcher {
    Everything,
    Pattern(Regex),
    /// Used only when the escaped term exceeds the regex size limit.
    Lowercase(String),
}

impl SearchTerm {
    /// Compiles `text` into a case-insensitive literal matcher.
    ///
    /// The text is used as typed: no trimming, no tokenization.
    pub fn new(text: &str) -> Self {
        if text.is_empty() {
            return Self {
                matcher: Matcher::Everything,
            };
        }

        let matcher = match RegexBuilder::new(&regex::escape(text))
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => Matcher::Pattern(pattern),
            Err(err) => {
                warn!(
                    "event=search_compile module=derive status=fallback term_len={} error={}",
                    text.chars().count(),
                    err
                );
                Matcher::Lowercase(text.to_lowercase())
            }
        };

        Self { matcher }
    }

    /// Returns whether the term matches `value`.
    pub fn matches_text(&self, value: &str) -> bool {
        match &self.matcher {
            Matcher::Everything => true,
            Matcher::Pattern(pattern) => pattern.is_match(value),
            Matcher::Lowercase(needle) => value.to_lowercase().contains(needle.as_str()),
        }
    }

    /// Returns whether the term matches the project's name or description.
    pub fn matches(&self, project: &Project) -> bool {
        self.matches_text(project.name()) || self.matches_text(project.description())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.matcher, Matcher::Everything)
    }
}

/// Returns projects whose name or description contains `term`, ignoring case.
pub fn search(collection: &[Project], term: &str) -> Vec<Project> {
    let term = SearchTerm::new(term);
    collection
        .iter()
        .filter(|project| term.matches(project))
        .cloned()
        .collect()
}
