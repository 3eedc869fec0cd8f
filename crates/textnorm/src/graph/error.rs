//! Error types for grammar construction and normalization.
//!
//! Configuration problems (missing or malformed rule tables, cache IO)
//! are fatal errors raised at load time. An input the grammars simply
//! do not cover is not an error; those surface as an empty candidate
//! list or `Ok(None)` from the normalizer.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal problems while building or restoring grammars.
#[derive(Debug, Error)]
pub enum GrammarError {
    /// A rule table file could not be read.
    #[error("cannot read rule table '{path}': {message}", path = path.display())]
    MissingData { path: PathBuf, message: String },

    /// A rule table row that does not follow the tab-separated format.
    #[error("malformed row {line} in '{path}': {message}", path = path.display())]
    MalformedTable {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// A table present without the tables it depends on.
    #[error("rule table '{present}' requires '{missing}', which is empty or absent")]
    IncompleteRuleSet { present: String, missing: String },

    /// A locale directory with no rule tables at all.
    #[error("no rule tables found in '{dir}'", dir = dir.display())]
    EmptyRuleSet { dir: PathBuf },

    /// The artifact cache could not be read or written.
    #[error("grammar cache failure at '{path}': {message}", path = path.display())]
    Cache { path: PathBuf, message: String },
}

/// Errors from the normalization entry points.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The active language has no loaded grammars.
    #[error("no grammars loaded for language '{language}'{}", suggestion_text(suggestions))]
    LanguageNotLoaded {
        language: String,
        suggestions: Vec<String>,
    },
}

fn suggestion_text(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean '{}'?)", suggestions.join("', '"))
    }
}

/// Loaded language names close enough to `wanted` to be worth
/// suggesting, best match first.
pub(crate) fn close_matches(wanted: &str, available: &[String]) -> Vec<String> {
    let mut scored: Vec<(usize, String)> = available
        .iter()
        .map(|name| (strsim::levenshtein(wanted, name), name.clone()))
        .filter(|(distance, _)| *distance <= 2)
        .collect();
    scored.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
    scored.into_iter().map(|(_, name)| name).take(3).collect()
}
