//! Miette diagnostic wrapper for rule table errors.

use std::fs;
use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use textnorm::GrammarError;
use thiserror::Error;

/// A miette-compatible diagnostic pointing at the offending row of a
/// rule table.
#[derive(Debug, Error, Diagnostic)]
#[error("malformed rule table: {message}")]
#[diagnostic(code(textnorm::table))]
pub struct TableDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("this row")]
    span: SourceSpan,

    message: String,
}

impl TableDiagnostic {
    /// Wrap a grammar error when it names a table row and the file is
    /// still readable; other errors carry no source to show.
    pub fn from_grammar_error(err: &GrammarError) -> Option<Self> {
        let GrammarError::MalformedTable {
            path,
            line,
            message,
        } = err
        else {
            return None;
        };
        let content = fs::read_to_string(path).ok()?;
        Some(Self::from_parts(path, &content, *line, message.clone()))
    }

    fn from_parts(path: &Path, content: &str, line: usize, message: String) -> Self {
        // Convert the 1-based row number to a byte offset spanning that
        // whole row, clamped so miette never points past the source.
        let offset = content
            .lines()
            .take(line.saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>();
        let offset = offset.min(content.len());
        let length = content
            .lines()
            .nth(line.saturating_sub(1))
            .map_or(1, str::len)
            .max(1);

        TableDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, length).into(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_at_the_offending_row() {
        let content = "uno\t1\ndos\ntres\t3\n";
        let diag = TableDiagnostic::from_parts(
            Path::new("days.tsv"),
            content,
            2,
            "expected 2 or 3 columns".into(),
        );
        assert_eq!(diag.span.offset(), 6);
        assert_eq!(diag.span.len(), 3);
        assert_eq!(
            diag.to_string(),
            "malformed rule table: expected 2 or 3 columns"
        );
    }

    #[test]
    fn out_of_range_rows_clamp_to_the_source() {
        let diag = TableDiagnostic::from_parts(Path::new("t.tsv"), "x", 9, "bad row".into());
        assert!(diag.span.offset() <= 1);
    }

    #[test]
    fn only_table_row_errors_get_source_context() {
        let err = GrammarError::MalformedTable {
            path: "/nonexistent/days.tsv".into(),
            line: 1,
            message: "bad row".into(),
        };
        // Unreadable file: fall back to the plain error message.
        assert!(TableDiagnostic::from_grammar_error(&err).is_none());

        let err = GrammarError::IncompleteRuleSet {
            present: "months.tsv".into(),
            missing: "days.tsv".into(),
        };
        assert!(TableDiagnostic::from_grammar_error(&err).is_none());
    }
}
