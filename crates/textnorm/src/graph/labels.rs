//! Tab-separated label tables and their transducer form.
//!
//! A table row maps an input string to an output string, with an
//! optional third column carrying a weight. Tables are loaded from
//! `.tsv` files or embedded strings and turned into a weighted union of
//! string crossings with [`label_map`].

use std::fs;
use std::path::Path;

use textnorm_fst::{Fst, add_weight, union_all};
use unicode_segmentation::UnicodeSegmentation;

use crate::graph::error::GrammarError;

/// One rule-table row.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub input: String,
    pub output: String,
    pub weight: Option<f64>,
}

impl Label {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Label {
            input: input.into(),
            output: output.into(),
            weight: None,
        }
    }

    pub fn weighted(input: impl Into<String>, output: impl Into<String>, weight: f64) -> Self {
        Label {
            input: input.into(),
            output: output.into(),
            weight: Some(weight),
        }
    }
}

/// How raw input casing is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputCase {
    /// Input is already lower-cased; tables are used as written.
    #[default]
    LowerCased,
    /// Input may carry sentence casing; grammars also accept
    /// capitalized variants.
    Cased,
}

/// Load a label table from a file.
pub fn load_labels(path: &Path) -> Result<Vec<Label>, GrammarError> {
    let content = fs::read_to_string(path).map_err(|e| GrammarError::MissingData {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_labels(&content, path)
}

/// Parse a label table from tab-separated text. Blank lines are
/// skipped; each remaining line needs two or three columns.
pub fn parse_labels(content: &str, path: &Path) -> Result<Vec<Label>, GrammarError> {
    let mut labels = Vec::new();
    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let columns: Vec<&str> = line.split('\t').collect();
        match columns.as_slice() {
            [input, output] => labels.push(Label::new(*input, *output)),
            [input, output, weight] => {
                let weight = weight.parse::<f64>().map_err(|_| table_error(
                    path,
                    index + 1,
                    &format!("weight column is not a number: '{weight}'"),
                ))?;
                labels.push(Label::weighted(*input, *output, weight));
            }
            _ => {
                return Err(table_error(
                    path,
                    index + 1,
                    &format!("expected 2 or 3 tab-separated columns, found {}", columns.len()),
                ));
            }
        }
    }
    Ok(labels)
}

fn table_error(path: &Path, line: usize, message: &str) -> GrammarError {
    GrammarError::MalformedTable {
        path: path.to_path_buf(),
        line,
        message: message.to_string(),
    }
}

/// A weighted union of all rows in a table: each row becomes a string
/// crossing from its input to its output.
pub fn label_map(labels: &[Label]) -> Fst {
    let crossings: Vec<Fst> = labels
        .iter()
        .map(|label| {
            let cross = Fst::cross(&label.input, &label.output);
            match label.weight {
                Some(w) => add_weight(&cross, w),
                None => cross,
            }
        })
        .collect();
    union_all(crossings.iter())
}

/// An acceptor over each row's output string. Verbalizers use this to
/// constrain a field value to the vocabulary a tagger can produce.
pub fn output_accept(labels: &[Label]) -> Fst {
    let accepts: Vec<Fst> = labels
        .iter()
        .map(|label| Fst::accept(&label.output))
        .collect();
    union_all(accepts.iter())
}

/// Extend a table with first-grapheme-capitalized input variants.
/// Rows whose input already starts with an uppercase grapheme are kept
/// as-is without a variant.
pub fn cased_variants(labels: &[Label]) -> Vec<Label> {
    let mut extended = Vec::with_capacity(labels.len() * 2);
    for label in labels {
        extended.push(label.clone());
        let capitalized = capitalize_first(&label.input);
        if capitalized != label.input {
            extended.push(Label {
                input: capitalized,
                output: label.output.clone(),
                weight: label.weight,
            });
        }
    }
    extended
}

/// Upper-case the first grapheme of a string.
pub fn capitalize_first(s: &str) -> String {
    let mut graphemes = s.graphemes(true);
    match graphemes.next() {
        Some(first) => {
            let mut out = first.to_uppercase();
            out.push_str(graphemes.as_str());
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use textnorm_fst::{compose, single_best};

    fn at(content: &str) -> Result<Vec<Label>, GrammarError> {
        parse_labels(content, &PathBuf::from("test.tsv"))
    }

    #[test]
    fn parses_two_and_three_column_rows() {
        let labels = at("uno\t1\ndos\t2\ntres\t3\t-0.5\n").unwrap();
        assert_eq!(labels.len(), 3);
        assert_eq!(labels[0], Label::new("uno", "1"));
        assert_eq!(labels[2], Label::weighted("tres", "3", -0.5));
    }

    #[test]
    fn rejects_malformed_rows() {
        assert!(matches!(
            at("uno\n"),
            Err(GrammarError::MalformedTable { line: 1, .. })
        ));
        assert!(matches!(
            at("uno\t1\ndos\t2\theavy\n"),
            Err(GrammarError::MalformedTable { line: 2, .. })
        ));
    }

    #[test]
    fn label_map_transduces_each_row() {
        let labels = at("uno\t1\ndos\t2\n").unwrap();
        let map = label_map(&labels);
        let best = single_best(&compose(&Fst::accept("dos"), &map)).unwrap();
        assert_eq!(best.output, "2");
    }

    #[test]
    fn cased_variants_accept_capitalized_input() {
        let labels = cased_variants(&at("enero\t1\n").unwrap());
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[1].input, "Enero");
        assert_eq!(labels[1].output, "1");
    }

    #[test]
    fn capitalize_first_handles_multibyte() {
        assert_eq!(capitalize_first("única"), "Única");
        assert_eq!(capitalize_first(""), "");
    }
}
