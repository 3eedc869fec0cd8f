//! Locale rule tables.
//!
//! A [`LocaleData`] bundles every tab-separated table a language's
//! grammars are built from. Tables load from a directory of `.tsv`
//! files or from the embedded built-in locales. The table set is
//! checksummed so the artifact cache can tell whether a compiled
//! grammar still matches its sources.

use std::path::{Path, PathBuf};

use const_fnv1a_hash::fnv1a_hash_str_64;

use crate::graph::error::GrammarError;
use crate::graph::labels::{Label, load_labels, parse_labels};

const MONTHS_FILE: &str = "months.tsv";
const DAYS_FILE: &str = "days.tsv";
const ORDINALS_FILE: &str = "ordinals.tsv";
const HOURS_FILE: &str = "time_hours.tsv";
const MINUTES_FILE: &str = "time_minutes.tsv";
const WHITELIST_FILE: &str = "whitelist.tsv";
const SUPPLETIVE_FILE: &str = "suppletive.tsv";
const SETTINGS_FILE: &str = "settings.tsv";

/// The rule tables one language's grammars are compiled from.
#[derive(Debug, Clone, Default)]
pub struct LocaleData {
    pub language: String,
    pub months: Vec<Label>,
    pub days: Vec<Label>,
    pub ordinals: Vec<Label>,
    pub hours: Vec<Label>,
    pub minutes: Vec<Label>,
    pub whitelist: Vec<Label>,
    pub suppletive: Vec<(String, String)>,
    /// Literal word joining day and month in spoken dates, when the
    /// language has one (Spanish `de`).
    pub date_joiner: Option<String>,
}

impl LocaleData {
    /// An empty rule set for the given language.
    pub fn new(language: impl Into<String>) -> Self {
        LocaleData {
            language: language.into(),
            ..LocaleData::default()
        }
    }

    /// Load every recognized table file found in `dir`. Missing files
    /// are fine; a table present without the tables it depends on is
    /// not.
    pub fn from_dir(language: impl Into<String>, dir: &Path) -> Result<Self, GrammarError> {
        let mut data = LocaleData::new(language);
        data.months = read_optional(dir, MONTHS_FILE)?;
        data.days = read_optional(dir, DAYS_FILE)?;
        data.ordinals = read_optional(dir, ORDINALS_FILE)?;
        data.hours = read_optional(dir, HOURS_FILE)?;
        data.minutes = read_optional(dir, MINUTES_FILE)?;
        data.whitelist = read_optional(dir, WHITELIST_FILE)?;
        data.suppletive = read_optional(dir, SUPPLETIVE_FILE)?
            .into_iter()
            .map(|label| (label.input, label.output))
            .collect();
        for label in read_optional(dir, SETTINGS_FILE)? {
            if label.input == "date_joiner" {
                data.date_joiner = Some(label.output);
            }
        }
        data.validate(dir)?;
        Ok(data)
    }

    /// A built-in locale, if one is embedded for `language`.
    pub fn builtin(language: &str) -> Option<Self> {
        match language {
            "es" => Some(builtin_es()),
            "en" => Some(builtin_en()),
            _ => None,
        }
    }

    /// FNV-1a checksum over every table, in a stable order. Any edit to
    /// any row changes the checksum.
    pub fn checksum(&self) -> u64 {
        let mut canon = String::new();
        canon.push_str(&self.language);
        canon.push('\n');
        for (name, table) in [
            (MONTHS_FILE, &self.months),
            (DAYS_FILE, &self.days),
            (ORDINALS_FILE, &self.ordinals),
            (HOURS_FILE, &self.hours),
            (MINUTES_FILE, &self.minutes),
            (WHITELIST_FILE, &self.whitelist),
        ] {
            canon.push_str(name);
            canon.push('\n');
            for label in table {
                canon.push_str(&label.input);
                canon.push('\t');
                canon.push_str(&label.output);
                if let Some(w) = label.weight {
                    canon.push('\t');
                    canon.push_str(&w.to_string());
                }
                canon.push('\n');
            }
        }
        for (singular, plural) in &self.suppletive {
            canon.push_str(singular);
            canon.push('\t');
            canon.push_str(plural);
            canon.push('\n');
        }
        if let Some(joiner) = &self.date_joiner {
            canon.push_str("date_joiner\t");
            canon.push_str(joiner);
            canon.push('\n');
        }
        fnv1a_hash_str_64(&canon)
    }

    fn validate(&self, dir: &Path) -> Result<(), GrammarError> {
        for (present, present_table, missing, missing_table) in [
            (MONTHS_FILE, &self.months, DAYS_FILE, &self.days),
            (DAYS_FILE, &self.days, MONTHS_FILE, &self.months),
            (HOURS_FILE, &self.hours, MINUTES_FILE, &self.minutes),
            (MINUTES_FILE, &self.minutes, HOURS_FILE, &self.hours),
        ] {
            if !present_table.is_empty() && missing_table.is_empty() {
                return Err(GrammarError::IncompleteRuleSet {
                    present: present.to_string(),
                    missing: missing.to_string(),
                });
            }
        }
        if self.months.is_empty()
            && self.ordinals.is_empty()
            && self.hours.is_empty()
            && self.whitelist.is_empty()
            && self.suppletive.is_empty()
        {
            return Err(GrammarError::EmptyRuleSet {
                dir: dir.to_path_buf(),
            });
        }
        Ok(())
    }
}

fn read_optional(dir: &Path, file: &str) -> Result<Vec<Label>, GrammarError> {
    let path = dir.join(file);
    if !path.exists() {
        return Ok(Vec::new());
    }
    load_labels(&path)
}

fn embedded(language: &str, file: &str, content: &str) -> Vec<Label> {
    let path = PathBuf::from(format!("builtin:{language}/{file}"));
    parse_labels(content, &path).expect("built-in rule tables are well-formed")
}

fn builtin_es() -> LocaleData {
    let mut data = LocaleData::new("es");
    data.months = embedded("es", MONTHS_FILE, include_str!("../data/es/months.tsv"));
    data.days = embedded("es", DAYS_FILE, include_str!("../data/es/days.tsv"));
    data.ordinals = embedded("es", ORDINALS_FILE, include_str!("../data/es/ordinals.tsv"));
    data.whitelist = embedded("es", WHITELIST_FILE, include_str!("../data/es/whitelist.tsv"));
    data.date_joiner = Some("de".to_string());
    data
}

fn builtin_en() -> LocaleData {
    let mut data = LocaleData::new("en");
    data.hours = embedded("en", HOURS_FILE, include_str!("../data/en/time_hours.tsv"));
    data.minutes = embedded(
        "en",
        MINUTES_FILE,
        include_str!("../data/en/time_minutes.tsv"),
    );
    data.whitelist = embedded("en", WHITELIST_FILE, include_str!("../data/en/whitelist.tsv"));
    data.suppletive = embedded("en", SUPPLETIVE_FILE, include_str!("../data/en/suppletive.tsv"))
        .into_iter()
        .map(|label| (label.input, label.output))
        .collect();
    data
}
