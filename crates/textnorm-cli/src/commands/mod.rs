//! CLI command implementations.

mod candidates;
mod normalize;
mod plural;
mod tag;

use std::path::PathBuf;

use clap::Args;
use miette::miette;
use textnorm::{InputCase, LocaleData, Normalizer};

use crate::output::diagnostic::TableDiagnostic;

pub use candidates::{run_candidates, CandidatesArgs};
pub use normalize::{run_normalize, NormalizeArgs};
pub use plural::{run_plural, PluralArgs};
pub use tag::{run_tag, TagArgs};

/// Options shared by every command that loads grammars.
#[derive(Debug, Args)]
pub struct LocaleArgs {
    /// Language code (e.g., en, es)
    #[arg(long, default_value = "en")]
    pub lang: String,

    /// Directory with rule tables (.tsv). Defaults to the built-in
    /// tables for the language.
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Directory for compiled grammar artifacts
    #[arg(long, env = "TEXTNORM_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Accept sentence-cased input
    #[arg(long)]
    pub cased: bool,

    /// Keep weaker alternatives instead of only the best path
    #[arg(long)]
    pub all_paths: bool,
}

impl LocaleArgs {
    /// Build a normalizer with this locale's grammars loaded.
    pub fn load(&self) -> miette::Result<Normalizer> {
        let data = match &self.data_dir {
            Some(dir) => LocaleData::from_dir(&self.lang, dir).map_err(|e| {
                match TableDiagnostic::from_grammar_error(&e) {
                    Some(diag) => miette::Report::new(diag),
                    None => miette!("Failed to load rule tables: {}", e),
                }
            })?,
            None => LocaleData::builtin(&self.lang)
                .ok_or_else(|| miette!("No built-in rule tables for language '{}'", self.lang))?,
        };

        let input_case = if self.cased {
            InputCase::Cased
        } else {
            InputCase::LowerCased
        };
        let mut normalizer = Normalizer::builder()
            .language(self.lang.clone())
            .input_case(input_case)
            .deterministic(!self.all_paths)
            .maybe_cache_dir(self.cache_dir.clone())
            .build();
        normalizer
            .load_grammars(&self.lang, &data)
            .map_err(|e| miette!("Failed to compile grammars: {}", e))?;
        Ok(normalizer)
    }
}
