//! The normalizer: per-language grammar registry and the public
//! pipeline entry points.

use std::collections::BTreeMap;
use std::path::PathBuf;

use bon::Builder;
use const_fnv1a_hash::fnv1a_hash_str_64;
use textnorm_fst::Candidate;

use crate::data::LocaleData;
use crate::graph::cache::ArtifactCache;
use crate::graph::error::{GrammarError, NormalizeError, close_matches};
use crate::graph::labels::InputCase;
use crate::graph::plural::Pluralizer;
use crate::graph::search::{apply, pipeline};
use crate::graph::taggers::tokenize_and_classify;
use crate::graph::unit::{GrammarKind, GrammarUnit};
use crate::graph::verbalizers::verbalize_final;

/// Compiled grammars for one loaded language.
#[derive(Debug, Clone)]
struct LocaleGrammars {
    classifier: GrammarUnit,
    verbalizer: GrammarUnit,
    pluralizer: Pluralizer,
}

/// Two-stage text normalizer over a registry of loaded languages.
///
/// Construction only fixes the configuration; grammars are compiled (or
/// restored from the artifact cache) when a language is loaded with
/// [`Normalizer::load_grammars`]. Loading the same language again
/// replaces its grammars wholesale.
#[derive(Debug, Builder)]
#[builder(on(String, into))]
pub struct Normalizer {
    /// Language whose grammars the entry points use.
    #[builder(default = "en".to_string())]
    language: String,

    /// How raw input casing is treated.
    #[builder(default)]
    input_case: InputCase,

    /// Deterministic grammars return only the single best candidate.
    #[builder(default = true)]
    deterministic: bool,

    /// Directory for compiled grammar artifacts. No caching when unset.
    cache_dir: Option<PathBuf>,

    /// Upper bound on candidates returned per stage.
    #[builder(default = 10)]
    max_candidates: usize,

    #[builder(skip)]
    locales: BTreeMap<String, LocaleGrammars>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Normalizer::builder().build()
    }
}

impl Normalizer {
    /// A normalizer with default configuration.
    pub fn new() -> Self {
        Normalizer::default()
    }

    /// The active language.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Switch the active language. The language still needs loaded
    /// grammars before the entry points work.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// Languages with loaded grammars, sorted.
    pub fn loaded_languages(&self) -> Vec<&str> {
        self.locales.keys().map(String::as_str).collect()
    }

    /// Compile (or restore from cache) and register grammars for a
    /// language. Replaces any previously loaded grammars for it.
    pub fn load_grammars(
        &mut self,
        language: impl Into<String>,
        data: &LocaleData,
    ) -> Result<(), GrammarError> {
        let language = language.into();
        let cache = self.cache_dir.as_ref().map(|dir| {
            let key = format!("{}:{:?}:{:016x}", language, self.input_case, data.checksum());
            ArtifactCache::new(dir.clone(), fnv1a_hash_str_64(&key))
        });
        let classifier = self.unit_for(&cache, "tokenize_and_classify", GrammarKind::Classify, || {
            tokenize_and_classify(data, self.input_case, self.deterministic)
        })?;
        let verbalizer = self.unit_for(&cache, "verbalize_final", GrammarKind::Verbalize, || {
            verbalize_final(data, self.deterministic)
        })?;
        let pluralizer = Pluralizer::with_exceptions(data.suppletive.iter().cloned());
        self.locales.insert(
            language,
            LocaleGrammars {
                classifier,
                verbalizer,
                pluralizer,
            },
        );
        Ok(())
    }

    /// First stage: raw text to token record candidates, best first.
    /// An empty vector means the grammars do not cover the input.
    pub fn tag(&self, input: &str) -> Result<Vec<Candidate>, NormalizeError> {
        let grammars = self.grammars()?;
        Ok(apply(input, &grammars.classifier, self.max_candidates))
    }

    /// Second stage: token record text to written-form candidates.
    pub fn verbalize(&self, records: &str) -> Result<Vec<Candidate>, NormalizeError> {
        let grammars = self.grammars()?;
        Ok(apply(records, &grammars.verbalizer, self.max_candidates))
    }

    /// Both stages: the best written form for an input, or `Ok(None)`
    /// when the grammars do not cover it.
    pub fn normalize(&self, input: &str) -> Result<Option<String>, NormalizeError> {
        let grammars = self.grammars()?;
        let merged = pipeline(input, &grammars.classifier, &grammars.verbalizer, 1);
        Ok(merged.into_iter().next().map(|c| c.output))
    }

    /// Both stages, keeping up to `limit` distinct written forms with
    /// their combined weights, best first.
    pub fn candidates(
        &self,
        input: &str,
        limit: usize,
    ) -> Result<Vec<Candidate>, NormalizeError> {
        let grammars = self.grammars()?;
        Ok(pipeline(
            input,
            &grammars.classifier,
            &grammars.verbalizer,
            limit.max(1),
        ))
    }

    /// The plural transform of the active language.
    pub fn pluralizer(&self) -> Result<&Pluralizer, NormalizeError> {
        Ok(&self.grammars()?.pluralizer)
    }

    fn grammars(&self) -> Result<&LocaleGrammars, NormalizeError> {
        self.locales
            .get(&self.language)
            .ok_or_else(|| NormalizeError::LanguageNotLoaded {
                language: self.language.clone(),
                suggestions: close_matches(
                    &self.language,
                    &self
                        .locales
                        .keys()
                        .cloned()
                        .collect::<Vec<String>>(),
                ),
            })
    }

    fn unit_for(
        &self,
        cache: &Option<ArtifactCache>,
        name: &str,
        kind: GrammarKind,
        build: impl FnOnce() -> GrammarUnit,
    ) -> Result<GrammarUnit, GrammarError> {
        if let Some(cache) = cache {
            if let Some(unit) =
                GrammarUnit::load_cached(name, kind, self.deterministic, cache)?
            {
                return Ok(unit);
            }
            let unit = build();
            cache.store(kind, name, unit.fst())?;
            return Ok(unit);
        }
        Ok(build())
    }
}
