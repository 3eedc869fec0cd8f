//! The sentence-level classifier.
//!
//! Unions every available tagger into one weighted grammar, frames each
//! match as a `tokens { ... }` record, and loops over
//! whitespace-separated tokens. Branch weights implement the
//! classification priority: whitelist beats the semiotic grammars,
//! which beat punctuation, and the pass-through word grammar only wins
//! when nothing else accepts.

use textnorm_fst::{Fst, add_weight, closure_star, concat, concat_all, union_all};

use crate::data::LocaleData;
use crate::graph::labels::InputCase;
use crate::graph::symbols::{
    MIN_POS_WEIGHT, capitalized_input, delete_extra_space, delete_space,
};
use crate::graph::taggers::{
    date_tagger, ordinal_tagger, punctuation_tagger, time_tagger, whitelist_tagger, word_tagger,
};
use crate::graph::unit::{GrammarKind, GrammarUnit};

const WHITELIST_WEIGHT: f64 = 1.01;
const DATE_WEIGHT: f64 = 1.1;
const TIME_WEIGHT: f64 = 1.1;
const ORDINAL_WEIGHT: f64 = 1.1;
const PUNCT_WEIGHT: f64 = 2.1;
const WORD_WEIGHT: f64 = 100.0;

/// Build the full classifier for a locale.
pub fn tokenize_and_classify(
    data: &LocaleData,
    input_case: InputCase,
    deterministic: bool,
) -> GrammarUnit {
    let mut branches: Vec<Fst> = Vec::new();
    if let Some(unit) = whitelist_tagger(data, input_case, deterministic) {
        branches.push(branch(unit.fst(), WHITELIST_WEIGHT, input_case));
    }
    if let Some(unit) = date_tagger(data, deterministic) {
        branches.push(branch(unit.fst(), DATE_WEIGHT, input_case));
    }
    if let Some(unit) = time_tagger(data, deterministic) {
        branches.push(branch(unit.fst(), TIME_WEIGHT, input_case));
    }
    if let Some(unit) = ordinal_tagger(data, deterministic) {
        branches.push(branch(unit.fst(), ORDINAL_WEIGHT, input_case));
    }
    branches.push(branch(
        punctuation_tagger(deterministic).fst(),
        PUNCT_WEIGHT,
        InputCase::LowerCased,
    ));
    branches.push(branch(word_tagger(deterministic).fst(), WORD_WEIGHT, input_case));

    let classify = union_all(branches.iter());
    let token = concat_all([&Fst::insert("tokens { "), &classify, &Fst::insert(" }")]);
    let sentence = concat_all([
        &delete_space(),
        &token,
        &closure_star(&concat(&delete_extra_space(), &token)),
        &delete_space(),
    ]);
    GrammarUnit::new(
        "tokenize_and_classify",
        GrammarKind::Classify,
        deterministic,
        sentence,
    )
}

/// Weight one classify branch and, in cased mode, let it accept a
/// capitalized first character at a small penalty.
fn branch(fst: &Fst, weight: f64, input_case: InputCase) -> Fst {
    let weighted = add_weight(fst, weight);
    match input_case {
        InputCase::LowerCased => weighted,
        InputCase::Cased => capitalized_input(&weighted, None, Some(MIN_POS_WEIGHT)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textnorm_fst::{compose, single_best};

    fn classify(language: &str, input_case: InputCase, input: &str) -> Option<String> {
        let data = LocaleData::builtin(language).unwrap();
        let unit = tokenize_and_classify(&data, input_case, true);
        single_best(&compose(&Fst::accept(input), unit.fst())).map(|c| c.output)
    }

    #[test]
    fn date_outranks_word_split() {
        assert_eq!(
            classify("es", InputCase::LowerCased, "uno de enero").as_deref(),
            Some("tokens { date { day: \"1\" month: \"enero\" preserve_order: true } }"),
        );
    }

    #[test]
    fn unknown_words_fall_through() {
        assert_eq!(
            classify("es", InputCase::LowerCased, "hola mundo").as_deref(),
            Some("tokens { name: \"hola\" } tokens { name: \"mundo\" }"),
        );
    }

    #[test]
    fn mixed_sentence_splits_per_token() {
        assert_eq!(
            classify("en", InputCase::LowerCased, "at twelve thirty").as_deref(),
            Some(
                "tokens { name: \"at\" } tokens { time { hours: \"12\" minutes: \"30\" } }"
            ),
        );
    }

    #[test]
    fn capitalized_sentence_start_needs_cased_mode() {
        // Without cased mode the date grammar misses and the words fall
        // through verbatim.
        assert_eq!(
            classify("es", InputCase::LowerCased, "Uno de enero").as_deref(),
            Some(
                "tokens { name: \"Uno\" } tokens { name: \"de\" } tokens { name: \"enero\" }"
            ),
        );
        assert_eq!(
            classify("es", InputCase::Cased, "Uno de enero").as_deref(),
            Some("tokens { date { day: \"1\" month: \"enero\" preserve_order: true } }"),
        );
    }

    #[test]
    fn punctuation_branch_outweighs_word_fallback() {
        // A lone punctuation mark is accepted by both the punctuation
        // grammar and the pass-through word grammar; the cheaper
        // punctuation branch must carry the winning path.
        let data = LocaleData::builtin("es").unwrap();
        let unit = tokenize_and_classify(&data, InputCase::LowerCased, true);
        let best = single_best(&compose(&Fst::accept("."), unit.fst())).unwrap();
        assert_eq!(best.output, "tokens { name: \".\" }");
        assert!((best.weight - PUNCT_WEIGHT).abs() < 1e-9);
        assert!(best.weight < WORD_WEIGHT);
    }

    #[test]
    fn ordinals_classify_ahead_of_words() {
        assert_eq!(
            classify("es", InputCase::LowerCased, "llegó segundo").as_deref(),
            Some("tokens { name: \"llegó\" } tokens { ordinal { value: \"2º\" } }"),
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(
            classify("es", InputCase::LowerCased, "  hola  ").as_deref(),
            Some("tokens { name: \"hola\" }"),
        );
    }
}
