//! Whitelist tagger: fixed spoken phrases mapped straight to their
//! written form, as a bare `name` field.
//!
//! Whitelist hits are the strongest classification signal, so the
//! tokenizer gives this grammar the lowest branch weight.

use crate::data::LocaleData;
use crate::graph::fields::tag_field;
use crate::graph::labels::{InputCase, cased_variants, label_map};
use crate::graph::unit::{GrammarKind, GrammarUnit};

/// Build the whitelist tagger, if the locale carries a whitelist.
///
/// Under [`InputCase::Cased`] the table is extended with
/// first-grapheme-capitalized input variants, so `Doctor` maps like
/// `doctor`.
pub fn whitelist_tagger(
    data: &LocaleData,
    input_case: InputCase,
    deterministic: bool,
) -> Option<GrammarUnit> {
    if data.whitelist.is_empty() {
        return None;
    }
    let table = match input_case {
        InputCase::LowerCased => data.whitelist.clone(),
        InputCase::Cased => cased_variants(&data.whitelist),
    };
    let body = tag_field("name", &label_map(&table));
    Some(GrammarUnit::new(
        "whitelist",
        GrammarKind::Classify,
        deterministic,
        body,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use textnorm_fst::{Fst, compose, single_best};

    #[test]
    fn maps_spoken_phrase_to_written_form() {
        let data = LocaleData::builtin("es").unwrap();
        let unit = whitelist_tagger(&data, InputCase::LowerCased, true).unwrap();
        let best = single_best(&compose(&Fst::accept("doctora"), unit.fst())).unwrap();
        assert_eq!(best.output, "name: \"dra.\"");
    }

    #[test]
    fn multiword_written_form_is_space_protected() {
        let data = LocaleData::builtin("es").unwrap();
        let unit = whitelist_tagger(&data, InputCase::LowerCased, true).unwrap();
        let best = single_best(&compose(&Fst::accept("por ejemplo"), unit.fst())).unwrap();
        assert_eq!(best.output, "name: \"p.\u{a0}ej.\"");
    }

    #[test]
    fn cased_input_needs_cased_mode() {
        let data = LocaleData::builtin("es").unwrap();
        let lower = whitelist_tagger(&data, InputCase::LowerCased, true).unwrap();
        assert!(single_best(&compose(&Fst::accept("Doctora"), lower.fst())).is_none());

        let cased = whitelist_tagger(&data, InputCase::Cased, true).unwrap();
        let best = single_best(&compose(&Fst::accept("Doctora"), cased.fst())).unwrap();
        assert_eq!(best.output, "name: \"dra.\"");
    }
}
