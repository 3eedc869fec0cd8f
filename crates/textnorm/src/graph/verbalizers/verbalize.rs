//! The sentence-level verbalizer.
//!
//! Unions every available verbalizer, strips the `tokens { ... }`
//! frames the classifier emitted, and loops over records, rejoining the
//! rendered tokens with single spaces.

use textnorm_fst::{Fst, closure_star, concat, concat_all, union_all};

use crate::data::LocaleData;
use crate::graph::symbols::{delete_extra_space, delete_space};
use crate::graph::unit::{GrammarKind, GrammarUnit, delete_tokens};
use crate::graph::verbalizers::{
    date_verbalizer, ordinal_verbalizer, time_verbalizer, word_verbalizer,
};

/// Build the full verbalizer for a locale.
pub fn verbalize_final(data: &LocaleData, deterministic: bool) -> GrammarUnit {
    let mut types: Vec<Fst> = Vec::new();
    if let Some(unit) = date_verbalizer(data, deterministic) {
        types.push(unit.fst().clone());
    }
    if let Some(unit) = time_verbalizer(data, deterministic) {
        types.push(unit.fst().clone());
    }
    if let Some(unit) = ordinal_verbalizer(data, deterministic) {
        types.push(unit.fst().clone());
    }
    types.push(word_verbalizer(deterministic).fst().clone());

    let verbalize = union_all(types.iter());
    let token = delete_tokens("tokens", &verbalize);
    let sentence = concat_all([
        &delete_space(),
        &token,
        &closure_star(&concat(&delete_extra_space(), &token)),
        &delete_space(),
    ]);
    GrammarUnit::new(
        "verbalize_final",
        GrammarKind::Verbalize,
        deterministic,
        sentence,
    )
}
