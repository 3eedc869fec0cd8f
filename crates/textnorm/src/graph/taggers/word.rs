//! Word tagger: the pass-through fallback for anything no semiotic
//! grammar claims.
//!
//! Any run of non-space characters is accepted verbatim as a bare
//! `name` field. The tokenizer gives this branch the heaviest weight so
//! it only wins when nothing else matches.

use textnorm_fst::{Fst, closure_plus};

use crate::graph::fields::tag_field;
use crate::graph::symbols::not_space;
use crate::graph::unit::{GrammarKind, GrammarUnit};

/// Build the fallback word tagger.
pub fn word_tagger(deterministic: bool) -> GrammarUnit {
    let body = tag_field("name", &closure_plus(&Fst::copy(not_space())));
    GrammarUnit::new("word", GrammarKind::Classify, deterministic, body)
}
