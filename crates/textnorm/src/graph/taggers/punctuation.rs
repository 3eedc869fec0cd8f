//! Punctuation tagger: standalone punctuation marks as bare `name`
//! fields.

use textnorm_fst::Fst;

use crate::graph::fields::tag_field;
use crate::graph::symbols::punct;
use crate::graph::unit::{GrammarKind, GrammarUnit};

/// Build the punctuation tagger.
pub fn punctuation_tagger(deterministic: bool) -> GrammarUnit {
    let body = tag_field("name", &Fst::copy(punct()));
    GrammarUnit::new("punct", GrammarKind::Classify, deterministic, body)
}
