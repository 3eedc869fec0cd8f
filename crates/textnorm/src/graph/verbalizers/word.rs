//! Word verbalizer: bare `name` fields back into their text, with
//! protected spaces restored.

use crate::graph::fields::untag_field;
use crate::graph::symbols::{not_quote_plus, restore_space};
use crate::graph::unit::{GrammarKind, GrammarUnit};

/// Build the pass-through verbalizer for bare `name` fields.
pub fn word_verbalizer(deterministic: bool) -> GrammarUnit {
    let body = restore_space(&untag_field("name", &not_quote_plus()));
    GrammarUnit::new("word", GrammarKind::Verbalize, deterministic, body)
}
