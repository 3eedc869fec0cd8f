//! Ordinal tagger: spoken ordinal words into `ordinal { ... }` records.
//!
//! `segundo` becomes `ordinal { value: "2º" }`. The written form comes
//! straight from the locale's ordinal table, gendered suffix included.

use crate::data::LocaleData;
use crate::graph::fields::tag_field;
use crate::graph::labels::label_map;
use crate::graph::unit::{GrammarKind, GrammarUnit, add_tokens};

/// Build the ordinal tagger, if the locale carries an ordinal table.
pub fn ordinal_tagger(data: &LocaleData, deterministic: bool) -> Option<GrammarUnit> {
    if data.ordinals.is_empty() {
        return None;
    }
    let body = tag_field("value", &label_map(&data.ordinals));
    Some(GrammarUnit::new(
        "ordinal",
        GrammarKind::Classify,
        deterministic,
        add_tokens("ordinal", &body),
    ))
}
