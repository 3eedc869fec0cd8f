//! Time verbalizer: `time { ... }` records into `HH:MM` text.

use textnorm_fst::{Fst, concat_all};

use crate::data::LocaleData;
use crate::graph::fields::untag_field;
use crate::graph::symbols::{delete_order_marker, delete_space, not_quote_plus};
use crate::graph::unit::{GrammarKind, GrammarUnit, delete_tokens};

/// Build the time verbalizer, if the locale carries time tables.
pub fn time_verbalizer(data: &LocaleData, deterministic: bool) -> Option<GrammarUnit> {
    if data.hours.is_empty() {
        return None;
    }
    let body = concat_all([
        &untag_field("hours", &not_quote_plus()),
        &delete_space(),
        &Fst::insert(":"),
        &untag_field("minutes", &not_quote_plus()),
        &delete_order_marker(),
    ]);
    Some(GrammarUnit::new(
        "time",
        GrammarKind::Verbalize,
        deterministic,
        delete_tokens("time", &body),
    ))
}
