//! Time tagger: spoken hour-minute expressions into `time { ... }`
//! records.

use textnorm_fst::concat_all;

use crate::data::LocaleData;
use crate::graph::fields::tag_field;
use crate::graph::labels::label_map;
use crate::graph::symbols::delete_extra_space;
use crate::graph::unit::{GrammarKind, GrammarUnit, add_tokens};

/// Build the time tagger, if the locale carries time tables.
pub fn time_tagger(data: &LocaleData, deterministic: bool) -> Option<GrammarUnit> {
    if data.hours.is_empty() || data.minutes.is_empty() {
        return None;
    }
    let hours = tag_field("hours", &label_map(&data.hours));
    let minutes = tag_field("minutes", &label_map(&data.minutes));
    let body = concat_all([&hours, &delete_extra_space(), &minutes]);
    Some(GrammarUnit::new(
        "time",
        GrammarKind::Classify,
        deterministic,
        add_tokens("time", &body),
    ))
}
