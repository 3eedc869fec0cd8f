//! Date tagger: spoken day-month expressions into `date { ... }`
//! records.
//!
//! `uno de enero` becomes `date { day: "1" month: "enero"
//! preserve_order: true }`. The marker is emitted because the spoken
//! order already matches the written order, and the verbalizer must not
//! be free to reorder it.

use textnorm_fst::{Fst, concat, concat_all};

use crate::data::LocaleData;
use crate::graph::fields::tag_field;
use crate::graph::labels::label_map;
use crate::graph::symbols::{delete_extra_space, insert_space};
use crate::graph::unit::{GrammarKind, GrammarUnit, add_tokens};

/// Build the date tagger, if the locale carries date tables.
pub fn date_tagger(data: &LocaleData, deterministic: bool) -> Option<GrammarUnit> {
    if data.days.is_empty() || data.months.is_empty() {
        return None;
    }
    let day = tag_field("day", &label_map(&data.days));
    let month = tag_field("month", &label_map(&data.months));
    let separator = match &data.date_joiner {
        Some(joiner) => concat(&Fst::delete(&format!(" {joiner} ")), &insert_space()),
        None => delete_extra_space(),
    };
    let body = concat_all([
        &day,
        &separator,
        &month,
        &Fst::insert(" preserve_order: true"),
    ]);
    Some(GrammarUnit::new(
        "date",
        GrammarKind::Classify,
        deterministic,
        add_tokens("date", &body),
    ))
}
