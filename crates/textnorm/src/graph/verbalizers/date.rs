//! Date verbalizer: `date { ... }` records into written dates.
//!
//! Canonical rendering is day-joiner-month (`1 de enero`). A record may
//! instead list month before day, but only an explicit order marker
//! makes that rendering legal; without one the record is rejected
//! rather than silently reordered. A record carrying only a `year`
//! field renders the year verbatim.

use textnorm_fst::{Fst, concat, concat_all, union_all};

use crate::data::LocaleData;
use crate::graph::fields::untag_field;
use crate::graph::labels::output_accept;
use crate::graph::symbols::{
    delete_extra_space, delete_order_marker, insert_space, not_quote_plus, require_order_marker,
};
use crate::graph::unit::{GrammarKind, GrammarUnit, delete_tokens};

/// Build the date verbalizer, if the locale carries date tables.
pub fn date_verbalizer(data: &LocaleData, deterministic: bool) -> Option<GrammarUnit> {
    if data.months.is_empty() {
        return None;
    }
    let day = untag_field("day", &not_quote_plus());
    let month = untag_field("month", &output_accept(&data.months));
    let joiner = match &data.date_joiner {
        Some(joiner) => concat(&Fst::insert(joiner), &insert_space()),
        None => Fst::epsilon(),
    };
    let day_month = concat_all([
        &day,
        &delete_extra_space(),
        &joiner,
        &month,
        &delete_order_marker(),
    ]);
    let month_day = concat_all([
        &month,
        &delete_extra_space(),
        &day,
        &require_order_marker(),
    ]);
    let year = concat(
        &untag_field("year", &not_quote_plus()),
        &delete_order_marker(),
    );
    let body = union_all([&day_month, &month_day, &year]);
    Some(GrammarUnit::new(
        "date",
        GrammarKind::Verbalize,
        deterministic,
        delete_tokens("date", &body),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use textnorm_fst::{compose, single_best};

    fn render(record: &str) -> Option<String> {
        let data = LocaleData::builtin("es").unwrap();
        let unit = date_verbalizer(&data, true).unwrap();
        single_best(&compose(&Fst::accept(record), unit.fst())).map(|c| c.output)
    }

    #[test]
    fn renders_day_month_with_joiner() {
        assert_eq!(
            render("date { day: \"1\" month: \"enero\" preserve_order: true }").as_deref(),
            Some("1 de enero"),
        );
    }

    #[test]
    fn marker_is_optional_for_canonical_order() {
        assert_eq!(
            render("date { day: \"5\" month: \"mayo\" }").as_deref(),
            Some("5 de mayo"),
        );
    }

    #[test]
    fn month_first_requires_a_marker() {
        assert_eq!(render("date { month: \"enero\" day: \"1\" }"), None);
        assert_eq!(
            render("date { month: \"enero\" day: \"1\" preserve_order: true }").as_deref(),
            Some("enero 1"),
        );
    }

    #[test]
    fn unknown_month_is_rejected() {
        assert_eq!(render("date { day: \"1\" month: \"brumario\" }"), None);
    }

    #[test]
    fn bare_year_renders_verbatim() {
        assert_eq!(render("date { year: \"1984\" }").as_deref(), Some("1984"));
        assert_eq!(
            render("date { year: \"1984\" preserve_order: true }").as_deref(),
            Some("1984"),
        );
    }
}
