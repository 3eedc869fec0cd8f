//! Ordinal verbalizer: `ordinal { ... }` records into written ordinals.

use crate::data::LocaleData;
use crate::graph::fields::untag_field;
use crate::graph::labels::output_accept;
use crate::graph::unit::{GrammarKind, GrammarUnit, delete_tokens};

/// Build the ordinal verbalizer, if the locale carries an ordinal table.
pub fn ordinal_verbalizer(data: &LocaleData, deterministic: bool) -> Option<GrammarUnit> {
    if data.ordinals.is_empty() {
        return None;
    }
    let body = untag_field("value", &output_accept(&data.ordinals));
    Some(GrammarUnit::new(
        "ordinal",
        GrammarKind::Verbalize,
        deterministic,
        delete_tokens("ordinal", &body),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use textnorm_fst::{Fst, compose, single_best};

    fn render(record: &str) -> Option<String> {
        let data = LocaleData::builtin("es").unwrap();
        let unit = ordinal_verbalizer(&data, true).unwrap();
        single_best(&compose(&Fst::accept(record), unit.fst())).map(|c| c.output)
    }

    #[test]
    fn renders_tabled_values() {
        assert_eq!(render("ordinal { value: \"2º\" }").as_deref(), Some("2º"));
        assert_eq!(render("ordinal { value: \"10ª\" }").as_deref(), Some("10ª"));
    }

    #[test]
    fn untabled_values_are_rejected() {
        assert_eq!(render("ordinal { value: \"99º\" }"), None);
    }
}
