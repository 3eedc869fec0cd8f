//! Quoted-field framing for tagger and verbalizer sub-grammars.
//!
//! Taggers wrap a value graph in `name: "<value>"`; verbalizers strip
//! the same framing back off. Both directions share the value graph in
//! the middle, so a tagger/verbalizer pair built from the same tables
//! is symmetric by construction.

use textnorm_fst::{Fst, concat_all};

use crate::graph::symbols::{convert_space, delete_space};

/// Emit a quoted field around a value graph: `name: "<value>"`.
///
/// Spaces produced by the value graph are protected with the
/// non-breaking placeholder so the record stays a single token on the
/// wire.
pub fn tag_field(name: &str, value: &Fst) -> Fst {
    concat_all([
        &Fst::insert(&format!("{name}: \"")),
        &convert_space(value),
        &Fst::insert("\""),
    ])
}

/// Strip the framing of a quoted field, keeping the value graph's
/// output: consumes `name: "<value>"`, emits whatever `value` emits.
pub fn untag_field(name: &str, value: &Fst) -> Fst {
    concat_all([
        &Fst::delete(&format!("{name}:")),
        &delete_space(),
        &Fst::delete("\""),
        value,
        &Fst::delete("\""),
    ])
}
