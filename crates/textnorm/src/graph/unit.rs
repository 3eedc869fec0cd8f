//! A named, compiled grammar unit.
//!
//! Every grammar in the system is a [`GrammarUnit`]: a name, a kind
//! (classify or verbalize), a determinism flag, and the compiled
//! transducer. Units are immutable once built; the normalizer swaps
//! whole units when a language is (re)loaded.

use textnorm_fst::{Fst, concat_all};

use crate::graph::cache::ArtifactCache;
use crate::graph::error::GrammarError;
use crate::graph::symbols::{delete_space, restore_space};

/// Which pipeline stage a grammar belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarKind {
    /// Tagger: raw text in, token records out.
    Classify,
    /// Verbalizer: token records in, written text out.
    Verbalize,
}

impl GrammarKind {
    /// Stable name used in cache artifact paths.
    pub fn as_str(self) -> &'static str {
        match self {
            GrammarKind::Classify => "classify",
            GrammarKind::Verbalize => "verbalize",
        }
    }
}

/// A compiled grammar with its identity.
#[derive(Debug, Clone)]
pub struct GrammarUnit {
    name: String,
    kind: GrammarKind,
    deterministic: bool,
    fst: Fst,
}

impl GrammarUnit {
    /// Wrap a freshly built transducer.
    pub fn new(name: impl Into<String>, kind: GrammarKind, deterministic: bool, fst: Fst) -> Self {
        GrammarUnit {
            name: name.into(),
            kind,
            deterministic,
            fst,
        }
    }

    /// Try to restore a previously compiled unit from the artifact
    /// cache. `Ok(None)` means no artifact exists for this unit under
    /// the cache's current checksum; a stale or unreadable artifact is
    /// an error.
    pub fn load_cached(
        name: &str,
        kind: GrammarKind,
        deterministic: bool,
        cache: &ArtifactCache,
    ) -> Result<Option<Self>, GrammarError> {
        Ok(cache
            .load(kind, name)?
            .map(|fst| GrammarUnit::new(name, kind, deterministic, fst)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> GrammarKind {
        self.kind
    }

    pub fn deterministic(&self) -> bool {
        self.deterministic
    }

    pub fn fst(&self) -> &Fst {
        &self.fst
    }

    /// Frame a classify-side body in this unit's record block.
    pub fn wrap(&self, body: &Fst) -> Fst {
        add_tokens(&self.name, body)
    }

    /// Strip this unit's record block around a verbalize-side body.
    pub fn unwrap(&self, body: &Fst) -> Fst {
        delete_tokens(&self.name, body)
    }
}

/// Frame a tagger body as `name { <body> }`.
pub fn add_tokens(name: &str, body: &Fst) -> Fst {
    concat_all([
        &Fst::insert(&format!("{name} {{ ")),
        body,
        &Fst::insert(" }"),
    ])
}

/// Consume a `name { ... }` frame around a verbalizer body, and restore
/// protected spaces in the output.
pub fn delete_tokens(name: &str, body: &Fst) -> Fst {
    let framed = concat_all([
        &Fst::delete(name),
        &delete_space(),
        &Fst::delete("{"),
        &delete_space(),
        body,
        &delete_space(),
        &Fst::delete("}"),
    ]);
    restore_space(&framed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use textnorm_fst::{compose, single_best};

    #[test]
    fn unwrap_inverts_wrap() {
        let body = "day: \"1\"";
        let unit = GrammarUnit::new("date", GrammarKind::Classify, true, Fst::new());
        let wrapped = unit.wrap(&Fst::accept(body));
        let tagged = single_best(&compose(&Fst::accept(body), &wrapped)).unwrap();
        assert_eq!(tagged.output, "date { day: \"1\" }");

        let unwrapped = unit.unwrap(&Fst::accept(body));
        let restored = single_best(&compose(&Fst::accept(&tagged.output), &unwrapped)).unwrap();
        assert_eq!(restored.output, body);
    }

    #[test]
    fn rewrapping_changes_only_framing() {
        let body = Fst::accept("hours: \"12\"");
        let time = add_tokens("time", &body);
        let tokens = add_tokens("tokens", &time);
        let framed = single_best(&compose(&Fst::accept("hours: \"12\""), &tokens)).unwrap();
        assert_eq!(framed.output, "tokens { time { hours: \"12\" } }");
    }

    #[test]
    fn cache_names_are_stable() {
        assert_eq!(GrammarKind::Classify.as_str(), "classify");
        assert_eq!(GrammarKind::Verbalize.as_str(), "verbalize");
    }
}
