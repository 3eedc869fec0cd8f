//! Candidate ranking over compiled grammars.
//!
//! A grammar is applied by composing an acceptor for the input in front
//! of it and searching the resulting lattice: single best path in
//! deterministic mode, n-best otherwise. The two-stage pipeline sums
//! tagger and verbalizer weights and deduplicates identical surface
//! forms, keeping each form's cheapest derivation.

use std::collections::HashSet;

use textnorm_fst::{Candidate, Fst, compose, n_shortest, single_best};

use crate::graph::unit::GrammarUnit;

/// Run one grammar over an input string.
pub(crate) fn apply(input: &str, unit: &GrammarUnit, limit: usize) -> Vec<Candidate> {
    let lattice = compose(&Fst::accept(input), unit.fst());
    if unit.deterministic() {
        single_best(&lattice).into_iter().collect()
    } else {
        n_shortest(&lattice, limit.max(1))
    }
}

/// Run the tagger and verbalizer back to back, merging weights across
/// the two stages.
pub(crate) fn pipeline(
    input: &str,
    classifier: &GrammarUnit,
    verbalizer: &GrammarUnit,
    limit: usize,
) -> Vec<Candidate> {
    let mut merged: Vec<Candidate> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for tag in apply(input, classifier, limit) {
        for rendered in apply(&tag.output, verbalizer, limit) {
            if seen.insert(rendered.output.clone()) {
                merged.push(Candidate {
                    output: rendered.output,
                    weight: tag.weight + rendered.weight,
                });
            }
        }
    }
    // Stable sort: an equal-cost duplicate keeps its tagger-rank order.
    merged.sort_by(|a, b| a.weight.total_cmp(&b.weight));
    merged.truncate(limit);
    merged
}
