//! N-shortest candidate search over a ground lattice.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::collections::HashSet;

use serde::Serialize;

use crate::fst::{Arc, Fst};

/// One output string read off an accepting path, with its accumulated
/// cost. Lower cost is preferred.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub output: String,
    pub weight: f64,
}

/// Bound on total queue expansions, guarding against cyclic machines
/// that keep generating ever-longer outputs.
const MAX_EXPANSIONS: usize = 1_000_000;

struct QueueItem {
    cost: f64,
    seq: u64,
    state: usize,
    output: String,
}

impl PartialEq for QueueItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueItem {}

impl PartialOrd for QueueItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueItem {
    // BinaryHeap is a max-heap; reverse so the cheapest item pops first,
    // with discovery order as the tie-break (earlier-declared arcs win).
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Enumerate up to `n` distinct output strings in order of increasing
/// cost (ties broken by arc declaration order).
///
/// The lattice must be ground: composed against a concrete input, so that
/// every reachable arc carries a concrete output label. Class arcs cannot
/// occur in such a lattice and are treated as dead ends.
pub fn n_shortest(fst: &Fst, n: usize) -> Vec<Candidate> {
    let mut results: Vec<Candidate> = Vec::new();
    if n == 0 {
        return results;
    }

    let mut heap = BinaryHeap::new();
    let mut seq = 0u64;
    heap.push(QueueItem {
        cost: 0.0,
        seq,
        state: fst.start(),
        output: String::new(),
    });

    // Loop states are revisited once per repetition (e.g. per token of a
    // sentence), so the per-state bound must stay generous; the
    // expansion cap above is the hard stop for degenerate cycles.
    let pop_limit = n.saturating_mul(8).max(256);
    let mut pops = vec![0usize; fst.num_states()];
    let mut seen: HashSet<String> = HashSet::new();
    let mut expansions = 0usize;

    while let Some(item) = heap.pop() {
        if pops[item.state] >= pop_limit {
            continue;
        }
        pops[item.state] += 1;

        expansions += 1;
        if expansions > MAX_EXPANSIONS {
            break;
        }

        if let Some(final_weight) = fst.final_weight(item.state) {
            if seen.insert(item.output.clone()) {
                results.push(Candidate {
                    output: item.output.clone(),
                    weight: item.cost + final_weight,
                });
                if results.len() >= n {
                    break;
                }
            }
        }

        for arc in fst.arcs_from(item.state) {
            if let Arc::Pair {
                output,
                weight,
                next,
                ..
            } = arc
            {
                let mut extended = item.output.clone();
                if let Some(c) = output {
                    extended.push(*c);
                }
                seq += 1;
                heap.push(QueueItem {
                    cost: item.cost + weight,
                    seq,
                    state: *next,
                    output: extended,
                });
            }
        }
    }

    results
}

/// The single cheapest candidate, if any path accepts.
pub fn single_best(fst: &Fst) -> Option<Candidate> {
    n_shortest(fst, 1).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::compose;
    use crate::ops::{add_weight, union_all};

    #[test]
    fn test_orders_by_cost() {
        let fst = union_all([
            &add_weight(&Fst::cross("a", "worst"), 3.0),
            &add_weight(&Fst::cross("a", "best"), 1.0),
            &add_weight(&Fst::cross("a", "middle"), 2.0),
        ]);
        let lattice = compose(&Fst::accept("a"), &fst);
        let outputs: Vec<String> = n_shortest(&lattice, 3).into_iter().map(|c| c.output).collect();
        assert_eq!(outputs, vec!["best", "middle", "worst"]);
    }

    #[test]
    fn test_dedups_identical_outputs() {
        // Same transduction reachable through two unioned branches.
        let branch = Fst::cross("a", "x");
        let fst = union_all([&branch, &add_weight(&branch, 0.5)]);
        let lattice = compose(&Fst::accept("a"), &fst);
        let candidates = n_shortest(&lattice, 5);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].output, "x");
        assert_eq!(candidates[0].weight, 0.0);
    }

    #[test]
    fn test_respects_bound() {
        let fst = union_all([
            &Fst::cross("a", "one"),
            &add_weight(&Fst::cross("a", "two"), 1.0),
            &add_weight(&Fst::cross("a", "three"), 2.0),
        ]);
        let lattice = compose(&Fst::accept("a"), &fst);
        assert_eq!(n_shortest(&lattice, 2).len(), 2);
        assert!(n_shortest(&lattice, 0).is_empty());
    }

    #[test]
    fn test_tiny_negative_bias_breaks_tie() {
        let fst = union_all([
            &Fst::cross("a", "plain"),
            &add_weight(&Fst::cross("a", "preferred"), -0.0001),
        ]);
        let lattice = compose(&Fst::accept("a"), &fst);
        assert_eq!(single_best(&lattice).unwrap().output, "preferred");
    }
}
