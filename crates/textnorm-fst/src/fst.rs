//! Core transducer representation and elementary constructors.

use serde::{Deserialize, Serialize};

use crate::class::CharClass;

/// Index of a state within an [`Fst`].
pub type StateId = usize;

/// A single transition.
///
/// `Pair` is the ordinary labeled arc with `None` as epsilon on either
/// side. `Copy` consumes any character in its class and emits the same
/// character; `Drop` consumes any character in its class and emits
/// nothing. Class arcs keep open alphabets (e.g. "anything but a quote")
/// representable without enumerating characters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Arc {
    Pair {
        input: Option<char>,
        output: Option<char>,
        weight: f64,
        next: StateId,
    },
    Copy {
        class: CharClass,
        weight: f64,
        next: StateId,
    },
    Drop {
        class: CharClass,
        weight: f64,
        next: StateId,
    },
}

impl Arc {
    /// The accumulated cost contributed by taking this arc.
    pub fn weight(&self) -> f64 {
        match self {
            Arc::Pair { weight, .. } | Arc::Copy { weight, .. } | Arc::Drop { weight, .. } => {
                *weight
            }
        }
    }

    /// The destination state.
    pub fn next(&self) -> StateId {
        match self {
            Arc::Pair { next, .. } | Arc::Copy { next, .. } | Arc::Drop { next, .. } => *next,
        }
    }

    fn shifted(&self, offset: usize) -> Arc {
        let mut arc = self.clone();
        match &mut arc {
            Arc::Pair { next, .. } | Arc::Copy { next, .. } | Arc::Drop { next, .. } => {
                *next += offset;
            }
        }
        arc
    }
}

/// A weighted finite-state transducer.
///
/// States are dense indices; each state has an ordered arc list (order is
/// significant: it is the deterministic tie-break for equal-cost paths)
/// and an optional final weight. Weights accumulate additively along a
/// path; lower total cost is preferred.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fst {
    start: StateId,
    arcs: Vec<Vec<Arc>>,
    finals: Vec<Option<f64>>,
}

impl Fst {
    /// An empty-language transducer: one non-final state, no arcs.
    pub fn new() -> Self {
        Fst {
            start: 0,
            arcs: vec![Vec::new()],
            finals: vec![None],
        }
    }

    /// The transducer accepting exactly the empty string at cost zero.
    pub fn epsilon() -> Self {
        let mut fst = Fst::new();
        fst.set_final(0, 0.0);
        fst
    }

    /// Identity acceptor for a literal string.
    pub fn accept(s: &str) -> Self {
        Fst::cross(s, s)
    }

    /// Transducer mapping `input` to `output`, padding the shorter side
    /// with epsilons.
    pub fn cross(input: &str, output: &str) -> Self {
        let ins: Vec<char> = input.chars().collect();
        let outs: Vec<char> = output.chars().collect();
        let len = ins.len().max(outs.len());

        let mut fst = Fst::new();
        let mut state = fst.start();
        for i in 0..len {
            let next = fst.add_state();
            fst.add_arc(
                state,
                Arc::Pair {
                    input: ins.get(i).copied(),
                    output: outs.get(i).copied(),
                    weight: 0.0,
                    next,
                },
            );
            state = next;
        }
        fst.set_final(state, 0.0);
        fst
    }

    /// Transducer inserting `s` into the output while consuming nothing.
    pub fn insert(s: &str) -> Self {
        Fst::cross("", s)
    }

    /// Transducer consuming `s` while emitting nothing.
    pub fn delete(s: &str) -> Self {
        Fst::cross(s, "")
    }

    /// Single-character identity transducer over a class.
    pub fn copy(class: CharClass) -> Self {
        let mut fst = Fst::new();
        let next = fst.add_state();
        fst.add_arc(
            0,
            Arc::Copy {
                class,
                weight: 0.0,
                next,
            },
        );
        fst.set_final(next, 0.0);
        fst
    }

    /// Single-character deletion transducer over a class.
    pub fn drop_class(class: CharClass) -> Self {
        let mut fst = Fst::new();
        let next = fst.add_state();
        fst.add_arc(
            0,
            Arc::Drop {
                class,
                weight: 0.0,
                next,
            },
        );
        fst.set_final(next, 0.0);
        fst
    }

    /// The start state.
    pub fn start(&self) -> StateId {
        self.start
    }

    /// Move the start state.
    pub fn set_start(&mut self, state: StateId) {
        self.start = state;
    }

    /// Number of states.
    pub fn num_states(&self) -> usize {
        self.arcs.len()
    }

    /// Append a fresh state and return its id.
    pub fn add_state(&mut self) -> StateId {
        self.arcs.push(Vec::new());
        self.finals.push(None);
        self.arcs.len() - 1
    }

    /// Append an arc to a state's (ordered) arc list.
    pub fn add_arc(&mut self, from: StateId, arc: Arc) {
        self.arcs[from].push(arc);
    }

    /// Arcs leaving `state`, in declaration order.
    pub fn arcs_from(&self, state: StateId) -> &[Arc] {
        &self.arcs[state]
    }

    /// Final weight of `state`, if it is accepting.
    pub fn final_weight(&self, state: StateId) -> Option<f64> {
        self.finals[state]
    }

    /// Mark `state` accepting with the given exit cost.
    pub fn set_final(&mut self, state: StateId, weight: f64) {
        self.finals[state] = Some(weight);
    }

    /// Remove the accepting mark from `state`.
    pub fn clear_final(&mut self, state: StateId) {
        self.finals[state] = None;
    }

    /// All accepting states with their exit costs.
    pub fn final_states(&self) -> impl Iterator<Item = (StateId, f64)> + '_ {
        self.finals
            .iter()
            .enumerate()
            .filter_map(|(state, weight)| weight.map(|w| (state, w)))
    }

    /// Replace a state's entire arc list.
    pub(crate) fn replace_arcs(&mut self, state: StateId, arcs: Vec<Arc>) {
        self.arcs[state] = arcs;
    }

    /// Copy every state and arc of `other` into `self`, returning the
    /// state-id offset. Finality and start of `other` are preserved under
    /// the offset; the caller wires them up.
    pub(crate) fn import(&mut self, other: &Fst) -> usize {
        let offset = self.arcs.len();
        for state in 0..other.num_states() {
            self.arcs
                .push(other.arcs[state].iter().map(|a| a.shifted(offset)).collect());
            self.finals.push(other.finals[state]);
        }
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::single_best;

    #[test]
    fn test_accept_identity() {
        let fst = Fst::accept("abc");
        let best = single_best(&fst).unwrap();
        assert_eq!(best.output, "abc");
        assert_eq!(best.weight, 0.0);
    }

    #[test]
    fn test_cross_uneven_lengths() {
        let fst = Fst::cross("hi", "hello");
        assert_eq!(single_best(&fst).unwrap().output, "hello");

        let fst = Fst::cross("hello", "hi");
        assert_eq!(single_best(&fst).unwrap().output, "hi");
    }

    #[test]
    fn test_insert_and_delete() {
        assert_eq!(single_best(&Fst::insert("x")).unwrap().output, "x");
        assert_eq!(single_best(&Fst::delete("x")).unwrap().output, "");
    }

    #[test]
    fn test_empty_language() {
        assert!(single_best(&Fst::new()).is_none());
    }
}
