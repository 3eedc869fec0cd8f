//! Transducer composition.

use std::collections::HashMap;
use std::collections::VecDeque;

use crate::fst::{Arc, Fst, StateId};

/// Compose two transducers: the result maps `x` to `z` whenever `a` maps
/// `x` to some `y` and `b` maps `y` to `z`, with costs added.
///
/// Epsilon moves on `a`'s output and `b`'s input are taken independently,
/// which can duplicate a path when both machines make epsilon moves at
/// the same point; [`crate::search::n_shortest`] deduplicates candidates
/// by output string, keeping the cheapest.
pub fn compose(a: &Fst, b: &Fst) -> Fst {
    let mut out = Fst::new();
    let mut states: HashMap<(StateId, StateId), StateId> = HashMap::new();
    let mut queue: VecDeque<(StateId, StateId)> = VecDeque::new();

    let start = (a.start(), b.start());
    states.insert(start, out.start());
    queue.push_back(start);

    while let Some((s1, s2)) = queue.pop_front() {
        let id = states[&(s1, s2)];

        if let (Some(w1), Some(w2)) = (a.final_weight(s1), b.final_weight(s2)) {
            out.set_final(id, w1 + w2);
        }

        // Epsilon-output moves of `a` advance `a` alone.
        for arc1 in a.arcs_from(s1) {
            match arc1 {
                Arc::Pair {
                    input,
                    output: None,
                    weight,
                    next,
                } => {
                    let dest = state_for((*next, s2), &mut out, &mut states, &mut queue);
                    out.add_arc(
                        id,
                        Arc::Pair {
                            input: *input,
                            output: None,
                            weight: *weight,
                            next: dest,
                        },
                    );
                }
                Arc::Drop {
                    class,
                    weight,
                    next,
                } => {
                    let dest = state_for((*next, s2), &mut out, &mut states, &mut queue);
                    out.add_arc(
                        id,
                        Arc::Drop {
                            class: class.clone(),
                            weight: *weight,
                            next: dest,
                        },
                    );
                }
                _ => {}
            }
        }

        // Epsilon-input moves of `b` advance `b` alone.
        for arc2 in b.arcs_from(s2) {
            if let Arc::Pair {
                input: None,
                output,
                weight,
                next,
            } = arc2
            {
                let dest = state_for((s1, *next), &mut out, &mut states, &mut queue);
                out.add_arc(
                    id,
                    Arc::Pair {
                        input: None,
                        output: *output,
                        weight: *weight,
                        next: dest,
                    },
                );
            }
        }

        // Matched moves: `a` emits a character that `b` consumes.
        for arc1 in a.arcs_from(s1) {
            for arc2 in b.arcs_from(s2) {
                if let Some(arc) = match_arcs(arc1, arc2) {
                    let dest = state_for(
                        (arc1.next(), arc2.next()),
                        &mut out,
                        &mut states,
                        &mut queue,
                    );
                    out.add_arc(id, arc.with_next(dest));
                }
            }
        }
    }

    out
}

/// Pair up a producing arc of `a` with a consuming arc of `b`. Returns
/// the combined arc with a placeholder destination.
fn match_arcs(arc1: &Arc, arc2: &Arc) -> Option<Arc> {
    let combined_weight = arc1.weight() + arc2.weight();
    match (arc1, arc2) {
        (
            Arc::Pair {
                input,
                output: Some(c),
                ..
            },
            Arc::Pair {
                input: Some(c2),
                output,
                ..
            },
        ) if c == c2 => Some(Arc::Pair {
            input: *input,
            output: *output,
            weight: combined_weight,
            next: 0,
        }),
        (
            Arc::Pair {
                input,
                output: Some(c),
                ..
            },
            Arc::Copy { class, .. },
        ) if class.contains(*c) => Some(Arc::Pair {
            input: *input,
            output: Some(*c),
            weight: combined_weight,
            next: 0,
        }),
        (
            Arc::Pair {
                input,
                output: Some(c),
                ..
            },
            Arc::Drop { class, .. },
        ) if class.contains(*c) => Some(Arc::Pair {
            input: *input,
            output: None,
            weight: combined_weight,
            next: 0,
        }),
        (
            Arc::Copy { class, .. },
            Arc::Pair {
                input: Some(c),
                output,
                ..
            },
        ) if class.contains(*c) => Some(Arc::Pair {
            input: Some(*c),
            output: *output,
            weight: combined_weight,
            next: 0,
        }),
        (Arc::Copy { class: c1, .. }, Arc::Copy { class: c2, .. }) => {
            c1.intersect(c2).map(|class| Arc::Copy {
                class,
                weight: combined_weight,
                next: 0,
            })
        }
        (Arc::Copy { class: c1, .. }, Arc::Drop { class: c2, .. }) => {
            c1.intersect(c2).map(|class| Arc::Drop {
                class,
                weight: combined_weight,
                next: 0,
            })
        }
        _ => None,
    }
}

impl Arc {
    fn with_next(mut self, dest: StateId) -> Arc {
        match &mut self {
            Arc::Pair { next, .. } | Arc::Copy { next, .. } | Arc::Drop { next, .. } => {
                *next = dest;
            }
        }
        self
    }
}

fn state_for(
    pair: (StateId, StateId),
    out: &mut Fst,
    states: &mut HashMap<(StateId, StateId), StateId>,
    queue: &mut VecDeque<(StateId, StateId)>,
) -> StateId {
    if let Some(id) = states.get(&pair) {
        return *id;
    }
    let id = out.add_state();
    states.insert(pair, id);
    queue.push_back(pair);
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::CharClass;
    use crate::ops::{add_weight, closure_plus, concat, sigma_star, union};
    use crate::search::{n_shortest, single_best};

    #[test]
    fn test_compose_chains_transductions() {
        let a = Fst::cross("x", "y");
        let b = Fst::cross("y", "z");
        let composed = compose(&a, &b);
        let best = single_best(&compose(&Fst::accept("x"), &composed)).unwrap();
        assert_eq!(best.output, "z");
    }

    #[test]
    fn test_compose_with_class_arc() {
        let grammar = closure_plus(&Fst::copy(CharClass::excluding(['"'])));
        let composed = compose(&Fst::accept("abc"), &grammar);
        assert_eq!(single_best(&composed).unwrap().output, "abc");

        let rejected = compose(&Fst::accept("a\"c"), &grammar);
        assert!(single_best(&rejected).is_none());
    }

    #[test]
    fn test_compose_drop_arc() {
        let grammar = concat(
            &Fst::accept("a"),
            &closure_plus(&Fst::drop_class(CharClass::any())),
        );
        let composed = compose(&Fst::accept("axyz"), &grammar);
        assert_eq!(single_best(&composed).unwrap().output, "a");
    }

    #[test]
    fn test_compose_weights_add() {
        let a = add_weight(&Fst::cross("x", "y"), 1.0);
        let b = add_weight(&Fst::cross("y", "z"), 2.5);
        let best = single_best(&compose(&Fst::accept("x"), &compose(&a, &b))).unwrap();
        assert_eq!(best.weight, 3.5);
    }

    #[test]
    fn test_compose_case_fold_front() {
        // Lowering the first character in front of a lower-cased grammar,
        // the pattern behind capitalization-invariant grammars.
        let lower_first = concat(&Fst::cross("H", "h"), &sigma_star());
        let grammar = Fst::cross("hola", "greeting");
        let variant = compose(&lower_first, &grammar);
        let both = union(&grammar, &variant);

        let cased = single_best(&compose(&Fst::accept("Hola"), &both)).unwrap();
        assert_eq!(cased.output, "greeting");
        let plain = single_best(&compose(&Fst::accept("hola"), &both)).unwrap();
        assert_eq!(plain.output, "greeting");
    }

    #[test]
    fn test_compose_no_match_is_empty() {
        let composed = compose(&Fst::accept("zzz"), &Fst::cross("abc", "def"));
        assert!(n_shortest(&composed, 5).is_empty());
    }
}
