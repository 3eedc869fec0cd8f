//! Rational operations over transducers.
//!
//! All combinators are non-destructive: they copy their operands into a
//! fresh machine. Arc order is preserved everywhere, because declaration
//! order is the deterministic tie-break for equal-cost paths.

use crate::class::CharClass;
use crate::fst::{Arc, Fst};

/// Union of two transducers. Paths of `a` sort before paths of `b` on
/// cost ties because `a`'s entry arc is declared first.
pub fn union(a: &Fst, b: &Fst) -> Fst {
    let mut out = Fst::new();
    let off_a = out.import(a);
    let off_b = out.import(b);
    out.add_arc(0, eps_arc(off_a + a.start(), 0.0));
    out.add_arc(0, eps_arc(off_b + b.start(), 0.0));
    out
}

/// Union of any number of transducers, preserving declaration order.
pub fn union_all<'a>(fsts: impl IntoIterator<Item = &'a Fst>) -> Fst {
    let mut out = Fst::new();
    for fst in fsts {
        let off = out.import(fst);
        out.add_arc(0, eps_arc(off + fst.start(), 0.0));
    }
    out
}

/// Concatenation: every accepting state of `a` is wired to the start of
/// `b`, carrying its exit cost onto the connecting arc.
pub fn concat(a: &Fst, b: &Fst) -> Fst {
    let mut out = a.clone();
    let off_b = out.import(b);
    let finals: Vec<(usize, f64)> = out
        .final_states()
        .filter(|(state, _)| *state < off_b)
        .collect();
    for (state, weight) in finals {
        out.clear_final(state);
        out.add_arc(state, eps_arc(off_b + b.start(), weight));
    }
    out
}

/// Concatenation of a sequence of transducers.
pub fn concat_all<'a>(fsts: impl IntoIterator<Item = &'a Fst>) -> Fst {
    let mut iter = fsts.into_iter();
    let Some(first) = iter.next() else {
        return Fst::epsilon();
    };
    iter.fold(first.clone(), |acc, fst| concat(&acc, fst))
}

/// Kleene star: zero or more repetitions.
pub fn closure_star(a: &Fst) -> Fst {
    let mut out = Fst::new();
    let off = out.import(a);
    out.set_final(0, 0.0);
    out.add_arc(0, eps_arc(off + a.start(), 0.0));
    let finals: Vec<(usize, f64)> = out.final_states().filter(|(state, _)| *state != 0).collect();
    for (state, weight) in finals {
        out.clear_final(state);
        out.add_arc(state, eps_arc(0, weight));
    }
    out
}

/// One or more repetitions.
pub fn closure_plus(a: &Fst) -> Fst {
    concat(a, &closure_star(a))
}

/// Zero or one occurrence.
pub fn optional(a: &Fst) -> Fst {
    union(a, &Fst::epsilon())
}

/// Swap input and output labels. Class arcs are self-inverse.
pub fn invert(a: &Fst) -> Fst {
    let mut out = a.clone();
    for state in 0..out.num_states() {
        let inverted: Vec<Arc> = out
            .arcs_from(state)
            .iter()
            .map(|arc| match arc {
                Arc::Pair {
                    input,
                    output,
                    weight,
                    next,
                } => Arc::Pair {
                    input: *output,
                    output: *input,
                    weight: *weight,
                    next: *next,
                },
                other => other.clone(),
            })
            .collect();
        out.replace_arcs(state, inverted);
    }
    out
}

/// Add a flat cost on entry to the machine. Used for the small tie-break
/// biases; never changes which strings are accepted.
pub fn add_weight(a: &Fst, weight: f64) -> Fst {
    let mut out = Fst::new();
    let off = out.import(a);
    out.add_arc(0, eps_arc(off + a.start(), weight));
    out
}

/// Obligatory global rewrite of one character to another: every
/// occurrence of `from` anywhere in the string becomes `to`, all other
/// characters pass through.
pub fn rewrite_char(from: char, to: char) -> Fst {
    let swap = Fst::cross(&from.to_string(), &to.to_string());
    let keep = Fst::copy(CharClass::excluding([from]));
    closure_star(&union(&swap, &keep))
}

/// Identity over any string.
pub fn sigma_star() -> Fst {
    closure_star(&Fst::copy(CharClass::any()))
}

impl Fst {
    /// Chaining form of [`concat`], for readable grammar definitions.
    pub fn then(&self, other: &Fst) -> Fst {
        concat(self, other)
    }

    /// Chaining form of [`union`].
    pub fn or(&self, other: &Fst) -> Fst {
        union(self, other)
    }
}

fn eps_arc(next: usize, weight: f64) -> Arc {
    Arc::Pair {
        input: None,
        output: None,
        weight,
        next,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::compose;
    use crate::search::{n_shortest, single_best};

    fn outputs_for(input: &str, fst: &Fst, n: usize) -> Vec<String> {
        n_shortest(&compose(&Fst::accept(input), fst), n)
            .into_iter()
            .map(|c| c.output)
            .collect()
    }

    #[test]
    fn test_union_prefers_declaration_order_on_ties() {
        let fst = union(&Fst::cross("a", "x"), &Fst::cross("a", "y"));
        assert_eq!(outputs_for("a", &fst, 2), vec!["x", "y"]);
    }

    #[test]
    fn test_union_prefers_lower_cost() {
        let fst = union(
            &add_weight(&Fst::cross("a", "x"), 2.0),
            &add_weight(&Fst::cross("a", "y"), 1.0),
        );
        assert_eq!(outputs_for("a", &fst, 2), vec!["y", "x"]);
    }

    #[test]
    fn test_concat() {
        let fst = concat(&Fst::accept("ab"), &Fst::insert("!"));
        assert_eq!(single_best(&fst).unwrap().output, "ab!");
    }

    #[test]
    fn test_closure_star_accepts_repeats() {
        let fst = closure_star(&Fst::cross("a", "b"));
        assert_eq!(outputs_for("", &fst, 1), vec![""]);
        assert_eq!(outputs_for("aaa", &fst, 1), vec!["bbb"]);
    }

    #[test]
    fn test_closure_plus_rejects_empty() {
        let fst = closure_plus(&Fst::cross("a", "b"));
        assert!(outputs_for("", &fst, 1).is_empty());
        assert_eq!(outputs_for("aa", &fst, 1), vec!["bb"]);
    }

    #[test]
    fn test_invert_round_trip() {
        let fst = Fst::cross("cat", "gato");
        let back = invert(&fst);
        assert_eq!(outputs_for("cat", &fst, 1), vec!["gato"]);
        assert_eq!(outputs_for("gato", &back, 1), vec!["cat"]);
    }

    #[test]
    fn test_rewrite_char_everywhere() {
        let fst = rewrite_char('a', '_');
        assert_eq!(outputs_for("banana", &fst, 1), vec!["b_n_n_"]);
        assert_eq!(outputs_for("xyz", &fst, 1), vec!["xyz"]);
    }

    #[test]
    fn test_add_weight_accumulates() {
        let fst = add_weight(&add_weight(&Fst::accept("a"), 1.5), 2.0);
        assert_eq!(single_best(&fst).unwrap().weight, 3.5);
    }
}
