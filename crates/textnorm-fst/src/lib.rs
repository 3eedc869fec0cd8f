//! A small weighted finite-state transducer library.
//!
//! Transducers map input strings to output strings; each accepting path
//! carries an additively accumulated cost, and lower cost is preferred.
//! Labels are `char`s, with epsilon represented as `None` and identity
//! character-class arcs for open alphabets (e.g. "any character except a
//! quote"). The crate provides the algebra the normalization grammars are
//! built from: union, concatenation, closure, composition, inversion,
//! global single-character rewrites, and n-shortest candidate search.

pub mod class;
pub mod compose;
pub mod fst;
pub mod ops;
pub mod search;

pub use class::CharClass;
pub use compose::compose;
pub use fst::{Arc, Fst, StateId};
pub use ops::{
    add_weight, closure_plus, closure_star, concat, concat_all, invert, optional, rewrite_char,
    sigma_star, union, union_all,
};
pub use search::{Candidate, n_shortest, single_best};
