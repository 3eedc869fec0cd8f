//! Character classes for arc labels over an open alphabet.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A set of characters, represented either by enumeration or by exclusion.
///
/// Exclusion-based classes make it possible to label an arc "any character
/// except a quote" without enumerating an alphabet. Intersection is closed
/// over both representations, which is what composition needs when two
/// class arcs meet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharClass {
    /// Exactly the listed characters.
    In(BTreeSet<char>),
    /// Every character except the listed ones.
    NotIn(BTreeSet<char>),
}

impl CharClass {
    /// The class containing every character.
    pub fn any() -> Self {
        CharClass::NotIn(BTreeSet::new())
    }

    /// The class containing exactly the given characters.
    pub fn of(chars: impl IntoIterator<Item = char>) -> Self {
        CharClass::In(chars.into_iter().collect())
    }

    /// The class containing every character except the given ones.
    pub fn excluding(chars: impl IntoIterator<Item = char>) -> Self {
        CharClass::NotIn(chars.into_iter().collect())
    }

    /// Whether `c` is a member of this class.
    pub fn contains(&self, c: char) -> bool {
        match self {
            CharClass::In(set) => set.contains(&c),
            CharClass::NotIn(set) => !set.contains(&c),
        }
    }

    /// Intersection of two classes, or `None` when the result is provably
    /// empty.
    pub fn intersect(&self, other: &CharClass) -> Option<CharClass> {
        let result = match (self, other) {
            (CharClass::In(a), CharClass::In(b)) => {
                CharClass::In(a.intersection(b).copied().collect())
            }
            (CharClass::In(a), CharClass::NotIn(b)) | (CharClass::NotIn(b), CharClass::In(a)) => {
                CharClass::In(a.iter().filter(|c| !b.contains(c)).copied().collect())
            }
            (CharClass::NotIn(a), CharClass::NotIn(b)) => {
                CharClass::NotIn(a.union(b).copied().collect())
            }
        };
        match &result {
            CharClass::In(set) if set.is_empty() => None,
            _ => Some(result),
        }
    }
}
