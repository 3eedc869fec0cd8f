//! Grammar construction and the normalization pipeline.

pub mod cache;
pub mod error;
pub mod fields;
pub mod labels;
mod normalizer;
pub mod plural;
pub(crate) mod search;
pub mod symbols;
pub mod taggers;
pub mod unit;
pub mod verbalizers;

pub use cache::ArtifactCache;
pub use error::{GrammarError, NormalizeError};
pub use labels::{InputCase, Label};
pub use normalizer::Normalizer;
pub use plural::Pluralizer;
pub use unit::{GrammarKind, GrammarUnit};
