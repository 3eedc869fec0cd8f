//! Classify-side grammars: raw text in, token records out.
//!
//! Each tagger builds a [`crate::graph::GrammarUnit`] from a locale's
//! rule tables. `tokenize` unions them into the single classifier the
//! normalizer runs over whole sentences.

mod date;
mod ordinal;
mod punctuation;
mod time;
mod tokenize;
mod whitelist;
mod word;

pub use date::date_tagger;
pub use ordinal::ordinal_tagger;
pub use punctuation::punctuation_tagger;
pub use time::time_tagger;
pub use tokenize::tokenize_and_classify;
pub use whitelist::whitelist_tagger;
pub use word::word_tagger;
