//! Verbalize-side grammars: token records in, written text out.

mod date;
mod ordinal;
mod time;
mod verbalize;
mod word;

pub use date::date_verbalizer;
pub use ordinal::ordinal_verbalizer;
pub use time::time_verbalizer;
pub use verbalize::verbalize_final;
pub use word::word_verbalizer;
