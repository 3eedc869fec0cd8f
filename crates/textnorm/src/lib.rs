//! Two-stage weighted-transducer text normalization.
//!
//! Raw text runs through a tagger that rewrites recognized spans into
//! token records (`date { day: "1" month: "enero" }`), then through a
//! verbalizer that renders those records as written text. Both stages
//! are compiled weighted transducers built from per-language rule
//! tables; lower path weight means a better candidate.
//!
//! ```
//! use textnorm::{LocaleData, Normalizer};
//!
//! let mut normalizer = Normalizer::builder().language("es").build();
//! let data = LocaleData::builtin("es").unwrap();
//! normalizer.load_grammars("es", &data).unwrap();
//!
//! let written = normalizer.normalize("uno de enero").unwrap();
//! assert_eq!(written.as_deref(), Some("1 de enero"));
//! ```

pub mod data;
pub mod graph;
pub mod protocol;

pub use data::LocaleData;
pub use graph::{
    ArtifactCache, GrammarError, GrammarKind, GrammarUnit, InputCase, Label, NormalizeError,
    Normalizer, Pluralizer,
};
pub use protocol::{FieldValue, OrderMarker, ProtocolError, TokenRecord, parse_record, parse_records};
pub use textnorm_fst::Candidate;

/// Build a `Vec<Label>` from `input => output` pairs.
///
/// ```
/// use textnorm::labels;
///
/// let table = labels! {
///     "uno" => "1",
///     "dos" => "2",
/// };
/// assert_eq!(table[1].output, "2");
/// ```
#[macro_export]
macro_rules! labels {
    ($($input:expr => $output:expr),* $(,)?) => {
        vec![$($crate::Label::new($input, $output)),*]
    };
}
