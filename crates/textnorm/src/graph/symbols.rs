//! Process-wide immutable symbol tables and grammar-building helpers.
//!
//! Character classes, the ASCII casing map, and the tie-break weight
//! constants are built once per process and shared by every grammar;
//! they are never rebuilt per call. The helper builders here are the
//! vocabulary all field sub-grammars are written in: whitespace
//! deletion, separator insertion, order-marker deletion, space
//! protection inside quoted values, and capitalization-invariant input.

use std::sync::OnceLock;

use textnorm_fst::{
    CharClass, Fst, add_weight, closure_plus, closure_star, compose, concat, concat_all, optional,
    rewrite_char, sigma_star, union, union_all,
};

/// Smallest positive weight bias; breaks ties without changing acceptance.
pub const MIN_POS_WEIGHT: f64 = 0.0001;

/// Smallest negative weight bias; breaks ties without changing acceptance.
pub const MIN_NEG_WEIGHT: f64 = -0.0001;

/// Placeholder protecting literal spaces inside quoted field values
/// while a record moves through composition.
pub const NON_BREAKING_SPACE: char = '\u{a0}';

static WHITESPACE: OnceLock<CharClass> = OnceLock::new();
static NOT_QUOTE: OnceLock<CharClass> = OnceLock::new();
static NOT_SPACE: OnceLock<CharClass> = OnceLock::new();
static DIGIT: OnceLock<CharClass> = OnceLock::new();
static PUNCT: OnceLock<CharClass> = OnceLock::new();
static TO_LOWER: OnceLock<Fst> = OnceLock::new();

const WHITESPACE_CHARS: [char; 5] = [' ', '\t', '\n', '\r', NON_BREAKING_SPACE];

/// Whitespace characters, including the non-breaking placeholder.
pub fn whitespace() -> CharClass {
    WHITESPACE
        .get_or_init(|| CharClass::of(WHITESPACE_CHARS))
        .clone()
}

/// Any character except a double quote.
pub fn not_quote() -> CharClass {
    NOT_QUOTE
        .get_or_init(|| CharClass::excluding(['"']))
        .clone()
}

/// Any character except whitespace and the double quote (the wire format
/// cannot carry a literal quote inside a field value).
pub fn not_space() -> CharClass {
    NOT_SPACE
        .get_or_init(|| {
            let mut excluded: Vec<char> = WHITESPACE_CHARS.to_vec();
            excluded.push('"');
            CharClass::excluding(excluded)
        })
        .clone()
}

/// ASCII digits.
pub fn digit() -> CharClass {
    DIGIT.get_or_init(|| CharClass::of('0'..='9')).clone()
}

/// Common standalone punctuation.
pub fn punct() -> CharClass {
    PUNCT
        .get_or_init(|| CharClass::of(".,;:!?¿¡-()".chars()))
        .clone()
}

/// Delete any amount of whitespace (including none).
pub fn delete_space() -> Fst {
    closure_star(&Fst::drop_class(whitespace()))
}

/// Collapse one or more whitespace characters into a single space.
pub fn delete_extra_space() -> Fst {
    concat(&closure_plus(&Fst::drop_class(whitespace())), &Fst::insert(" "))
}

/// Insert a single space into the output.
pub fn insert_space() -> Fst {
    Fst::insert(" ")
}

/// One or more non-quote characters, passed through unchanged. The
/// default value graph for quoted fields.
pub fn not_quote_plus() -> Fst {
    closure_plus(&Fst::copy(not_quote()))
}

/// Delete a trailing `preserve_order: true` or `field_order: "<name>"`
/// marker (with its leading space), if present.
pub fn delete_order_marker() -> Fst {
    optional(&require_order_marker())
}

/// Delete an order marker that must be present.
pub fn require_order_marker() -> Fst {
    let preserve = Fst::delete(" preserve_order: true");
    let named = concat_all([
        &Fst::delete(" field_order: \""),
        &closure_plus(&Fst::drop_class(not_quote())),
        &Fst::delete("\""),
    ]);
    union(&preserve, &named)
}

/// Protect literal spaces in a value graph's output by rewriting them to
/// the non-breaking placeholder. Tagger-side only; `delete_tokens`
/// rewrites them back.
pub fn convert_space(fst: &Fst) -> Fst {
    compose(fst, &rewrite_char(' ', NON_BREAKING_SPACE))
}

/// Rewrite the non-breaking placeholder back to an ordinary space.
pub fn restore_space(fst: &Fst) -> Fst {
    compose(fst, &rewrite_char(NON_BREAKING_SPACE, ' '))
}

/// Single-character ASCII upper-to-lower transduction.
pub fn to_lower() -> Fst {
    TO_LOWER
        .get_or_init(|| {
            let pairs: Vec<Fst> = ('A'..='Z')
                .zip('a'..='z')
                .map(|(upper, lower)| Fst::cross(&upper.to_string(), &lower.to_string()))
                .collect();
            union_all(pairs.iter())
        })
        .clone()
}

/// Accept a capitalized first character in front of a lower-cased
/// grammar.
///
/// The returned grammar accepts everything `graph` accepts plus inputs
/// whose first character only is upper-cased, producing the same
/// transduction. The optional weights bias one branch over the other
/// when an input matches both; they never change which strings are
/// accepted.
pub fn capitalized_input(
    graph: &Fst,
    original_weight: Option<f64>,
    capitalized_weight: Option<f64>,
) -> Fst {
    let mut capitalized = compose(&concat(&to_lower(), &sigma_star()), graph);
    let base = match original_weight {
        Some(w) => add_weight(graph, w),
        None => graph.clone(),
    };
    if let Some(w) = capitalized_weight {
        capitalized = add_weight(&capitalized, w);
    }
    union(&base, &capitalized)
}
