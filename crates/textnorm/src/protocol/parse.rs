//! Token record parser using winnow.
//!
//! Parses the bracketed wire format produced by the tagger stage:
//! identifiers, quoted string fields, nested records, and the optional
//! trailing `preserve_order` / `field_order` markers.

use winnow::combinator::{alt, delimited, preceded, repeat};
use winnow::prelude::*;
use winnow::token::take_while;

use super::error::ProtocolError;
use super::record::{FieldValue, OrderMarker, TokenRecord};

/// Parse a single token record, allowing surrounding whitespace.
pub fn parse_record(input: &str) -> Result<TokenRecord, ProtocolError> {
    let mut remaining = input;
    match preceded(ws, record).parse_next(&mut remaining) {
        Ok(rec) => {
            let _ = ws(&mut remaining);
            if remaining.is_empty() {
                Ok(rec)
            } else {
                Err(syntax_error(input, remaining, "unexpected trailing text"))
            }
        }
        Err(e) => Err(syntax_error(input, remaining, &format!("parse error: {e}"))),
    }
}

/// Parse a whole-sentence sequence of records (e.g. repeated
/// `tokens { ... }` blocks).
pub fn parse_records(input: &str) -> Result<Vec<TokenRecord>, ProtocolError> {
    let mut remaining = input;
    let parsed: Result<Vec<TokenRecord>, _> =
        repeat(1.., preceded(ws, record)).parse_next(&mut remaining);
    match parsed {
        Ok(records) => {
            let _ = ws(&mut remaining);
            if remaining.is_empty() {
                Ok(records)
            } else {
                Err(syntax_error(input, remaining, "unexpected trailing text"))
            }
        }
        Err(e) => Err(syntax_error(input, remaining, &format!("parse error: {e}"))),
    }
}

/// Calculate line and column from original input and remaining input.
fn syntax_error(original: &str, remaining: &str, message: &str) -> ProtocolError {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let column = match consumed_str.rfind('\n') {
        Some(pos) => consumed - pos,
        None => consumed + 1,
    };
    ProtocolError::Syntax {
        line,
        column,
        message: message.to_string(),
    }
}

/// One entry inside a record body.
#[derive(Clone)]
enum Entry {
    Text(String, String),
    Record(TokenRecord),
    Preserve,
    Named(String),
}

/// Parse `name { entry* }`.
fn record(input: &mut &str) -> ModalResult<TokenRecord> {
    let name = identifier.parse_next(input)?;
    let _ = (ws, '{').parse_next(input)?;
    let entries: Vec<Entry> = repeat(0.., preceded(ws, entry)).parse_next(input)?;
    let _ = (ws, '}').parse_next(input)?;

    let mut rec = TokenRecord::new(name);
    for item in entries {
        match item {
            Entry::Text(field, value) => rec.push_entry(field, FieldValue::Text(value)),
            Entry::Record(nested) => {
                let field = nested.name().to_string();
                rec.push_entry(field, FieldValue::Record(nested));
            }
            Entry::Preserve => rec.set_order(OrderMarker::Preserve),
            Entry::Named(order) => rec.set_order(OrderMarker::Named(order)),
        }
    }
    Ok(rec)
}

/// Parse one record entry: order markers first (they look like fields),
/// then nested records, then plain quoted fields.
fn entry(input: &mut &str) -> ModalResult<Entry> {
    alt((preserve_marker, field_order_marker, nested_record, text_field)).parse_next(input)
}

fn preserve_marker(input: &mut &str) -> ModalResult<Entry> {
    ("preserve_order", ws, ':', ws, "true")
        .value(Entry::Preserve)
        .parse_next(input)
}

fn field_order_marker(input: &mut &str) -> ModalResult<Entry> {
    preceded(("field_order", ws, ':', ws), quoted_string)
        .map(Entry::Named)
        .parse_next(input)
}

fn nested_record(input: &mut &str) -> ModalResult<Entry> {
    record.map(Entry::Record).parse_next(input)
}

fn text_field(input: &mut &str) -> ModalResult<Entry> {
    (identifier, ws, ':', ws, quoted_string)
        .map(|(name, (), _, (), value)| Entry::Text(name.to_string(), value))
        .parse_next(input)
}

/// Parse a quoted string value; anything but a quote may appear inside.
fn quoted_string(input: &mut &str) -> ModalResult<String> {
    delimited('"', take_while(0.., |c: char| c != '"'), '"')
        .map(String::from)
        .parse_next(input)
}

/// Parse an identifier.
fn identifier<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_').parse_next(input)
}

/// Parse optional whitespace.
fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}
