//! In-memory form of a token record.

use std::fmt;

use crate::graph::symbols::NON_BREAKING_SPACE;
use crate::protocol::ProtocolError;

/// A parsed token record: a named sequence of fields with an optional
/// trailing order marker.
///
/// Field order within the record either follows the owning grammar's
/// canonical order, or is explicitly preserved/named via the marker,
/// which tagger and verbalizer honor symmetrically.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenRecord {
    name: String,
    fields: Vec<(String, FieldValue)>,
    order: OrderMarker,
}

/// A field's payload: a quoted string leaf or a nested record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Record(TokenRecord),
}

/// The optional trailing order marker of a record.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderMarker {
    /// No marker: the grammar's canonical field order applies.
    Canonical,
    /// `preserve_order: true` — render fields in the literal order given.
    Preserve,
    /// `field_order: "<name>"` — render in the named declared order.
    Named(String),
}

impl TokenRecord {
    /// Create an empty record with the given kind name.
    pub fn new(name: impl Into<String>) -> Self {
        TokenRecord {
            name: name.into(),
            fields: Vec::new(),
            order: OrderMarker::Canonical,
        }
    }

    /// Append a string-valued field. Fails if the value carries a literal
    /// quote, which the wire format cannot represent.
    pub fn with_text(
        mut self,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ProtocolError> {
        let field = field.into();
        let value = value.into();
        if value.contains('"') {
            return Err(ProtocolError::QuoteInValue { field });
        }
        self.fields.push((field, FieldValue::Text(value)));
        Ok(self)
    }

    /// Append a nested record under its own kind name.
    pub fn with_record(mut self, record: TokenRecord) -> Self {
        self.fields
            .push((record.name.clone(), FieldValue::Record(record)));
        self
    }

    /// Set the trailing order marker.
    pub fn with_order(mut self, order: OrderMarker) -> Self {
        self.order = order;
        self
    }

    /// The record's kind name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All fields in declaration order.
    pub fn fields(&self) -> &[(String, FieldValue)] {
        &self.fields
    }

    /// The trailing order marker.
    pub fn order(&self) -> &OrderMarker {
        &self.order
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// A string field's value with the internal non-breaking-space
    /// placeholder rewritten back to an ordinary space.
    pub fn field_text(&self, name: &str) -> Option<String> {
        match self.field(name)? {
            FieldValue::Text(text) => Some(text.replace(NON_BREAKING_SPACE, " ")),
            FieldValue::Record(_) => None,
        }
    }

    pub(crate) fn push_entry(&mut self, field: String, value: FieldValue) {
        self.fields.push((field, value));
    }

    pub(crate) fn set_order(&mut self, order: OrderMarker) {
        self.order = order;
    }
}

impl fmt::Display for TokenRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.name)?;
        for (field, value) in &self.fields {
            match value {
                FieldValue::Text(text) => write!(f, " {field}: \"{text}\"")?,
                FieldValue::Record(record) => write!(f, " {record}")?,
            }
        }
        match &self.order {
            OrderMarker::Canonical => {}
            OrderMarker::Preserve => write!(f, " preserve_order: true")?,
            OrderMarker::Named(name) => write!(f, " field_order: \"{name}\"")?,
        }
        write!(f, " }}")
    }
}
