//! The token record wire format exchanged between the tagger and
//! verbalizer stages.
//!
//! A record is a named block of quoted field assignments, optionally
//! nested, with an optional trailing order marker:
//!
//! ```text
//! date { day: "1" month: "enero" preserve_order: true }
//! tokens { time { hours: "12" minutes: "30" } }
//! ```

mod error;
mod parse;
mod record;

pub use error::ProtocolError;
pub use parse::{parse_record, parse_records};
pub use record::{FieldValue, OrderMarker, TokenRecord};
