//! Implementation of the `textnorm tag` command.

use clap::Args;
use serde_json::{Map, Value};
use textnorm::{parse_records, FieldValue, OrderMarker, TokenRecord};

use crate::commands::LocaleArgs;

/// Arguments for the tag command.
#[derive(Debug, Args)]
pub struct TagArgs {
    #[command(flatten)]
    pub locale: LocaleArgs,

    /// Text to tag
    pub text: String,

    /// Output parsed records as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the tag command.
pub fn run_tag(args: TagArgs) -> miette::Result<i32> {
    let normalizer = args.locale.load()?;
    let tags = normalizer
        .tag(&args.text)
        .map_err(|e| miette::miette!("{}", e))?;

    let Some(best) = tags.first() else {
        eprintln!("No grammar covers the input: {}", args.text);
        return Ok(exitcode::DATAERR);
    };

    if args.json {
        let records = parse_records(&best.output)
            .map_err(|e| miette::miette!("Tagger emitted malformed records: {}", e))?;
        let json: Vec<Value> = records.iter().map(record_json).collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&json).expect("JSON serialization should not fail")
        );
    } else {
        println!("{}", best.output);
    }
    Ok(exitcode::OK)
}

/// Convert a parsed record to a JSON value.
fn record_json(record: &TokenRecord) -> Value {
    let mut fields = Map::new();
    for (name, value) in record.fields() {
        let rendered = match value {
            FieldValue::Text(_) => Value::String(record.field_text(name).unwrap_or_default()),
            FieldValue::Record(nested) => record_json(nested),
        };
        fields.insert(name.clone(), rendered);
    }
    match record.order() {
        OrderMarker::Canonical => {}
        OrderMarker::Preserve => {
            fields.insert("preserve_order".to_string(), Value::Bool(true));
        }
        OrderMarker::Named(order) => {
            fields.insert("field_order".to_string(), Value::String(order.clone()));
        }
    }
    let mut wrapper = Map::new();
    wrapper.insert(record.name().to_string(), Value::Object(fields));
    Value::Object(wrapper)
}
