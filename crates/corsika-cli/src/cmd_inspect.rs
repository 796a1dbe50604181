/// Implementation of `corsika inspect`.
///
/// Reads one sub-block from a file, decodes it and prints every record
/// field by field. Array fields print as lists; units follow the value.
///
/// # Output format
///
/// ```text
/// Sub-block: event_header (unthinned), 273 words, 1 record
/// Record 0:
///   event_header          EVTH
///   event_number          1
///   particle_id           14
///   total_energy          100000 GeV
///   ...
/// ```
///
/// With `--json` the same data is printed as one JSON document.
use std::fs;

use anyhow::{Context, Result, bail};
use corsika_decoder::{DecoderConfig, Record, Records, SubBlockDecoder};
use corsika_types::{RecordKind, Value};
use serde::Serialize;

use crate::InspectArgs;

#[derive(Serialize)]
struct InspectReport {
    kind: &'static str,
    thinned: bool,
    words: usize,
    records: Vec<RecordReport>,
}

#[derive(Serialize)]
struct RecordReport {
    index: usize,
    fields: Vec<FieldReport>,
}

#[derive(Serialize)]
struct FieldReport {
    name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<&'static str>,
    values: Vec<serde_json::Value>,
}

/// Run the `corsika inspect` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the kind cannot be
/// detected, or decoding fails (unsupported version, wrong size, etc.).
pub fn run(args: &InspectArgs) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    let (kind, thinned) = match &args.kind {
        Some(name) => (name.parse::<RecordKind>()?, args.thin),
        None => SubBlockDecoder::detect(&bytes).with_context(|| {
            format!(
                "{} has no RUNH/RUNE/EVTH/EVTE marker of sub-block length; pass --kind",
                args.file.display()
            )
        })?,
    };
    if kind == RecordKind::EventEnd && args.format_version.is_none() {
        bail!("event_end records carry no version; pass --version");
    }

    let defaults = DecoderConfig::default();
    let config = DecoderConfig {
        runh_version_position: args
            .runh_version_word
            .unwrap_or(defaults.runh_version_position),
        evth_version_position: args
            .evth_version_word
            .unwrap_or(defaults.evth_version_position),
    };
    let records = SubBlockDecoder::new(config)
        .parse(kind, &bytes, thinned, args.format_version)
        .with_context(|| format!("failed to decode {} as {kind}", args.file.display()))?;

    let selected: Vec<(usize, Record<'_>)> = match args.record {
        Some(index) => {
            let record = records.get(index).with_context(|| {
                format!("record {index} out of range ({} records)", records.len())
            })?;
            vec![(index, record)]
        }
        None => records.iter().enumerate().collect(),
    };

    if args.json {
        let report = InspectReport {
            kind: kind.name(),
            thinned,
            words: records.layout().words(),
            records: selected
                .iter()
                .map(|(index, record)| record_report(*index, record))
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(kind, thinned, &records, &selected);
    }
    Ok(())
}

fn print_text(
    kind: RecordKind,
    thinned: bool,
    records: &Records<'_>,
    selected: &[(usize, Record<'_>)],
) {
    println!(
        "Sub-block: {kind} ({}), {} words, {} record{}",
        if thinned { "thinned" } else { "unthinned" },
        records.layout().words(),
        records.len(),
        if records.len() == 1 { "" } else { "s" }
    );

    let width = records
        .layout()
        .fields()
        .iter()
        .map(|f| f.field.name.len())
        .max()
        .unwrap_or(0);

    for (index, record) in selected {
        println!("Record {index}:");
        for field in records.layout().fields() {
            let values = record.field_values(field);
            let text = match values.as_slice() {
                [single] => single.to_string(),
                many => format!(
                    "[{}]",
                    many.iter().map(Value::to_string).collect::<Vec<_>>().join(", ")
                ),
            };
            match field.field.unit {
                Some(unit) => println!("  {:<width$}  {text} {unit}", field.field.name),
                None => println!("  {:<width$}  {text}", field.field.name),
            }
        }
    }
}

fn record_report(index: usize, record: &Record<'_>) -> RecordReport {
    RecordReport {
        index,
        fields: record
            .layout()
            .fields()
            .iter()
            .map(|field| FieldReport {
                name: field.field.name,
                unit: field.field.unit,
                values: record.field_values(field).into_iter().map(json_value).collect(),
            })
            .collect(),
    }
}

/// Non-finite floats have no JSON form and become `null`.
fn json_value(value: Value) -> serde_json::Value {
    match value {
        Value::F32(v) => serde_json::Number::from_f64(f64::from(v))
            .map_or(serde_json::Value::Null, serde_json::Value::Number),
        Value::I32(v) => serde_json::Value::from(v),
        Value::Tag(_) => serde_json::Value::String(value.to_string()),
    }
}
