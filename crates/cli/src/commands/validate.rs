use std::path::Path;
use std::process;

use crate::input::load_records;
use crate::kind::ModelKind;
use crate::{report_error, OutputFormat};

/// Failing fields for one record in a file.
struct Rejection {
    index: usize,
    fields: Vec<String>,
}

pub(crate) fn cmd_validate(kind: ModelKind, path: &Path, output: OutputFormat, quiet: bool) {
    let records = match load_records(path) {
        Ok(r) => r,
        Err(msg) => {
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    let rejections: Vec<Rejection> = records
        .values
        .iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let fields = kind.json_test(value);
            (!fields.is_empty()).then_some(Rejection { index, fields })
        })
        .collect();

    tracing::info!(
        kind = kind.name(),
        records = records.values.len(),
        rejected = rejections.len(),
        "validated records"
    );

    if rejections.is_empty() {
        if !quiet {
            match output {
                OutputFormat::Text => println!("valid"),
                OutputFormat::Json => {
                    let json = serde_json::json!({
                        "valid": true,
                        "kind": kind.name(),
                        "records": records.values.len()
                    });
                    println!("{}", json);
                }
            }
        }
        return;
    }

    if !quiet {
        match output {
            OutputFormat::Text => {
                eprintln!("invalid {}", kind.name());
                for r in &rejections {
                    if records.batch {
                        eprintln!("  - record {}: {}", r.index, r.fields.join(", "));
                    } else {
                        eprintln!("  - {}", r.fields.join(", "));
                    }
                }
            }
            OutputFormat::Json => {
                let errors: Vec<serde_json::Value> = rejections
                    .iter()
                    .map(|r| serde_json::json!({"index": r.index, "fields": r.fields}))
                    .collect();
                let json = serde_json::json!({
                    "valid": false,
                    "kind": kind.name(),
                    "errors": errors
                });
                eprintln!(
                    "{}",
                    serde_json::to_string_pretty(&json).unwrap_or_default()
                );
            }
        }
    }
    process::exit(1);
}
