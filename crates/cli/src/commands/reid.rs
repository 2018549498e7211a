use std::path::Path;
use std::process;

use crate::input::load_records;
use crate::kind::ModelKind;
use crate::{report_error, OutputFormat};

pub(crate) fn cmd_reid(kind: ModelKind, id: &str, path: &Path, output: OutputFormat, quiet: bool) {
    let records = match load_records(path) {
        Ok(r) => r,
        Err(msg) => {
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    let record = match records.values.as_slice() {
        [single] if !records.batch => single,
        _ => {
            report_error("reid expects a single record, not an array", output, quiet);
            process::exit(1);
        }
    };

    match kind.reissue(id, record) {
        Ok(value) => {
            tracing::info!(kind = kind.name(), id, "re-issued record");
            if quiet {
                return;
            }
            // The record itself is JSON, so both formats print it.
            match output {
                OutputFormat::Text => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&value).unwrap_or_default()
                    );
                }
                OutputFormat::Json => println!("{}", value),
            }
        }
        Err(e) => {
            report_error(&e.to_string(), output, quiet);
            process::exit(1);
        }
    }
}
