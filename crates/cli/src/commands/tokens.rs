use std::path::Path;
use std::process;

use vice_bank_models::Decimal;

use crate::input::load_records;
use crate::kind::{ModelKind, TokenFlow};
use crate::{report_error, OutputFormat};

pub(crate) fn cmd_tokens(kind: ModelKind, path: &Path, output: OutputFormat, quiet: bool) {
    let records = match load_records(path) {
        Ok(r) => r,
        Err(msg) => {
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    let mut flows = Vec::with_capacity(records.values.len());
    for (index, value) in records.values.iter().enumerate() {
        match kind.token_flow(value) {
            Ok(Some(flow)) => flows.push(flow),
            Ok(None) => {
                let msg = format!("{} records carry no token amount", kind.name());
                report_error(&msg, output, quiet);
                process::exit(1);
            }
            Err(e) => {
                let msg = if records.batch {
                    format!("record {}: {}", index, e)
                } else {
                    e.to_string()
                };
                report_error(&msg, output, quiet);
                process::exit(1);
            }
        }
    }

    // Net effect on a balance: deposits add, purchases subtract.
    let net = flows.iter().fold(Decimal::ZERO, |acc, flow| match flow {
        TokenFlow::Earned(n) => acc.saturating_add(*n),
        TokenFlow::Spent(n) => acc.saturating_sub(*n),
    });
    tracing::debug!(kind = kind.name(), records = flows.len(), %net, "computed token flow");

    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => {
            for flow in &flows {
                match flow {
                    TokenFlow::Earned(n) => println!("earned {}", n.normalize()),
                    TokenFlow::Spent(n) => println!("spent {}", n.normalize()),
                }
            }
        }
        OutputFormat::Json => {
            let entries: Vec<serde_json::Value> = flows
                .iter()
                .map(|flow| match flow {
                    TokenFlow::Earned(n) => serde_json::json!({"earned": n.normalize().to_string()}),
                    TokenFlow::Spent(n) => serde_json::json!({"spent": n.normalize().to_string()}),
                })
                .collect();
            let json = serde_json::json!({
                "kind": kind.name(),
                "tokens": entries,
                "net": net.normalize().to_string()
            });
            println!("{}", json);
        }
    }
}
