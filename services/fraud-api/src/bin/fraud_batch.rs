//! File-based batch runner: reads a transaction file (single record or
//! array), scores every record, prints the results and optionally writes
//! the full report to an output file.

use anyhow::{bail, Context, Result};
use fraud_engine::{EngineConfig, TransactionProcessor, TransactionRecord};
use std::{env, fs, process};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: fraud-batch <input.json> [output.json]");
        process::exit(1);
    }

    let input_path = &args[1];
    let raw = fs::read_to_string(input_path)
        .with_context(|| format!("failed to read {}", input_path))?;
    let value: serde_json::Value =
        serde_json::from_str(&raw).with_context(|| format!("invalid JSON in {}", input_path))?;

    // Accept both a single transaction object and an array of transactions
    let records: Vec<TransactionRecord> = match value {
        serde_json::Value::Array(_) => {
            serde_json::from_value(value).context("malformed transaction array")?
        }
        object @ serde_json::Value::Object(_) => {
            vec![serde_json::from_value(object).context("malformed transaction record")?]
        }
        _ => bail!("expected a transaction object or an array of transactions"),
    };

    let processor = TransactionProcessor::new(EngineConfig::default());
    let report = processor.process_batch(records);

    for result in &report.results {
        println!("{}", serde_json::to_string_pretty(result)?);
        println!("\n{}\n", "=".repeat(80));
    }

    for rejected in &report.rejected {
        eprintln!(
            "Record {} rejected ({}): {}",
            rejected.index,
            rejected.transaction_id.as_deref().unwrap_or("no id"),
            rejected.error
        );
    }

    if let Some(output_path) = args.get(2) {
        fs::write(output_path, serde_json::to_string_pretty(&report)?)
            .with_context(|| format!("failed to write {}", output_path))?;
        println!("Results saved to {}", output_path);
    }

    Ok(())
}
