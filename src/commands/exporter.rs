// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};

use crate::ledger::LedgerStore;
use crate::store::Backend;
use crate::utils::format_short_date;

pub fn handle<B: Backend>(ledger: &LedgerStore<B>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(ledger, sub),
        _ => Ok(()),
    }
}

fn export_transactions<B: Backend>(ledger: &LedgerStore<B>, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let txs = ledger.transactions();
    if txs.is_empty() {
        bail!("No transactions to export.");
    }

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["Description", "Amount", "Type", "Category", "Date"])?;
            for tx in txs {
                wtr.write_record([
                    tx.description.clone(),
                    tx.amount.to_string(),
                    tx.kind().as_str().to_string(),
                    tx.category.to_string(),
                    format_short_date(tx.date),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&txs)?)?;
        }
        _ => {
            bail!("Unknown format: {} (use csv|json)", fmt);
        }
    }
    println!("Exported {} transactions to {}", txs.len(), out);
    Ok(())
}
