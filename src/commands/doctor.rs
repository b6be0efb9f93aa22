// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use anyhow::Result;
use rust_decimal::Decimal;

use crate::ledger::LedgerStore;
use crate::models::{Theme, Transaction};
use crate::store::{Backend, keys};
use crate::utils::pretty_table;

/// Audit the persisted state for conditions the store tolerates at load
/// time (corrupt blobs degrade to defaults) or that predate validation
/// (zero amounts, empty descriptions). Reports, never repairs.
pub fn handle<B: Backend>(ledger: &LedgerStore<B>) -> Result<()> {
    let mut rows = Vec::new();
    let backend = ledger.backend();

    // 1) Blobs that silently degraded to defaults at load time
    if let Some(raw) = backend.get(keys::TRANSACTIONS)? {
        if serde_json::from_str::<Vec<Transaction>>(&raw).is_err() {
            rows.push(vec!["corrupt_blob".into(), keys::TRANSACTIONS.into()]);
        }
    }
    if let Some(raw) = backend.get(keys::MONTHLY_BUDGET)? {
        match raw.parse::<Decimal>() {
            Ok(v) if v > Decimal::ZERO => {}
            _ => rows.push(vec!["invalid_budget".into(), raw]),
        }
    }
    if let Some(raw) = backend.get(keys::THEME)? {
        if raw.parse::<Theme>().is_err() {
            rows.push(vec!["unknown_theme".into(), raw]);
        }
    }

    // 2) Ledger entries that would not pass validation today
    let mut seen: HashMap<i64, usize> = HashMap::new();
    for tx in ledger.transactions() {
        *seen.entry(tx.id).or_insert(0) += 1;
    }
    let mut dup_ids: Vec<i64> = seen.iter().filter(|(_, n)| **n > 1).map(|(id, _)| *id).collect();
    dup_ids.sort_unstable();
    for id in dup_ids {
        rows.push(vec!["duplicate_id".into(), format!("id {} appears {} times", id, seen[&id])]);
    }
    for tx in ledger.transactions() {
        if tx.amount == Decimal::ZERO {
            rows.push(vec!["zero_amount".into(), format!("id {}", tx.id)]);
        }
        if tx.description.trim().is_empty() {
            rows.push(vec!["empty_description".into(), format!("id {}", tx.id)]);
        }
    }

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
