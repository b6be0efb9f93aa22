// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use tempfile::tempdir;

use ledgerbook::ledger::{LedgerStore, TransactionInput};
use ledgerbook::models::{Category, Transaction, TxKind};
use ledgerbook::store::MemoryBackend;
use ledgerbook::{cli, commands::exporter};

fn seeded_ledger() -> LedgerStore<MemoryBackend> {
    let mut ledger = LedgerStore::load(MemoryBackend::new()).unwrap();
    ledger
        .add_transaction(TransactionInput {
            description: "Corner Shop".to_string(),
            magnitude: "12.34".parse().unwrap(),
            kind: TxKind::Expense,
            category: Category::Food,
            date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
        })
        .unwrap();
    ledger
        .add_transaction(TransactionInput {
            description: "Salary, April".to_string(),
            magnitude: "3000".parse().unwrap(),
            kind: TxKind::Income,
            category: Category::Salary,
            date: NaiveDate::from_ymd_opt(2025, 4, 30).unwrap(),
        })
        .unwrap();
    ledger
}

fn export_matches(format: &str, out: &str) -> clap::ArgMatches {
    let matches = cli::build_cli().get_matches_from([
        "ledgerbook",
        "export",
        "transactions",
        "--format",
        format,
        "--out",
        out,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        return export_m.clone();
    }
    panic!("no export subcommand");
}

#[test]
fn export_transactions_writes_csv_format() {
    let ledger = seeded_ledger();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("transactions.csv");
    let out_str = out_path.to_string_lossy().to_string();

    exporter::handle(&ledger, &export_matches("csv", &out_str)).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let expected = "\
Description,Amount,Type,Category,Date
Corner Shop,-12.34,Expense,food,1/2/25
\"Salary, April\",3000,Income,salary,4/30/25
";
    assert_eq!(contents, expected);
}

#[test]
fn export_transactions_json_round_trips() {
    let ledger = seeded_ledger();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("transactions.json");
    let out_str = out_path.to_string_lossy().to_string();

    exporter::handle(&ledger, &export_matches("json", &out_str)).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: Vec<Transaction> = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed, ledger.transactions());
}

#[test]
fn export_transactions_rejects_unknown_format() {
    let ledger = seeded_ledger();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    assert!(exporter::handle(&ledger, &export_matches("xml", &out_str)).is_err());
    assert!(!out_path.exists());
}

#[test]
fn export_refuses_empty_ledger() {
    let ledger = LedgerStore::load(MemoryBackend::new()).unwrap();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("empty.csv");
    let out_str = out_path.to_string_lossy().to_string();

    assert!(exporter::handle(&ledger, &export_matches("csv", &out_str)).is_err());
    assert!(!out_path.exists());
}
