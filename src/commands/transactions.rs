// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::ledger::{CategoryFilter, LedgerStore, TransactionInput};
use crate::models::{Category, TxKind};
use crate::store::Backend;
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};

pub fn handle<B: Backend>(ledger: &mut LedgerStore<B>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(ledger, sub)?,
        Some(("edit", sub)) => edit(ledger, sub)?,
        Some(("rm", sub)) => rm(ledger, sub)?,
        Some(("list", sub)) => list(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn parse_input(sub: &clap::ArgMatches) -> Result<TransactionInput> {
    let description = sub.get_one::<String>("desc").unwrap().to_string();
    let magnitude = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let kind: TxKind = sub.get_one::<String>("type").unwrap().parse()?;
    let category: Category = sub.get_one::<String>("category").unwrap().parse()?;
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => chrono::Local::now().date_naive(),
    };
    Ok(TransactionInput {
        description,
        magnitude,
        kind,
        category,
        date,
    })
}

fn add<B: Backend>(ledger: &mut LedgerStore<B>, sub: &clap::ArgMatches) -> Result<()> {
    let tx = ledger.add_transaction(parse_input(sub)?)?;
    println!(
        "Recorded {} {} '{}' ({}) on {} [id {}]",
        tx.kind().as_str().to_lowercase(),
        fmt_money(&tx.amount.abs()),
        tx.description,
        tx.category,
        tx.date,
        tx.id
    );
    Ok(())
}

fn edit<B: Backend>(ledger: &mut LedgerStore<B>, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let tx = ledger.edit_transaction(id, parse_input(sub)?)?;
    println!(
        "Updated transaction {}: '{}' {} ({}) on {}",
        tx.id,
        tx.description,
        fmt_money(&tx.amount),
        tx.category,
        tx.date
    );
    Ok(())
}

fn rm<B: Backend>(ledger: &mut LedgerStore<B>, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if ledger.delete_transaction(id)? {
        println!("Removed transaction {}", id);
    } else {
        println!("No transaction with id {} (nothing to do)", id);
    }
    Ok(())
}

fn list<B: Backend>(ledger: &LedgerStore<B>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = view_rows(ledger, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.description.clone(),
                    r.amount.clone(),
                    r.kind.clone(),
                    r.category.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Description", "Amount", "Type", "Category"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub description: String,
    pub amount: String,
    pub kind: String,
    pub category: String,
}

/// Rows for `tx list`: ledger order, optionally filtered by category, with
/// `--limit` keeping only the most recent N entries.
pub fn view_rows<B: Backend>(
    ledger: &LedgerStore<B>,
    sub: &clap::ArgMatches,
) -> Result<Vec<TransactionRow>> {
    let filter: CategoryFilter = sub.get_one::<String>("category").unwrap().parse()?;
    let view = ledger.filtered_view(filter);
    let skip = match sub.get_one::<usize>("limit") {
        Some(limit) => view.len().saturating_sub(*limit),
        None => 0,
    };
    Ok(view
        .into_iter()
        .skip(skip)
        .map(|tx| TransactionRow {
            id: tx.id,
            date: tx.date.to_string(),
            description: tx.description.clone(),
            amount: fmt_money(&tx.amount),
            kind: tx.kind().as_str().to_string(),
            category: tx.category.to_string(),
        })
        .collect())
}
