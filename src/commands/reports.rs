// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::ledger::{CategoryFilter, LedgerStore};
use crate::store::Backend;
use crate::summary::{daily_balances, totals};
use crate::utils::{fmt_money, format_short_date, maybe_print_json, pretty_table};

pub fn handle<B: Backend>(ledger: &LedgerStore<B>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("totals", sub)) => totals_report(ledger, sub)?,
        Some(("trend", sub)) => trend(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn totals_report<B: Backend>(ledger: &LedgerStore<B>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let filter: CategoryFilter = sub.get_one::<String>("category").unwrap().parse()?;
    let t = totals(ledger.filtered_view(filter));
    if !maybe_print_json(json_flag, jsonl_flag, &t)? {
        let rows = vec![vec![
            fmt_money(&t.income),
            fmt_money(&t.expense),
            fmt_money(&t.balance),
        ]];
        println!("{}", pretty_table(&["Income", "Expenses", "Balance"], rows));
    }
    Ok(())
}

fn trend<B: Backend>(ledger: &LedgerStore<B>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let days: u32 = *sub.get_one::<u32>("days").unwrap();
    let today = chrono::Local::now().date_naive();
    let data = daily_balances(ledger.transactions(), today, days);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|d| vec![format_short_date(d.date), fmt_money(&d.balance)])
            .collect();
        println!("{}", pretty_table(&["Date", "Balance"], rows));
    }
    Ok(())
}
