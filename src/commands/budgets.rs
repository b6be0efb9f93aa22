// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::prelude::ToPrimitive;

use crate::ledger::{CategoryFilter, LedgerStore};
use crate::store::Backend;
use crate::summary::{BudgetStatus, budget_status};
use crate::utils::{fmt_money, parse_decimal};

const BAR_WIDTH: usize = 20;

pub fn handle<B: Backend>(ledger: &mut LedgerStore<B>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(ledger, sub)?,
        Some(("status", sub)) => status(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn set<B: Backend>(ledger: &mut LedgerStore<B>, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    ledger.set_budget(amount)?;
    println!("Monthly budget set to {}", fmt_money(&amount));
    Ok(())
}

fn status<B: Backend>(ledger: &LedgerStore<B>, sub: &clap::ArgMatches) -> Result<()> {
    let filter: CategoryFilter = sub.get_one::<String>("category").unwrap().parse()?;
    let view = ledger.filtered_view(filter);
    match budget_status(view.into_iter(), ledger.monthly_budget()) {
        BudgetStatus::Unset => println!("No budget set yet."),
        BudgetStatus::Tracked(p) => {
            println!(
                "${} of ${} spent ({}%)",
                fmt_money(&p.spent),
                fmt_money(&p.goal),
                p.percent_used.round()
            );
            let filled = (p.percent_used * rust_decimal::Decimal::from(BAR_WIDTH)
                / rust_decimal::Decimal::ONE_HUNDRED)
                .round()
                .to_usize()
                .unwrap_or(0)
                .min(BAR_WIDTH);
            println!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled));
            if let Some(over) = p.overspend() {
                println!("Over budget by ${}", fmt_money(&over));
            }
        }
    }
    Ok(())
}
