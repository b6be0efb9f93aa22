// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use ledgerbook::{cli, commands, ledger::LedgerStore, store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let backend = store::open_or_init()?;
    let mut ledger = LedgerStore::load(backend)?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Ledger store initialized at {}", store::store_path()?.display());
        }
        Some(("tx", sub)) => commands::transactions::handle(&mut ledger, sub)?,
        Some(("budget", sub)) => commands::budgets::handle(&mut ledger, sub)?,
        Some(("theme", sub)) => commands::theme::handle(&mut ledger, sub)?,
        Some(("report", sub)) => commands::reports::handle(&ledger, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&ledger, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&ledger)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
