// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::ledger::LedgerStore;
use crate::store::Backend;

pub fn handle<B: Backend>(ledger: &mut LedgerStore<B>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("toggle", _)) => {
            let next = ledger.toggle_theme()?;
            println!("Theme set to {}", next);
        }
        Some(("show", _)) => {
            println!("{}", ledger.theme());
        }
        _ => {}
    }
    Ok(())
}
