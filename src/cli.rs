// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("ledgerbook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Personal income/expense ledger with monthly budget tracking")
        .subcommand(Command::new("init").about("Initialize the ledger store"))
        .subcommand(tx_cmd())
        .subcommand(budget_cmd())
        .subcommand(theme_cmd())
        .subcommand(report_cmd())
        .subcommand(export_cmd())
        .subcommand(Command::new("doctor").about("Check the persisted ledger for integrity issues"))
}

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print output as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print output as JSON lines"),
    )
}

fn tx_fields(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("desc")
            .long("desc")
            .required(true)
            .help("Description of the entry"),
    )
    .arg(
        Arg::new("amount")
            .long("amount")
            .required(true)
            .help("Positive amount; the sign comes from --type"),
    )
    .arg(
        Arg::new("type")
            .long("type")
            .default_value("income")
            .help("income or expense"),
    )
    .arg(
        Arg::new("category")
            .long("category")
            .required(true)
            .help("salary|food|rent|entertainment|bills|misc"),
    )
    .arg(
        Arg::new("date")
            .long("date")
            .help("Transaction date YYYY-MM-DD (defaults to today)"),
    )
}

fn tx_cmd() -> Command {
    Command::new("tx")
        .about("Manage ledger transactions")
        .subcommand(tx_fields(Command::new("add").about("Add a transaction")))
        .subcommand(
            tx_fields(
                Command::new("edit").about("Replace a transaction's fields in place").arg(
                    Arg::new("id")
                        .required(true)
                        .value_parser(value_parser!(i64))
                        .help("Id of the transaction to edit"),
                ),
            ),
        )
        .subcommand(
            Command::new("rm").about("Remove a transaction").arg(
                Arg::new("id")
                    .required(true)
                    .value_parser(value_parser!(i64))
                    .help("Id of the transaction to remove"),
            ),
        )
        .subcommand(
            json_flags(Command::new("list").about("List transactions"))
                .arg(
                    Arg::new("category")
                        .long("category")
                        .default_value("all")
                        .help("Only show one category, or 'all'"),
                )
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize))
                        .help("Show only the most recent N entries"),
                ),
        )
}

fn budget_cmd() -> Command {
    Command::new("budget")
        .about("Manage the monthly budget goal")
        .subcommand(
            Command::new("set").about("Set the monthly budget goal").arg(
                Arg::new("amount")
                    .required(true)
                    .help("Positive budget ceiling"),
            ),
        )
        .subcommand(
            Command::new("status")
                .about("Show spending against the budget goal")
                .arg(
                    Arg::new("category")
                        .long("category")
                        .default_value("all")
                        .help("Restrict spending to one category, or 'all'"),
                ),
        )
}

fn theme_cmd() -> Command {
    Command::new("theme")
        .about("Light/dark display preference")
        .subcommand(Command::new("toggle").about("Flip between light and dark"))
        .subcommand(Command::new("show").about("Print the current theme"))
}

fn report_cmd() -> Command {
    Command::new("report")
        .about("Derived views over the ledger")
        .subcommand(
            json_flags(Command::new("totals").about("Income, expense, and balance totals")).arg(
                Arg::new("category")
                    .long("category")
                    .default_value("all")
                    .help("Restrict totals to one category, or 'all'"),
            ),
        )
        .subcommand(
            json_flags(Command::new("trend").about("Running balance over the last N days")).arg(
                Arg::new("days")
                    .long("days")
                    .default_value("30")
                    .value_parser(value_parser!(u32))
                    .help("Window size in days"),
            ),
        )
}

fn export_cmd() -> Command {
    Command::new("export").about("Export ledger data").subcommand(
        Command::new("transactions")
            .about("Write all transactions to a file")
            .arg(
                Arg::new("format")
                    .long("format")
                    .default_value("csv")
                    .help("csv or json"),
            )
            .arg(
                Arg::new("out")
                    .long("out")
                    .required(true)
                    .help("Output path"),
            ),
    )
}
