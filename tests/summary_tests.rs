// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use ledgerbook::models::{Category, Transaction};
use ledgerbook::summary::{daily_balances, totals};

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn tx(id: i64, amount: &str, on: &str) -> Transaction {
    Transaction {
        id,
        description: format!("tx {}", id),
        amount: d(amount),
        category: Category::Misc,
        date: date(on),
    }
}

#[test]
fn totals_of_empty_subset_are_zero() {
    let txs: Vec<Transaction> = Vec::new();
    let t = totals(&txs);
    assert_eq!(t.income, Decimal::ZERO);
    assert_eq!(t.expense, Decimal::ZERO);
    assert_eq!(t.balance, Decimal::ZERO);
}

#[test]
fn trend_covers_the_full_window() {
    let txs = vec![tx(1, "3000", "2025-03-20")];
    let data = daily_balances(&txs, date("2025-05-01"), 30);
    assert_eq!(data.len(), 30);
    assert_eq!(data[0].date, date("2025-04-02"));
    assert_eq!(data[29].date, date("2025-05-01"));
}

#[test]
fn trend_folds_older_transactions_into_opening_balance() {
    let txs = vec![
        tx(1, "3000", "2025-03-20"),
        tx(2, "-200", "2025-04-26"),
        tx(3, "100", "2025-04-30"),
    ];
    let data = daily_balances(&txs, date("2025-05-01"), 30);

    // opening balance already includes the March salary
    assert_eq!(data[0].balance, d("3000"));
    // 2025-04-26 is index 24 of a window starting 2025-04-02
    assert_eq!(data[23].balance, d("3000"));
    assert_eq!(data[24].balance, d("2800"));
    assert_eq!(data[28].balance, d("2900"));
    assert_eq!(data[29].balance, d("2900"));
}

#[test]
fn trend_balance_is_cumulative_sum_up_to_each_day() {
    let txs = vec![
        tx(1, "10", "2025-05-01"),
        tx(2, "-4", "2025-05-02"),
        tx(3, "2", "2025-05-02"),
        tx(4, "-1", "2025-05-03"),
    ];
    let data = daily_balances(&txs, date("2025-05-03"), 3);
    let balances: Vec<Decimal> = data.iter().map(|b| b.balance).collect();
    assert_eq!(balances, vec![d("10"), d("8"), d("7")]);
}

#[test]
fn trend_with_zero_days_is_empty() {
    let txs = vec![tx(1, "10", "2025-05-01")];
    assert!(daily_balances(&txs, date("2025-05-03"), 0).is_empty());
}
