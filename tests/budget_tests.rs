// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use ledgerbook::error::{LedgerError, ValidationError};
use ledgerbook::ledger::{LedgerStore, TransactionInput};
use ledgerbook::models::{Category, TxKind};
use ledgerbook::store::MemoryBackend;
use ledgerbook::summary::{BudgetStatus, budget_status};

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn expense(magnitude: &str) -> TransactionInput {
    TransactionInput {
        description: "Spending".to_string(),
        magnitude: d(magnitude),
        kind: TxKind::Expense,
        category: Category::Misc,
        date: NaiveDate::from_ymd_opt(2025, 4, 12).unwrap(),
    }
}

#[test]
fn status_unset_without_goal() {
    let ledger = LedgerStore::load(MemoryBackend::new()).unwrap();
    assert_eq!(
        budget_status(ledger.transactions(), ledger.monthly_budget()),
        BudgetStatus::Unset
    );
    assert_eq!(budget_status(ledger.transactions(), Some(d("0"))), BudgetStatus::Unset);
    assert_eq!(budget_status(ledger.transactions(), Some(d("-10"))), BudgetStatus::Unset);
}

#[test]
fn status_matches_worked_example() {
    let mut ledger = LedgerStore::load(MemoryBackend::new()).unwrap();
    ledger.set_budget(d("1000")).unwrap();
    ledger.add_transaction(expense("250")).unwrap();

    match budget_status(ledger.transactions(), ledger.monthly_budget()) {
        BudgetStatus::Tracked(p) => {
            assert_eq!(p.spent, d("250"));
            assert_eq!(p.percent_used, d("25"));
            assert_eq!(p.overspend(), None);
        }
        BudgetStatus::Unset => panic!("budget was set"),
    }
}

#[test]
fn percent_never_exceeds_100() {
    let mut ledger = LedgerStore::load(MemoryBackend::new()).unwrap();
    ledger.set_budget(d("100")).unwrap();
    ledger.add_transaction(expense("250")).unwrap();

    match budget_status(ledger.transactions(), ledger.monthly_budget()) {
        BudgetStatus::Tracked(p) => {
            assert_eq!(p.percent_used, d("100"));
            // the clamp is display-only: the real spend survives
            assert_eq!(p.spent, d("250"));
            assert_eq!(p.overspend(), Some(d("150")));
        }
        BudgetStatus::Unset => panic!("budget was set"),
    }
}

#[test]
fn income_does_not_count_as_spending() {
    let mut ledger = LedgerStore::load(MemoryBackend::new()).unwrap();
    ledger.set_budget(d("1000")).unwrap();
    ledger
        .add_transaction(TransactionInput {
            description: "Salary".to_string(),
            magnitude: d("3000"),
            kind: TxKind::Income,
            category: Category::Salary,
            date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
        })
        .unwrap();
    ledger.add_transaction(expense("40")).unwrap();

    match budget_status(ledger.transactions(), ledger.monthly_budget()) {
        BudgetStatus::Tracked(p) => assert_eq!(p.spent, d("40")),
        BudgetStatus::Unset => panic!("budget was set"),
    }
}

#[test]
fn set_budget_rejects_non_positive() {
    let mut ledger = LedgerStore::load(MemoryBackend::new()).unwrap();
    for bad in ["0", "-1"] {
        let err = ledger.set_budget(d(bad)).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Validation(ValidationError::NonPositiveBudget(_))
        ));
    }
    assert_eq!(ledger.monthly_budget(), None);
}

#[test]
fn set_budget_overwrites_previous_goal() {
    let mut ledger = LedgerStore::load(MemoryBackend::new()).unwrap();
    ledger.set_budget(d("500")).unwrap();
    ledger.set_budget(d("750")).unwrap();
    assert_eq!(ledger.monthly_budget(), Some(d("750")));
}
