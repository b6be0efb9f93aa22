// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Transaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

/// Income is the sum of positive amounts, expense the sum of magnitudes of
/// negative amounts. An empty subset is all zeros.
pub fn totals<'a, I>(subset: I) -> Totals
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    for tx in subset {
        if tx.amount > Decimal::ZERO {
            income += tx.amount;
        } else {
            expense += -tx.amount;
        }
    }
    Totals {
        income,
        expense,
        balance: income - expense,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    Unset,
    Tracked(BudgetProgress),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetProgress {
    pub goal: Decimal,
    pub spent: Decimal,
    /// Clamped to 100 even when overspent; `spent` keeps the real figure.
    pub percent_used: Decimal,
}

impl BudgetProgress {
    pub fn overspend(&self) -> Option<Decimal> {
        (self.spent > self.goal).then(|| self.spent - self.goal)
    }
}

pub fn budget_status<'a, I>(subset: I, goal: Option<Decimal>) -> BudgetStatus
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let goal = match goal {
        Some(g) if g > Decimal::ZERO => g,
        _ => return BudgetStatus::Unset,
    };
    let spent = totals(subset).expense;
    let percent_used = (spent / goal * Decimal::ONE_HUNDRED).min(Decimal::ONE_HUNDRED);
    BudgetStatus::Tracked(BudgetProgress {
        goal,
        spent,
        percent_used,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyBalance {
    pub date: NaiveDate,
    pub balance: Decimal,
}

/// Running balance for each of the last `days` calendar days ending at
/// `today`. Transactions dated before the window are folded into the
/// opening balance.
pub fn daily_balances(transactions: &[Transaction], today: NaiveDate, days: u32) -> Vec<DailyBalance> {
    if days == 0 {
        return Vec::new();
    }
    let start = today
        .checked_sub_days(Days::new(u64::from(days - 1)))
        .unwrap_or(NaiveDate::MIN);

    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by_key(|t| t.date);

    let mut result = Vec::with_capacity(days as usize);
    let mut running = Decimal::ZERO;
    let mut pending = sorted.into_iter().peekable();
    let mut day = start;
    while day <= today {
        while let Some(tx) = pending.peek() {
            if tx.date <= day {
                running += tx.amount;
                pending.next();
            } else {
                break;
            }
        }
        result.push(DailyBalance { date: day, balance: running });
        match day.checked_add_days(Days::new(1)) {
            Some(next) => day = next,
            None => break,
        }
    }
    result
}
