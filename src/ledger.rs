// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{LedgerError, PersistenceError, ValidationError};
use crate::models::{Category, Theme, Transaction, TxKind};
use crate::store::{Backend, keys};

/// Fields accepted for a new or edited transaction. `magnitude` is the
/// positive amount as entered; the stored sign comes from `kind`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionInput {
    pub description: String,
    pub magnitude: Decimal,
    pub kind: TxKind,
    pub category: Category,
    pub date: NaiveDate,
}

impl TransactionInput {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if self.magnitude <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount(self.magnitude));
        }
        Ok(())
    }

    fn signed_amount(&self) -> Decimal {
        match self.kind {
            TxKind::Expense => -self.magnitude.abs(),
            TxKind::Income => self.magnitude.abs(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Only(s.parse()?))
        }
    }
}

/// Authoritative in-memory copy of the ledger, budget goal, and theme.
///
/// Every mutation is written through to the backend before the in-memory
/// state is updated; a failed write leaves the store exactly as it was.
pub struct LedgerStore<B: Backend> {
    backend: B,
    transactions: Vec<Transaction>,
    monthly_budget: Option<Decimal>,
    theme: Theme,
    next_id: i64,
}

impl<B: Backend> LedgerStore<B> {
    /// Load persisted state. Absent or corrupt blobs degrade to an empty
    /// ledger, an unset budget, and the light theme; `doctor` reports the
    /// corruption rather than this failing.
    pub fn load(backend: B) -> Result<Self, LedgerError> {
        let transactions: Vec<Transaction> = match backend.get(keys::TRANSACTIONS)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            None => Vec::new(),
        };
        let monthly_budget = backend
            .get(keys::MONTHLY_BUDGET)?
            .and_then(|raw| raw.parse::<Decimal>().ok())
            .filter(|v| *v > Decimal::ZERO);
        let theme = backend
            .get(keys::THEME)?
            .and_then(|raw| raw.parse::<Theme>().ok())
            .unwrap_or_default();
        let next_id = transactions.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Ok(Self {
            backend,
            transactions,
            monthly_budget,
            theme,
            next_id,
        })
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn monthly_budget(&self) -> Option<Decimal> {
        self.monthly_budget
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn find(&self, id: i64) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Validate, append, persist. Returns the stored record.
    pub fn add_transaction(&mut self, input: TransactionInput) -> Result<Transaction, LedgerError> {
        input.validate()?;
        let tx = Transaction {
            id: self.next_id,
            description: input.description.trim().to_string(),
            amount: input.signed_amount(),
            category: input.category,
            date: input.date,
        };
        let mut staged = self.transactions.clone();
        staged.push(tx.clone());
        self.commit_transactions(staged)?;
        self.next_id += 1;
        Ok(tx)
    }

    /// Remove by id. Absent ids are a benign no-op and skip the backend
    /// write. Returns whether an entry was removed.
    pub fn delete_transaction(&mut self, id: i64) -> Result<bool, LedgerError> {
        if !self.transactions.iter().any(|t| t.id == id) {
            return Ok(false);
        }
        let staged: Vec<Transaction> = self
            .transactions
            .iter()
            .filter(|t| t.id != id)
            .cloned()
            .collect();
        self.commit_transactions(staged)?;
        Ok(true)
    }

    /// Replace the record in place: id and position are unchanged, the
    /// signed amount is recomputed from the input's kind and magnitude.
    pub fn edit_transaction(
        &mut self,
        id: i64,
        input: TransactionInput,
    ) -> Result<Transaction, LedgerError> {
        input.validate()?;
        let pos = self
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or(LedgerError::NotFound(id))?;
        let tx = Transaction {
            id,
            description: input.description.trim().to_string(),
            amount: input.signed_amount(),
            category: input.category,
            date: input.date,
        };
        let mut staged = self.transactions.clone();
        staged[pos] = tx.clone();
        self.commit_transactions(staged)?;
        Ok(tx)
    }

    pub fn set_budget(&mut self, value: Decimal) -> Result<(), LedgerError> {
        if value <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveBudget(value).into());
        }
        self.backend.put(keys::MONTHLY_BUDGET, &value.to_string())?;
        self.monthly_budget = Some(value);
        Ok(())
    }

    pub fn toggle_theme(&mut self) -> Result<Theme, LedgerError> {
        let next = self.theme.toggled();
        self.backend.put(keys::THEME, next.as_str())?;
        self.theme = next;
        Ok(next)
    }

    /// Subsequence matching the filter, insertion order preserved.
    pub fn filtered_view(&self, filter: CategoryFilter) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| filter.matches(t.category))
            .collect()
    }

    fn commit_transactions(&mut self, staged: Vec<Transaction>) -> Result<(), LedgerError> {
        let blob = serde_json::to_string(&staged).map_err(PersistenceError::from)?;
        self.backend.put(keys::TRANSACTIONS, &blob)?;
        self.transactions = staged;
        Ok(())
    }
}
