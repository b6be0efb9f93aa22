// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One ledger entry. The sign of `amount` is the single source of truth for
/// income (positive) vs. expense (negative); the income/expense selection
/// made at input time is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub description: String,
    pub amount: Decimal,
    pub category: Category,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn kind(&self) -> TxKind {
        if self.amount < Decimal::ZERO {
            TxKind::Expense
        } else {
            TxKind::Income
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Salary,
    Food,
    Rent,
    Entertainment,
    Bills,
    Misc,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Salary,
        Category::Food,
        Category::Rent,
        Category::Entertainment,
        Category::Bills,
        Category::Misc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Salary => "salary",
            Category::Food => "food",
            Category::Rent => "rent",
            Category::Entertainment => "entertainment",
            Category::Bills => "bills",
            Category::Misc => "misc",
        }
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "salary" => Ok(Category::Salary),
            "food" => Ok(Category::Food),
            "rent" => Ok(Category::Rent),
            "entertainment" => Ok(Category::Entertainment),
            "bills" => Ok(Category::Bills),
            "misc" => Ok(Category::Misc),
            _ => Err(ValidationError::UnknownCategory(s.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Income/expense selection captured at input time, encoded into the sign of
/// the stored amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxKind {
    Income,
    Expense,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Income => "Income",
            TxKind::Expense => "Expense",
        }
    }
}

impl FromStr for TxKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TxKind::Income),
            "expense" => Ok(TxKind::Expense),
            _ => Err(ValidationError::UnknownKind(s.to_string())),
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ValidationError::UnknownTheme(s.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
