// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use thiserror::Error;

/// Input rejected before any state changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("description is required")]
    EmptyDescription,
    #[error("amount must be a positive number, got {0}")]
    NonPositiveAmount(Decimal),
    #[error("budget must be a positive number, got {0}")]
    NonPositiveBudget(Decimal),
    #[error("unknown category '{0}' (expected salary|food|rent|entertainment|bills|misc)")]
    UnknownCategory(String),
    #[error("unknown transaction type '{0}' (expected income|expense)")]
    UnknownKind(String),
    #[error("unknown theme '{0}' (expected light|dark)")]
    UnknownTheme(String),
}

/// Backend read/write or state serialization failure. Mutations fail
/// atomically on these: the in-memory model keeps its prior state.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("store read failed: {0}")]
    Read(String),
    #[error("store write failed: {0}")]
    Write(String),
    #[error("could not encode state: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("no transaction with id {0}")]
    NotFound(i64),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
