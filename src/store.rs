// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, OptionalExtension, params};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PersistenceError;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Ledgerbook", "ledgerbook"));

/// Keys of the three persisted blobs.
pub mod keys {
    pub const TRANSACTIONS: &str = "transactions";
    pub const MONTHLY_BUDGET: &str = "monthlyBudget";
    pub const THEME: &str = "theme";
}

/// Synchronous key-value target the ledger writes through to. One blob per
/// key; the ledger owns the shape of each value.
pub trait Backend {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;
    fn put(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

pub fn store_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("ledgerbook.sqlite"))
}

pub fn open_or_init() -> Result<SqliteBackend> {
    let path = store_path()?;
    SqliteBackend::open(&path)
}

pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Open store at {}", path.display()))?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Open in-memory store")?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS kv(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );
    "#,
    )?;
    Ok(())
}

impl Backend for SqliteBackend {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key=?1", params![key], |r| {
                r.get(0)
            })
            .optional()
            .map_err(|e| PersistenceError::Read(e.to_string()))
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.conn
            .execute(
                "INSERT INTO kv(key, value) VALUES(?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value=excluded.value",
                params![key, value],
            )
            .map(|_| ())
            .map_err(|e| PersistenceError::Write(e.to_string()))
    }
}

/// HashMap-backed store for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    map: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.map.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
