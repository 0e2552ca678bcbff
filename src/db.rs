// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, OptionalExtension, params};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.daybook", "Daybook", "daybook"));

pub const DB_ENV: &str = "DAYBOOK_DB";

pub const DEFAULT_EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Shopping",
    "Entertainment",
    "Household",
    "Medical",
    "Other",
];

pub const DEFAULT_INCOME_CATEGORIES: &[&str] = &["Salary", "Bonus", "Investment", "Other"];

/// Resolve the database file: explicit path, then `DAYBOOK_DB`, then the platform data dir.
pub fn db_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(p) = explicit {
        return Ok(p.to_path_buf());
    }
    if let Some(p) = std::env::var_os(DB_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(p));
    }
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("daybook.sqlite"))
}

pub fn open_or_init(explicit: Option<&Path>) -> Result<Connection> {
    let path = db_path(explicit)?;
    debug!(path = %path.display(), "opening database");
    let conn =
        Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&conn)?;
    seed_defaults(&conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS categories(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        kind TEXT NOT NULL CHECK(kind IN ('expense','income')),
        name TEXT NOT NULL,
        position INTEGER NOT NULL,
        UNIQUE(kind, name)
    );

    CREATE TABLE IF NOT EXISTS players(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        position INTEGER NOT NULL
    );

    -- one row per journal record; the entry payload is stored as JSON
    CREATE TABLE IF NOT EXISTS records(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        category TEXT NOT NULL CHECK(category IN ('daily','tea','mahjong')),
        date TEXT NOT NULL,
        payload TEXT NOT NULL,
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    CREATE INDEX IF NOT EXISTS idx_records_date ON records(date);
    "#,
    )?;
    Ok(())
}

/// Fill the category lists on first use only; later edits are never overwritten.
pub fn seed_defaults(conn: &Connection) -> Result<()> {
    let seeded: Option<String> = conn
        .query_row("SELECT value FROM settings WHERE key='seeded'", [], |r| {
            r.get(0)
        })
        .optional()?;
    if seeded.is_some() {
        return Ok(());
    }
    for (kind, names) in [
        ("expense", DEFAULT_EXPENSE_CATEGORIES),
        ("income", DEFAULT_INCOME_CATEGORIES),
    ] {
        for (pos, name) in names.iter().enumerate() {
            conn.execute(
                "INSERT OR IGNORE INTO categories(kind, name, position) VALUES (?1, ?2, ?3)",
                params![kind, name, pos as i64],
            )?;
        }
    }
    conn.execute(
        "INSERT INTO settings(key, value) VALUES('seeded', '1')",
        [],
    )?;
    info!("seeded default categories");
    Ok(())
}
