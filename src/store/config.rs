// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use rusqlite::{Connection, params};
use tracing::info;

use crate::models::{CategoryConfig, EntryType};

/// Category lists and the player roster, both user-ordered.
pub struct ConfigStore<'a> {
    conn: &'a Connection,
}

impl<'a> ConfigStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn categories(&self) -> Result<CategoryConfig> {
        Ok(CategoryConfig {
            expense: self.category_list(EntryType::Expense)?,
            income: self.category_list(EntryType::Income)?,
        })
    }

    pub fn category_list(&self, kind: EntryType) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM categories WHERE kind=?1 ORDER BY position, id")?;
        let rows = stmt.query_map(params![kind.as_str()], |r| r.get::<_, String>(0))?;
        let mut data = Vec::new();
        for row in rows {
            data.push(row?);
        }
        Ok(data)
    }

    pub fn add_category(&self, kind: EntryType, name: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO categories(kind, name, position)
                 VALUES (?1, ?2, (SELECT IFNULL(MAX(position), -1) + 1 FROM categories WHERE kind=?1))",
                params![kind.as_str(), name],
            )
            .with_context(|| format!("Add category '{}'", name))?;
        info!(%kind, name, "category added");
        Ok(())
    }

    pub fn remove_category(&self, kind: EntryType, name: &str) -> Result<bool> {
        let n = self.conn.execute(
            "DELETE FROM categories WHERE kind=?1 AND name=?2",
            params![kind.as_str(), name],
        )?;
        Ok(n > 0)
    }

    /// Replace a whole partition, keeping the given order.
    pub fn set_categories(&self, kind: EntryType, names: &[String]) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "DELETE FROM categories WHERE kind=?1",
            params![kind.as_str()],
        )?;
        for (pos, name) in names.iter().enumerate() {
            tx.execute(
                "INSERT INTO categories(kind, name, position) VALUES (?1, ?2, ?3)",
                params![kind.as_str(), name, pos as i64],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    pub fn players(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM players ORDER BY position, id")?;
        let rows = stmt.query_map([], |r| r.get::<_, String>(0))?;
        let mut data = Vec::new();
        for row in rows {
            data.push(row?);
        }
        Ok(data)
    }

    pub fn add_player(&self, name: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO players(name, position)
                 VALUES (?1, (SELECT IFNULL(MAX(position), -1) + 1 FROM players))",
                params![name],
            )
            .with_context(|| format!("Add player '{}'", name))?;
        info!(name, "player added");
        Ok(())
    }

    pub fn remove_player(&self, name: &str) -> Result<bool> {
        let n = self
            .conn
            .execute("DELETE FROM players WHERE name=?1", params![name])?;
        Ok(n > 0)
    }

    pub fn set_players(&self, names: &[String]) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM players", [])?;
        for (pos, name) in names.iter().enumerate() {
            tx.execute(
                "INSERT INTO players(name, position) VALUES (?1, ?2)",
                params![name, pos as i64],
            )?;
        }
        tx.commit()?;
        Ok(())
    }
}
