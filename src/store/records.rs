// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use rusqlite::{Connection, OptionalExtension, params};
use tracing::{debug, info};

use crate::models::{Entry, Record, RecordId, RecordKind};

use super::RecordSink;

/// The authoritative list of journal records.
pub struct RecordStore<'a> {
    conn: &'a Connection,
}

impl<'a> RecordStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Every record in insertion order.
    pub fn all(&self) -> Result<Vec<Record>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, payload FROM records ORDER BY id")?;
        let rows = stmt.query_map([], |r| Ok((r.get::<_, i64>(0)?, r.get::<_, String>(1)?)))?;
        let mut data = Vec::new();
        for row in rows {
            let (id, payload) = row?;
            data.push(decode(id, &payload)?);
        }
        Ok(data)
    }

    pub fn of_kind(&self, kind: RecordKind) -> Result<Vec<Record>> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|r| r.kind() == kind)
            .collect())
    }

    pub fn get(&self, id: RecordId) -> Result<Option<Record>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT payload FROM records WHERE id=?1",
                params![id],
                |r| r.get(0),
            )
            .optional()?;
        payload.map(|p| decode(id, &p)).transpose()
    }

    pub fn require(&self, id: RecordId) -> Result<Record> {
        self.get(id)?
            .ok_or_else(|| anyhow!("Record {} not found", id))
    }

    pub fn add(&self, entry: Entry) -> Result<Record> {
        let payload = serde_json::to_string(&entry)?;
        self.conn.execute(
            "INSERT INTO records(category, date, payload) VALUES (?1, ?2, ?3)",
            params![entry.kind().as_str(), entry.date().to_string(), payload],
        )?;
        let id = self.conn.last_insert_rowid();
        info!(id, kind = %entry.kind(), "record added");
        Ok(Record { id, entry })
    }

    /// Replace the whole payload of an existing record.
    pub fn update(&self, record: &Record) -> Result<()> {
        let payload = serde_json::to_string(&record.entry)?;
        let n = self.conn.execute(
            "UPDATE records SET category=?1, date=?2, payload=?3 WHERE id=?4",
            params![
                record.kind().as_str(),
                record.date().to_string(),
                payload,
                record.id
            ],
        )?;
        if n == 0 {
            return Err(anyhow!("Record {} not found", record.id));
        }
        info!(id = record.id, "record updated");
        Ok(())
    }

    pub fn delete(&self, id: RecordId) -> Result<bool> {
        let n = self
            .conn
            .execute("DELETE FROM records WHERE id=?1", params![id])?;
        debug!(id, removed = n, "record delete");
        Ok(n > 0)
    }

    /// Store a copy of the record under a fresh id. The date is kept.
    pub fn duplicate(&self, id: RecordId) -> Result<Record> {
        let original = self.require(id)?;
        self.add(original.entry)
    }
}

fn decode(id: RecordId, payload: &str) -> Result<Record> {
    let entry: Entry = serde_json::from_str(payload)
        .with_context(|| format!("Invalid payload for record {}", id))?;
    Ok(Record { id, entry })
}

impl RecordSink for RecordStore<'_> {
    fn add(&mut self, entry: Entry) -> Result<Record> {
        RecordStore::add(self, entry)
    }

    fn update(&mut self, record: Record) -> Result<Record> {
        RecordStore::update(self, &record)?;
        Ok(record)
    }
}
