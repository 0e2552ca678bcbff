// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};
use tracing::{debug, warn};

use crate::models::Template;

pub const TEMPLATES_KEY: &str = "daybook_templates";

/// String key/value storage backed by the `settings` table.
pub struct LocalStorage<'a> {
    conn: &'a Connection,
}

impl<'a> LocalStorage<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        let v = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key=?1",
                params![key],
                |r| r.get(0),
            )
            .optional()?;
        Ok(v)
    }

    pub fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO settings(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}

/// Reusable daily-form presets. Loaded once, rewritten in full on every change.
pub struct TemplateStore<'a> {
    storage: LocalStorage<'a>,
    templates: Vec<Template>,
}

impl<'a> TemplateStore<'a> {
    pub fn load(conn: &'a Connection) -> Result<Self> {
        let storage = LocalStorage::new(conn);
        let templates = match storage.get_item(TEMPLATES_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<Template>>(&raw) {
                Ok(list) => list,
                Err(err) => {
                    warn!(%err, "ignoring unreadable template payload");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        debug!(count = templates.len(), "templates loaded");
        Ok(Self { storage, templates })
    }

    pub fn list(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Look up by id first, then by exact name.
    pub fn find(&self, key: &str) -> Option<&Template> {
        self.get(key)
            .or_else(|| self.templates.iter().find(|t| t.name == key))
    }

    /// Millisecond timestamp id, bumped past any existing id.
    pub fn next_id(&self) -> String {
        let now = Utc::now().timestamp_millis();
        let max_existing = self
            .templates
            .iter()
            .filter_map(|t| t.id.parse::<i64>().ok())
            .max()
            .unwrap_or(i64::MIN);
        now.max(max_existing.saturating_add(1)).to_string()
    }

    pub fn add(&mut self, template: Template) -> Result<()> {
        self.templates.push(template);
        self.persist()
    }

    /// Returns false when no template has that id.
    pub fn rename(&mut self, id: &str, name: &str) -> Result<bool> {
        let Some(t) = self.templates.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        t.name = name.to_string();
        self.persist()?;
        Ok(true)
    }

    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.templates.len();
        self.templates.retain(|t| t.id != id);
        if self.templates.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    fn persist(&self) -> Result<()> {
        let raw = serde_json::to_string(&self.templates)?;
        self.storage.set_item(TEMPLATES_KEY, &raw)
    }
}
