// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Datelike;
use rusqlite::Connection;

use crate::models::{Record, RecordId, RecordKind};
use crate::notify::{Confirm, ConsoleConfirm, Notifier};
use crate::store::{RecordActions, RecordStore};
use crate::utils::{RECORD_HEADERS, maybe_print_json, parse_month, pretty_table, record_row};

pub fn handle(conn: &Connection, m: &clap::ArgMatches, notifier: &dyn Notifier) -> Result<()> {
    let confirm = ConsoleConfirm::new(m.get_flag("yes"));
    let mut actions = StoreActions::new(RecordStore::new(conn), notifier, &confirm);
    match m.subcommand() {
        Some(("list", sub)) => list(conn, sub)?,
        Some(("show", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            let record = RecordStore::new(conn).require(id)?;
            actions.edit(&record)?;
        }
        Some(("delete", sub)) => actions.delete(*sub.get_one::<i64>("id").unwrap())?,
        Some(("duplicate", sub)) => actions.duplicate(*sub.get_one::<i64>("id").unwrap())?,
        _ => {}
    }
    Ok(())
}

/// Record actions carried out against the store, with console feedback.
pub struct StoreActions<'a> {
    store: RecordStore<'a>,
    notifier: &'a dyn Notifier,
    confirm: &'a dyn Confirm,
}

impl<'a> StoreActions<'a> {
    pub fn new(store: RecordStore<'a>, notifier: &'a dyn Notifier, confirm: &'a dyn Confirm) -> Self {
        Self {
            store,
            notifier,
            confirm,
        }
    }
}

impl RecordActions for StoreActions<'_> {
    /// Show the record as the edit form would be seeded, with the command to change it.
    fn edit(&mut self, record: &Record) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(record)?);
        println!("Edit with: daybook {} edit {} [fields]", record.kind(), record.id);
        Ok(())
    }

    fn duplicate(&mut self, id: RecordId) -> Result<()> {
        let copy = self.store.duplicate(id)?;
        self.notifier
            .success(&format!("Duplicated #{} as #{}", id, copy.id));
        Ok(())
    }

    fn delete(&mut self, id: RecordId) -> Result<()> {
        if !self.confirm.confirm(&format!("Delete record #{}?", id)) {
            return Ok(());
        }
        if self.store.delete(id)? {
            self.notifier.success(&format!("Deleted #{}", id));
        } else {
            self.notifier.error(&format!("Record {} not found", id));
        }
        Ok(())
    }
}

pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<Record>> {
    let mut data = RecordStore::new(conn).all()?;
    if let Some(kind) = sub.get_one::<String>("kind") {
        let kind: RecordKind = kind.parse()?;
        data.retain(|r| r.kind() == kind);
    }
    if let Some(month) = sub.get_one::<String>("month") {
        let (y, m) = parse_month(month)?;
        data.retain(|r| r.date().year() == y && r.date().month() == m);
    }
    data.sort_by(|a, b| b.date().cmp(&a.date()).then(b.id.cmp(&a.id)));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        data.truncate(*limit);
    }
    Ok(data)
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data.iter().map(record_row).collect();
        println!("{}", pretty_table(&RECORD_HEADERS, rows));
    }
    Ok(())
}
