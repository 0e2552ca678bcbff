// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod config;
mod local;
mod records;

pub use config::ConfigStore;
pub use local::{LocalStorage, TEMPLATES_KEY, TemplateStore};
pub use records::RecordStore;

use anyhow::Result;

use crate::models::{Entry, Record, RecordId};

/// Receives the payload of a successful form submission.
pub trait RecordSink {
    fn add(&mut self, entry: Entry) -> Result<Record>;
    fn update(&mut self, record: Record) -> Result<Record>;
}

/// Per-record actions offered by the browse view.
pub trait RecordActions {
    fn edit(&mut self, record: &Record) -> Result<()>;
    fn duplicate(&mut self, id: RecordId) -> Result<()>;
    fn delete(&mut self, id: RecordId) -> Result<()>;
}

impl RecordSink for Vec<Record> {
    fn add(&mut self, entry: Entry) -> Result<Record> {
        let id = self.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let record = Record { id, entry };
        self.push(record.clone());
        Ok(record)
    }

    fn update(&mut self, record: Record) -> Result<Record> {
        match self.iter_mut().find(|r| r.id == record.id) {
            Some(slot) => {
                *slot = record.clone();
                Ok(record)
            }
            None => Err(anyhow::anyhow!("Record {} not found", record.id)),
        }
    }
}
