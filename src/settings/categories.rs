// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing::debug;

use super::{clean_new_name, move_by_identity};
use crate::error::ValidationError;
use crate::models::EntryType;
use crate::notify::Notifier;
use crate::store::ConfigStore;

/// Expense and income category lists, edited one tab at a time.
pub struct CategorySettings<'a> {
    store: ConfigStore<'a>,
    active: EntryType,
}

impl<'a> CategorySettings<'a> {
    pub fn new(store: ConfigStore<'a>) -> Self {
        Self {
            store,
            active: EntryType::Expense,
        }
    }

    pub fn active(&self) -> EntryType {
        self.active
    }

    pub fn set_active(&mut self, tab: EntryType) {
        self.active = tab;
    }

    pub fn list(&self) -> Result<Vec<String>> {
        self.store.category_list(self.active)
    }

    pub fn add(&self, input: &str, notifier: &dyn Notifier) -> Result<bool> {
        let existing = self.list()?;
        match clean_new_name(
            input,
            &existing,
            ValidationError::EmptyCategory,
            ValidationError::DuplicateCategory,
        ) {
            Ok(name) => {
                self.store.add_category(self.active, &name)?;
                notifier.success(&format!("Added {} category '{}'", self.active, name));
                Ok(true)
            }
            Err(err) => {
                notifier.error(&err.to_string());
                Ok(false)
            }
        }
    }

    pub fn remove(&self, name: &str) -> Result<bool> {
        self.store.remove_category(self.active, name)
    }

    /// Drag `dragged` onto `over` within the active tab; the other tab is untouched.
    pub fn reorder(&self, dragged: &str, over: &str) -> Result<bool> {
        let mut list = self.list()?;
        if !move_by_identity(&mut list, &dragged.to_string(), &over.to_string()) {
            return Ok(false);
        }
        debug!(tab = %self.active, ?list, "categories reordered");
        self.store.set_categories(self.active, &list)?;
        Ok(true)
    }
}
