// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use super::{clean_new_name, move_by_identity};
use crate::error::ValidationError;
use crate::notify::Notifier;
use crate::store::ConfigStore;

pub struct PlayerSettings<'a> {
    store: ConfigStore<'a>,
}

impl<'a> PlayerSettings<'a> {
    pub fn new(store: ConfigStore<'a>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Result<Vec<String>> {
        self.store.players()
    }

    pub fn add(&self, input: &str, notifier: &dyn Notifier) -> Result<bool> {
        let existing = self.list()?;
        match clean_new_name(
            input,
            &existing,
            ValidationError::EmptyPlayer,
            ValidationError::DuplicatePlayer,
        ) {
            Ok(name) => {
                self.store.add_player(&name)?;
                notifier.success(&format!("Added player '{}'", name));
                Ok(true)
            }
            Err(err) => {
                notifier.error(&err.to_string());
                Ok(false)
            }
        }
    }

    pub fn remove(&self, name: &str) -> Result<bool> {
        self.store.remove_player(name)
    }

    pub fn reorder(&self, dragged: &str, over: &str) -> Result<bool> {
        let mut list = self.list()?;
        if !move_by_identity(&mut list, &dragged.to_string(), &over.to_string()) {
            return Ok(false);
        }
        self.store.set_players(&list)?;
        Ok(true)
    }
}
