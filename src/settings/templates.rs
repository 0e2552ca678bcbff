// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing::debug;

use crate::models::Template;
use crate::notify::Confirm;
use crate::store::TemplateStore;

pub const TEMPLATE_NAME_MAX: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Enter,
    Escape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Draft {
    id: String,
    name: String,
}

/// Template list with click-to-edit renaming.
pub struct TemplateSettings<'a> {
    store: TemplateStore<'a>,
    editing: Option<Draft>,
}

impl<'a> TemplateSettings<'a> {
    pub fn new(store: TemplateStore<'a>) -> Self {
        Self {
            store,
            editing: None,
        }
    }

    pub fn templates(&self) -> &[Template] {
        self.store.list()
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing.as_ref().map(|d| d.id.as_str())
    }

    pub fn draft_name(&self) -> Option<&str> {
        self.editing.as_ref().map(|d| d.name.as_str())
    }

    /// Open the rename field for `id`, prefilled with the current name.
    pub fn start_edit(&mut self, id: &str) -> bool {
        let Some(t) = self.store.get(id) else {
            return false;
        };
        self.editing = Some(Draft {
            id: t.id.clone(),
            name: t.name.clone(),
        });
        true
    }

    /// Replace the draft text, capped at the field length.
    pub fn input(&mut self, text: &str) {
        if let Some(d) = self.editing.as_mut() {
            d.name = text.chars().take(TEMPLATE_NAME_MAX).collect();
        }
    }

    pub fn key(&mut self, key: EditKey) -> Result<()> {
        match key {
            EditKey::Enter => self.commit().map(|_| ()),
            EditKey::Escape => {
                self.editing = None;
                Ok(())
            }
        }
    }

    pub fn blur(&mut self) -> Result<()> {
        self.commit().map(|_| ())
    }

    /// Close the field. A non-blank draft becomes the new name.
    pub fn commit(&mut self) -> Result<bool> {
        let Some(draft) = self.editing.take() else {
            return Ok(false);
        };
        let name = draft.name.trim();
        if name.is_empty() {
            return Ok(false);
        }
        debug!(id = %draft.id, name, "renaming template");
        self.store.rename(&draft.id, name)
    }

    /// Shorthand for start, type, confirm.
    pub fn rename(&mut self, id: &str, name: &str) -> Result<bool> {
        if !self.start_edit(id) {
            return Ok(false);
        }
        self.input(name);
        self.commit()
    }

    pub fn delete(&mut self, id: &str, confirm: &dyn Confirm) -> Result<bool> {
        if !confirm.confirm("Delete this template?") {
            return Ok(false);
        }
        if self.editing_id() == Some(id) {
            self.editing = None;
        }
        self.store.delete(id)
    }
}
