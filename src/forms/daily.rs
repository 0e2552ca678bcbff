// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use tracing::info;

use super::{AmountInput, FormMode, Submitted, dispatch};
use crate::error::ValidationError;
use crate::models::{CategoryConfig, DailyEntry, Entry, EntryType, Record, Template};
use crate::notify::{Confirm, Notifier};
use crate::store::{RecordSink, TemplateStore};
use crate::utils::today;

/// Income/expense entry form.
#[derive(Debug, Clone)]
pub struct DailyForm {
    mode: FormMode,
    categories: CategoryConfig,
    pub date: NaiveDate,
    entry_type: EntryType,
    sub_category: String,
    pub amount: AmountInput,
    pub note: String,
}

impl DailyForm {
    pub fn new(categories: CategoryConfig) -> Self {
        let sub_category = categories
            .for_type(EntryType::Expense)
            .first()
            .cloned()
            .unwrap_or_default();
        Self {
            mode: FormMode::Create,
            categories,
            date: today(),
            entry_type: EntryType::Expense,
            sub_category,
            amount: AmountInput::new(),
            note: String::new(),
        }
    }

    pub fn edit(record: &Record, categories: CategoryConfig) -> Result<Self> {
        let Entry::Daily(d) = &record.entry else {
            return Err(anyhow!("Record {} is not a daily record", record.id));
        };
        Ok(Self {
            mode: FormMode::Edit(record.id),
            categories,
            date: d.date,
            entry_type: d.r#type,
            sub_category: d.sub_category.clone(),
            amount: AmountInput::from_amount(d.amount),
            note: d.note.clone().unwrap_or_default(),
        })
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    pub fn sub_category(&self) -> &str {
        &self.sub_category
    }

    /// Categories offered for the current type.
    pub fn choices(&self) -> &[String] {
        self.categories.for_type(self.entry_type)
    }

    /// Switch income/expense. Outside edit mode a subCategory missing from
    /// the new list falls back to that list's first entry.
    pub fn set_type(&mut self, t: EntryType) {
        self.entry_type = t;
        if !self.mode.is_editing() && !self.choices().contains(&self.sub_category) {
            self.sub_category = self.choices().first().cloned().unwrap_or_default();
        }
    }

    /// Pick a category from the live list; unknown names are ignored.
    pub fn set_sub_category(&mut self, name: &str) -> bool {
        if self.choices().iter().any(|c| c == name) {
            self.sub_category = name.to_string();
            true
        } else {
            false
        }
    }

    pub fn validate(&self) -> Result<DailyEntry, ValidationError> {
        let amount = self.amount.value().ok_or(ValidationError::InvalidAmount)?;
        if self.sub_category.trim().is_empty() {
            return Err(ValidationError::MissingCategory);
        }
        let note = self.note.trim();
        Ok(DailyEntry {
            date: self.date,
            r#type: self.entry_type,
            sub_category: self.sub_category.clone(),
            amount,
            note: (!note.is_empty()).then(|| note.to_string()),
        })
    }

    pub fn submit(
        &mut self,
        sink: &mut dyn RecordSink,
        notifier: &dyn Notifier,
    ) -> Result<Submitted> {
        let outcome = dispatch(
            self.mode,
            self.validate().map(Entry::Daily),
            sink,
            notifier,
        )?;
        if let Submitted::Added(_) = outcome {
            self.amount.clear();
            self.note.clear();
        }
        Ok(outcome)
    }

    /// Save the current input as a preset. Named after the note, else the category.
    pub fn save_template(
        &self,
        templates: &mut TemplateStore<'_>,
        notifier: &dyn Notifier,
    ) -> Result<Option<Template>> {
        let Some(amount) = self.amount.value() else {
            notifier.error(&ValidationError::TemplateNeedsAmount.to_string());
            return Ok(None);
        };
        let note = self.note.trim().to_string();
        let template = Template {
            id: templates.next_id(),
            name: if note.is_empty() {
                self.sub_category.clone()
            } else {
                note.clone()
            },
            r#type: self.entry_type,
            sub_category: self.sub_category.clone(),
            amount,
            note,
        };
        templates.add(template.clone())?;
        info!(id = %template.id, "template saved");
        notifier.success("Saved as quick template");
        Ok(Some(template))
    }

    /// Overwrite type, subCategory, amount and note with the template's values.
    pub fn apply_template(&mut self, t: &Template) {
        self.entry_type = t.r#type;
        self.sub_category = t.sub_category.clone();
        self.amount = AmountInput::from_amount(t.amount);
        self.note = t.note.clone();
    }

    pub fn delete_template(
        &self,
        templates: &mut TemplateStore<'_>,
        id: &str,
        confirm: &dyn Confirm,
    ) -> Result<bool> {
        if !confirm.confirm("Delete this template?") {
            return Ok(false);
        }
        templates.delete(id)
    }
}
