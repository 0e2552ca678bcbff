// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use chrono::NaiveDate;

use super::{AmountInput, FormMode, Submitted, dispatch};
use crate::error::ValidationError;
use crate::models::{Entry, Ice, Rating, Record, Sugar, TeaEntry};
use crate::notify::Notifier;
use crate::store::RecordSink;
use crate::utils::today;

#[derive(Debug, Clone)]
pub struct TeaForm {
    mode: FormMode,
    pub date: NaiveDate,
    pub shop: String,
    pub item: String,
    pub sugar: Sugar,
    pub ice: Ice,
    pub amount: AmountInput,
    pub rating: Rating,
}

impl Default for TeaForm {
    fn default() -> Self {
        Self::new()
    }
}

impl TeaForm {
    pub fn new() -> Self {
        Self {
            mode: FormMode::Create,
            date: today(),
            shop: String::new(),
            item: String::new(),
            sugar: Sugar::default(),
            ice: Ice::default(),
            amount: AmountInput::new(),
            rating: Rating::default(),
        }
    }

    pub fn edit(record: &Record) -> Result<Self> {
        let Entry::Tea(t) = &record.entry else {
            return Err(anyhow!("Record {} is not a tea record", record.id));
        };
        Ok(Self {
            mode: FormMode::Edit(record.id),
            date: t.date,
            shop: t.shop.clone(),
            item: t.item.clone(),
            sugar: t.sugar,
            ice: t.ice,
            amount: AmountInput::from_amount(t.amount),
            rating: t.rating,
        })
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Checks run in order: shop, item, rating, amount.
    pub fn validate(&self) -> Result<TeaEntry, ValidationError> {
        let shop = self.shop.trim();
        if shop.is_empty() {
            return Err(ValidationError::MissingShop);
        }
        let item = self.item.trim();
        if item.is_empty() {
            return Err(ValidationError::MissingItem);
        }
        if self.rating.is_zero() {
            return Err(ValidationError::MissingRating);
        }
        let amount = self.amount.value().ok_or(ValidationError::InvalidAmount)?;
        Ok(TeaEntry {
            date: self.date,
            shop: shop.to_string(),
            item: item.to_string(),
            sugar: self.sugar,
            ice: self.ice,
            amount,
            rating: self.rating,
        })
    }

    pub fn submit(
        &mut self,
        sink: &mut dyn RecordSink,
        notifier: &dyn Notifier,
    ) -> Result<Submitted> {
        let outcome = dispatch(self.mode, self.validate().map(Entry::Tea), sink, notifier)?;
        if let Submitted::Added(_) = outcome {
            self.amount.clear();
            self.shop.clear();
            self.item.clear();
            self.rating = Rating::default();
        }
        Ok(outcome)
    }

    pub fn item_suggestions(&self, records: &[Record]) -> Vec<String> {
        item_suggestions(records, &self.shop)
    }
}

/// Distinct shops of earlier tea records, in first-seen order.
pub fn shop_suggestions(records: &[Record]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for r in records {
        if let Entry::Tea(t) = &r.entry {
            if !out.contains(&t.shop) {
                out.push(t.shop.clone());
            }
        }
    }
    out
}

/// Distinct items ordered at `shop`, in first-seen order.
pub fn item_suggestions(records: &[Record], shop: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for r in records {
        if let Entry::Tea(t) = &r.entry {
            if t.shop == shop && !out.contains(&t.item) {
                out.push(t.item.clone());
            }
        }
    }
    out
}
