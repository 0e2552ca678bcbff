// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Browse view: a month calendar of one record kind, or a free-text search over it.

mod aggregate;
mod search;

pub use aggregate::{
    DayInfo, MonthSummary, aggregate_day, days_in_month, leading_blanks, month_grid,
    summarize_month,
};
pub use search::{matches, search};

use anyhow::{Result, anyhow};
use chrono::{Datelike, NaiveDate};

use crate::models::{Record, RecordId, RecordKind};
use crate::store::RecordActions;
use crate::utils::today;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Calendar,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordAction {
    Edit(RecordId),
    Duplicate(RecordId),
    Delete(RecordId),
}

#[derive(Debug, Clone)]
pub struct CalendarView {
    kind: RecordKind,
    year: i32,
    month: u32,
    selected: NaiveDate,
    query: String,
    mode: ViewMode,
}

impl CalendarView {
    pub fn new(kind: RecordKind) -> Self {
        Self::starting_at(kind, today())
    }

    pub fn starting_at(kind: RecordKind, date: NaiveDate) -> Self {
        Self {
            kind,
            year: date.year(),
            month: date.month(),
            selected: date,
            query: String::new(),
            mode: ViewMode::Calendar,
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn select(&mut self, date: NaiveDate) {
        self.selected = date;
    }

    /// Select a day of the displayed month.
    pub fn select_day(&mut self, day: u32) -> Result<()> {
        self.selected = NaiveDate::from_ymd_opt(self.year, self.month, day)
            .ok_or_else(|| anyhow!("Invalid day {} for {}-{:02}", day, self.year, self.month))?;
        Ok(())
    }

    pub fn change_month(&mut self, month: u32) -> Result<()> {
        if !(1..=12).contains(&month) {
            return Err(anyhow!("Invalid month number {}", month));
        }
        self.month = month;
        Ok(())
    }

    /// Years outside the range chrono can represent are clamped.
    pub fn change_year(&mut self, year: i32) {
        self.year = year.clamp(NaiveDate::MIN.year(), NaiveDate::MAX.year());
    }

    /// Step the displayed month forwards or backwards, rolling over years.
    pub fn shift_month(&mut self, delta: i32) {
        let index = i64::from(self.year) * 12 + i64::from(self.month) - 1 + i64::from(delta);
        let year = index
            .div_euclid(12)
            .clamp(i64::from(NaiveDate::MIN.year()), i64::from(NaiveDate::MAX.year()));
        self.year = year as i32;
        self.month = index.rem_euclid(12) as u32 + 1;
    }

    pub fn jump_to_today(&mut self) {
        let now = today();
        self.year = now.year();
        self.month = now.month();
        self.selected = now;
        self.query.clear();
    }

    pub fn toggle_search(&mut self) {
        match self.mode {
            ViewMode::Calendar => {
                self.query.clear();
                self.mode = ViewMode::Search;
            }
            ViewMode::Search => self.exit_search(),
        }
    }

    /// Back to the calendar. Only the query is reset; month and selection stay.
    pub fn exit_search(&mut self) {
        self.mode = ViewMode::Calendar;
        self.query.clear();
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn day_info(&self, records: &[Record], day: u32) -> Result<DayInfo> {
        let date = NaiveDate::from_ymd_opt(self.year, self.month, day)
            .ok_or_else(|| anyhow!("Invalid day {} for {}-{:02}", day, self.year, self.month))?;
        Ok(aggregate_day(records, self.kind, date))
    }

    pub fn grid(&self, records: &[Record]) -> Result<Vec<Vec<Option<DayInfo>>>> {
        month_grid(records, self.kind, self.year, self.month)
    }

    pub fn summary(&self, records: &[Record]) -> MonthSummary {
        summarize_month(records, self.kind, self.year, self.month)
    }

    /// Search hits in search mode, otherwise the selected day's records.
    pub fn display_records(&self, records: &[Record]) -> Vec<Record> {
        match self.mode {
            ViewMode::Search => search(records, self.kind, &self.query),
            ViewMode::Calendar => records
                .iter()
                .filter(|r| r.kind() == self.kind && r.date() == self.selected)
                .cloned()
                .collect(),
        }
    }

    /// Hand a per-record action to the owner of the records, unchanged.
    pub fn dispatch(
        &self,
        action: RecordAction,
        records: &[Record],
        handler: &mut dyn RecordActions,
    ) -> Result<()> {
        match action {
            RecordAction::Edit(id) => {
                let record = records
                    .iter()
                    .find(|r| r.id == id)
                    .ok_or_else(|| anyhow!("Record {} not found", id))?;
                handler.edit(record)
            }
            RecordAction::Duplicate(id) => handler.duplicate(id),
            RecordAction::Delete(id) => handler.delete(id),
        }
    }
}
