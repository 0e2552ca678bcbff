// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use chrono::NaiveDate;

use super::{AmountInput, FormMode, Submitted, dispatch};
use crate::error::ValidationError;
use crate::models::{Entry, MahjongEntry, Record};
use crate::notify::Notifier;
use crate::store::RecordSink;
use crate::utils::today;

pub const PLAYERS_PER_GAME: usize = 3;

#[derive(Debug, Clone)]
pub struct MahjongForm {
    mode: FormMode,
    roster: Vec<String>,
    pub date: NaiveDate,
    players: Vec<String>,
    pub win: bool,
    pub amount: AmountInput,
}

impl MahjongForm {
    pub fn new(roster: Vec<String>) -> Self {
        Self {
            mode: FormMode::Create,
            roster,
            date: today(),
            players: Vec::new(),
            win: true,
            amount: AmountInput::new(),
        }
    }

    pub fn edit(record: &Record, roster: Vec<String>) -> Result<Self> {
        let Entry::Mahjong(m) = &record.entry else {
            return Err(anyhow!("Record {} is not a mahjong record", record.id));
        };
        Ok(Self {
            mode: FormMode::Edit(record.id),
            roster,
            date: m.date,
            players: m.players.clone(),
            win: m.is_win,
            amount: AmountInput::from_amount(m.amount),
        })
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    /// Deselect a chosen player, or select a roster player while seats remain.
    /// Returns whether the selection changed.
    pub fn toggle(&mut self, player: &str) -> bool {
        if let Some(pos) = self.players.iter().position(|p| p == player) {
            self.players.remove(pos);
            return true;
        }
        if self.players.len() < PLAYERS_PER_GAME && self.roster.iter().any(|p| p == player) {
            self.players.push(player.to_string());
            return true;
        }
        false
    }

    pub fn validate(&self) -> Result<MahjongEntry, ValidationError> {
        if self.players.len() != PLAYERS_PER_GAME {
            return Err(ValidationError::PlayerCount);
        }
        let amount = self.amount.value().ok_or(ValidationError::InvalidAmount)?;
        Ok(MahjongEntry {
            date: self.date,
            players: self.players.clone(),
            is_win: self.win,
            amount,
        })
    }

    pub fn submit(
        &mut self,
        sink: &mut dyn RecordSink,
        notifier: &dyn Notifier,
    ) -> Result<Submitted> {
        let outcome = dispatch(
            self.mode,
            self.validate().map(Entry::Mahjong),
            sink,
            notifier,
        )?;
        if let Submitted::Added(_) = outcome {
            self.amount.clear();
            self.players.clear();
        }
        Ok(outcome)
    }
}
