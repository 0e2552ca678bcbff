// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type RecordId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Daily,
    Tea,
    Mahjong,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Daily => "daily",
            RecordKind::Tea => "tea",
            RecordKind::Mahjong => "mahjong",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(RecordKind::Daily),
            "tea" => Ok(RecordKind::Tea),
            "mahjong" => Ok(RecordKind::Mahjong),
            other => Err(anyhow!("Unknown record kind '{}' (use daily|tea|mahjong)", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Income,
    #[default]
    Expense,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Income => "income",
            EntryType::Expense => "expense",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(EntryType::Income),
            "expense" => Ok(EntryType::Expense),
            other => Err(anyhow!("Unknown type '{}' (use income|expense)", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sugar {
    None,
    Slight,
    #[default]
    Half,
    Less,
    Full,
}

impl Sugar {
    pub const ALL: [Sugar; 5] = [Sugar::None, Sugar::Slight, Sugar::Half, Sugar::Less, Sugar::Full];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sugar::None => "none",
            Sugar::Slight => "slight",
            Sugar::Half => "half",
            Sugar::Less => "less",
            Sugar::Full => "full",
        }
    }
}

impl fmt::Display for Sugar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sugar {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Sugar::ALL
            .into_iter()
            .find(|v| v.as_str() == wanted)
            .ok_or_else(|| anyhow!("Unknown sugar level '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ice {
    Hot,
    NoIce,
    LightIce,
    #[default]
    LessIce,
    Regular,
}

impl Ice {
    pub const ALL: [Ice; 5] = [Ice::Hot, Ice::NoIce, Ice::LightIce, Ice::LessIce, Ice::Regular];

    pub fn as_str(&self) -> &'static str {
        match self {
            Ice::Hot => "hot",
            Ice::NoIce => "no-ice",
            Ice::LightIce => "light-ice",
            Ice::LessIce => "less-ice",
            Ice::Regular => "regular",
        }
    }
}

impl fmt::Display for Ice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ice {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Ice::ALL
            .into_iter()
            .find(|v| v.as_str() == wanted)
            .ok_or_else(|| anyhow!("Unknown ice level '{}'", s))
    }
}

/// Star rating from 0 to 5 in half steps, stored as a count of half stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rating(u8);

impl Rating {
    pub const MAX_HALVES: u8 = 10;

    pub fn from_halves(halves: u8) -> Option<Self> {
        (halves <= Self::MAX_HALVES).then_some(Rating(halves))
    }

    pub fn halves(&self) -> u8 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn stars(&self) -> f64 {
        f64::from(self.0) / 2.0
    }
}

impl TryFrom<f64> for Rating {
    type Error = String;

    fn try_from(v: f64) -> Result<Self, Self::Error> {
        let doubled = v * 2.0;
        if !(0.0..=10.0).contains(&doubled) || doubled.fract() != 0.0 {
            return Err(format!("rating {} must be 0-5 in half steps", v));
        }
        Ok(Rating(doubled as u8))
    }
}

impl From<Rating> for f64 {
    fn from(r: Rating) -> f64 {
        r.stars()
    }
}

impl FromStr for Rating {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let v: f64 = s
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid rating '{}'", s))?;
        Rating::try_from(v).map_err(|e| anyhow!(e))
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 2 == 0 {
            write!(f, "{}", self.0 / 2)
        } else {
            write!(f, "{}.5", self.0 / 2)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyEntry {
    pub date: NaiveDate,
    pub r#type: EntryType,
    pub sub_category: String,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeaEntry {
    pub date: NaiveDate,
    pub shop: String,
    pub item: String,
    pub sugar: Sugar,
    pub ice: Ice,
    pub amount: Decimal,
    pub rating: Rating,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MahjongEntry {
    pub date: NaiveDate,
    pub players: Vec<String>,
    pub is_win: bool,
    pub amount: Decimal,
}

/// The payload of a journal record, discriminated by category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum Entry {
    Daily(DailyEntry),
    Tea(TeaEntry),
    Mahjong(MahjongEntry),
}

impl Entry {
    pub fn kind(&self) -> RecordKind {
        match self {
            Entry::Daily(_) => RecordKind::Daily,
            Entry::Tea(_) => RecordKind::Tea,
            Entry::Mahjong(_) => RecordKind::Mahjong,
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            Entry::Daily(d) => d.date,
            Entry::Tea(t) => t.date,
            Entry::Mahjong(m) => m.date,
        }
    }

    pub fn amount(&self) -> Decimal {
        match self {
            Entry::Daily(d) => d.amount,
            Entry::Tea(t) => t.amount,
            Entry::Mahjong(m) => m.amount,
        }
    }

    pub fn note(&self) -> Option<&str> {
        match self {
            Entry::Daily(d) => d.note.as_deref(),
            Entry::Tea(_) | Entry::Mahjong(_) => None,
        }
    }

    /// Short label used in listings: subCategory, shop, or the player names.
    pub fn label(&self) -> String {
        match self {
            Entry::Daily(d) => d.sub_category.clone(),
            Entry::Tea(t) => format!("{} / {}", t.shop, t.item),
            Entry::Mahjong(m) => m.players.join(", "),
        }
    }

    /// Amount with the sign it contributes to a day total.
    pub fn signed_amount(&self) -> Decimal {
        match self {
            Entry::Daily(d) => match d.r#type {
                EntryType::Income => d.amount,
                EntryType::Expense => -d.amount,
            },
            Entry::Tea(t) => -t.amount,
            Entry::Mahjong(m) => {
                if m.is_win {
                    m.amount
                } else {
                    -m.amount
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(flatten)]
    pub entry: Entry,
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        self.entry.kind()
    }

    pub fn date(&self) -> NaiveDate {
        self.entry.date()
    }

    pub fn amount(&self) -> Decimal {
        self.entry.amount()
    }
}

/// A saved preset of daily-form fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    pub r#type: EntryType,
    pub sub_category: String,
    pub amount: Decimal,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub expense: Vec<String>,
    pub income: Vec<String>,
}

impl CategoryConfig {
    pub fn for_type(&self, t: EntryType) -> &[String] {
        match t {
            EntryType::Expense => &self.expense,
            EntryType::Income => &self.income,
        }
    }
}
