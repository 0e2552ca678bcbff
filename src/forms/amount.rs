// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

static AMOUNT_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+\.?\d*|\.\d+)$").expect("amount pattern compiles"));

/// Raw text of an amount field. Negative and exponent input never gets in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmountInput {
    text: String,
}

impl AmountInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_amount(amount: Decimal) -> Self {
        Self {
            text: amount.normalize().to_string(),
        }
    }

    /// Keystroke filter: sign and exponent characters are swallowed.
    pub fn accepts_key(c: char) -> bool {
        !matches!(c, 'e' | 'E' | '+' | '-')
    }

    /// Replace the text. Rejected input leaves the previous text in place.
    pub fn set_text(&mut self, s: &str) -> bool {
        if s.is_empty() || (!s.contains('-') && AMOUNT_TEXT.is_match(s)) {
            self.text = s.to_string();
            true
        } else {
            false
        }
    }

    /// Type one character, as the field would receive it.
    pub fn push_key(&mut self, c: char) -> bool {
        if !Self::accepts_key(c) {
            return false;
        }
        let mut next = self.text.clone();
        next.push(c);
        self.set_text(&next)
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The amount, only when it parses and is strictly positive.
    pub fn value(&self) -> Option<Decimal> {
        let trimmed = self.text.trim_end_matches('.');
        let literal = if trimmed.starts_with('.') {
            format!("0{}", trimmed)
        } else {
            trimmed.to_string()
        };
        let d = literal.parse::<Decimal>().ok()?;
        (d > Decimal::ZERO).then_some(d)
    }
}
