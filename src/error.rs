// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// User-input problems that stop a form or settings action before any state changes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid amount")]
    InvalidAmount,
    #[error("Please add a category in settings first")]
    MissingCategory,
    #[error("Enter an amount before saving a template")]
    TemplateNeedsAmount,
    #[error("Please enter a shop name")]
    MissingShop,
    #[error("Please enter an item name")]
    MissingItem,
    #[error("Please give a rating")]
    MissingRating,
    #[error("Please pick exactly 3 players")]
    PlayerCount,
    #[error("Please enter a category name")]
    EmptyCategory,
    #[error("Category '{0}' already exists")]
    DuplicateCategory(String),
    #[error("Please enter a player name")]
    EmptyPlayer,
    #[error("Player '{0}' already exists")]
    DuplicatePlayer(String),
    #[error("Amount must be a non-negative number: '{0}'")]
    RejectedAmountInput(String),
}
