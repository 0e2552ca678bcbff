// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod categories;
mod players;
mod reorder;
mod templates;

pub use categories::CategorySettings;
pub use players::PlayerSettings;
pub use reorder::{move_by_identity, move_item};
pub use templates::{EditKey, TEMPLATE_NAME_MAX, TemplateSettings};

use crate::error::ValidationError;

/// Trim a new list entry and reject blanks and case-insensitive repeats.
pub(crate) fn clean_new_name(
    input: &str,
    existing: &[String],
    empty: ValidationError,
    duplicate: fn(String) -> ValidationError,
) -> Result<String, ValidationError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(empty);
    }
    let lower = name.to_lowercase();
    if existing.iter().any(|e| e.to_lowercase() == lower) {
        return Err(duplicate(name.to_string()));
    }
    Ok(name.to_string())
}
