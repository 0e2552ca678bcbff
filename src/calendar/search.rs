// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Entry, Record, RecordKind};

/// Case-insensitive match on amount, note and the kind's own text fields.
pub fn matches(record: &Record, query: &str) -> bool {
    let q = query.to_lowercase();
    let hit = |s: &str| s.to_lowercase().contains(&q);
    if hit(&record.amount().normalize().to_string()) {
        return true;
    }
    if record.entry.note().is_some_and(hit) {
        return true;
    }
    match &record.entry {
        Entry::Daily(d) => hit(&d.sub_category),
        Entry::Tea(t) => hit(&t.shop) || hit(&t.item),
        Entry::Mahjong(m) => m.players.iter().any(|p| hit(p)),
    }
}

/// Records of `kind` matching `query`, newest date first. A blank query finds nothing.
pub fn search(records: &[Record], kind: RecordKind, query: &str) -> Vec<Record> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let mut out: Vec<Record> = records
        .iter()
        .filter(|r| r.kind() == kind && matches(r, query))
        .cloned()
        .collect();
    out.sort_by(|a, b| b.date().cmp(&a.date()));
    out
}
