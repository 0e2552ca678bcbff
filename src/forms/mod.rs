// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Entry forms for the three record kinds.
//!
//! A form owns transient input. `submit` validates it and hands a complete
//! entry to a [`RecordSink`]: `add` in create mode, `update` (same id) in edit
//! mode. A rejected submission is reported through the [`Notifier`] and leaves
//! both the sink and the input untouched.

mod amount;
mod daily;
mod mahjong;
mod tea;

pub use amount::AmountInput;
pub use daily::DailyForm;
pub use mahjong::{MahjongForm, PLAYERS_PER_GAME};
pub use tea::{TeaForm, item_suggestions, shop_suggestions};

use anyhow::Result;
use tracing::debug;

use crate::error::ValidationError;
use crate::models::{Entry, Record, RecordId};
use crate::notify::Notifier;
use crate::store::RecordSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

impl FormMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Submitted {
    Added(Record),
    Updated(Record),
    Rejected(ValidationError),
}

impl Submitted {
    pub fn record(&self) -> Option<&Record> {
        match self {
            Submitted::Added(r) | Submitted::Updated(r) => Some(r),
            Submitted::Rejected(_) => None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Submitted::Rejected(_))
    }
}

/// Shared tail of every form's submit: route to add or update, or report the rejection.
pub(crate) fn dispatch(
    mode: FormMode,
    validated: Result<Entry, ValidationError>,
    sink: &mut dyn RecordSink,
    notifier: &dyn Notifier,
) -> Result<Submitted> {
    let entry = match validated {
        Ok(entry) => entry,
        Err(err) => {
            debug!(%err, "submission rejected");
            notifier.error(&err.to_string());
            return Ok(Submitted::Rejected(err));
        }
    };
    match mode {
        FormMode::Create => Ok(Submitted::Added(sink.add(entry)?)),
        FormMode::Edit(id) => Ok(Submitted::Updated(sink.update(Record { id, entry })?)),
    }
}
