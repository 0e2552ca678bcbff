// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::cell::{Cell, RefCell};
use std::io::{self, BufRead, Write};

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Fire-and-forget channel for user-facing messages.
pub trait Notifier {
    fn notify(&self, message: &str, kind: NoticeKind);

    fn success(&self, message: &str) {
        self.notify(message, NoticeKind::Success);
    }

    fn error(&self, message: &str) {
        self.notify(message, NoticeKind::Error);
    }
}

/// Prints notices to the terminal and remembers whether any error was shown.
#[derive(Debug, Default)]
pub struct ConsoleNotifier {
    errored: Cell<bool>,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn had_error(&self) -> bool {
        self.errored.get()
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str, kind: NoticeKind) {
        debug!(?kind, message, "notify");
        match kind {
            NoticeKind::Success => println!("✔ {}", message),
            NoticeKind::Error => {
                self.errored.set(true);
                eprintln!("✖ {}", message);
            }
        }
    }
}

/// Keeps every notice in memory; handy for embedding and for tests.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    notices: RefCell<Vec<(String, NoticeKind)>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<(String, NoticeKind)> {
        self.notices.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.notices
            .borrow()
            .iter()
            .filter(|(_, k)| *k == NoticeKind::Error)
            .map(|(m, _)| m.clone())
            .collect()
    }

    pub fn last(&self) -> Option<(String, NoticeKind)> {
        self.notices.borrow().last().cloned()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, message: &str, kind: NoticeKind) {
        self.notices.borrow_mut().push((message.to_string(), kind));
    }
}

/// Asks the user to confirm a destructive action.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Confirms on the terminal, or always when constructed with `assume_yes`.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleConfirm {
    assume_yes: bool,
}

impl ConsoleConfirm {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Confirm for ConsoleConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        print!("{} [y/N] ", prompt);
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

/// Fixed answer, for non-interactive callers.
#[derive(Debug, Clone, Copy)]
pub struct Always(pub bool);

impl Confirm for Always {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}
