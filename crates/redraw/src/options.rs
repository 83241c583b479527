// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Session options.

use serde::{Deserialize, Serialize};

/// Options fixed when a [`Redrawer`](crate::Redrawer) is created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Leave the terminal cursor visible while rendering.
    ///
    /// When false (the default) the first render hides the cursor and
    /// [`done`](crate::Redrawer::done) shows it again.
    pub show_cursor: bool,
}

impl Options {
    /// Default options: the cursor is hidden while rendering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the cursor stays visible.
    pub fn with_show_cursor(mut self, show_cursor: bool) -> Self {
        self.show_cursor = show_cursor;
        self
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
