// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Escape sequence vocabulary used to update a live region.
//!
//! Sequences come from crossterm's ANSI commands and are appended to an
//! in-memory buffer so a whole update can be written in one call.

use crossterm::cursor::{Hide, MoveDown, MoveToColumn, MoveUp, Show};
use crossterm::terminal::{Clear, ClearType};
use crossterm::Command;

/// Accumulates text and escape sequences for a single write.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EscapeBuffer {
    buf: String,
}

impl EscapeBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    fn command(&mut self, command: impl Command) -> &mut Self {
        // Formatting into a String cannot fail.
        let _ = command.write_ansi(&mut self.buf);
        self
    }

    /// Move the cursor up `count` lines. Nothing is emitted for zero.
    ///
    /// A single sequence moves at most `u16::MAX` lines, so larger counts
    /// are split across several.
    pub fn cursor_up(&mut self, count: usize) -> &mut Self {
        let mut remaining = count;
        while remaining > 0 {
            let step = u16::try_from(remaining).unwrap_or(u16::MAX);
            self.command(MoveUp(step));
            remaining -= usize::from(step);
        }
        self
    }

    /// Move the cursor down one line
    pub fn cursor_down(&mut self) -> &mut Self {
        self.command(MoveDown(1))
    }

    /// Move the cursor to column 0 of the current line
    pub fn cursor_to_line_start(&mut self) -> &mut Self {
        self.command(MoveToColumn(0))
    }

    /// Erase the whole current line
    pub fn erase_line(&mut self) -> &mut Self {
        self.command(Clear(ClearType::CurrentLine))
    }

    /// Erase from the cursor to the end of the screen
    pub fn erase_down(&mut self) -> &mut Self {
        self.command(Clear(ClearType::FromCursorDown))
    }

    /// Erase `count` lines, walking upward from the current one.
    ///
    /// Leaves the cursor at column 0 of the topmost erased line. Zero lines
    /// emits nothing.
    pub fn erase_lines(&mut self, count: usize) -> &mut Self {
        for i in 0..count {
            self.erase_line();
            if i + 1 < count {
                self.cursor_up(1);
            }
        }
        if count > 0 {
            self.cursor_to_line_start();
        }
        self
    }

    /// Hide the terminal cursor
    pub fn hide_cursor(&mut self) -> &mut Self {
        self.command(Hide)
    }

    /// Show the terminal cursor
    pub fn show_cursor(&mut self) -> &mut Self {
        self.command(Show)
    }

    /// Append literal text
    pub fn text(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(text);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.buf.as_bytes()
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

#[cfg(test)]
#[path = "escape_tests.rs"]
mod tests;
