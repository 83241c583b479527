// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostics on stderr, kept out of the live region on stdout.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

use crate::env;

/// Severity of a diagnostic line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
    Debug,
}

impl Level {
    fn label(self) -> &'static str {
        match self {
            Self::Error => "Error: ",
            Self::Warning => "Warning: ",
            Self::Debug => "debug: ",
        }
    }

    /// SGR color when writing to a terminal; debug lines stay plain.
    fn color(self) -> Option<&'static str> {
        match self {
            Self::Error => Some("31"),
            Self::Warning => Some("33"),
            Self::Debug => None,
        }
    }
}

/// Report a fatal problem, in red on a terminal.
pub fn print_error(msg: impl Display) {
    emit(Level::Error, msg);
}

/// Report a recoverable problem, in yellow on a terminal.
pub fn print_warning(msg: impl Display) {
    emit(Level::Warning, msg);
}

/// Trace a step of the run. Silent unless `REDRAW_DEBUG` is set.
pub fn print_debug(msg: impl Display) {
    if env::debug_enabled() {
        emit(Level::Debug, msg);
    }
}

fn emit(level: Level, msg: impl Display) {
    let stderr = io::stderr();
    let colored = stderr.is_terminal();
    // A failed stderr write has nowhere else to go.
    let _ = write_diagnostic(&mut stderr.lock(), level, msg, colored);
}

/// Write one diagnostic line, wrapping it in the level's color when `colored`.
fn write_diagnostic<W: Write>(
    writer: &mut W,
    level: Level,
    msg: impl Display,
    colored: bool,
) -> io::Result<()> {
    match level.color().filter(|_| colored) {
        Some(sgr) => writeln!(writer, "\x1b[{sgr}m{}{msg}\x1b[0m", level.label()),
        None => writeln!(writer, "{}{msg}", level.label()),
    }
}

#[cfg(test)]
#[path = "diagnostic_tests.rs"]
mod tests;
