// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Redraw terminal output in place
#[derive(Parser, Debug, Clone)]
#[command(name = "redraw", version, about = "Redraw terminal output in place")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub session: SessionArgs,
}

impl Cli {
    /// The selected subcommand; `pipe` when none was given.
    pub fn selected_command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or_else(|| Command::Pipe(PipeArgs::default()))
    }
}

/// Flags shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// Keep the terminal cursor visible while redrawing
    #[arg(long, global = true)]
    pub show_cursor: bool,

    /// Erase the live region before exiting instead of leaving the last frame
    #[arg(long, global = true)]
    pub clear_on_exit: bool,

    /// TOML config file (defaults to $REDRAW_CONFIG when set)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Redraw frames read from stdin (default)
    Pipe(PipeArgs),
    /// Animate a spinner next to a message
    Spinner(SpinnerArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct PipeArgs {
    /// Show the last N input lines instead of only the latest one
    #[arg(long, value_name = "N", conflicts_with = "delimiter")]
    pub tail: Option<usize>,

    /// Input line that ends a multi-line frame
    #[arg(long, value_name = "LINE")]
    pub delimiter: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct SpinnerArgs {
    /// Text shown next to the spinner
    #[arg(short = 'm', long)]
    pub message: Option<String>,

    /// Delay between frames in milliseconds
    #[arg(long, value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// Stop after this many frames (runs until interrupted otherwise)
    #[arg(long, value_name = "N")]
    pub ticks: Option<u64>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
