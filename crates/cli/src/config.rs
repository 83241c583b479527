// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration file loading and flag resolution.
//!
//! Settings come from three places, highest priority first: command-line
//! flags, the TOML config file, built-in defaults. Boolean flags can only
//! switch a setting on.

use std::path::Path;
use std::time::Duration;

use redraw::Options;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::{Cli, Command};
use crate::env;
use crate::frames::FrameMode;
use crate::run::Finish;
use crate::spinner;

/// Default delay between spinner frames
pub const DEFAULT_INTERVAL_MS: u64 = 80;

/// Errors that can occur while loading or resolving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Validation(String),
}

/// Contents of a config file. Every key is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Keep the cursor visible while redrawing
    #[serde(default)]
    pub show_cursor: Option<bool>,

    /// Erase the live region before exiting
    #[serde(default)]
    pub clear_on_exit: Option<bool>,

    /// Spinner frame delay
    #[serde(default)]
    pub interval_ms: Option<u64>,

    /// Pipe mode: show the last N lines
    #[serde(default)]
    pub tail: Option<usize>,

    /// Pipe mode: line that ends a frame
    #[serde(default)]
    pub delimiter: Option<String>,

    /// Spinner message
    #[serde(default)]
    pub message: Option<String>,
}

impl FileConfig {
    /// Parse config from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load config from a file path
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Load the file named by `--config` or `REDRAW_CONFIG`, if any.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit.map(Path::to_path_buf).or_else(env::config_path) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }
}

/// Spinner settings after resolution
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpinnerSettings {
    pub message: String,
    pub interval: Duration,
    pub ticks: Option<u64>,
}

/// What the binary should run
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Pipe(FrameMode),
    Spinner(SpinnerSettings),
}

/// Fully resolved settings for one run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub options: Options,
    pub finish: Finish,
    pub mode: Mode,
}

impl ResolvedConfig {
    /// Merge command-line flags over the config file.
    pub fn resolve(cli: &Cli, file: &FileConfig) -> Result<Self, ConfigError> {
        let show_cursor = cli.session.show_cursor || file.show_cursor.unwrap_or(false);
        let clear_on_exit = cli.session.clear_on_exit || file.clear_on_exit.unwrap_or(false);

        let mode = match cli.selected_command() {
            Command::Pipe(args) => {
                // Flags pick the mode as a unit so a file delimiter cannot
                // collide with a --tail flag.
                let (tail, delimiter) = if args.tail.is_some() || args.delimiter.is_some() {
                    (args.tail, args.delimiter)
                } else {
                    (file.tail, file.delimiter.clone())
                };
                Mode::Pipe(frame_mode(tail, delimiter)?)
            }
            Command::Spinner(args) => {
                let interval_ms = args
                    .interval_ms
                    .or(file.interval_ms)
                    .unwrap_or(DEFAULT_INTERVAL_MS);
                if interval_ms == 0 {
                    return Err(ConfigError::Validation(
                        "interval_ms must be greater than zero".to_string(),
                    ));
                }
                let message = args
                    .message
                    .or_else(|| file.message.clone())
                    .unwrap_or_else(spinner::default_message);
                Mode::Spinner(SpinnerSettings {
                    message,
                    interval: Duration::from_millis(interval_ms),
                    ticks: args.ticks,
                })
            }
        };

        Ok(Self {
            options: Options::new().with_show_cursor(show_cursor),
            finish: Finish::from_clear_flag(clear_on_exit),
            mode,
        })
    }
}

fn frame_mode(tail: Option<usize>, delimiter: Option<String>) -> Result<FrameMode, ConfigError> {
    match (tail, delimiter) {
        (Some(_), Some(_)) => Err(ConfigError::Validation(
            "tail and delimiter cannot be combined".to_string(),
        )),
        (Some(0), None) => Err(ConfigError::Validation(
            "tail must be at least 1".to_string(),
        )),
        (Some(size), None) => Ok(FrameMode::Tail(size)),
        (None, Some(delimiter)) => Ok(FrameMode::Delimited(delimiter)),
        (None, None) => Ok(FrameMode::Line),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
