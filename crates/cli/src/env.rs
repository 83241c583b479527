// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by redraw are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

use std::path::PathBuf;

/// `REDRAW_CONFIG` — Config file used when `--config` is not given.
pub fn config_path() -> Option<PathBuf> {
    std::env::var(names::REDRAW_CONFIG)
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

/// `REDRAW_DEBUG` — Print debug diagnostics to stderr.
pub fn debug_enabled() -> bool {
    std::env::var(names::REDRAW_DEBUG).is_ok_and(|v| is_truthy(&v))
}

/// Any value except empty, `0`, `false` or `off` turns a flag on.
fn is_truthy(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "off"
    )
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
