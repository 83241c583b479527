// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spinner animation frames.
//!
//! The glyphs breathe: they run forward through the table and back again
//! without repeating the endpoints.

/// Spinner glyphs (platform-aware)
pub fn spinner_frames() -> &'static [&'static str] {
    if cfg!(target_os = "macos") {
        &["·", "✢", "✳", "✶", "✻", "✽"]
    } else {
        &["·", "✢", "*", "✶", "✻", "✽"]
    }
}

/// Full animation cycle (forward + reverse for breathing effect)
pub fn spinner_cycle() -> Vec<&'static str> {
    let frames = spinner_frames();
    let mut cycle: Vec<&str> = frames.to_vec();
    // Reverse half skips both endpoints: [·, ✢, *, ✶, ✻, ✽] then [✻, ✶, *, ✢]
    cycle.extend(frames.iter().rev().skip(1).take(frames.len() - 2));
    cycle
}

/// Verbs used for the default message
pub const SPINNER_VERBS: &[&str] = &[
    "Working",
    "Computing",
    "Processing",
    "Loading",
    "Preparing",
    "Waiting",
];

/// Get a random spinner verb
pub fn random_verb() -> &'static str {
    let idx = fastrand::usize(..SPINNER_VERBS.len());
    SPINNER_VERBS[idx]
}

/// Message shown when none is configured, e.g. `Working…`
pub fn default_message() -> String {
    format!("{}…", random_verb())
}

/// Endless iterator of spinner lines: `"<glyph> <message>"`.
#[derive(Clone, Debug)]
pub struct Spinner {
    cycle: Vec<&'static str>,
    index: usize,
    message: String,
}

impl Spinner {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            cycle: spinner_cycle(),
            index: 0,
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Iterator for Spinner {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let glyph = self.cycle.get(self.index)?;
        self.index = (self.index + 1) % self.cycle.len();
        if self.message.is_empty() {
            Some((*glyph).to_string())
        } else {
            Some(format!("{} {}", glyph, self.message))
        }
    }
}

#[cfg(test)]
#[path = "spinner_tests.rs"]
mod tests;
