// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Turn a stream of input lines into frames.

use std::collections::VecDeque;

/// How input lines are grouped into frames
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FrameMode {
    /// Every line replaces the previous one
    #[default]
    Line,
    /// The last N lines form the frame
    Tail(usize),
    /// Lines accumulate until one equals the delimiter
    Delimited(String),
}

/// Collects input lines and yields complete frames.
#[derive(Debug)]
pub struct FrameAssembler {
    mode: FrameMode,
    pending: VecDeque<String>,
}

impl FrameAssembler {
    pub fn new(mode: FrameMode) -> Self {
        Self {
            mode,
            pending: VecDeque::new(),
        }
    }

    pub fn mode(&self) -> &FrameMode {
        &self.mode
    }

    /// Feed one input line (without its terminator).
    ///
    /// Returns the frame to render, if this line completes one.
    pub fn push_line(&mut self, line: &str) -> Option<String> {
        match &self.mode {
            FrameMode::Line => Some(line.to_string()),
            FrameMode::Tail(size) => {
                let size = *size;
                self.pending.push_back(line.to_string());
                while self.pending.len() > size {
                    self.pending.pop_front();
                }
                Some(self.joined())
            }
            FrameMode::Delimited(delimiter) => {
                if line == delimiter {
                    let frame = self.joined();
                    self.pending.clear();
                    Some(frame)
                } else {
                    self.pending.push_back(line.to_string());
                    None
                }
            }
        }
    }

    /// Frame left over once input ends.
    ///
    /// Only delimited mode holds back lines; a trailing partial frame is
    /// returned so it is not lost.
    pub fn finish(&mut self) -> Option<String> {
        if !matches!(self.mode, FrameMode::Delimited(_)) || self.pending.is_empty() {
            return None;
        }
        let frame = self.joined();
        self.pending.clear();
        Some(frame)
    }

    fn joined(&self) -> String {
        let lines: Vec<&str> = self.pending.iter().map(String::as_str).collect();
        lines.join("\n")
    }
}

#[cfg(test)]
#[path = "frames_tests.rs"]
mod tests;
