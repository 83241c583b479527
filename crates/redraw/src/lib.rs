// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Redraw a live region of terminal output in place.
//!
//! A [`Redrawer`] takes successive full-text frames, diffs each one line by
//! line against the frame it drew last, and writes only the cursor movement
//! and erase sequences needed to make the terminal show the new frame. It is
//! meant for progress bars, spinners and status lines that should update
//! without scrolling.
//!
//! ```no_run
//! let mut live = redraw::create(std::io::stderr(), redraw::Options::default());
//! for pct in (0..=100).step_by(10) {
//!     live.render(&format!("downloading… {pct}%"))?;
//! }
//! live.done()?;
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! One session owns the terminal cursor while it renders. Running two
//! sessions against the same terminal at once is not coordinated.

mod escape;
mod options;
mod redrawer;

pub use escape::EscapeBuffer;
pub use options::Options;
pub use redrawer::{create, Redrawer, LINE_SEPARATOR};
