// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line front end for the `redraw` crate.
//!
//! `redraw pipe` redraws lines read from stdin in place; `redraw spinner`
//! animates a spinner. Both hide the cursor while drawing and restore it
//! when they finish.

pub mod cli;
pub mod config;
pub mod diagnostic;
pub mod env;
pub mod frames;
pub mod run;
pub mod spinner;
