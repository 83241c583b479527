// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `redraw` binary entry point.

use std::io;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use clap::Parser;

use redraw::Redrawer;
use redraw_cli::cli::Cli;
use redraw_cli::config::{FileConfig, Mode, ResolvedConfig};
use redraw_cli::diagnostic::{print_error, print_warning};
use redraw_cli::frames::FrameAssembler;
use redraw_cli::run::{run_pipe, run_spinner, Exit, RunError};

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(Exit::Completed) => {}
        Ok(exit) => std::process::exit(exit.code()),
        Err(e) => {
            print_error(e);
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<Exit, RunError> {
    let file = FileConfig::discover(cli.session.config.as_deref())?;
    let config = ResolvedConfig::resolve(cli, &file)?;
    let interrupted = interrupt_flag();
    let mut redrawer = Redrawer::stdout(config.options);

    match config.mode {
        Mode::Pipe(mode) => run_pipe(
            io::stdin(),
            &mut redrawer,
            FrameAssembler::new(mode),
            &interrupted,
            config.finish,
        ),
        Mode::Spinner(settings) => {
            run_spinner(&mut redrawer, &settings, &interrupted, config.finish)
        }
    }
}

/// Flag set by SIGINT so either mode can stop and restore the cursor.
fn interrupt_flag() -> Arc<AtomicBool> {
    let flag = Arc::new(AtomicBool::new(false));
    #[cfg(unix)]
    {
        if let Err(e) = signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(&flag))
        {
            print_warning(format_args!("Failed to handle SIGINT: {}", e));
        }
    }
    flag
}
