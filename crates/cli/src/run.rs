// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Drivers that feed frames into a [`Redrawer`].

use std::io::{self, BufRead, BufReader, Read, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use redraw::Redrawer;
use thiserror::Error;

use crate::config::{ConfigError, SpinnerSettings};
use crate::diagnostic::print_debug;
use crate::frames::FrameAssembler;
use crate::spinner::Spinner;

/// How often a waiting driver looks at the interrupt flag.
pub const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Errors that end a run
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Failed to read input: {0}")]
    Read(#[source] io::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Why a run stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exit {
    /// Input ran out or the tick limit was reached
    Completed,
    /// The interrupt flag was raised
    Interrupted,
}

impl Exit {
    /// Process exit status: 0, or 128 + SIGINT.
    pub fn code(self) -> i32 {
        match self {
            Self::Completed => 0,
            Self::Interrupted => 130,
        }
    }
}

/// What happens to the live region when a run ends
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Finish {
    /// Leave the last frame on screen
    #[default]
    Keep,
    /// Erase the last frame
    Clear,
}

impl Finish {
    pub fn from_clear_flag(clear: bool) -> Self {
        if clear {
            Self::Clear
        } else {
            Self::Keep
        }
    }
}

/// End the live region, restoring the cursor.
pub fn finish<W: Write>(redrawer: &mut Redrawer<W>, finish: Finish) -> io::Result<()> {
    if finish == Finish::Clear {
        redrawer.clear()?;
    }
    redrawer.done()
}

/// Render frames assembled from `input` until it ends or `interrupted` is set.
///
/// Input is read on a helper thread so an interrupt is noticed while stdin
/// is idle. Bytes that are not UTF-8 are replaced with U+FFFD. The session
/// is finished even when reading or rendering fails; the first error is
/// returned.
pub fn run_pipe<R, W>(
    input: R,
    redrawer: &mut Redrawer<W>,
    mut assembler: FrameAssembler,
    interrupted: &AtomicBool,
    finish_with: Finish,
) -> Result<Exit, RunError>
where
    R: Read + Send + 'static,
    W: Write,
{
    print_debug(format_args!("pipe mode: {:?}", assembler.mode()));
    let result = read_lines(input)
        .map_err(RunError::Read)
        .and_then(|lines| pipe_frames(&lines, redrawer, &mut assembler, interrupted));
    let finished = finish(redrawer, finish_with);
    let (exit, frames) = result?;
    finished?;
    print_debug(format_args!("rendered {} frames ({:?})", frames, exit));
    Ok(exit)
}

fn pipe_frames<W: Write>(
    lines: &Receiver<io::Result<String>>,
    redrawer: &mut Redrawer<W>,
    assembler: &mut FrameAssembler,
    interrupted: &AtomicBool,
) -> Result<(Exit, usize), RunError> {
    let mut frames = 0;
    loop {
        match lines.recv_timeout(POLL_INTERVAL) {
            Ok(line) => {
                if let Some(frame) = assembler.push_line(&line.map_err(RunError::Read)?) {
                    redrawer.render(&frame)?;
                    frames += 1;
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
        if interrupted.load(Ordering::Relaxed) {
            return Ok((Exit::Interrupted, frames));
        }
    }
    if let Some(frame) = assembler.finish() {
        redrawer.render(&frame)?;
        frames += 1;
    }
    Ok((Exit::Completed, frames))
}

/// Spawn the reader thread. The channel closes at end of input or after
/// the first read error.
fn read_lines<R: Read + Send + 'static>(input: R) -> io::Result<Receiver<io::Result<String>>> {
    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("redraw-input".to_string())
        .spawn(move || {
            let mut input = BufReader::new(input);
            let mut buf = Vec::new();
            loop {
                buf.clear();
                let line = match input.read_until(b'\n', &mut buf) {
                    Ok(0) => break,
                    Ok(_) => Ok(decode_line(&buf)),
                    Err(e) => Err(e),
                };
                let failed = line.is_err();
                if tx.send(line).is_err() || failed {
                    break;
                }
            }
        })?;
    Ok(rx)
}

/// Strip the line terminator (`\n` or `\r\n`) and decode lossily.
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

/// Animate a spinner until `ticks` frames are drawn or `interrupted` is set.
pub fn run_spinner<W: Write>(
    redrawer: &mut Redrawer<W>,
    settings: &SpinnerSettings,
    interrupted: &AtomicBool,
    finish_with: Finish,
) -> Result<Exit, RunError> {
    let result = spin(redrawer, settings, interrupted);
    let finished = finish(redrawer, finish_with);
    let (exit, ticks) = result?;
    finished?;
    print_debug(format_args!("spinner stopped after {} frames ({:?})", ticks, exit));
    Ok(exit)
}

fn spin<W: Write>(
    redrawer: &mut Redrawer<W>,
    settings: &SpinnerSettings,
    interrupted: &AtomicBool,
) -> io::Result<(Exit, u64)> {
    let mut ticks = 0;
    for frame in Spinner::new(settings.message.as_str()) {
        if interrupted.load(Ordering::Relaxed) {
            return Ok((Exit::Interrupted, ticks));
        }
        if settings.ticks.is_some_and(|max| ticks >= max) {
            break;
        }
        redrawer.render(&frame)?;
        ticks += 1;
        if settings.ticks != Some(ticks) {
            pause(settings.interval, interrupted);
        }
    }
    Ok((Exit::Completed, ticks))
}

/// Sleep for `interval` in [`POLL_INTERVAL`] slices, waking early once
/// `interrupted` is set.
fn pause(interval: Duration, interrupted: &AtomicBool) {
    let deadline = Instant::now() + interval;
    while !interrupted.load(Ordering::Relaxed) {
        let left = deadline.saturating_duration_since(Instant::now());
        if left.is_zero() {
            break;
        }
        thread::sleep(left.min(POLL_INTERVAL));
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
