// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Live region session: frame diffing and cursor bookkeeping.

use std::io::{self, Write};

use crate::escape::EscapeBuffer;
use crate::options::Options;

/// Separator between the lines of a frame.
pub const LINE_SEPARATOR: char = '\n';

/// Create a session that redraws frames onto `sink`.
pub fn create<W: Write>(sink: W, options: Options) -> Redrawer<W> {
    Redrawer::new(sink, options)
}

/// Redraws successive frames in place on a terminal.
///
/// Each call to [`render`](Self::render) compares the new frame with the
/// previous one line by line. Only changed lines are erased and rewritten;
/// unchanged lines are stepped over. A frame that is identical to the last
/// one writes nothing.
///
/// Calls must not be issued concurrently for one session, and two sessions
/// should not share a terminal since the cursor is a single resource.
#[derive(Debug)]
pub struct Redrawer<W: Write> {
    /// Always `Some` until `into_inner` takes it.
    sink: Option<W>,
    options: Options,
    /// Last rendered frame including its trailing separator.
    previous_output: String,
    previous_line_count: usize,
    cursor_hidden: bool,
}

impl Redrawer<io::Stdout> {
    /// Session writing to standard output.
    pub fn stdout(options: Options) -> Self {
        Self::new(io::stdout(), options)
    }
}

impl Redrawer<io::Stderr> {
    /// Session writing to standard error.
    pub fn stderr(options: Options) -> Self {
        Self::new(io::stderr(), options)
    }
}

impl<W: Write> Redrawer<W> {
    pub fn new(sink: W, options: Options) -> Self {
        Self {
            sink: Some(sink),
            options,
            previous_output: String::new(),
            previous_line_count: 0,
            cursor_hidden: false,
        }
    }

    /// Draw `text` as the current frame.
    ///
    /// The cursor moves back to the top of the previous frame, every line of
    /// the new frame is visited, and lines left over from a taller previous
    /// frame are erased. Sink errors are returned unchanged and leave the
    /// session state as it was.
    ///
    /// Frames taller than `u16::MAX` lines are walked back with several
    /// cursor-up sequences, one per `u16::MAX` lines.
    pub fn render(&mut self, text: &str) -> io::Result<()> {
        let mut seq = EscapeBuffer::new();
        let hide = !self.options.show_cursor && !self.cursor_hidden;
        if hide {
            seq.hide_cursor();
        }

        let mut output = String::with_capacity(text.len() + 1);
        output.push_str(text);
        output.push(LINE_SEPARATOR);

        if output == self.previous_output {
            if hide {
                self.write(&seq)?;
                self.cursor_hidden = true;
            }
            return Ok(());
        }

        let line_count = diff_frame(
            &mut seq,
            &self.previous_output,
            self.previous_line_count,
            &output,
        );
        self.write(&seq)?;

        if hide {
            self.cursor_hidden = true;
        }
        self.previous_output = output;
        self.previous_line_count = line_count;
        Ok(())
    }

    /// Erase the previously drawn frame from the screen.
    ///
    /// The cursor visibility is left alone, so rendering may continue.
    pub fn clear(&mut self) -> io::Result<()> {
        let mut seq = EscapeBuffer::new();
        seq.erase_lines(self.previous_line_count);
        self.write(&seq)?;
        self.reset();
        Ok(())
    }

    /// Finish the live region without erasing it.
    ///
    /// Output written afterwards appends below the last frame. The cursor is
    /// shown again if this session hid it; repeated calls are harmless.
    pub fn done(&mut self) -> io::Result<()> {
        self.reset();
        if !self.options.show_cursor && self.cursor_hidden {
            let mut seq = EscapeBuffer::new();
            seq.show_cursor();
            self.write(&seq)?;
        }
        self.cursor_hidden = false;
        Ok(())
    }

    /// Lines occupied by the last frame, counting the empty element after
    /// its trailing separator. Zero when nothing is drawn.
    pub fn previous_line_count(&self) -> usize {
        self.previous_line_count
    }

    /// Whether this session currently has the cursor hidden
    pub fn is_cursor_hidden(&self) -> bool {
        self.cursor_hidden
    }

    pub fn options(&self) -> Options {
        self.options
    }

    #[allow(clippy::expect_used)]
    pub fn get_ref(&self) -> &W {
        self.sink.as_ref().expect("sink is present until into_inner")
    }

    #[allow(clippy::expect_used)]
    pub fn get_mut(&mut self) -> &mut W {
        self.sink.as_mut().expect("sink is present until into_inner")
    }

    /// Finish the session with [`done`](Self::done) and hand back the sink.
    ///
    /// The last frame stays in the sink's output; only the cursor is
    /// restored. If restoring fails the error is returned and the session
    /// is dropped, which tries once more.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.done()?;
        self.sink
            .take()
            .ok_or_else(|| io::Error::other("redraw sink already taken"))
    }

    fn reset(&mut self) {
        self.previous_output.clear();
        self.previous_line_count = 0;
    }

    fn write(&mut self, seq: &EscapeBuffer) -> io::Result<()> {
        let sink = self.get_mut();
        sink.write_all(seq.as_bytes())?;
        sink.flush()
    }
}

impl<W: Write> Drop for Redrawer<W> {
    fn drop(&mut self) {
        if self.cursor_hidden && self.sink.is_some() {
            let _ = self.done();
        }
    }
}

/// Append the update that turns `previous` into `output` and return the
/// number of lines in `output`.
///
/// Lines are compared by index. Splitting keeps the empty element after a
/// trailing separator, so a frame with N separators occupies N + 1 lines.
fn diff_frame(
    seq: &mut EscapeBuffer,
    previous: &str,
    previous_line_count: usize,
    output: &str,
) -> usize {
    let previous_lines: Vec<&str> = previous.split(LINE_SEPARATOR).collect();
    let lines: Vec<&str> = output.split(LINE_SEPARATOR).collect();

    seq.cursor_up(previous_line_count);

    for (index, line) in lines.iter().enumerate() {
        match previous_lines.get(index) {
            Some(old) if old == line => {}
            Some(_) => {
                seq.erase_line().text(line);
            }
            None => {
                seq.text(line);
            }
        }
        seq.cursor_down().cursor_to_line_start();
    }

    if previous_line_count > lines.len() {
        seq.erase_down();
    }

    lines.len()
}

#[cfg(test)]
#[path = "redrawer_tests.rs"]
mod tests;
