// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn render(level: Level, msg: impl Display, colored: bool) -> String {
    let mut buf = Vec::new();
    write_diagnostic(&mut buf, level, msg, colored).unwrap();
    String::from_utf8(buf).unwrap()
}

#[parameterized(
    error_plain = { Level::Error, false, "Error: stdout closed\n" },
    error_colored = { Level::Error, true, "\x1b[31mError: stdout closed\x1b[0m\n" },
    warning_plain = { Level::Warning, false, "Warning: stdout closed\n" },
    warning_colored = { Level::Warning, true, "\x1b[33mWarning: stdout closed\x1b[0m\n" },
    debug_plain = { Level::Debug, false, "debug: stdout closed\n" },
    debug_never_colored = { Level::Debug, true, "debug: stdout closed\n" },
)]
fn line_format(level: Level, colored: bool, expected: &str) {
    assert_eq!(render(level, "stdout closed", colored), expected);
}

#[test]
fn accepts_format_args() {
    let out = render(Level::Error, format_args!("failed after {} frames", 3), false);
    assert_eq!(out, "Error: failed after 3 frames\n");
}

#[test]
fn write_failure_is_reported() {
    struct Full;
    impl Write for Full {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::WriteZero, "full"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
    assert!(write_diagnostic(&mut Full, Level::Warning, "x", false).is_err());
}
