// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use rstest::rstest;

fn build(f: impl FnOnce(&mut EscapeBuffer)) -> String {
    let mut buf = EscapeBuffer::new();
    f(&mut buf);
    buf.into_string()
}

#[rstest]
#[case::down(EscapeBuffer::cursor_down, "\x1b[1B")]
#[case::line_start(EscapeBuffer::cursor_to_line_start, "\x1b[1G")]
#[case::erase_line(EscapeBuffer::erase_line, "\x1b[2K")]
#[case::erase_down(EscapeBuffer::erase_down, "\x1b[J")]
#[case::hide(EscapeBuffer::hide_cursor, "\x1b[?25l")]
#[case::show(EscapeBuffer::show_cursor, "\x1b[?25h")]
fn emits_ansi_sequence(
    #[case] emit: fn(&mut EscapeBuffer) -> &mut EscapeBuffer,
    #[case] expected: &str,
) {
    let mut buf = EscapeBuffer::new();
    emit(&mut buf);
    assert_eq!(buf.as_str(), expected);
}

#[rstest]
#[case(1, "\x1b[1A")]
#[case(12, "\x1b[12A")]
fn cursor_up_emits_count(#[case] count: usize, #[case] expected: &str) {
    let s = build(|b| {
        b.cursor_up(count);
    });
    assert_eq!(s, expected);
}

#[test]
fn cursor_up_zero_is_empty() {
    let mut buf = EscapeBuffer::new();
    buf.cursor_up(0);
    assert!(buf.is_empty());
}

#[test]
fn cursor_up_splits_counts_beyond_one_sequence() {
    let s = build(|b| {
        b.cursor_up(usize::from(u16::MAX) * 2 + 5);
    });
    assert_eq!(s, format!("\x1b[{max}A\x1b[{max}A\x1b[5A", max = u16::MAX));
}

#[test]
fn cursor_up_exactly_one_sequence_at_limit() {
    let s = build(|b| {
        b.cursor_up(usize::from(u16::MAX));
    });
    assert_eq!(s, format!("\x1b[{}A", u16::MAX));
}

#[test]
fn erase_lines_zero_is_empty() {
    assert_eq!(build(|b| { b.erase_lines(0); }), "");
}

#[test]
fn erase_lines_one() {
    assert_eq!(build(|b| { b.erase_lines(1); }), "\x1b[2K\x1b[1G");
}

#[test]
fn erase_lines_walks_upward() {
    assert_eq!(
        build(|b| {
            b.erase_lines(3);
        }),
        "\x1b[2K\x1b[1A\x1b[2K\x1b[1A\x1b[2K\x1b[1G"
    );
}

#[test]
fn text_is_appended_verbatim() {
    let s = build(|b| {
        b.erase_line().text("hello\x1b[0m").cursor_down();
    });
    assert_eq!(s, "\x1b[2Khello\x1b[0m\x1b[1B");
}

#[test]
fn bytes_match_string() {
    let mut buf = EscapeBuffer::new();
    buf.text("abc").erase_down();
    assert_eq!(buf.as_bytes(), buf.as_str().as_bytes());
    assert!(!buf.is_empty());
}
