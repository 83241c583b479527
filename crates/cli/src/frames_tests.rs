// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use proptest::prelude::*;

fn feed(assembler: &mut FrameAssembler, lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| assembler.push_line(line))
        .collect()
}

#[test]
fn line_mode_emits_every_line() {
    let mut assembler = FrameAssembler::new(FrameMode::Line);
    let frames = feed(&mut assembler, &["10%", "20%", ""]);
    assert_eq!(frames, vec!["10%", "20%", ""]);
    assert_eq!(assembler.finish(), None);
}

#[test]
fn tail_mode_keeps_last_lines() {
    let mut assembler = FrameAssembler::new(FrameMode::Tail(2));
    let frames = feed(&mut assembler, &["a", "b", "c"]);
    assert_eq!(frames, vec!["a", "a\nb", "b\nc"]);
    assert_eq!(assembler.finish(), None);
}

#[test]
fn delimited_mode_groups_lines() {
    let mut assembler = FrameAssembler::new(FrameMode::Delimited("--".to_string()));
    let frames = feed(&mut assembler, &["a", "b", "--", "c", "--"]);
    assert_eq!(frames, vec!["a\nb", "c"]);
    assert_eq!(assembler.finish(), None);
}

#[test]
fn delimited_mode_allows_empty_frames() {
    let mut assembler = FrameAssembler::new(FrameMode::Delimited("--".to_string()));
    let frames = feed(&mut assembler, &["--", "--"]);
    assert_eq!(frames, vec!["", ""]);
}

#[test]
fn delimited_mode_flushes_partial_frame() {
    let mut assembler = FrameAssembler::new(FrameMode::Delimited("".to_string()));
    let frames = feed(&mut assembler, &["a", "", "b", "c"]);
    assert_eq!(frames, vec!["a"]);
    assert_eq!(assembler.finish(), Some("b\nc".to_string()));
    assert_eq!(assembler.finish(), None);
}

#[test]
fn default_mode_is_line() {
    assert_eq!(FrameMode::default(), FrameMode::Line);
    assert_eq!(FrameAssembler::new(FrameMode::default()).mode(), &FrameMode::Line);
}

proptest! {
    #[test]
    fn tail_frame_never_exceeds_size(
        size in 1usize..6,
        lines in prop::collection::vec("[a-z]{0,5}", 1..20),
    ) {
        let mut assembler = FrameAssembler::new(FrameMode::Tail(size));
        for line in &lines {
            let frame = assembler.push_line(line).unwrap();
            prop_assert!(frame.split('\n').count() <= size);
            prop_assert!(frame.ends_with(line.as_str()));
        }
    }
}
