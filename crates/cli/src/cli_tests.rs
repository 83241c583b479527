// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::panic)]

use super::*;
use clap::CommandFactory;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["redraw"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn cli_definition_is_valid() {
    <Cli as CommandFactory>::command().debug_assert();
}

#[test]
fn no_subcommand_means_pipe() {
    let cli = parse(&[]);
    match cli.selected_command() {
        Command::Pipe(args) => {
            assert_eq!(args.tail, None);
            assert_eq!(args.delimiter, None);
        }
        other => panic!("expected pipe, got {:?}", other),
    }
}

#[test]
fn pipe_tail_parses() {
    let cli = parse(&["pipe", "--tail", "3"]);
    match cli.selected_command() {
        Command::Pipe(args) => assert_eq!(args.tail, Some(3)),
        other => panic!("expected pipe, got {:?}", other),
    }
}

#[test]
fn tail_conflicts_with_delimiter() {
    let result = Cli::try_parse_from(["redraw", "pipe", "--tail", "3", "--delimiter", "END"]);
    assert!(result.is_err());
}

#[test]
fn spinner_args_parse() {
    let cli = parse(&["spinner", "-m", "Building", "--interval-ms", "50", "--ticks", "4"]);
    match cli.selected_command() {
        Command::Spinner(args) => {
            assert_eq!(args.message.as_deref(), Some("Building"));
            assert_eq!(args.interval_ms, Some(50));
            assert_eq!(args.ticks, Some(4));
        }
        other => panic!("expected spinner, got {:?}", other),
    }
}

#[test]
fn session_flags_are_global() {
    let cli = parse(&["spinner", "--show-cursor", "--clear-on-exit", "--config", "r.toml"]);
    assert!(cli.session.show_cursor);
    assert!(cli.session.clear_on_exit);
    assert_eq!(cli.session.config, Some(PathBuf::from("r.toml")));
}
