// edarun: EDA Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the CLI surface and env rendering.

use edarun::cli::env::EnvFormat;
use edarun::cli::{Command, parse_from};
use edarun::cmd::env::render_env;
use std::collections::BTreeMap;

fn sample_vars() -> BTreeMap<String, String> {
    let mut vars = BTreeMap::new();
    vars.insert("SWROOT".to_string(), "/software".to_string());
    vars.insert(
        "XYCE_HOME".to_string(),
        "/software/Xyce/Parallel".to_string(),
    );
    vars
}

#[test]
fn render_shell_format() {
    let lines = render_env(EnvFormat::Shell, &sample_vars()).unwrap();
    insta::assert_snapshot!(lines.join("\n"), @r"
    export SWROOT='/software'
    export XYCE_HOME='/software/Xyce/Parallel'
    ");
}

#[test]
fn render_shell_format_quotes_single_quotes() {
    let mut vars = BTreeMap::new();
    vars.insert("TITLE".to_string(), "it's".to_string());
    let lines = render_env(EnvFormat::Shell, &vars).unwrap();
    assert_eq!(lines, vec![r"export TITLE='it'\''s'"]);
}

#[test]
fn render_plain_format() {
    let lines = render_env(EnvFormat::Plain, &sample_vars()).unwrap();
    insta::assert_snapshot!(lines.join("\n"), @r"
    SWROOT=/software
    XYCE_HOME=/software/Xyce/Parallel
    ");
}

#[test]
fn render_json_format() {
    let lines = render_env(EnvFormat::Json, &sample_vars()).unwrap();
    assert_eq!(lines.len(), 1);
    let parsed: BTreeMap<String, String> = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(parsed, sample_vars());
}

#[test]
fn cli_full_invocation_parses() {
    let cli = parse_from([
        "edarun",
        "--config",
        "site.toml",
        "--set",
        "paths.swroot=/software",
        "exec",
        "xyce",
        "netlist.cir",
    ]);

    assert_eq!(cli.global.configs.len(), 1);
    assert_eq!(cli.global.options, vec!["paths.swroot=/software"]);
    let Some(Command::Exec(args)) = cli.command else {
        panic!("expected exec command");
    };
    assert_eq!(args.program, "xyce");
    assert_eq!(args.args, vec!["netlist.cir"]);
}

#[test]
fn cli_env_diff_flag() {
    let cli = parse_from(["edarun", "env", "--diff", "--format", "plain"]);
    let Some(Command::Env(args)) = cli.command else {
        panic!("expected env command");
    };
    assert!(args.diff);
    assert_eq!(args.format, EnvFormat::Plain);
}
