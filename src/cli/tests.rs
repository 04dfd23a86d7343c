// edarun: EDA Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::env::EnvFormat;
use super::{Command, parse_from};
use clap::Parser as _;

#[test]
fn test_parse_version() {
    let cli = parse_from(["edarun", "version"]);
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_env_defaults() {
    let cli = parse_from(["edarun", "env"]);
    let Some(Command::Env(args)) = cli.command else {
        panic!("expected env command");
    };
    assert_eq!(args.format, EnvFormat::Shell);
    assert!(!args.diff);
    assert!(args.names.is_empty());
}

#[test]
fn test_parse_env_format_and_names() {
    let cli = parse_from(["edarun", "env", "--format", "json", "PATH", "XYCE_HOME"]);
    let Some(Command::Env(args)) = cli.command else {
        panic!("expected env command");
    };
    assert_eq!(args.format, EnvFormat::Json);
    assert_eq!(args.names, vec!["PATH", "XYCE_HOME"]);
}

#[test]
fn test_parse_exec_passes_hyphen_args_through() {
    let cli = parse_from(["edarun", "exec", "xyce", "-o", "out.prn", "netlist.cir"]);
    let Some(Command::Exec(args)) = cli.command else {
        panic!("expected exec command");
    };
    assert_eq!(args.program, "xyce");
    assert_eq!(args.args, vec!["-o", "out.prn", "netlist.cir"]);
}

#[test]
fn test_parse_global_options() {
    let cli = parse_from([
        "edarun",
        "-c",
        "site.toml",
        "--log-level",
        "4",
        "--strict-references",
        "--dry",
        "env",
    ]);
    assert_eq!(cli.global.configs.len(), 1);
    assert_eq!(cli.global.log_level, Some(4));
    assert!(cli.global.strict_references);
    assert!(cli.global.dry);
}

#[test]
fn test_global_options_to_config_overrides() {
    let cli = parse_from([
        "edarun",
        "--log-level",
        "2",
        "--set",
        "paths.swroot=/software",
        "--dry",
        "env",
    ]);
    let overrides = cli.global.to_config_overrides();
    assert!(overrides.contains(&"paths.swroot=/software".to_string()));
    assert!(overrides.contains(&"global.output_log_level=2".to_string()));
    // file level falls back to console level
    assert!(overrides.contains(&"global.file_log_level=2".to_string()));
    assert!(overrides.contains(&"global.dry=true".to_string()));
}

#[test]
fn test_log_level_out_of_range_rejected() {
    let result = super::Cli::try_parse_from(["edarun", "--log-level", "9", "env"]);
    assert!(result.is_err());
}
