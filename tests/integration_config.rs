// edarun: EDA Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use edarun::config::Config;
use std::io::Write as _;
use std::path::PathBuf;

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_minimal() {
    let toml = r#"
[paths]
swroot = "/software"
"#;
    let config = Config::parse(toml).unwrap();
    assert_eq!(config.paths.swroot, Some(PathBuf::from("/software")));
    assert_eq!(
        config.paths.xyce,
        Some(PathBuf::from("/software/Xyce/Parallel"))
    );
    assert_eq!(config.paths.pdk, Some(PathBuf::from("/software/pdk")));
}

#[test]
fn config_parse_global_section() {
    let toml = r"
[global]
dry = true
output_log_level = 5
strict_references = true
";
    let config = Config::parse(toml).unwrap();
    assert!(config.global.dry);
    assert_eq!(config.global.output_log_level.as_u8(), 5);
    assert!(config.global.strict_references);
}

#[test]
fn config_parse_tools_section() {
    let toml = r#"
[tools]
klayout = "/software/klayout/bin/klayout"
xyce = "/software/Xyce/Parallel/bin/Xyce"
"#;
    let config = Config::parse(toml).unwrap();
    assert_eq!(
        config.tools.resolve("klayout"),
        Some(std::path::Path::new("/software/klayout/bin/klayout"))
    );
    assert_eq!(
        config.tools.resolve("xyce"),
        Some(std::path::Path::new("/software/Xyce/Parallel/bin/Xyce"))
    );
    // Unset tools keep their defaults
    assert_eq!(
        config.tools.resolve("openram"),
        Some(std::path::Path::new("openram.py"))
    );
}

#[test]
fn config_parse_invalid_log_level_rejected() {
    let toml = r"
[global]
output_log_level = 9
";
    assert!(Config::parse(toml).is_err());
}

#[test]
fn config_parse_unknown_key_rejected() {
    let toml = r#"
[paths]
swroot = "/software"
sdk = "10.0"
"#;
    assert!(Config::parse(toml).is_err());
}

#[test]
fn config_parse_invalid_directive_op_rejected() {
    let toml = r#"
[[env]]
op = "unset"
name = "PATH"
"#;
    assert!(Config::parse(toml).is_err());
}

// =============================================================================
// Loading from files
// =============================================================================

#[test]
fn config_from_file() {
    let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
    write!(
        file,
        r#"
[paths]
swroot = "/site/cad"

[[env]]
op = "append-path"
name = "PATH"
segment = "${{SWROOT}}/scripts"
"#
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.paths.swroot, Some(PathBuf::from("/site/cad")));
    assert_eq!(config.env.len(), 1);
}

#[test]
fn config_from_missing_file_fails() {
    assert!(Config::from_file("/nonexistent/edarun.toml").is_err());
}

// =============================================================================
// Layering
// =============================================================================

#[test]
fn config_later_sources_override_earlier() {
    let config = Config::builder()
        .add_toml_str("[paths]\nswroot = \"/software\"\n")
        .add_toml_str("[paths]\nswroot = \"/other\"\n")
        .build()
        .unwrap();
    assert_eq!(config.paths.swroot, Some(PathBuf::from("/other")));
}

#[test]
fn config_set_override_wins() {
    let config = Config::builder()
        .add_toml_str("[global]\ndry = false\n")
        .set("global.dry", true)
        .unwrap()
        .build()
        .unwrap();
    assert!(config.global.dry);
}
