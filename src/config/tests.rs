// edarun: EDA Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader, SitePaths};
use crate::core::env::container::Env;
use crate::core::env::types::Directive;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(!config.global.dry);
    assert_eq!(config.global.output_log_level.as_u8(), 3);
    assert!(!config.global.strict_references);
    assert!(config.paths.swroot.is_none());
    assert!(config.env.is_empty());
}

#[test]
fn test_paths_resolve() {
    let mut paths = SitePaths {
        swroot: Some(PathBuf::from("/software")),
        ..Default::default()
    };

    paths.resolve().unwrap();

    assert_eq!(paths.xyce, Some(PathBuf::from("/software/Xyce/Parallel")));
    assert_eq!(paths.klayout, Some(PathBuf::from("/software/klayout")));
    assert_eq!(paths.openram, Some(PathBuf::from("/software/OpenRAM")));
    assert_eq!(
        paths.openram_tech,
        Some(PathBuf::from("/software/OpenRAM/technology"))
    );
    assert_eq!(paths.pdk, Some(PathBuf::from("/software/pdk")));
}

#[test]
fn test_paths_resolve_keeps_absolute_overrides() {
    let mut paths = SitePaths {
        swroot: Some(PathBuf::from("/software")),
        xyce: Some(PathBuf::from("/opt/xyce-7.8")),
        ..Default::default()
    };

    paths.resolve().unwrap();
    assert_eq!(paths.xyce, Some(PathBuf::from("/opt/xyce-7.8")));
}

#[test]
fn test_paths_resolve_joins_relative_overrides() {
    let mut paths = SitePaths {
        swroot: Some(PathBuf::from("/software")),
        klayout: Some(PathBuf::from("klayout-0.30")),
        ..Default::default()
    };

    paths.resolve().unwrap();
    assert_eq!(paths.klayout, Some(PathBuf::from("/software/klayout-0.30")));
}

#[test]
fn test_paths_resolve_requires_swroot() {
    let mut paths = SitePaths::default();
    assert!(paths.resolve().is_err());
}

#[test]
fn test_builtin_directives_empty_without_swroot() {
    assert!(SitePaths::default().builtin_directives().is_empty());
}

#[test]
fn test_config_parse_paths_section() {
    let toml = r#"
[paths]
swroot = "/software"
"#;
    let config = Config::parse(toml).unwrap();
    assert_eq!(config.paths.swroot, Some(PathBuf::from("/software")));
    // resolve_and_validate ran during build
    assert_eq!(
        config.paths.xyce,
        Some(PathBuf::from("/software/Xyce/Parallel"))
    );
}

#[test]
fn test_config_parse_env_directives_keep_order() {
    let toml = r#"
[[env]]
op = "set"
name = "SWROOT"
value = "/software"

[[env]]
op = "append-path"
name = "PATH"
segment = "${SWROOT}/bin"

[[env]]
op = "prepend-path"
name = "PATH"
segment = "${SWROOT}/override/bin"
"#;
    let config = Config::parse(toml).unwrap();

    assert_eq!(
        config.env,
        vec![
            Directive::set("SWROOT", "/software"),
            Directive::append_path("PATH", "${SWROOT}/bin"),
            Directive::prepend_path("PATH", "${SWROOT}/override/bin"),
        ]
    );
}

#[test]
fn test_config_compose_builtins_then_user_env() {
    let toml = r#"
[paths]
swroot = "/software"

[[env]]
op = "set"
name = "XYCE_ARCH"
value = "x86_64"
"#;
    let config = Config::parse(toml).unwrap();
    let composed = config.compose(&Env::new()).unwrap();

    assert_eq!(composed.get("SWROOT"), Some("/software"));
    assert_eq!(composed.get("XYCE_HOME"), Some("/software/Xyce/Parallel"));
    assert_eq!(
        composed.get("OPENRAM_HOME"),
        Some("/software/OpenRAM/compiler")
    );
    assert_eq!(
        composed.get("OPENRAM_TECH"),
        Some("/software/OpenRAM/technology")
    );
    assert_eq!(composed.get("PDK_ROOT"), Some("/software/pdk"));
    assert_eq!(composed.get("XYCE_ARCH"), Some("x86_64"));
    let path = composed.get("PATH").unwrap();
    assert!(path.contains("/software/Xyce/Parallel/bin"));
    assert!(path.contains("/software/klayout/bin"));
}

#[test]
fn test_config_compose_strict_rejects_unset_reference() {
    let toml = r#"
[global]
strict_references = true

[[env]]
op = "append-path"
name = "PATH"
segment = "${NOWHERE}/bin"
"#;
    let config = Config::parse(toml).unwrap();
    assert!(config.compose(&Env::new()).is_err());
}

#[test]
fn test_config_compose_permissive_allows_unset_reference() {
    let toml = r#"
[[env]]
op = "append-path"
name = "PATH"
segment = "${NOWHERE}/bin"
"#;
    let config = Config::parse(toml).unwrap();
    let composed = config.compose(&Env::new()).unwrap();
    assert_eq!(composed.get("PATH"), Some("/bin"));
}

#[test]
fn test_tools_resolve() {
    let config = Config::default();
    assert!(config.tools.resolve("klayout").is_some());
    assert!(config.tools.resolve("xyce").is_some());
    assert!(config.tools.resolve("openram").is_some());
    assert!(config.tools.resolve("spice").is_none());
}

#[test]
fn test_loader_tracks_files() {
    let loader = ConfigLoader::new().add_toml_str("[global]\ndry = true\n");
    assert_eq!(loader.loaded_files().len(), 1);
    assert_eq!(loader.format_loaded_files(), vec!["1. [string] <string>"]);
}
