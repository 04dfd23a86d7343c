// edarun: EDA Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_conversion() {
    assert_eq!(LogLevel::from_int(0), LogLevel::SILENT);
    assert_eq!(LogLevel::from_int(3), LogLevel::INFO);
    assert_eq!(LogLevel::from_int(5), LogLevel::TRACE);
    // Saturates at TRACE
    assert_eq!(LogLevel::from_int(100), LogLevel::TRACE);
}

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(5).is_ok());
    assert!(LogLevel::new(6).is_err());
}

#[test]
fn test_log_level_filter_strings() {
    insta::assert_snapshot!(
        [
            LogLevel::SILENT,
            LogLevel::ERROR,
            LogLevel::WARN,
            LogLevel::INFO,
            LogLevel::DEBUG,
            LogLevel::TRACE,
        ]
        .map(LogLevel::to_filter_string)
        .join(","),
        @"off,error,warn,info,debug,trace"
    );
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(!config.show_target());
}
