// edarun: EDA Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for edarun.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, SitePaths, ToolsConfig, [[env]] directives
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Print the command and environment without launching anything.
    pub dry: bool,
    /// Log level for stdout output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file.
    pub log_file: PathBuf,
    /// Fail fast on directives that reference unset variables instead of
    /// expanding them to the empty string.
    pub strict_references: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: PathBuf::from("edarun.log"),
            strict_references: false,
        }
    }
}

/// Tool executables launchable by name with `edarun exec <name>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    /// Layout viewer executable.
    pub klayout: PathBuf,
    /// Circuit simulator executable.
    pub xyce: PathBuf,
    /// Memory compiler entry point.
    pub openram: PathBuf,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            klayout: PathBuf::from("klayout"),
            xyce: PathBuf::from("Xyce"),
            openram: PathBuf::from("openram.py"),
        }
    }
}

impl ToolsConfig {
    /// Looks up a tool executable by its table name.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&Path> {
        match name {
            "klayout" => Some(&self.klayout),
            "xyce" => Some(&self.xyce),
            "openram" => Some(&self.openram),
            _ => None,
        }
    }
}
