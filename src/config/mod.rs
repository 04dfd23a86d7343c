// edarun: EDA Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for edarun.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. local edarun.toml (cwd)
//! 3. --config FILE (repeatable)
//! 4. EDARUN_* env vars
//! 5. --set / CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! EDARUN_GLOBAL_DRY=true       → global.dry = true
//! EDARUN_PATHS_SWROOT=/sw      → paths.swroot = "/sw"
//! EDARUN_TOOLS_XYCE=/bin/Xyce  → tools.xyce = "/bin/Xyce"
//! ```
//!
//! # Directive List
//!
//! ```toml
//! [paths]
//! swroot = "/software"
//!
//! [[env]]
//! op = "set"
//! name = "XYCE_ARCH"
//! value = "x86_64"
//!
//! [[env]]
//! op = "append-path"
//! name = "PATH"
//! segment = "${SWROOT}/scripts"
//! ```
//!
//! `[[env]]` directives are applied after the built-in list derived from
//! `[paths]`, in declared order.

pub mod loader;
pub mod paths;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::core::env::compose;
use crate::core::env::container::Env;
use crate::core::env::types::Directive;
use crate::error::{EdarunError, Result};

use loader::ConfigLoader;
use paths::SitePaths;
use types::{GlobalConfig, ToolsConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Site installation paths.
    pub paths: SitePaths,
    /// Tool executables.
    pub tools: ToolsConfig,
    /// User directives, applied after the built-in list.
    #[serde(rename = "env", skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<Directive>,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use edarun::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("edarun.toml")
    ///     .with_env_prefix("EDARUN")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML,
    /// or does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match
    /// the `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Resolve site paths and validate configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if path resolution fails.
    pub fn resolve_and_validate(&mut self) -> Result<()> {
        if self.paths.swroot.is_some() {
            self.paths.resolve()?;
        }
        Ok(())
    }

    /// The full directive list: built-in site directives followed by the
    /// user `[[env]]` list, in declared order.
    #[must_use]
    pub fn directives(&self) -> Vec<Directive> {
        let mut directives = self.paths.builtin_directives();
        directives.extend(self.env.iter().cloned());
        directives
    }

    /// Composes the launch environment from a base snapshot.
    ///
    /// With `global.strict_references` enabled, a validation pass rejects
    /// directives that reference unset variables before anything is applied.
    ///
    /// # Errors
    ///
    /// Returns a `ComposeError::UnresolvedReference` in strict mode; the
    /// permissive default never fails.
    pub fn compose(&self, base: &Env) -> Result<Env> {
        let directives = self.directives();
        if self.global.strict_references {
            compose::check_references(base, &directives).map_err(EdarunError::from)?;
        }
        Ok(compose::apply(base, &directives))
    }

    /// Format configuration options for display.
    ///
    /// Returns a vector of formatted strings representing all configuration
    /// options, deterministically ordered.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_paths_options(&mut options);
        self.format_tools_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        let mut lines: Vec<String> = options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect();

        // Directives keep declared order, so they go after the sorted keys
        lines.extend(
            self.directives()
                .iter()
                .enumerate()
                .map(|(i, d)| format!("env[{i}] = {d}")),
        );
        lines
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("global.dry".into(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global.log_file.display().to_string(),
        );
        options.insert(
            "global.strict_references".into(),
            self.global.strict_references.to_string(),
        );
    }

    fn format_paths_options(&self, options: &mut BTreeMap<String, String>) {
        let fmt = |p: &Option<std::path::PathBuf>| {
            p.as_ref()
                .map_or_else(String::new, |p| p.display().to_string())
        };

        options.insert("paths.swroot".into(), fmt(&self.paths.swroot));
        options.insert("paths.xyce".into(), fmt(&self.paths.xyce));
        options.insert("paths.klayout".into(), fmt(&self.paths.klayout));
        options.insert("paths.openram".into(), fmt(&self.paths.openram));
        options.insert("paths.openram_tech".into(), fmt(&self.paths.openram_tech));
        options.insert("paths.pdk".into(), fmt(&self.paths.pdk));
    }

    fn format_tools_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "tools.klayout".into(),
            self.tools.klayout.display().to_string(),
        );
        options.insert("tools.xyce".into(), self.tools.xyce.display().to_string());
        options.insert(
            "tools.openram".into(),
            self.tools.openram.display().to_string(),
        );
    }
}
