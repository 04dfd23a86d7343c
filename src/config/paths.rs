// edarun: EDA Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Site software tree configuration.
//!
//! ```text
//! swroot/
//!   Xyce/Parallel/   (circuit simulator)
//!   klayout/         (layout viewer)
//!   OpenRAM/         (memory compiler: compiler/, technology/)
//!   pdk/             (process design kits)
//! ```
//!
//! All paths are optional and resolved from `swroot` if not set. The
//! resolved tree lowers to the built-in directive list in
//! [`SitePaths::builtin_directives`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::env::types::Directive;
use crate::error::{ConfigError, Result};

/// Site installation paths for the EDA toolchain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SitePaths {
    /// Site software root (all other paths relative to this).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swroot: Option<PathBuf>,
    /// Xyce installation (default: swroot/Xyce/Parallel).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xyce: Option<PathBuf>,
    /// KLayout installation (default: swroot/klayout).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub klayout: Option<PathBuf>,
    /// OpenRAM checkout (default: swroot/OpenRAM).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openram: Option<PathBuf>,
    /// OpenRAM technology directory (default: openram/technology).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openram_tech: Option<PathBuf>,
    /// PDK root (default: swroot/pdk).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdk: Option<PathBuf>,
}

impl SitePaths {
    /// Resolve all relative paths against `swroot` and fill in defaults.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if the `swroot` path is not set.
    pub fn resolve(&mut self) -> Result<()> {
        let swroot = self.swroot.clone().ok_or_else(|| ConfigError::MissingKey {
            section: "paths".to_string(),
            key: "swroot".to_string(),
        })?;

        let resolve = |path: &mut Option<PathBuf>, parent: &Path, default: &str| match path {
            Some(p) if p.is_relative() => {
                *path = Some(parent.join(p.clone()));
            }
            None => {
                *path = Some(parent.join(default));
            }
            _ => {}
        };

        resolve(&mut self.xyce, &swroot, "Xyce/Parallel");
        resolve(&mut self.klayout, &swroot, "klayout");
        resolve(&mut self.openram, &swroot, "OpenRAM");
        resolve(&mut self.pdk, &swroot, "pdk");

        let openram = self
            .openram
            .clone()
            .unwrap_or_else(|| swroot.join("OpenRAM"));

        resolve(&mut self.openram_tech, &openram, "technology");

        Ok(())
    }

    /// Get the swroot path, returning an error if not set.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if the `swroot` path is not set.
    pub fn swroot(&self) -> Result<&Path> {
        self.swroot.as_deref().ok_or_else(|| {
            ConfigError::MissingKey {
                section: "paths".to_string(),
                key: "swroot".to_string(),
            }
            .into()
        })
    }

    /// Lowers the resolved site tree to the built-in directive list.
    ///
    /// Returns an empty list when `swroot` is not configured; call
    /// [`SitePaths::resolve`] first so the per-tool defaults are filled in.
    #[must_use]
    pub fn builtin_directives(&self) -> Vec<Directive> {
        let Some(swroot) = &self.swroot else {
            return Vec::new();
        };

        let display = |p: &Option<PathBuf>| {
            p.as_ref()
                .map_or_else(String::new, |p| p.display().to_string())
        };

        vec![
            Directive::set("SWROOT", swroot.display().to_string()),
            Directive::set("XYCE_HOME", display(&self.xyce)),
            Directive::append_path("PATH", "${XYCE_HOME}/bin"),
            Directive::append_path("LD_LIBRARY_PATH", "${XYCE_HOME}/lib"),
            Directive::set("KLAYOUT_HOME", display(&self.klayout)),
            Directive::append_path("PATH", "${KLAYOUT_HOME}/bin"),
            Directive::append_path("LD_LIBRARY_PATH", "${KLAYOUT_HOME}/lib"),
            Directive::set("OPENRAM_HOME", format!("{}/compiler", display(&self.openram))),
            Directive::set("OPENRAM_TECH", display(&self.openram_tech)),
            Directive::append_path("PYTHONPATH", "${OPENRAM_HOME}"),
            Directive::append_path("PYTHONPATH", "${OPENRAM_TECH}"),
            Directive::set("PDK_ROOT", display(&self.pdk)),
        ]
    }
}
