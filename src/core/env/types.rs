// edarun: EDA Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for environment variable composition.
//!
//! # Architecture
//!
//! ```text
//! Directive: Set { name, value }
//!            AppendPath { name, segment }
//!            PrependPath { name, segment }
//! EnvFlags: Replace | Append | Prepend
//! EnvKey: case-insensitive on Windows (PATH == Path == path)
//! EnvData: BTreeMap<EnvKey, String> for deterministic order
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One declarative instruction for modifying the environment mapping.
///
/// Directives are applied in declared order; `value` and `segment` strings
/// may embed `${NAME}` references to variables already present in the
/// mapping being built (see [`super::compose::apply`]).
///
/// Serialized form (TOML array of tables, order-preserving):
///
/// ```toml
/// [[env]]
/// op = "set"
/// name = "XYCE_HOME"
/// value = "${SWROOT}/Xyce/Parallel"
///
/// [[env]]
/// op = "append-path"
/// name = "PATH"
/// segment = "${XYCE_HOME}/bin"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Directive {
    /// Unconditionally assigns `value` to `name`, discarding any prior value.
    Set { name: String, value: String },
    /// Appends `segment` to the path-list variable `name` (creating it,
    /// initialized to the segment alone, if absent or empty).
    AppendPath { name: String, segment: String },
    /// Mirror of `AppendPath` that joins on the left, so the segment takes
    /// search precedence.
    PrependPath { name: String, segment: String },
}

impl Directive {
    /// Creates a `Set` directive.
    pub fn set(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Set {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Creates an `AppendPath` directive.
    pub fn append_path(name: impl Into<String>, segment: impl Into<String>) -> Self {
        Self::AppendPath {
            name: name.into(),
            segment: segment.into(),
        }
    }

    /// Creates a `PrependPath` directive.
    pub fn prepend_path(name: impl Into<String>, segment: impl Into<String>) -> Self {
        Self::PrependPath {
            name: name.into(),
            segment: segment.into(),
        }
    }

    /// Returns the variable name this directive targets.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Set { name, .. }
            | Self::AppendPath { name, .. }
            | Self::PrependPath { name, .. } => name,
        }
    }

    /// Returns the raw (unexpanded) value or segment string.
    #[must_use]
    pub fn raw_value(&self) -> &str {
        match self {
            Self::Set { value, .. } => value,
            Self::AppendPath { segment, .. } | Self::PrependPath { segment, .. } => segment,
        }
    }
}

impl std::fmt::Display for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Set { name, value } => write!(f, "set {name}={value}"),
            Self::AppendPath { name, segment } => write!(f, "append-path {name}+={segment}"),
            Self::PrependPath { name, segment } => write!(f, "prepend-path {name}=+{segment}"),
        }
    }
}

/// Flags for environment variable operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvFlags {
    /// Replace the existing value (default)
    #[default]
    Replace,
    /// Append to the existing value
    Append,
    /// Prepend to the existing value
    Prepend,
}

/// A case-insensitive environment variable key (Windows-compatible).
#[derive(Debug, Clone, Eq)]
pub(super) struct EnvKey(String);

impl EnvKey {
    pub(super) fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub(super) fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for EnvKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl std::hash::Hash for EnvKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        for c in self.0.chars() {
            c.to_ascii_lowercase().hash(state);
        }
    }
}

impl PartialOrd for EnvKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EnvKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0
            .to_ascii_lowercase()
            .cmp(&other.0.to_ascii_lowercase())
    }
}

/// Shared environment data for copy-on-write semantics.
#[derive(Debug, Clone)]
pub(super) struct EnvData {
    vars: BTreeMap<EnvKey, String>,
}

impl EnvData {
    pub(super) const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    pub(super) const fn from_vars(vars: BTreeMap<EnvKey, String>) -> Self {
        Self { vars }
    }

    pub(super) const fn vars(&self) -> &BTreeMap<EnvKey, String> {
        &self.vars
    }

    pub(super) const fn vars_mut(&mut self) -> &mut BTreeMap<EnvKey, String> {
        &mut self.vars
    }
}
