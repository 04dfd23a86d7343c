// edarun: EDA Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable struct and copy-on-write implementation.
//!
//! # Architecture
//!
//! ```text
//! Env (copy-on-write)
//! data: Option<Arc<EnvData>> + owned flag
//! clone shares Arc until copy_for_write()
//!
//! Path-list ops: append_path_var / prepend_path_var
//! join with PATH_SEPARATOR (';' Windows, ':' elsewhere)
//! ```

use super::types::{EnvData, EnvFlags, EnvKey};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Separator used when joining path-list variables such as `PATH`,
/// `LD_LIBRARY_PATH` and `PYTHONPATH`.
pub const PATH_SEPARATOR: &str = if cfg!(windows) { ";" } else { ":" };

/// A set of environment variables with copy-on-write semantics.
///
/// This struct provides efficient cloning by sharing data between copies
/// until a modification is made.
///
/// # Thread Safety
/// `Env` is `Send` and `Sync` due to its use of `Arc`.
#[derive(Debug, Clone)]
pub struct Env {
    data: Option<Arc<EnvData>>,
    /// Whether we own the data exclusively (for copy-on-write)
    owned: bool,
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

impl Env {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            data: None,
            owned: false,
        }
    }

    /// Creates an environment from a map of variables.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        let data = EnvData::from_vars(vars.into_iter().map(|(k, v)| (EnvKey::new(k), v)).collect());
        Self {
            data: Some(Arc::new(data)),
            owned: true,
        }
    }

    /// Sets an environment variable, replacing any prior value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.set_with_flags(key, value, EnvFlags::Replace)
    }

    /// Sets an environment variable with specific flags.
    ///
    /// `Append` and `Prepend` here are raw string concatenation; use
    /// [`Env::append_path_var`] / [`Env::prepend_path_var`] for
    /// separator-joined path lists.
    pub fn set_with_flags(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        flags: EnvFlags,
    ) -> &mut Self {
        self.copy_for_write();
        let key = EnvKey::new(key.into());
        let value = value.into();

        if let Some(ref mut data) = self.data {
            // SAFETY: We know we own the data exclusively after copy_for_write
            let data = Arc::make_mut(data);

            match flags {
                EnvFlags::Replace => {
                    data.vars_mut().insert(key, value);
                }
                EnvFlags::Append => {
                    if let Some(existing) = data.vars_mut().get_mut(&key) {
                        existing.push_str(&value);
                    } else {
                        data.vars_mut().insert(key, value);
                    }
                }
                EnvFlags::Prepend => {
                    if let Some(existing) = data.vars_mut().get_mut(&key) {
                        let mut new_value = value;
                        new_value.push_str(existing);
                        *existing = new_value;
                    } else {
                        data.vars_mut().insert(key, value);
                    }
                }
            }
        }

        self
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.as_ref().and_then(|d| {
            d.vars()
                .get(&EnvKey::new(key))
                .map(std::string::String::as_str)
        })
    }

    /// Removes an environment variable.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.copy_for_write();
        if let Some(ref mut data) = self.data {
            let data = Arc::make_mut(data);
            data.vars_mut().remove(&EnvKey::new(key));
        }
        self
    }

    /// Appends a segment to the path-list variable `name`.
    ///
    /// The segment is joined with [`PATH_SEPARATOR`]; an absent or empty
    /// variable is initialized to the segment alone.
    pub fn append_path_var(&mut self, name: &str, segment: impl AsRef<Path>) -> &mut Self {
        self.modify_path_var(name, segment, EnvFlags::Append)
    }

    /// Prepends a segment to the path-list variable `name`.
    pub fn prepend_path_var(&mut self, name: &str, segment: impl AsRef<Path>) -> &mut Self {
        self.modify_path_var(name, segment, EnvFlags::Prepend)
    }

    /// Appends a segment to the `PATH` environment variable.
    pub fn append_path(&mut self, segment: impl AsRef<Path>) -> &mut Self {
        self.append_path_var("PATH", segment)
    }

    /// Prepends a segment to the `PATH` environment variable.
    pub fn prepend_path(&mut self, segment: impl AsRef<Path>) -> &mut Self {
        self.prepend_path_var("PATH", segment)
    }

    /// Modifies a path-list environment variable.
    fn modify_path_var(
        &mut self,
        name: &str,
        segment: impl AsRef<Path>,
        flags: EnvFlags,
    ) -> &mut Self {
        let segment = segment.as_ref().to_string_lossy();

        let new_value = match (self.get(name), flags) {
            (Some(current), EnvFlags::Append) if !current.is_empty() => {
                format!("{current}{PATH_SEPARATOR}{segment}")
            }
            (Some(current), EnvFlags::Prepend) if !current.is_empty() => {
                format!("{segment}{PATH_SEPARATOR}{current}")
            }
            _ => segment.into_owned(),
        };

        self.set(name, new_value)
    }

    /// Returns all environment variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.data
            .as_ref()
            .map(|d| {
                d.vars()
                    .iter()
                    .map(|(k, v)| (k.as_str().to_owned(), v.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns an iterator over environment variables.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data
            .iter()
            .flat_map(|d| d.vars().iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.as_ref().is_none_or(|d| d.vars().is_empty())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.as_ref().map_or(0, |d| d.vars().len())
    }

    /// Ensures we have exclusive ownership of the data for modification.
    pub fn copy_for_write(&mut self) {
        if self.owned {
            return;
        }

        match &self.data {
            Some(data) => {
                self.data = Some(Arc::new((**data).clone()));
            }
            None => {
                self.data = Some(Arc::new(EnvData::new()));
            }
        }

        self.owned = true;
    }
}
