// edarun: EDA Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `env` command: print the composed environment.

use std::collections::BTreeMap;

use crate::cli::env::{EnvArgs, EnvFormat};
use crate::config::Config;
use crate::core::env::current_env;
use crate::error::Result;

/// Composes the environment and prints it in the requested format.
///
/// # Errors
///
/// Returns an error in strict-references mode when a directive references
/// an unset variable, or if JSON serialization fails.
pub fn run_env_command(args: &EnvArgs, config: &Config) -> Result<()> {
    let base = current_env();
    let composed = config.compose(&base)?;

    let selection = select_vars(args, config, composed.to_map());

    for line in render_env(args.format, &selection)? {
        println!("{line}");
    }
    Ok(())
}

/// Narrows the composed mapping to the requested variables.
fn select_vars(
    args: &EnvArgs,
    config: &Config,
    mut vars: BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    if !args.names.is_empty() {
        // Explicit names win; unset ones print as empty, matching the
        // composer's permissive lookups
        return args
            .names
            .iter()
            .map(|name| {
                let value = vars.remove(name).unwrap_or_default();
                (name.clone(), value)
            })
            .collect();
    }

    if args.diff {
        let touched: std::collections::BTreeSet<String> = config
            .directives()
            .iter()
            .map(|d| d.name().to_string())
            .collect();
        vars.retain(|name, _| touched.contains(name));
    }

    vars
}

/// Renders a variable mapping in the given format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_env(format: EnvFormat, vars: &BTreeMap<String, String>) -> Result<Vec<String>> {
    match format {
        EnvFormat::Shell => Ok(vars
            .iter()
            .map(|(name, value)| format!("export {name}='{}'", shell_quote(value)))
            .collect()),
        EnvFormat::Plain => Ok(vars
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect()),
        EnvFormat::Json => Ok(vec![serde_json::to_string_pretty(vars)?]),
    }
}

/// Escapes a value for inclusion in single quotes.
fn shell_quote(value: &str) -> String {
    value.replace('\'', r"'\''")
}
