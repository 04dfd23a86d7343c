// edarun: EDA Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for edarun using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! edarun [global options] <command>
//! env [--format shell|plain|json] [NAME...]
//! exec <program> [args...]
//! options
//! files
//! version
//! ```

pub mod env;
pub mod exec;
pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::env::EnvArgs;
use crate::cli::exec::ExecArgs;
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// EDA Environment Launcher
///
/// Composes the environment for a site-installed EDA toolchain and launches
/// tools into it.
#[derive(Debug, Parser)]
#[command(
    name = "edarun",
    author,
    version,
    about = "EDA Environment Launcher",
    long_about = "edarun Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Composes the environment (PATH, LD_LIBRARY_PATH, tool homes)\n\
                  for a site-installed EDA toolchain from a declarative config\n\
                  and launches tools into it. `edarun env` prints the composed\n\
                  environment; `edarun exec xyce -- netlist.cir` runs a tool\n\
                  inside it. See `edarun <command> --help` for details.",
    after_help = "CONFIG FILES:\n\n\
                  By default, edarun loads `edarun.toml` from the current\n\
                  directory if present. Additional files can be specified with\n\
                  --config and are loaded afterwards, overriding earlier values.\n\
                  EDARUN_* environment variables and --set KEY=VALUE override\n\
                  file settings. Use --no-default-config to skip auto loading."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the config files.
    Options,

    /// Lists the config files used by edarun.
    Files,

    /// Prints the composed environment.
    Env(EnvArgs),

    /// Runs a tool inside the composed environment.
    Exec(ExecArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
