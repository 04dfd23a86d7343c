// edarun: EDA Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Env command arguments.

use clap::{Args, ValueEnum};

/// Output format for the `env` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum EnvFormat {
    /// `export NAME='value'` lines, sourceable by a POSIX shell.
    #[default]
    Shell,
    /// `NAME=value` lines.
    Plain,
    /// A JSON object.
    Json,
}

/// Arguments for the `env` command.
#[derive(Debug, Clone, Default, Args)]
pub struct EnvArgs {
    /// Output format.
    #[arg(short = 'f', long, value_enum, default_value_t = EnvFormat::Shell)]
    pub format: EnvFormat,

    /// Print only directive-touched variables, not the full inherited
    /// environment.
    #[arg(long = "diff")]
    pub diff: bool,

    /// Print only the named variables.
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,
}
