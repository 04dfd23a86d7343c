// edarun: EDA Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Exec command arguments.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `exec` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ExecArgs {
    /// Program to run: a name from the [tools] table ('klayout', 'xyce',
    /// 'openram'), or any executable resolvable in the composed PATH.
    #[arg(value_name = "PROGRAM")]
    pub program: String,

    /// Arguments passed through to the program.
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,

    /// Working directory for the tool.
    #[arg(long = "cwd", value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Kill the tool after this many seconds.
    #[arg(long = "timeout", value_name = "SECS")]
    pub timeout: Option<u64>,
}
