// edarun: EDA Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process launch with a composed environment.
//!
//! ```text
//! ProcessBuilder --> build_command()
//!   env_clear() + composed Env
//!   args, cwd, stdio
//!        |
//!        v
//!   run() / run_with_cancellation(token)
//!        |
//!        v
//!   ProcessOutput { exit_code, stdout, stderr, interrupted }
//! ```

pub mod builder;
mod runner;

#[cfg(test)]
mod tests;
