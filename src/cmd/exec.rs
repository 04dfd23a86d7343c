// edarun: EDA Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `exec` command: launch a tool inside the composed environment.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::cli::env::EnvFormat;
use crate::cli::exec::ExecArgs;
use crate::cmd::env::render_env;
use crate::config::Config;
use crate::core::env::container::Env;
use crate::core::env::current_env;
use crate::core::process::builder::{ProcessBuilder, ProcessFlags};
use crate::error::Result;

/// Exit code reported when the tool was interrupted (128 + SIGINT).
const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Composes the environment and runs the tool, forwarding its exit code.
///
/// # Errors
///
/// Returns an error if composition fails in strict mode, the program cannot
/// be resolved, or the process cannot be spawned.
pub async fn run_exec_command(args: &ExecArgs, config: &Config, dry: bool) -> Result<i32> {
    let base = current_env();
    let composed = config.compose(&base)?;

    let builder = resolve_program(config, &composed, &args.program)?;
    debug!(program = %builder.program().display(), "resolved");

    if dry {
        // Launch preview: the environment the tool would see, then the
        // command line
        for line in render_env(EnvFormat::Shell, &composed.to_map())? {
            println!("{line}");
        }
        let mut cmd_line = builder.program().display().to_string();
        for arg in &args.args {
            cmd_line.push(' ');
            cmd_line.push_str(arg);
        }
        println!("{cmd_line}");
        return Ok(0);
    }

    let mut builder = builder
        .args(&args.args)
        .env(composed)
        .inherit_stdio()
        .flag(ProcessFlags::ALLOW_FAILURE)
        .name(args.program.clone());

    if let Some(cwd) = &args.cwd {
        builder = builder.cwd(cwd);
    }
    if let Some(secs) = args.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    // Ctrl-C terminates the tool, not just the launcher
    let token = CancellationToken::new();
    let signal_token = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_token.cancel();
        }
    });

    let output = builder.run_with_cancellation(token).await?;

    if output.is_interrupted() {
        warn!(program = %args.program, "interrupted");
        return Ok(INTERRUPTED_EXIT_CODE);
    }
    Ok(output.exit_code())
}

/// Resolves the program to launch.
///
/// Names from the `[tools]` table map to their configured executables; bare
/// names resolve against the composed `PATH` so tool directories added by
/// directives are searched.
fn resolve_program(config: &Config, composed: &Env, name: &str) -> Result<ProcessBuilder> {
    let target = config
        .tools
        .resolve(name)
        .map_or_else(|| PathBuf::from(name), Path::to_path_buf);

    if target.components().count() == 1 {
        let search_path = composed.get("PATH").unwrap_or_default();
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let program = target.to_string_lossy();
        Ok(ProcessBuilder::which_in(&program, search_path, cwd)?)
    } else {
        Ok(ProcessBuilder::new(target))
    }
}
