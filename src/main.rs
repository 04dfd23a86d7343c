// edarun: EDA Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config (CLI overrides merged) --> Logging --> Dispatch
//!   Env | Exec | Options          (Files and Version skip config/logging)
//! ```

use std::process::ExitCode;

use edarun::cli::global::GlobalOptions;
use edarun::cli::{self, Command};
use edarun::cmd::config::{run_files_command, run_options_command};
use edarun::cmd::env::run_env_command;
use edarun::cmd::exec::run_exec_command;
use edarun::config::Config;
use edarun::config::loader::ConfigLoader;
use edarun::config::types::GlobalConfig;
use edarun::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    // Commands that need neither a loaded config nor logging
    match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            return ExitCode::SUCCESS;
        }
        Some(Command::Files) => {
            return match build_config_loader(&cli.global) {
                Ok(loader) => {
                    run_files_command(&loader.format_loaded_files());
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {e:#}");
                    ExitCode::FAILURE
                }
            };
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            return ExitCode::FAILURE;
        }
        _ => {}
    }

    // Config first: logging verbosity and destination come from the
    // resolved [global] section, with CLI flags merged in as overrides
    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&config.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config).await
}

fn build_log_config(global: &GlobalConfig) -> LogConfig {
    LogConfig::builder()
        .with_console_level(global.output_log_level)
        .with_file_level(global.file_log_level)
        .with_log_file(global.log_file.display().to_string())
        .build()
}

async fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Options) => {
            run_options_command(config);
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Env(args)) => run_env_command(args, config).map(|()| ExitCode::SUCCESS),
        Some(Command::Exec(args)) => {
            let dry = cli.global.dry || config.global.dry;
            run_exec_command(args, config, dry).await.map(exit_code_from)
        }
        // Version, Files and empty invocations return before config load
        _ => Ok(ExitCode::SUCCESS),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

/// Maps a tool exit code onto the launcher's own.
fn exit_code_from(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}

fn build_config_loader(global: &GlobalOptions) -> edarun::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional("edarun.toml");
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix("EDARUN");
    for entry in global.to_config_overrides() {
        let Some((key, value)) = entry.split_once('=') else {
            anyhow::bail!("invalid --set option '{entry}', expected KEY=VALUE");
        };
        loader = loader.set(key, value)?;
    }
    Ok(loader)
}

fn load_config(global: &GlobalOptions) -> edarun::error::Result<Config> {
    build_config_loader(global)?.build()
}
