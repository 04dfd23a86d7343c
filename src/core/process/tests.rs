// edarun: EDA Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::builder::{ProcessBuilder, ProcessFlags};
use crate::core::env::compose::apply;
use crate::core::env::container::Env;
use crate::core::env::types::Directive;

#[tokio::test]
async fn test_process_echo() {
    // Use Write-Output in PowerShell, echo in Unix shell
    #[cfg(windows)]
    let output = ProcessBuilder::raw("Write-Output 'hello'")
        .capture_output()
        .run()
        .await
        .expect("echo should succeed");

    #[cfg(not(windows))]
    let output = ProcessBuilder::new("echo")
        .arg("hello")
        .capture_output()
        .run()
        .await
        .expect("echo should succeed");

    assert!(output.success());
    insta::assert_snapshot!(output.stdout().trim(), @"hello");
}

#[tokio::test]
async fn test_process_exit_code() {
    let output = ProcessBuilder::raw("exit 42")
        .flag(ProcessFlags::ALLOW_FAILURE)
        .quiet()
        .run()
        .await
        .expect("process should complete");

    assert_eq!(output.exit_code(), 42);
}

#[tokio::test]
async fn test_process_nonzero_exit_is_error_by_default() {
    let result = ProcessBuilder::raw("exit 3").quiet().run().await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_process_reads_composed_env() {
    let composed = apply(
        &Env::new(),
        &[
            Directive::set("SWROOT", "/software"),
            Directive::set("XYCE_HOME", "${SWROOT}/Xyce/Parallel"),
        ],
    );

    // PowerShell uses $env:VAR syntax, Unix uses $VAR
    #[cfg(windows)]
    let output = ProcessBuilder::raw("Write-Output $env:XYCE_HOME")
        .env(composed)
        .capture_stdout()
        .run()
        .await
        .expect("process should succeed");

    #[cfg(not(windows))]
    let output = ProcessBuilder::raw("echo $XYCE_HOME")
        .env(composed)
        .capture_stdout()
        .run()
        .await
        .expect("process should succeed");

    insta::assert_snapshot!(output.stdout().trim(), @"/software/Xyce/Parallel");
}

#[test]
fn test_executable_lookup_found() {
    // cargo should always be available since we're running tests with cargo
    let which_result = ProcessBuilder::which("cargo");
    assert!(which_result.is_ok(), "which: cargo should be found in PATH");
    let builder = which_result.unwrap();
    assert!(
        builder.program().exists(),
        "which: returned program path should exist"
    );

    assert!(
        ProcessBuilder::exists("cargo"),
        "exists: cargo should exist in PATH"
    );

    let find_result = ProcessBuilder::find("cargo");
    assert!(find_result.is_some(), "find: cargo should be found");
}

#[test]
fn test_executable_lookup_not_found() {
    let program = "nonexistent_program_12345";

    let which_result = ProcessBuilder::which(program);
    assert!(
        which_result.is_err(),
        "which: nonexistent program should not be found"
    );
    let err_msg = format!("{}", which_result.unwrap_err());
    assert!(
        err_msg.contains("not found") || err_msg.contains(program),
        "which: error should mention the program: {err_msg}"
    );

    assert!(
        !ProcessBuilder::exists(program),
        "exists: nonexistent program should not exist"
    );
    assert!(
        ProcessBuilder::find(program).is_none(),
        "find: nonexistent program should return None"
    );
}

#[cfg(unix)]
#[test]
fn test_which_in_searches_given_path_only() {
    let found = ProcessBuilder::which_in("sh", "/bin:/usr/bin", "/");
    assert!(found.is_ok(), "sh should be found in /bin:/usr/bin");

    let missing = ProcessBuilder::which_in("sh", "/nonexistent_dir_12345", "/");
    assert!(missing.is_err(), "sh should not be found in empty search path");
}
