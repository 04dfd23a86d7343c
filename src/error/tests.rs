// edarun: EDA Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ComposeError, ConfigError, EdarunError, EdarunResult};

#[test]
fn test_config_error_display() {
    let err = ConfigError::MissingKey {
        section: "paths".to_string(),
        key: "swroot".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"missing required config key 'swroot' in section '[paths]'"
    );
}

#[test]
fn test_compose_error_display() {
    let err = ComposeError::UnresolvedReference {
        name: "PATH".to_string(),
        referenced: "XYCE_HOME".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"directive for 'PATH' references unset variable 'XYCE_HOME'"
    );
}

#[test]
fn test_edarun_error_size() {
    // Box<str> variants (Bailed, Other) are 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<EdarunError>();
    assert!(size <= 24, "EdarunError is {size} bytes, expected <= 24");
}

#[test]
fn test_edarun_result_size() {
    let size = std::mem::size_of::<EdarunResult<()>>();
    assert!(size <= 24, "EdarunResult<()> is {size} bytes, expected <= 24");
}
