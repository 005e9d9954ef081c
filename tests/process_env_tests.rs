//! Integration tests for reading overrides from the real process environment
//!
//! Kept in their own test binary with a single test function, since they
//! mutate process-wide state.

#![cfg(unix)]

use std::env;
use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;

use tickly_environment::prelude::*;

#[test]
fn test_process_environment_with_non_utf8_values() {
    let garbage = OsStr::from_bytes(b"\xff\xfe");

    // unrelated variables are never decoded
    env::set_var("UNRELATED_VAR", garbage);
    let config = CliArgs::new().load_settings();
    assert!(config.is_ok(), "load_settings failed: {:?}", config.err());
    assert!(Environment::Development.preset().merge_with_env().is_ok());

    // prefixed variables are, and report which one is broken
    env::set_var("TICKLY_API_URL", garbage);
    let err = CliArgs::new().load_settings().unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("TICKLY_API_URL"));

    env::remove_var("TICKLY_API_URL");
    env::set_var("TICKLY_USE_MOCKS", "true");
    let config = CliArgs::new().load_settings().unwrap();
    assert!(config.use_mocks());

    env::remove_var("TICKLY_USE_MOCKS");
    env::remove_var("UNRELATED_VAR");
}
