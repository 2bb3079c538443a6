//! Configuration loading from build-time values and the environment.
//!
//! Uses `from_lookup` with an in-memory map so tests never touch the process
//! environment.

use std::collections::HashMap;

use runtime_healthcheck::config::{ProbeConfig, INTERPRETER_VAR, MIN_VERSION_VAR, RUNTIME_VAR};
use runtime_healthcheck::runtime::Runtime;
use semver::Version;

fn load(vars: &[(&str, &str)]) -> Result<ProbeConfig, String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ProbeConfig::from_lookup(|name| map.get(name).cloned())
}

#[test]
fn overrides_select_node() {
    let config = load(&[(RUNTIME_VAR, "node")]).unwrap();
    assert_eq!(config.runtime, Runtime::Node);
    assert_eq!(config.interpreter, "node");
    assert_eq!(config.minimum, Version::new(18, 0, 0));
}

#[test]
fn overrides_interpreter_and_minimum() {
    let config = load(&[
        (RUNTIME_VAR, "python"),
        (INTERPRETER_VAR, "/usr/local/bin/python3.12"),
        (MIN_VERSION_VAR, "3.12"),
    ])
    .unwrap();

    assert_eq!(config.runtime, Runtime::Python);
    assert_eq!(config.interpreter, "/usr/local/bin/python3.12");
    assert_eq!(config.minimum, Version::new(3, 12, 0));
}

#[test]
fn empty_values_fall_back_to_defaults() {
    let config = load(&[(RUNTIME_VAR, "python"), (INTERPRETER_VAR, "  "), (MIN_VERSION_VAR, "")]).unwrap();
    assert_eq!(config, ProbeConfig::for_runtime(Runtime::Python));
}

#[test]
fn unknown_runtime_is_rejected() {
    let err = load(&[(RUNTIME_VAR, "ruby")]).unwrap_err();
    assert!(err.starts_with(RUNTIME_VAR), "unexpected message: {err}");
    assert!(err.contains("ruby"));
}

#[test]
fn invalid_minimum_is_rejected() {
    let err = load(&[(RUNTIME_VAR, "python"), (MIN_VERSION_VAR, "latest")]).unwrap_err();
    assert!(err.starts_with(MIN_VERSION_VAR), "unexpected message: {err}");
}

#[test]
fn environment_minimum_replaces_build_policy() {
    let config = load(&[(RUNTIME_VAR, "python"), (MIN_VERSION_VAR, "99")]).unwrap();
    assert_eq!(config.minimum, Version::new(99, 0, 0));
}
