//! Config file loading integration tests.
//!
//! These tests verify that a probe target list written by hand is loaded
//! with the expected field values and defaults.

use sandprobe_core::config::{ProbeConfig, DEFAULT_SAMPLE_LIMIT};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
fn test_config_load_partial_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sandprobe.json5");
    fs::write(&path, "{ sensitive_files: ['.ssh/id_rsa'] }").unwrap();

    let loaded = ProbeConfig::load(&path).unwrap();
    let defaults = ProbeConfig::default();
    assert_eq!(loaded.sensitive_files, vec![".ssh/id_rsa".to_string()]);
    assert_eq!(loaded.sample_limit, DEFAULT_SAMPLE_LIMIT);
    assert_eq!(loaded.system_dirs, defaults.system_dirs);
    assert_eq!(loaded.network, defaults.network);
}

#[test]
fn test_config_load_full_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sandprobe.json5");
    fs::write(
        &path,
        r#"{
            sandbox_home: "/sandbox/home",
            system_dirs: ["/opt"],
            network: { enabled: false },
        }"#,
    )
    .unwrap();

    let loaded = ProbeConfig::load(&path).unwrap();
    assert_eq!(loaded.sandbox_home, Some(PathBuf::from("/sandbox/home")));
    assert_eq!(loaded.system_dirs, vec![PathBuf::from("/opt")]);
    assert!(!loaded.network.enabled);
    assert!(loaded.validate().is_ok());
}

#[test]
fn test_config_load_nonexistent() {
    let result = ProbeConfig::load(Path::new("/nonexistent/sandprobe.json5"));
    assert!(result.is_err());
}

#[test]
fn test_config_parse_invalid() {
    let result = ProbeConfig::parse("not valid json");
    assert!(result.is_err());
}
