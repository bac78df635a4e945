//! Configuration file loading behavior.

use std::io::Write;

use leakgate::config::FilterConfig;

#[test]
fn load_from_reads_toml_file() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let path = dir.path().join("leakgate.toml");

    let mut file = std::fs::File::create(&path).expect("should create config file");
    writeln!(
        file,
        r#"
enabled = true
use_builtin_patterns = false

[[custom_patterns]]
name = "ticket"
category = "Internal"
pattern = "TICKET-[0-9]+"
"#
    )
    .expect("should write config");

    let config = FilterConfig::load_from(&path).expect("should load");
    assert!(config.enabled);
    assert!(!config.use_builtin_patterns);
    assert_eq!(config.custom_patterns.len(), 1);
    assert_eq!(config.custom_patterns[0].name, "ticket");
}

#[test]
fn load_from_missing_file_returns_defaults() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let path = dir.path().join("does-not-exist.toml");

    let config = FilterConfig::load_from(&path).expect("missing file is not an error");
    assert!(config.enabled);
    assert!(config.use_builtin_patterns);
    assert!(config.custom_patterns.is_empty());
}

#[test]
fn load_from_invalid_toml_is_an_error() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let path = dir.path().join("leakgate.toml");
    std::fs::write(&path, "enabled = {{ nope").expect("should write file");

    assert!(FilterConfig::load_from(&path).is_err());
}
