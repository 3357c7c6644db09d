use std::fs;

use kitgen_config::{CONFIG_FILE, Config, Error};
use tempfile::TempDir;

#[test]
fn test_discover_without_file_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::discover(temp.path()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_discover_reads_kitgen_toml() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(CONFIG_FILE),
        "service_path_format = \"services/%s\"\nmodule_name = \"github.com/acme/order\"\n",
    )
    .unwrap();

    let config = Config::discover(temp.path()).unwrap();
    assert_eq!(config.format_service_path("order"), "services/order");
    assert_eq!(config.module_name.as_deref(), Some("github.com/acme/order"));
    assert_eq!(config.service_file_name, "service.go");
}

#[test]
fn test_from_file_missing_reports_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nope.toml");

    let err = Config::from_file(&path).unwrap_err();
    assert!(matches!(*err, Error::Io { .. }));
    assert!(err.to_string().contains("nope.toml"));
}

#[test]
fn test_invalid_file_surfaces_filename() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(CONFIG_FILE);
    fs::write(&path, "service_file_name = \"\"\n").unwrap();

    let err = Config::from_file(&path).unwrap_err();
    match *err {
        Error::InvalidValue { ref key, ref src, .. } => {
            assert_eq!(key, "service_file_name");
            assert!(src.name().ends_with(CONFIG_FILE));
        }
        ref other => panic!("expected InvalidValue, got {other:?}"),
    }
}
