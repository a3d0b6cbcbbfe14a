//! Integration tests for Settings loading with layered precedence.
//!
//! Precedence (lowest to highest): compiled defaults, global config,
//! explicit `--config` file, `AGENDA_*` environment variables. These tests
//! exercise the explicit-file layer against temp directories only.

use std::fs;

use tempfile::TempDir;

use agenda::application::ApplicationError;
use agenda::config::{ColorMode, Settings};

#[test]
fn given_explicit_config_when_loading_then_overrides_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("agenda.toml");
    fs::write(
        &path,
        r#"
color = "never"

[table]
ascii = true
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load(Some(&path)).expect("load settings");

    // Assert
    assert_eq!(settings.color, ColorMode::Never);
    assert!(settings.table.ascii);
    assert!(settings.table.show_count, "unspecified field keeps default");
}

#[test]
fn given_missing_explicit_config_when_loading_then_fails() {
    // Arrange: unlike the global file, an explicitly requested file must exist
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    // Act
    let result = Settings::load(Some(&path));

    // Assert
    assert!(matches!(
        result.unwrap_err(),
        ApplicationError::Config { .. }
    ));
}

#[test]
fn given_malformed_explicit_config_when_loading_then_fails_with_config_error() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("agenda.toml");
    fs::write(&path, "color = [not toml").unwrap();

    // Act
    let err = Settings::load(Some(&path)).unwrap_err();

    // Assert
    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(err.to_string().contains("parse"));
}

#[test]
fn given_no_explicit_config_when_loading_then_succeeds() {
    let settings = Settings::load(None).expect("load settings");
    // Only sanity here: the result may include the machine's global config.
    let _ = settings.color;
}

#[test]
fn given_unknown_color_value_when_loading_then_fails() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("agenda.toml");
    fs::write(&path, "color = \"rainbow\"\n").unwrap();

    // Act
    let result = Settings::load(Some(&path));

    // Assert
    assert!(matches!(
        result.unwrap_err(),
        ApplicationError::Config { .. }
    ));
}
