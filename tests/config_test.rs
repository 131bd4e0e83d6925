//! Integration tests for layered Settings loading.
//!
//! These run without environment overrides (`Settings::load_layers`) and with
//! temp directories standing in for the global config location.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use course_planner::application::ApplicationError;
use course_planner::config::Settings;
use course_planner::domain::Traversal;

fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn given_no_config_files_when_loading_then_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let absent = temp.path().join("course-planner.toml");

    let settings = Settings::load_layers(Some(&absent), None).unwrap();

    assert_eq!(settings, Settings::default());
    assert_eq!(settings.delimiter, ',');
    assert_eq!(settings.listing_order, Traversal::In);
    assert!(settings.validate_on_load);
    assert!(settings.data_file.is_none());
}

#[test]
fn given_global_and_explicit_config_when_loading_then_explicit_wins_per_field() {
    let temp = TempDir::new().unwrap();
    let global = write_config(
        &temp,
        "global.toml",
        r#"
data_file = "/srv/courses.csv"
delimiter = ";"
listing_order = "pre"
"#,
    );
    let explicit = write_config(
        &temp,
        "local.toml",
        r#"
listing_order = "post"
validate_on_load = false
"#,
    );

    let settings = Settings::load_layers(Some(&global), Some(&explicit)).unwrap();

    assert_eq!(settings.data_file, Some(PathBuf::from("/srv/courses.csv")));
    assert_eq!(settings.delimiter, ';');
    assert_eq!(settings.listing_order, Traversal::Post);
    assert!(!settings.validate_on_load);
}

#[test]
fn given_missing_explicit_config_when_loading_then_errors() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.toml");

    let result = Settings::load_layers(None, Some(&missing));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_invalid_toml_when_loading_then_errors_with_path() {
    let temp = TempDir::new().unwrap();
    let bad = write_config(&temp, "bad.toml", "listing_order = \"sideways\"\n");

    let err = Settings::load_layers(None, Some(&bad)).unwrap_err();

    assert!(err.to_string().contains("bad.toml"), "got: {err}");
}

#[test]
fn given_tilde_in_data_file_when_loading_then_expands_home() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp, "c.toml", "data_file = \"~/courses.csv\"\n");

    let settings = Settings::load_layers(None, Some(&config)).unwrap();

    let data_file = settings.data_file.unwrap();
    assert!(!data_file.to_string_lossy().starts_with('~'));
    assert!(data_file.ends_with("courses.csv"));
}

#[test]
fn given_settings_when_resolving_data_file_then_explicit_beats_configured() {
    let settings = Settings {
        data_file: Some(PathBuf::from("configured.csv")),
        ..Settings::default()
    };

    let explicit = settings.resolve_data_file(Some(&PathBuf::from("given.csv"))).unwrap();
    let fallback = settings.resolve_data_file(None).unwrap();

    assert_eq!(explicit, PathBuf::from("given.csv"));
    assert_eq!(fallback, PathBuf::from("configured.csv"));
    assert!(matches!(
        Settings::default().resolve_data_file(None),
        Err(ApplicationError::NoDataFile)
    ));
}

#[test]
fn given_settings_when_rendering_toml_then_round_trips_fields() {
    let settings = Settings {
        delimiter: '|',
        listing_order: Traversal::Pre,
        ..Settings::default()
    };

    let rendered = settings.to_toml().unwrap();

    assert!(rendered.contains("delimiter = \"|\""));
    assert!(rendered.contains("listing_order = \"pre\""));
    assert!(!rendered.contains("data_file"));
}
