//! Settings files and catalog selection feeding the registration state.

use std::fs;
use std::path::{Path, PathBuf};

use course_cli::config::Settings;
use course_cli::context::{StateOptions, build_state};
use tempfile::TempDir;

const CATALOG: &str = r#"
[bounds]
min = 3
max = 6

[[courses]]
id = "NET-01"
code = "BCS3043"
name = "Computer Networks"
lecturer = "Dr. Muhammad Faiz"
schedule = "Fri 8:00–11:00"
credit_hours = 3
category = "Core"

[[courses]]
id = "ENG-05"
code = "UHL2412"
name = "English for Academic Communication"
lecturer = "Pn. Rosnah Ismail"
schedule = "Wed 8:00–10:00"
credit_hours = 2
category = "University"
"#;

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn explicit_settings_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = write(
        dir.path(),
        "settings.toml",
        "[bounds]\nmin_credits = 12\nmax_credits = 18\n",
    );
    let settings = Settings::load(Some(path.as_path())).unwrap();
    assert_eq!(settings.bounds.min_credits, Some(12));
    assert_eq!(settings.bounds.max_credits, Some(18));
}

#[test]
fn missing_explicit_settings_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    let err = Settings::load(Some(path.as_path())).unwrap_err();
    assert!(format!("{err:#}").contains("read settings file"));
}

#[test]
fn malformed_settings_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "settings.toml", "[bounds]\nmin_credits = \"many\"\n");
    let err = Settings::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("parse settings file"));
}

#[test]
fn catalog_flag_uses_file_bounds() {
    let dir = TempDir::new().unwrap();
    let catalog = write(dir.path(), "catalog.toml", CATALOG);
    let config = write(dir.path(), "settings.toml", "");
    let options = StateOptions {
        catalog: Some(catalog),
        config: Some(config),
        ..StateOptions::default()
    };
    let mut state = build_state(&options).unwrap();
    assert_eq!(state.courses().len(), 2);
    assert_eq!((state.bounds().min(), state.bounds().max()), (3, 6));

    assert!(state.toggle_selection("NET-01"));
    assert!(state.can_register());
}

#[test]
fn settings_supply_catalog_and_bounds() {
    let dir = TempDir::new().unwrap();
    let catalog = write(dir.path(), "catalog.toml", CATALOG);
    let settings = format!(
        "[bounds]\nmax_credits = 4\n\n[catalog]\npath = {:?}\n",
        catalog.display().to_string()
    );
    let config = write(dir.path(), "settings.toml", &settings);
    let options = StateOptions {
        config: Some(config),
        ..StateOptions::default()
    };
    let mut state = build_state(&options).unwrap();
    assert_eq!((state.bounds().min(), state.bounds().max()), (3, 4));

    state.toggle_selection("NET-01");
    state.toggle_selection("ENG-05");
    assert_eq!(state.total_credits(), 5);
    assert_eq!(state.status_message(), "Credit hours exceeded. Maximum allowed is 4.");
}

#[test]
fn flags_override_settings() {
    let dir = TempDir::new().unwrap();
    let config = write(dir.path(), "settings.toml", "[bounds]\nmin_credits = 12\n");
    let options = StateOptions {
        config: Some(config),
        min_credits: Some(3),
        max_credits: Some(6),
        ..StateOptions::default()
    };
    let state = build_state(&options).unwrap();
    assert_eq!((state.bounds().min(), state.bounds().max()), (3, 6));
    assert_eq!(state.courses()[0].id.as_str(), "BCS3013-01");
}

#[test]
fn inverted_flags_are_rejected() {
    let dir = TempDir::new().unwrap();
    let config = write(dir.path(), "settings.toml", "");
    let options = StateOptions {
        config: Some(config),
        min_credits: Some(10),
        max_credits: Some(5),
        ..StateOptions::default()
    };
    let err = build_state(&options).unwrap_err();
    assert!(err.to_string().contains("invalid credit bounds"));
}

#[test]
fn missing_catalog_names_the_path() {
    let dir = TempDir::new().unwrap();
    let config = write(dir.path(), "settings.toml", "");
    let options = StateOptions {
        catalog: Some(dir.path().join("nope.toml")),
        config: Some(config),
        ..StateOptions::default()
    };
    let err = build_state(&options).unwrap_err();
    assert!(err.to_string().contains("nope.toml"));
}
