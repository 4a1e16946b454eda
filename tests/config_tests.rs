//! Integration tests for configuration management

use helium::config::{Config, ConfigOverrides};

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    // Should have non-empty defaults for critical fields
    assert!(
        !config.project.name.is_empty(),
        "Default project name should not be empty"
    );
    assert!(
        !config.project.pattern.is_empty(),
        "Default pattern should not be empty"
    );
    assert!(
        !config.project.output.is_empty(),
        "Default output should not be empty"
    );
    assert!(!config.project.separate_metrics);
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[project]
name = "Acme"
pattern = "./src/**/*.py"
separate_metrics = true
excludes = ["./src/generated.py"]
template = "./custom_template.svg"
output = "./quality.pdf"

[mi]
multi = false

[cc]
no_assert = false
order = "SCORE"

[logging]
level = "info"
verbose = true
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.project.name, "Acme");
    assert_eq!(config.project.pattern, "./src/**/*.py");
    assert!(config.project.separate_metrics);
    assert_eq!(config.project.excludes, vec!["./src/generated.py"]);
    assert_eq!(config.project.template, "./custom_template.svg");
    assert_eq!(config.project.output, "./quality.pdf");
    assert!(!config.mi.multi);
    assert!(!config.cc.no_assert);
    assert_eq!(config.cc.order, "SCORE");
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.verbose);
}

#[test]
fn test_config_from_toml_partial() {
    // Missing fields within sections fall back to defaults
    let toml_str = r#"
[project]
name = "Minimal"

[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.project.name, "Minimal");
    assert_eq!(config.project.pattern, "./**/*.py"); // Default pattern
    assert!(config.mi.multi); // Default true
    assert!(config.cc.show_closures); // Default true
    assert_eq!(config.cc.min, "A");
    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, ""); // Default empty
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    let name = config.get("name");
    assert!(name.is_some());

    config.set("name", "Renamed").expect("Failed to set name");
    assert_eq!(config.get("name").unwrap(), "Renamed");

    config
        .set("separate_metrics", "true")
        .expect("Failed to set separate_metrics");
    assert!(config.project.separate_metrics);

    assert!(config.set("separate_metrics", "maybe").is_err());
    assert!(config.set("nonsense", "x").is_err());
    assert!(config.get("nonsense").is_none());
}

#[test]
fn test_config_unset_restores_default() {
    let defaults = Config::from_defaults();
    let mut config = Config::from_defaults();

    config.set("pattern", "./only/this.py").unwrap();
    config.unset("pattern", &defaults).expect("Failed to unset");
    assert_eq!(config.project.pattern, defaults.project.pattern);

    assert!(config.unset("nonsense", &defaults).is_err());
}

#[test]
fn test_config_save_load_round_trip() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config_file = dir.path().join(".heliumrc");

    let mut config = Config::from_defaults();
    config.project.name = "Round Trip".to_string();
    config.project.excludes = vec!["./skip.py".to_string()];
    config.save_to(&config_file).expect("save");

    let loaded = Config::load_from(&config_file).expect("load");
    assert_eq!(loaded.project.name, "Round Trip");
    assert_eq!(loaded.project.excludes, vec!["./skip.py"]);
}

#[test]
fn test_config_load_missing_file_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join(".heliumrc");
    assert!(Config::load_from(&missing).is_err());
}

#[test]
fn test_config_reset_removes_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config_file = dir.path().join(".heliumrc");

    Config::from_defaults().save_to(&config_file).expect("save");
    assert!(config_file.exists());

    Config::reset(&config_file).expect("reset");
    assert!(!config_file.exists());

    // Resetting an absent file is a no-op
    Config::reset(&config_file).expect("reset again");
}

#[test]
fn test_apply_overrides() {
    let mut config = Config::from_defaults();
    config.apply_overrides(&ConfigOverrides {
        output: Some("/tmp/custom.pdf".to_string()),
        template: None,
        converter: Some("inkscape".to_string()),
        separate_metrics: Some(true),
    });

    assert_eq!(config.project.output, "/tmp/custom.pdf");
    assert_eq!(config.project.template, "./report_template.svg"); // Untouched
    assert_eq!(config.project.converter, "inkscape");
    assert!(config.project.separate_metrics);
}
