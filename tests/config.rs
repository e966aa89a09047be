use taskpad::config::Config;
use taskpad::utils::datetime;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.ui.startup_project, "last");
    assert_eq!(config.display.date_format, datetime::DATE_FORMAT);
    assert!(config.display.show_descriptions);
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Empty startup project should fail
    config.ui.startup_project = String::new();
    assert!(config.validate().is_err());

    // Reset and test invalid date format
    config.ui.startup_project = "default".to_string();
    config.display.date_format = "%Q".to_string();
    assert!(config.validate().is_err());

    // display-only formats are valid even though they cannot parse
    config.display.date_format = "%b %-d, %Y".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("startup_project = \"last\""));
    assert!(toml_str.contains("enabled = false"));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
startup_project = "default"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.ui.startup_project, "default");
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.display.date_format, datetime::DATE_FORMAT);
    assert!(config.display.show_descriptions);
}
