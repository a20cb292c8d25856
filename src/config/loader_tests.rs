//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

// ===== Paths =====

#[test]
fn default_config_path_ends_with_taxcalc_config_toml() {
    if let Some(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(
            path_str.contains("taxcalc") && path_str.ends_with("config.toml"),
            "Path should contain 'taxcalc' and end with 'config.toml', got: {}",
            path_str
        );
    }
}

#[test]
fn default_log_path_ends_with_taxcalc_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("taxcalc.log"),
        "Default log path should end with 'taxcalc.log', got: {:?}",
        path
    );
}

// ===== load_config_file =====

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/taxcalc.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = env::temp_dir().join("taxcalc_test_config.toml");
    let toml_content = r#"
fps = 30
start_fullscreen = true
cell_width = 10
cell_height = 20
no_color = true
log_file_path = "/tmp/taxcalc-test.log"
"#;
    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let config = load_config_file(&config_path)
        .expect("Should parse valid TOML")
        .expect("Should return Some for existing file");

    assert_eq!(config.fps, Some(30));
    assert_eq!(config.start_fullscreen, Some(true));
    assert_eq!(config.cell_width, Some(10));
    assert_eq!(config.cell_height, Some(20));
    assert_eq!(config.no_color, Some(true));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/taxcalc-test.log"))
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("taxcalc_test_invalid.toml");
    fs::write(&config_path, "this is not valid TOML ][}{").expect("Failed to write config");

    let result = load_config_file(&config_path);

    match result {
        Err(ConfigError::ParseError { path, .. }) => assert_eq!(path, config_path),
        other => panic!("Expected ParseError, got {:?}", other),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_unknown_keys() {
    let config_path = env::temp_dir().join("taxcalc_test_unknown_key.toml");
    fs::write(&config_path, "tax_rate = 0.2\n").expect("Failed to write config");

    let result = load_config_file(&config_path);

    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Tax rate is fixed and must not be configurable, got {:?}",
        result
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_handles_partial_config() {
    let config_path = env::temp_dir().join("taxcalc_test_partial.toml");
    fs::write(&config_path, "fps = 24\n").expect("Failed to write config");

    let config = load_config_file(&config_path).unwrap().unwrap();
    assert_eq!(config.fps, Some(24));
    assert_eq!(config.start_fullscreen, None);

    fs::remove_file(config_path).ok();
}

// ===== load_config_with_precedence =====

#[test]
#[serial(taxcalc_env)]
fn explicit_path_wins_over_env_var() {
    let explicit = env::temp_dir().join("taxcalc_test_explicit.toml");
    let from_env = env::temp_dir().join("taxcalc_test_from_env.toml");
    fs::write(&explicit, "fps = 10\n").unwrap();
    fs::write(&from_env, "fps = 20\n").unwrap();
    env::set_var(CONFIG_ENV_VAR, &from_env);

    let config = load_config_with_precedence(Some(explicit.clone())).unwrap();

    env::remove_var(CONFIG_ENV_VAR);
    assert_eq!(config.and_then(|c| c.fps), Some(10));

    fs::remove_file(explicit).ok();
    fs::remove_file(from_env).ok();
}

#[test]
#[serial(taxcalc_env)]
fn env_var_path_is_used_without_explicit_path() {
    let from_env = env::temp_dir().join("taxcalc_test_env_only.toml");
    fs::write(&from_env, "start_fullscreen = true\n").unwrap();
    env::set_var(CONFIG_ENV_VAR, &from_env);

    let config = load_config_with_precedence(None).unwrap();

    env::remove_var(CONFIG_ENV_VAR);
    assert_eq!(config.and_then(|c| c.start_fullscreen), Some(true));

    fs::remove_file(from_env).ok();
}

// ===== merge_config =====

#[test]
fn merge_with_no_file_yields_defaults() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_takes_set_fields_and_defaults_the_rest() {
    let file = ConfigFile {
        fps: Some(30),
        cell_height: Some(18),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(file));

    assert_eq!(resolved.fps, 30);
    assert_eq!(resolved.cell_height, 18);
    assert_eq!(resolved.cell_width, 8);
    assert!(!resolved.start_fullscreen);
}

#[test]
fn config_file_log_path_overrides_default() {
    let custom_path = PathBuf::from("/custom/path/to/app.log");
    let file = ConfigFile {
        log_file_path: Some(custom_path.clone()),
        ..ConfigFile::default()
    };

    assert_eq!(merge_config(Some(file)).log_file_path, custom_path);
}

// ===== apply_env_overrides =====

#[test]
#[serial(taxcalc_env)]
fn env_fps_overrides_file_value() {
    env::set_var(FPS_ENV_VAR, "25");
    let config = apply_env_overrides(ResolvedConfig::default());
    env::remove_var(FPS_ENV_VAR);

    assert_eq!(config.fps, 25);
}

#[test]
#[serial(taxcalc_env)]
fn non_numeric_env_fps_is_ignored() {
    env::set_var(FPS_ENV_VAR, "fast");
    let config = apply_env_overrides(ResolvedConfig::default());
    env::remove_var(FPS_ENV_VAR);

    assert_eq!(config.fps, 60);
}

// ===== apply_cli_overrides =====

#[test]
fn cli_overrides_apply_only_when_set() {
    let base = ResolvedConfig {
        fps: 30,
        start_fullscreen: true,
        ..ResolvedConfig::default()
    };

    let unchanged = apply_cli_overrides(base.clone(), None, None, None);
    assert_eq!(unchanged, base);

    let changed = apply_cli_overrides(base, Some(120), Some(false), Some(true));
    assert_eq!(changed.fps, 120);
    assert!(!changed.start_fullscreen);
    assert!(changed.no_color);
}

// ===== validate =====

#[test]
fn validate_accepts_defaults() {
    let config = ResolvedConfig::default();
    assert_eq!(config.clone().validate(), Ok(config));
}

#[test]
fn validate_rejects_zero_fps() {
    let config = ResolvedConfig {
        fps: 0,
        ..ResolvedConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidValue { field: "fps", .. })
    ));
}

#[test]
fn validate_rejects_fps_above_max() {
    let config = ResolvedConfig {
        fps: MAX_FPS + 1,
        ..ResolvedConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn validate_rejects_zero_cell_size() {
    let config = ResolvedConfig {
        cell_width: 0,
        ..ResolvedConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidValue {
            field: "cell_width",
            ..
        })
    ));
}
