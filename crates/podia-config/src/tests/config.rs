use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(
        config.auth.endpoint.as_str(),
        eq("https://identitytoolkit.googleapis.com/v1")
    );
    assert_that!(config.inference.model.as_str(), eq("gemini-2.0-flash"));
    assert_that!(config.session.cache_file.as_str(), eq("session.json"));
    assert_that!(config.logging.colored, eq(true));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_ok_and_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [auth]
            api_key = "auth-key"

            [store]
            endpoint = "https://records.example.com"

            [inference]
            api_key = "vision-key"
            model = "gemini-2.5-pro"

            [logging]
            level = "debug"
            colored = false
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.auth.api_key.as_str(), eq("auth-key"));
    assert_that!(
        config.store.endpoint.as_str(),
        eq("https://records.example.com")
    );
    assert_that!(config.inference.model.as_str(), eq("gemini-2.5-pro"));
    assert_that!(*config.logging.level, eq(log::LevelFilter::Debug));
    assert_that!(config.logging.colored, eq(false));
}

#[test]
#[serial]
fn given_complete_config_when_validate_then_ok() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [auth]
            api_key = "auth-key"

            [store]
            endpoint = "https://records.example.com"

            [inference]
            api_key = "vision-key"
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

// =========================================================================
// Environment Override Tests
// =========================================================================

#[test]
#[serial]
fn given_env_overrides_when_load_then_env_wins_over_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [inference]
            model = "gemini-2.0-flash"
        "#,
    )
    .unwrap();
    let _model = EnvGuard::set("PODIA_INFERENCE_MODEL", "gemini-exp");
    let _token = EnvGuard::set("PODIA_SESSION_BOOTSTRAP_TOKEN", "boot-token");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.inference.model.as_str(), eq("gemini-exp"));
    assert_that!(
        config.session.bootstrap_token.as_deref(),
        eq(Some("boot-token"))
    );
}

#[test]
#[serial]
fn given_unknown_log_level_in_toml_when_load_then_err() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [logging]
            level = "verbose"
        "#,
    )
    .unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}

// =========================================================================
// Validation Tests
// =========================================================================

#[test]
#[serial]
fn given_missing_api_key_when_validate_then_err() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_non_http_store_endpoint_when_validate_then_err() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [auth]
            api_key = "auth-key"

            [store]
            endpoint = "records.example.com"

            [inference]
            api_key = "vision-key"
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_config_dir_when_session_cache_path_then_joins_filename() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let path = config.session_cache_path().unwrap();

    // Then
    assert_that!(path, eq(&temp.path().join("session.json")));
}
