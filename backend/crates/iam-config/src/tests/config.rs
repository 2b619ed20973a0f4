use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir, write_config};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, none, ok, some};
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
    assert_that!(config.api.base_url.as_str(), eq("http://localhost:3002"));
    assert_that!(config.retry.max_attempts, eq(3));
    assert_that!(config.retry.initial_delay_ms, eq(1000));
    assert_that!(config.cache.capacity, eq(100));
    assert_that!(config.cache.ttl_secs, eq(60));
    assert_that!(config.logging.file, none());
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_created() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("nested").join("iam");
    let _guard = EnvGuard::set(crate::CONFIG_DIR_ENV_VAR, nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(
        &temp,
        r#"
            [api]
            base_url = "https://iam.example.com"

            [cache]
            capacity = 250
            ttl_secs = 120

            [logging]
            level = "debug"
            file = "iam.log"
        "#,
    );

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.base_url.as_str(), eq("https://iam.example.com"));
    assert_that!(config.cache.capacity, eq(250));
    assert_that!(config.cache.ttl_secs, eq(120));
    assert_that!(*config.logging.level, eq(log::LevelFilter::Debug));
    assert_that!(config.log_file(), some(anything()));
    // Untouched sections keep their defaults
    assert_that!(config.retry.max_attempts, eq(3));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(
        &temp,
        r#"
            [api]
            base_url = "https://from-toml.example.com"
        "#,
    );
    let _url = EnvGuard::set("IAM_API_BASE_URL", "http://from-env:9000");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.base_url.as_str(), eq("http://from-env:9000"));
}

#[test]
#[serial]
fn given_log_env_vars_when_load_then_applied() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _level = EnvGuard::set("IAM_LOG_LEVEL", "trace");
    let _colored = EnvGuard::set("IAM_LOG_COLORED", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(*config.logging.level, eq(log::LevelFilter::Trace));
    assert_that!(config.logging.colored, eq(false));
}

// =========================================================================
// Error Tests
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[api\nbase_url = ");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_unparseable_env_number_when_load_then_default_kept() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _capacity = EnvGuard::set("IAM_CACHE_CAPACITY", "lots");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.cache.capacity, eq(100));
}

#[test]
#[serial]
fn given_blank_log_file_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("IAM_LOG_FILE", "  ");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}
