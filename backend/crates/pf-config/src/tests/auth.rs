use crate::tests::{EnvGuard, TEST_JWT_SECRET, setup_config_dir};
use crate::{AuthProviderKind, Config};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Local Provider
// =========================================================================

#[test]
#[serial]
fn given_local_provider_without_jwt_secret_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("jwt_secret"));
}

#[test]
#[serial]
fn given_jwt_secret_too_short_when_validate_then_error_mentions_32_chars() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::set("PF_AUTH_JWT_SECRET", "tooshort");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("32 characters"));
}

#[test]
#[serial]
fn given_jwt_secret_exactly_32_chars_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::set("PF_AUTH_JWT_SECRET", TEST_JWT_SECRET);

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_token_ttl_below_one_minute_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::set("PF_AUTH_JWT_SECRET", TEST_JWT_SECRET);
    let _ttl = EnvGuard::set("PF_AUTH_TOKEN_TTL_SECS", "59");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("token_ttl_secs"));
}

// =========================================================================
// Validation Tests - Supabase Provider
// =========================================================================

#[test]
#[serial]
fn given_supabase_provider_env_when_load_then_provider_selected() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _provider = EnvGuard::set("PF_AUTH_PROVIDER", "Supabase");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.auth.provider, eq(AuthProviderKind::Supabase));
}

#[test]
#[serial]
fn given_unknown_provider_env_when_load_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _provider = EnvGuard::set("PF_AUTH_PROVIDER", "ldap");

    // When
    let result = Config::load();

    // Then
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("auth.provider"));
}

#[test]
#[serial]
fn given_supabase_without_url_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _provider = EnvGuard::set("PF_AUTH_PROVIDER", "supabase");
    let _key = EnvGuard::set("PF_SUPABASE_SERVICE_ROLE_KEY", "service-key");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("supabase_url"));
}

#[test]
#[serial]
fn given_supabase_without_service_key_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _provider = EnvGuard::set("PF_AUTH_PROVIDER", "supabase");
    let _url = EnvGuard::set("PF_SUPABASE_URL", "https://abc.supabase.co");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("service_role_key"));
}

#[test]
#[serial]
fn given_complete_supabase_settings_when_validate_then_ok_without_jwt_secret() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _provider = EnvGuard::set("PF_AUTH_PROVIDER", "supabase");
    let _url = EnvGuard::set("PF_SUPABASE_URL", "https://abc.supabase.co");
    let _key = EnvGuard::set("PF_SUPABASE_SERVICE_ROLE_KEY", "service-key");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, ok(anything()));
}
