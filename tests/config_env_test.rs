//! Environment overrides for settings
//!
//! These tests mutate process environment variables and run serially.

use serial_test::serial;

use SmartAdventures::config::Settings;
use SmartAdventures::utils::date::DisplayLocale;

#[test]
#[serial]
fn test_environment_overrides_defaults() {
    std::env::set_var("SMART_ADVENTURES_API__BASE_URL", "https://trips.example.org");
    std::env::set_var("SMART_ADVENTURES_API__TIMEOUT_SECONDS", "20");
    std::env::set_var("SMART_ADVENTURES_DISPLAY__LOCALE", "en-GB");

    let settings = Settings::new();

    std::env::remove_var("SMART_ADVENTURES_API__BASE_URL");
    std::env::remove_var("SMART_ADVENTURES_API__TIMEOUT_SECONDS");
    std::env::remove_var("SMART_ADVENTURES_DISPLAY__LOCALE");

    let settings = settings.unwrap();
    assert_eq!(settings.api.base_url, "https://trips.example.org");
    assert_eq!(settings.api.timeout_seconds, Some(20));
    assert_eq!(settings.display_locale(), DisplayLocale::EnGb);
    assert!(settings.validate().is_ok());
}

#[test]
#[serial]
fn test_invalid_override_fails_validation() {
    std::env::set_var("SMART_ADVENTURES_API__BASE_URL", "ftp://trips.example.org");
    let settings = Settings::new();
    std::env::remove_var("SMART_ADVENTURES_API__BASE_URL");

    assert!(settings.unwrap().validate().is_err());
}
