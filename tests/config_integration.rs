//! Integration tests for the sitekeeper-config crate.

use std::fs;

use sitekeeper_config::{
    Config, ConfigError, Currency, DateFormat, Notification, ProfileField, Theme,
    persistence::find_config_file_in,
};
use tempfile::TempDir;

#[test]
fn config_load_from_json5_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("sitekeeper.json5");

    fs::write(
        &config_path,
        r#"
        {
            // Settings for sitekeeper
            profile: {
                name: "Jane Roe",
                email: "jane@studio.dev",
            },
            notifications: { marketing_emails: true },
            display: { theme: "dark", date_format: "DD/MM/YYYY", currency: "GBP" },
        }
        "#,
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();

    assert_eq!(config.profile.name, "Jane Roe");
    assert_eq!(config.profile.email, "jane@studio.dev");
    assert_eq!(config.profile.company, "Web Solutions Inc.");
    assert!(config.notifications.is_enabled(Notification::MarketingEmails));
    assert!(config.notifications.is_enabled(Notification::RenewalReminders));
    assert_eq!(config.display.theme, Theme::Dark);
    assert_eq!(config.display.date_format, DateFormat::DayMonthYear);
    assert_eq!(config.display.currency, Currency::Gbp);
}

#[test]
fn config_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("nested").join("config.json");

    let mut original = Config::default();
    original.profile.set(ProfileField::Company, "Roe & Co");
    original.notifications.toggle(Notification::ProjectUpdates);
    original.display.currency = Currency::Eur;

    original.save_to(&config_path).unwrap();
    let loaded = Config::load_from(&config_path).unwrap();

    assert_eq!(loaded, original);

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&config_path).unwrap()).unwrap();
    assert_eq!(raw["display"]["currency"], "EUR");
    assert_eq!(raw["display"]["date_format"], "MM/DD/YYYY");
}

#[test]
fn config_rejects_invalid_email_on_load_and_save() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.json5");
    fs::write(&config_path, r#"{ profile: { email: "nobody" } }"#).unwrap();

    let err = Config::load_from(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidSetting { field: "profile.email", .. }));

    let mut config = Config::default();
    config.profile.email = "nobody".to_string();
    let target = dir.path().join("out.json");
    assert!(config.save_to(&target).is_err());
    assert!(!target.exists());
}

#[test]
fn config_parse_error_is_reported() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.json5");
    fs::write(&config_path, "{ display: { theme: 42 } }").unwrap();

    let err = Config::load_from(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseJson5(_)));
}

#[test]
fn local_file_wins_over_user_file() {
    let local = TempDir::new().unwrap();
    let user = TempDir::new().unwrap();
    fs::write(user.path().join("config.json5"), "{}").unwrap();

    assert_eq!(
        find_config_file_in(local.path(), Some(user.path())),
        Some(user.path().join("config.json5"))
    );

    fs::write(local.path().join("sitekeeper.json"), "{}").unwrap();
    assert_eq!(
        find_config_file_in(local.path(), Some(user.path())),
        Some(local.path().join("sitekeeper.json"))
    );
}
