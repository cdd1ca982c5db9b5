//! Integration tests for configuration loading
//!
//! These tests verify:
//! - Loading explicit config files
//! - Partial files keeping defaults
//! - Save and reload
//! - Environment overrides

use anyhow::Result;
use chromeless::utils::{ChromelessError, Config};
use chromeless_integration_tests::ConfigFixture;
use serial_test::serial;

fn clear_env() {
    for key in ["CHROMELESS_WIDTH", "CHROMELESS_HEIGHT", "CHROMELESS_NO_SHADOW"] {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_load_explicit_file() -> Result<()> {
    clear_env();
    let fixture = ConfigFixture::new()?;
    let path = fixture.write(
        "config.toml",
        r#"
[window]
title = "Frameless"
width = 1024

[frame]
border_override = 12
"#,
    )?;

    let config = Config::load(Some(&path))?;
    assert_eq!(config.window.title, "Frameless");
    assert_eq!(config.window.width, 1024);
    assert_eq!(config.window.height, 480);
    assert_eq!(config.frame.border_override, Some(12));
    assert!(config.frame.shadow);

    Ok(())
}

#[test]
#[serial]
fn test_save_and_reload() -> Result<()> {
    clear_env();
    let fixture = ConfigFixture::new()?;
    let path = fixture.path("nested/config.toml");

    let mut config = Config::default();
    config.window.always_on_top = true;
    config.frame.shadow = false;
    config.save(&path)?;

    assert_eq!(Config::load(Some(&path))?, config);
    Ok(())
}

#[test]
#[serial]
fn test_malformed_file_is_an_error() -> Result<()> {
    clear_env();
    let fixture = ConfigFixture::new()?;
    let path = fixture.write("broken.toml", "[window\nwidth = ")?;

    let result = Config::load(Some(&path));
    assert!(matches!(result, Err(ChromelessError::Config(_))));
    Ok(())
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() -> Result<()> {
    clear_env();
    let fixture = ConfigFixture::new()?;
    let result = Config::load(Some(&fixture.path("absent.toml")));
    assert!(matches!(result, Err(ChromelessError::FileIO(_))));
    Ok(())
}

#[test]
#[serial]
fn test_environment_overrides_file() -> Result<()> {
    clear_env();
    let fixture = ConfigFixture::new()?;
    let path = fixture.write("config.toml", "[window]\nheight = 300\n")?;

    std::env::set_var("CHROMELESS_HEIGHT", "720");
    std::env::set_var("CHROMELESS_NO_SHADOW", "true");
    let config = Config::load(Some(&path));
    clear_env();

    let config = config?;
    assert_eq!(config.window.height, 720);
    assert!(!config.frame.shadow);
    Ok(())
}

#[test]
#[serial]
fn test_invalid_values_fail_validation() -> Result<()> {
    clear_env();
    let fixture = ConfigFixture::new()?;
    let path = fixture.write("config.toml", "[frame]\nborder_override = -3\n")?;

    assert!(Config::load(Some(&path)).is_err());
    Ok(())
}

#[test]
#[serial]
fn test_disabled_shadow_survives_falsy_environment() -> Result<()> {
    clear_env();
    let fixture = ConfigFixture::new()?;
    let path = fixture.write("config.toml", "[frame]\nshadow = false\n")?;

    std::env::set_var("CHROMELESS_NO_SHADOW", "0");
    let config = Config::load(Some(&path));
    clear_env();

    assert!(!config?.frame.shadow);
    Ok(())
}
