//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files and env vars.

use std::path::PathBuf;

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use skillnow_config::{LOCAL_CONFIG_FILE, SkillNowConfig};

/// Keep the user-level `config.toml` lookup inside the jail.
fn isolate_home(jail: &mut Jail) {
    let home = jail.directory().to_path_buf();
    jail.set_env("HOME", home.display());
    jail.set_env("XDG_CONFIG_HOME", home.join(".config").display());
}

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.create_file(
            "config.toml",
            r#"
[server]
host = "0.0.0.0"
port = 8080

[storage]
data_dir = "/var/lib/skillnow"

[cors]
allowed_origins = ["http://localhost:3000", "https://skillnow.example.com"]
allow_credentials = false
max_age_secs = 600
"#,
        )?;

        let config: SkillNowConfig = Figment::from(Serialized::defaults(SkillNowConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.data_dir, PathBuf::from("/var/lib/skillnow"));
        assert_eq!(
            config.cors.allowed_origins,
            vec!["http://localhost:3000", "https://skillnow.example.com"]
        );
        assert!(!config.cors.allow_credentials);
        assert_eq!(config.cors.max_age_secs, 600);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.create_file(LOCAL_CONFIG_FILE, "[server]\nport = 9000\n")?;

        let config = SkillNowConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.storage.data_dir, PathBuf::from("data"));
        Ok(())
    });
}

#[test]
fn invalid_origin_in_toml_is_rejected() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.create_file(
            LOCAL_CONFIG_FILE,
            "[cors]\nallowed_origins = [\"*\"]\n",
        )?;

        let err = SkillNowConfig::load().expect_err("wildcard origin should fail");
        assert!(err.to_string().contains("cors.allowed_origins"), "{err}");
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.create_file(LOCAL_CONFIG_FILE, "[server\nport = ")?;

        let err = SkillNowConfig::load().expect_err("broken TOML should fail");
        assert!(matches!(err, skillnow_config::ConfigError::Figment(_)));
        Ok(())
    });
}

#[cfg(target_os = "linux")]
#[test]
fn user_config_sits_below_local_toml() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.create_dir(".config")?;
        jail.create_dir(".config/skillnow")?;
        jail.create_file(
            ".config/skillnow/config.toml",
            "[server]\nport = 6000\nhost = \"0.0.0.0\"\n",
        )?;

        let config = SkillNowConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.server.port, 6000);
        assert_eq!(config.server.host, "0.0.0.0");

        jail.create_file(LOCAL_CONFIG_FILE, "[server]\nport = 9000\n")?;
        let config = SkillNowConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        Ok(())
    });
}
