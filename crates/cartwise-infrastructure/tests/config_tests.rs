//! Configuration loading integration tests
//!
//! Each test runs inside a figment Jail so file and environment sources
//! are isolated from the host process.

use cartwise_domain::error::Error;
use cartwise_infrastructure::config::{AppConfig, CandidateConfig, ConfigLoader};

#[test]
fn defaults_fail_fast_without_a_gemini_api_key() {
    figment::Jail::expect_with(|_jail| {
        // Default candidate provider is gemini, which needs a key
        let err = ConfigLoader::new().load().unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        Ok(())
    });
}

#[test]
fn toml_file_overrides_defaults() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "cartwise.toml",
            r#"
            [logging]
            level = "debug"
            json_format = true

            [providers.candidates]
            provider = "gemini"
            api_key = "test-key"
            model = "gemini-2.0-flash"

            [providers.vector_search]
            collection = "catalog"
            "#,
        )?;

        let config = ConfigLoader::new().load().unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json_format);
        assert_eq!(config.providers.candidates.model.as_deref(), Some("gemini-2.0-flash"));
        assert_eq!(config.providers.vector_search.collection, "catalog");
        // Untouched fields keep their defaults
        assert_eq!(config.providers.vector_search.database, "cartwise");
        assert_eq!(config.providers.embedding.provider, "fastembed");
        Ok(())
    });
}

#[test]
fn environment_overrides_the_toml_file() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "cartwise.toml",
            r#"
            [logging]
            level = "debug"

            [providers.candidates]
            provider = "static"
            "#,
        )?;
        jail.set_env("CARTWISE_LOGGING__LEVEL", "error");
        jail.set_env("CARTWISE_PROVIDERS__CANDIDATES__TIMEOUT_SECS", "5");

        let config = ConfigLoader::new().load().unwrap();
        assert_eq!(config.logging.level, "error");
        assert_eq!(config.providers.candidates.timeout_secs, 5);
        assert_eq!(config.providers.candidates.provider, "static");
        Ok(())
    });
}

#[test]
fn invalid_log_level_is_rejected() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "cartwise.toml",
            r#"
            [logging]
            level = "verbose"

            [providers.candidates]
            provider = "static"
            "#,
        )?;

        let err = ConfigLoader::new().load().unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        Ok(())
    });
}

#[test]
fn zero_candidate_timeout_is_rejected() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "cartwise.toml",
            r#"
            [providers.candidates]
            provider = "static"
            timeout_secs = 0
            "#,
        )?;

        let err = ConfigLoader::new().load().unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        Ok(())
    });
}

#[test]
fn saved_configuration_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cartwise.toml");

    let config = AppConfig {
        providers: cartwise_infrastructure::config::ProvidersConfig {
            candidates: CandidateConfig {
                api_key: Some("round-trip-key".to_string()),
                ..CandidateConfig::default()
            },
            ..Default::default()
        },
        ..Default::default()
    };

    let loader = ConfigLoader::new().with_config_path(&path);
    loader.save_to_file(&config, &path).unwrap();

    let reloaded = loader.load().unwrap();
    assert_eq!(
        reloaded.providers.candidates.api_key.as_deref(),
        Some("round-trip-key")
    );
}
