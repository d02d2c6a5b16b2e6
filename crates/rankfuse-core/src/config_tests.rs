//! Tests for config module

#[cfg(test)]
mod tests {
    use crate::config::*;
    use crate::normalizer::ScoreNormalizer;
    use figment::Jail;
    use std::io::Write;

    // ========================================================================
    // Default tests
    // ========================================================================

    #[test]
    fn test_config_default_values() {
        // Arrange & Act
        let config = RankFuseConfig::default();

        // Assert
        assert_eq!(config.fusion.rank_window_size, 10);
        assert_eq!(config.fusion.min_score, 0.0);
        assert_eq!(config.fusion.default_weight, 1.0);
        assert_eq!(config.fusion.default_normalizer, ScoreNormalizer::Identity);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_default_validates() {
        assert!(RankFuseConfig::default().validate().is_ok());
    }

    // ========================================================================
    // TOML parsing tests
    // ========================================================================

    #[test]
    fn test_config_from_toml_minimal() {
        // Arrange
        let toml = r#"
[fusion]
default_normalizer = "minmax"
"#;

        // Act
        let config = RankFuseConfig::from_toml(toml).expect("parse");

        // Assert
        assert_eq!(config.fusion.default_normalizer, ScoreNormalizer::MinMax);
        // Other values should be defaults
        assert_eq!(config.fusion.rank_window_size, 10);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_from_toml_full() {
        // Arrange
        let toml = r#"
[fusion]
rank_window_size = 25
min_score = 0.5
default_weight = 2.0
default_normalizer = "l2_norm"

[logging]
level = "debug"
"#;

        // Act
        let config = RankFuseConfig::from_toml(toml).expect("parse");

        // Assert
        assert_eq!(config.fusion.rank_window_size, 25);
        assert!((config.fusion.min_score - 0.5).abs() < f32::EPSILON);
        assert!((config.fusion.default_weight - 2.0).abs() < f32::EPSILON);
        assert_eq!(config.fusion.default_normalizer, ScoreNormalizer::L2Norm);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_config_from_toml_invalid_normalizer() {
        // Arrange
        let toml = r#"
[fusion]
default_normalizer = "zscore"
"#;

        // Act
        let result = RankFuseConfig::from_toml(toml);

        // Assert
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_config_to_toml_round_trip() {
        // Arrange
        let mut config = RankFuseConfig::default();
        config.fusion.default_normalizer = ScoreNormalizer::MinMax;
        config.fusion.rank_window_size = 3;

        // Act
        let toml = config.to_toml().expect("serialize");
        let parsed = RankFuseConfig::from_toml(&toml).expect("parse");

        // Assert
        assert!(toml.contains("default_normalizer = \"minmax\""));
        assert_eq!(parsed, config);
    }

    // ========================================================================
    // File and environment loading
    // ========================================================================

    #[test]
    fn test_config_load_from_path() {
        // Arrange
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[fusion]\nrank_window_size = 42").expect("write");

        // Act
        let config = RankFuseConfig::load_from_path(file.path()).expect("load");

        // Assert
        assert_eq!(config.fusion.rank_window_size, 42);
    }

    #[test]
    fn test_config_missing_file_uses_defaults() {
        Jail::expect_with(|_jail| {
            let config = RankFuseConfig::load_from_path("does-not-exist.toml")
                .map_err(|e| e.to_string())?;
            assert_eq!(config, RankFuseConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_config_env_overrides_file() {
        Jail::expect_with(|jail| {
            // Arrange
            jail.create_file(
                CONFIG_FILE_NAME,
                r#"
[fusion]
min_score = 0.25
rank_window_size = 7
"#,
            )?;
            jail.set_env("RANKFUSE_FUSION__MIN_SCORE", "0.75");
            jail.set_env("RANKFUSE_LOGGING__LEVEL", "trace");

            // Act
            let config = RankFuseConfig::load().map_err(|e| e.to_string())?;

            // Assert
            assert!((config.fusion.min_score - 0.75).abs() < f32::EPSILON);
            assert_eq!(config.fusion.rank_window_size, 7);
            assert_eq!(config.logging.level, "trace");
            Ok(())
        });
    }

    // ========================================================================
    // Validation tests
    // ========================================================================

    #[test]
    fn test_config_validate_zero_window() {
        // Arrange
        let mut config = RankFuseConfig::default();
        config.fusion.rank_window_size = 0;

        // Act
        let result = config.validate();

        // Assert
        match result {
            Err(ConfigError::InvalidValue { key, .. }) => {
                assert_eq!(key, "fusion.rank_window_size");
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_config_validate_negative_min_score() {
        let mut config = RankFuseConfig::default();
        config.fusion.min_score = -0.1;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_negative_default_weight() {
        let mut config = RankFuseConfig::default();
        config.fusion.default_weight = -1.0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_invalid_log_level() {
        let mut config = RankFuseConfig::default();
        config.logging.level = "verbose".to_string();

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains("logging.level"));
    }

    #[test]
    fn test_fusion_builder_uses_defaults() {
        // Arrange
        let mut config = RankFuseConfig::default();
        config.fusion.rank_window_size = 4;
        config.fusion.min_score = 0.2;

        // Act
        let fusion = config
            .fusion_builder()
            .source(1.0, ScoreNormalizer::Identity)
            .build()
            .expect("valid");

        // Assert
        assert_eq!(fusion.rank_window_size(), 4);
        assert!((fusion.min_score() - 0.2).abs() < f32::EPSILON);
    }
}
