// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Unit tests for configuration module

#[cfg(test)]
mod test {
    use super::super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.script_path.is_empty());
        assert!(!config.dump_metrics);
    }

    #[test]
    fn test_validate_rejects_empty_path() {
        let config = Config {
            script_path: "   ".to_string(),
            dump_metrics: false,
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("ROSTER_SCRIPT"));
    }

    #[test]
    fn test_validate_accepts_path() {
        let config = Config::default().with_script_path(Some("roster.json".to_string()));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_script_path_none_keeps_existing() {
        let config = Config {
            script_path: "from-env.json".to_string(),
            dump_metrics: true,
        }
        .with_script_path(None);
        assert_eq!(config.script_path, "from-env.json");
    }

    #[test]
    fn test_parse_flag_values() {
        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag(" yes "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("off"));
        assert!(!parse_flag("maybe"));
    }
}
