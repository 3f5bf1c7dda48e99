use crate::errors::ControlError;
use crate::types::CaptureMode;
use serde::{Deserialize, Serialize};
use std::env;

pub const ENV_CAPTURE_MODE: &str = "CLOAK_CAPTURE_MODE";
pub const ENV_ALLOW_FALLBACK: &str = "CLOAK_ALLOW_FALLBACK";
pub const ENV_LOG_LEVEL: &str = "CLOAK_LOG_LEVEL";

/// Configuration for a [`crate::DesktopControl`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    /// Display affinity used by `set_window_hidden_from_capture`
    pub capture_mode: CaptureMode,
    /// Use the logging fallback engine when no native engine exists
    pub allow_fallback: bool,
    /// Filter directive for the tracing subscriber (e.g. "info", "cloak=debug")
    pub log_level: String,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            capture_mode: CaptureMode::Monitor,
            allow_fallback: false,
            log_level: "info".to_string(),
        }
    }
}

impl ControlConfig {
    /// Build a config from `CLOAK_*` environment variables on top of the defaults.
    pub fn from_env() -> Result<Self, ControlError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_json(json: &str) -> Result<Self, ControlError> {
        Ok(serde_json::from_str(json)?)
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ControlError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(mode) = lookup(ENV_CAPTURE_MODE) {
            config.capture_mode = mode.parse()?;
        }
        if let Some(flag) = lookup(ENV_ALLOW_FALLBACK) {
            config.allow_fallback = parse_flag(ENV_ALLOW_FALLBACK, &flag)?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            if !level.trim().is_empty() {
                config.log_level = level.trim().to_string();
            }
        }
        Ok(config)
    }

    pub fn with_capture_mode(mut self, capture_mode: CaptureMode) -> Self {
        self.capture_mode = capture_mode;
        self
    }

    pub fn with_fallback(mut self, allow_fallback: bool) -> Self {
        self.allow_fallback = allow_fallback;
        self
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ControlError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ControlError::Config(format!(
            "{} must be a boolean, got '{}'",
            key, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ControlConfig::default();
        assert_eq!(config.capture_mode, CaptureMode::Monitor);
        assert!(!config.allow_fallback);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_from_lookup() {
        let config = ControlConfig::from_lookup(lookup_from(&[
            (ENV_CAPTURE_MODE, "exclude"),
            (ENV_ALLOW_FALLBACK, "1"),
            (ENV_LOG_LEVEL, "cloak=debug"),
        ]))
        .unwrap();

        assert_eq!(config.capture_mode, CaptureMode::ExcludeFromCapture);
        assert!(config.allow_fallback);
        assert_eq!(config.log_level, "cloak=debug");
    }

    #[test]
    fn test_config_from_lookup_rejects_bad_values() {
        let bad_mode = ControlConfig::from_lookup(lookup_from(&[(ENV_CAPTURE_MODE, "blur")]));
        assert!(matches!(bad_mode, Err(ControlError::Config(_))));

        let bad_flag = ControlConfig::from_lookup(lookup_from(&[(ENV_ALLOW_FALLBACK, "maybe")]));
        assert!(matches!(bad_flag, Err(ControlError::Config(_))));
    }

    #[test]
    fn test_blank_log_level_keeps_default() {
        let config = ControlConfig::from_lookup(lookup_from(&[(ENV_LOG_LEVEL, "  ")])).unwrap();
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_from_json() {
        let config = ControlConfig::from_json(r#"{"capture_mode": "exclude_from_capture"}"#).unwrap();
        assert_eq!(config.capture_mode, CaptureMode::ExcludeFromCapture);
        assert_eq!(config.log_level, "info");

        let json = serde_json::to_string(&ControlConfig::default()).unwrap();
        assert!(json.contains("\"monitor\""));

        assert!(matches!(
            ControlConfig::from_json("{not json"),
            Err(ControlError::Config(_))
        ));
    }
}
