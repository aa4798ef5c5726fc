//! Engine configuration.

use common::search_const::{DEFAULT_PREVIEW_SIZE, PREVIEW_SIZE_ENV_VAR};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Length of the preview slice handed to summary views.
    pub preview_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { preview_size: DEFAULT_PREVIEW_SIZE }
    }
}

impl EngineConfig {
    pub fn from_env() -> EngineResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup; unset variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> EngineResult<Self> {
        let mut config = Self::default();
        if let Some(raw) = lookup(PREVIEW_SIZE_ENV_VAR) {
            config.preview_size = raw.trim().parse().map_err(|_| EngineError::InvalidConfig {
                key: PREVIEW_SIZE_ENV_VAR.to_string(),
                value: raw.clone(),
            })?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_six_postings() {
        let config = EngineConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.preview_size, 6);
    }

    #[test]
    fn reads_preview_size_override() {
        let config = EngineConfig::from_lookup(|key| {
            (key == PREVIEW_SIZE_ENV_VAR).then(|| " 12 ".to_string())
        })
        .unwrap();
        assert_eq!(config.preview_size, 12);
    }

    #[test]
    fn rejects_non_numeric_preview_size() {
        let err = EngineConfig::from_lookup(|_| Some("six".to_string())).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig { ref value, .. } if value == "six"));
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let config: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }
}
