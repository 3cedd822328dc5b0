use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub snapshot_path: String,
    pub preview_mode: PreviewMode,
    pub pretty: bool,
}

/// How much of each impact the preview report carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewMode {
    /// Resulting pairs plus the merged preferential view.
    Full,
    /// Only the status and the scalar lowest initial weight.
    LowestWeight,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let snapshot_path = env_map
            .get("SNAPSHOT_PATH")
            .cloned()
            .ok_or_else(|| ConfigError::MissingEnv("SNAPSHOT_PATH".to_string()))?;

        let preview_mode = match env_map
            .get("PREVIEW_MODE")
            .map(|s| s.as_str())
            .unwrap_or("full")
        {
            "full" => PreviewMode::Full,
            "lowest-weight" => PreviewMode::LowestWeight,
            other => {
                return Err(ConfigError::InvalidValue(
                    "PREVIEW_MODE".to_string(),
                    format!("must be full or lowest-weight, got {}", other),
                ))
            }
        };

        let pretty = env_map
            .get("PRETTY")
            .map(|s| s.as_str())
            .unwrap_or("false")
            .parse::<bool>()
            .map_err(|_| {
                ConfigError::InvalidValue("PRETTY".to_string(), "must be true or false".to_string())
            })?;

        Ok(Config {
            snapshot_path,
            preview_mode,
            pretty,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_required_env() -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("SNAPSHOT_PATH".to_string(), "/tmp/snapshot.json".to_string());
        map
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_env_map(setup_required_env()).unwrap();
        assert_eq!(config.snapshot_path, "/tmp/snapshot.json");
        assert_eq!(config.preview_mode, PreviewMode::Full);
        assert!(!config.pretty);
    }

    #[test]
    fn test_missing_snapshot_path() {
        let result = Config::from_env_map(HashMap::new());
        match result {
            Err(ConfigError::MissingEnv(s)) => assert_eq!(s, "SNAPSHOT_PATH"),
            _ => panic!("Expected MissingEnv error"),
        }
    }

    #[test]
    fn test_lowest_weight_mode() {
        let mut env_map = setup_required_env();
        env_map.insert("PREVIEW_MODE".to_string(), "lowest-weight".to_string());
        env_map.insert("PRETTY".to_string(), "true".to_string());
        let config = Config::from_env_map(env_map).unwrap();
        assert_eq!(config.preview_mode, PreviewMode::LowestWeight);
        assert!(config.pretty);
    }

    #[test]
    fn test_invalid_preview_mode() {
        let mut env_map = setup_required_env();
        env_map.insert("PREVIEW_MODE".to_string(), "invalid".to_string());
        let result = Config::from_env_map(env_map);
        match result {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "PREVIEW_MODE"),
            _ => panic!("Expected InvalidValue error"),
        }
    }

    #[test]
    fn test_invalid_pretty() {
        let mut env_map = setup_required_env();
        env_map.insert("PRETTY".to_string(), "yes".to_string());
        let result = Config::from_env_map(env_map);
        match result {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "PRETTY"),
            _ => panic!("Expected InvalidValue error"),
        }
    }
}
