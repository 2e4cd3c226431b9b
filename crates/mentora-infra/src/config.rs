//! Configuration loader for Mentora.
//!
//! Reads `config.toml` from the given directory and deserializes it
//! into [`TutorConfig`]. Falls back to defaults when the file is
//! missing or malformed. The `GEMINI_API_KEY` environment variable
//! overrides the file's `api_key` so the key never has to live on
//! disk.

use std::path::Path;

use mentora_types::config::TutorConfig;

/// Environment variable that overrides the configured API key.
const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Load configuration from `{dir}/config.toml`, then apply the
/// environment override.
pub async fn load_config(dir: &Path) -> TutorConfig {
    let config_path = dir.join("config.toml");

    let mut config = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => match toml::from_str::<TutorConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(
                    "Failed to parse {}: {err}, using defaults",
                    config_path.display()
                );
                TutorConfig::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(
                "No config.toml found at {}, using defaults",
                config_path.display()
            );
            TutorConfig::default()
        }
        Err(err) => {
            tracing::warn!(
                "Failed to read {}: {err}, using defaults",
                config_path.display()
            );
            TutorConfig::default()
        }
    };

    if let Ok(key) = std::env::var(API_KEY_ENV) {
        if !key.is_empty() {
            config.api_key = Some(key);
        }
    }

    config
}
