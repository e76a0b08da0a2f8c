//! Configuration loading and validation.

use super::ProbeConfig;
use crate::error::ConfigError;
use crate::paths;
use std::fs;
use std::path::{Component, Path};
use tracing::debug;

impl ProbeConfig {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        debug!(path = %path.display(), "loaded probe config");
        Ok(config)
    }

    /// Parse configuration from a string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        json5::from_str(content).map_err(|e| ConfigError::Json5(e.to_string()))
    }

    /// Validate the configuration, collecting all errors before returning.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.sample_limit == 0 {
            errors.push("sample_limit must be greater than 0".to_string());
        }

        if let Some(user) = &self.user {
            if let Err(ConfigError::Validation(msg)) = paths::validate_user(user) {
                errors.push(msg);
            }
        }

        for file in &self.sensitive_files {
            let path = Path::new(file);
            let escapes = path
                .components()
                .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
            if file.is_empty() || escapes {
                errors.push(format!(
                    "Sensitive file '{}' must be a relative path inside the real home",
                    file
                ));
            }
        }

        for dir in &self.system_dirs {
            if !dir.is_absolute() {
                errors.push(format!(
                    "System directory '{}' must be absolute",
                    dir.display()
                ));
            }
        }

        if self.network.enabled {
            if self.network.timeout_ms == 0 {
                errors.push("network.timeout_ms must be greater than 0".to_string());
            }
            match url::Url::parse(&self.network.url) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => {}
                Ok(url) => errors.push(format!(
                    "network.url must use http or https, got '{}'",
                    url.scheme()
                )),
                Err(e) => errors.push(format!("Invalid network.url '{}': {}", self.network.url, e)),
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors.join("; ")))
        }
    }
}
