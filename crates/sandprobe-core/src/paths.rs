//! Path resolution utilities.

use crate::config::ProbeConfig;
use crate::env;
use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Root under which real user homes live.
pub const HOMES_ROOT: &str = "/home";

/// Get the sandbox home directory, i.e. whatever the runtime reports as home.
pub fn sandbox_home() -> Result<PathBuf, ConfigError> {
    dirs::home_dir().ok_or(ConfigError::NoHomeDir)
}

/// Check that a user name names a single directory under [`HOMES_ROOT`].
pub fn validate_user(user: &str) -> Result<(), ConfigError> {
    if user.is_empty() || user == "." || user == ".." || user.contains('/') {
        return Err(ConfigError::Validation(format!(
            "Invalid user name '{}'",
            user
        )));
    }
    Ok(())
}

/// Get the real (unconfined) home directory for a user (`/home/{user}`).
pub fn real_home_for(user: &str) -> PathBuf {
    Path::new(HOMES_ROOT).join(user)
}

/// Get the current working directory, if it can be determined.
pub fn current_dir() -> Option<PathBuf> {
    std::env::current_dir().ok()
}

/// Base paths shared by every probe, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTargets {
    /// Directory the confined process treats as its home.
    pub sandbox_home: PathBuf,

    /// User name the real home is derived from.
    pub user: String,

    /// Real home directory outside the sandbox.
    pub real_home: PathBuf,
}

impl ProbeTargets {
    /// Build targets from explicit values.
    pub fn new(sandbox_home: impl Into<PathBuf>, user: impl Into<String>) -> Self {
        let user = user.into();
        Self {
            sandbox_home: sandbox_home.into(),
            real_home: real_home_for(&user),
            user,
        }
    }

    /// Resolve targets from the config, falling back to the environment.
    pub fn resolve(config: &ProbeConfig) -> Result<Self, ConfigError> {
        let sandbox_home = match &config.sandbox_home {
            Some(home) => home.clone(),
            None => sandbox_home()?,
        };
        let user = config.user.clone().unwrap_or_else(env::current_user);
        validate_user(&user)?;
        Ok(Self::new(sandbox_home, user))
    }

    /// Path of a file relative to the real home.
    pub fn in_real_home(&self, relative: &str) -> PathBuf {
        self.real_home.join(relative)
    }
}
