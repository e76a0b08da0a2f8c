//! Environment variable handling.

use std::env;

/// Fallback user name when `USER` is unset or empty.
pub const DEFAULT_USER: &str = "user";

/// Get an environment variable, returning None if not set or empty.
pub fn get_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
pub fn get_var_or(name: &str, default: &str) -> String {
    get_var(name).unwrap_or_else(|| default.to_string())
}

/// Name of the user the process runs as, per `USER`.
pub fn current_user() -> String {
    get_var_or(vars::USER, DEFAULT_USER)
}

/// Common environment variable names.
pub mod vars {
    /// Login name used to derive the real home directory.
    pub const USER: &str = "USER";

    /// Config file override.
    pub const SANDPROBE_CONFIG: &str = "SANDPROBE_CONFIG";

    /// Log filter override.
    pub const SANDPROBE_LOG: &str = "SANDPROBE_LOG";
}
