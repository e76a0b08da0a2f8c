//! Configuration schema definitions.

use serde::Deserialize;
use std::path::PathBuf;

/// Default listing sample bound.
pub const DEFAULT_SAMPLE_LIMIT: usize = 20;

/// Default network probe timeout in milliseconds.
pub const DEFAULT_NETWORK_TIMEOUT_MS: u64 = 5000;

/// Default network probe endpoint.
pub const DEFAULT_NETWORK_URL: &str = "https://www.google.com";

/// Probe target configuration.
///
/// Every field has a default, so an empty file (or no file at all) yields
/// the full built-in probe list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProbeConfig {
    /// Override for the sandbox home. Resolved from the runtime when unset.
    #[serde(default)]
    pub sandbox_home: Option<PathBuf>,

    /// Override for the user name the real home is derived from.
    #[serde(default)]
    pub user: Option<String>,

    /// Maximum number of entries shown per directory listing.
    #[serde(default = "default_sample_limit")]
    pub sample_limit: usize,

    /// Sensitive files to read, relative to the real home.
    #[serde(default = "default_sensitive_files")]
    pub sensitive_files: Vec<String>,

    /// Whether to attempt listing the real home directory.
    #[serde(default = "default_true")]
    pub list_real_home: bool,

    /// System directories to list.
    #[serde(default = "default_system_dirs")]
    pub system_dirs: Vec<PathBuf>,

    /// Network probe settings.
    #[serde(default)]
    pub network: NetworkConfig,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            sandbox_home: None,
            user: None,
            sample_limit: default_sample_limit(),
            sensitive_files: default_sensitive_files(),
            list_real_home: true,
            system_dirs: default_system_dirs(),
            network: NetworkConfig::default(),
        }
    }
}

/// Network probe configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NetworkConfig {
    /// Run the network probe.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Endpoint to request.
    #[serde(default = "default_network_url")]
    pub url: String,

    /// Time to wait for a response before cancelling, in milliseconds.
    #[serde(default = "default_network_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: default_network_url(),
            timeout_ms: default_network_timeout_ms(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_sample_limit() -> usize {
    DEFAULT_SAMPLE_LIMIT
}

fn default_sensitive_files() -> Vec<String> {
    [
        ".ssh/id_rsa",
        ".ssh/id_ed25519",
        ".bashrc",
        ".bash_history",
        ".zshrc",
        ".profile",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_system_dirs() -> Vec<PathBuf> {
    ["/etc", "/var", "/tmp", "/root"]
        .iter()
        .map(PathBuf::from)
        .collect()
}

fn default_network_url() -> String {
    DEFAULT_NETWORK_URL.to_string()
}

fn default_network_timeout_ms() -> u64 {
    DEFAULT_NETWORK_TIMEOUT_MS
}
