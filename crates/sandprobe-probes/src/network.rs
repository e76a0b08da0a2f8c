//! Network reachability probe.

use crate::error::ProbeError;
use crate::probe::{ProbeKind, Reporter};
use crate::Result;
use sandprobe_core::config::NetworkConfig;
use sandprobe_core::Outcome;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{debug, info};

/// Issues one outbound request and races it against a timeout.
///
/// Exactly one outcome is produced: the response status, the transport
/// error, or [`Outcome::Timeout`] once the deadline passes. On timeout
/// the in-flight request is dropped, which aborts it.
pub struct NetworkProbe {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl NetworkProbe {
    /// Create a probe for `url` with the given deadline.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("sandprobe/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProbeError::Client(e.to_string()))?;

        Ok(Self::with_client(client, url, timeout))
    }

    /// Create a probe that uses a preconfigured client.
    pub fn with_client(client: reqwest::Client, url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            url: url.into(),
            timeout,
        }
    }

    /// Create a probe from config. Returns `None` when the probe is disabled.
    pub fn from_config(config: &NetworkConfig) -> Result<Option<Self>> {
        if !config.enabled {
            return Ok(None);
        }
        Self::new(&config.url, Duration::from_millis(config.timeout_ms)).map(Some)
    }

    /// Target URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Probe family.
    pub fn kind(&self) -> ProbeKind {
        ProbeKind::Network
    }

    /// Perform the request.
    pub async fn check(&self) -> Outcome {
        debug!(url = %self.url, timeout_ms = self.timeout.as_millis() as u64, "network probe started");

        match timeout(self.timeout, self.client.get(&self.url).send()).await {
            Ok(Ok(response)) => {
                let status = response.status().as_u16();
                info!(url = %self.url, status, "outbound network is reachable");
                Outcome::Success(format!("HTTP {}", status))
            }
            Ok(Err(e)) => {
                debug!(url = %self.url, error = %e, "network probe failed");
                Outcome::error(e.to_string())
            }
            Err(_) => {
                debug!(url = %self.url, "network probe timed out");
                Outcome::Timeout(self.timeout)
            }
        }
    }

    /// Run the probe in the background, reporting when it completes.
    ///
    /// The caller keeps going; the report may arrive at any point relative
    /// to the caller's own output. Await the handle before exiting so the
    /// result is not lost.
    pub fn spawn(self, reporter: Arc<dyn Reporter>) -> JoinHandle<Outcome> {
        tokio::spawn(async move {
            let outcome = self.check().await;
            reporter.report(self.kind(), &self.url, &outcome);
            outcome
        })
    }
}
