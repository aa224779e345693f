//! Self-ping timer that keeps the hosting platform from idling the service.

use std::time::Duration;

use reqwest::Client;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};
use url::Url;

use crate::error::QueueError;

/// Keepalive settings.
#[derive(Debug, Clone)]
pub struct PingerSettings {
    pub enabled: bool,
    pub url: Url,
    pub interval: Duration,
    pub timeout: Duration,
}

impl PingerSettings {
    pub fn new(url: Url) -> Self {
        Self {
            enabled: true,
            url,
            interval: Duration::from_secs(300),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Owns at most one background ping task.
///
/// The first ping goes out one interval after [`start`](Self::start). Ping
/// results are only logged. Dropping the pinger stops the task.
pub struct KeepalivePinger {
    settings: PingerSettings,
    client: Client,
    handle: Option<JoinHandle<()>>,
}

impl KeepalivePinger {
    /// Create a stopped pinger.
    pub fn new(settings: PingerSettings) -> Result<Self, QueueError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .user_agent(concat!("nightqueue/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            settings,
            client,
            handle: None,
        })
    }

    pub fn settings(&self) -> &PingerSettings {
        &self.settings
    }

    /// Whether a ping task is currently alive.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Start the ping task unless one is already running or pinging is disabled.
    ///
    /// Returns `true` only when a new task was spawned.
    pub fn start(&mut self) -> bool {
        if !self.settings.enabled {
            debug!("Self-pinging disabled, not starting");
            return false;
        }
        if self.is_running() {
            debug!("Self-pinging already active");
            return false;
        }

        let client = self.client.clone();
        let url = self.settings.url.clone();
        let interval = self.settings.interval;

        self.handle = Some(tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                ping(&client, &url).await;
            }
        }));

        info!(
            "Self-pinging activated ({} every {:?})",
            self.settings.url, interval
        );
        true
    }

    /// Stop the ping task. Returns `true` if one was running.
    pub fn stop(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                handle.abort();
                info!("Self-pinging deactivated.");
                true
            }
            None => false,
        }
    }
}

impl Drop for KeepalivePinger {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// Issue one GET against `url` and log the outcome.
pub async fn ping(client: &Client, url: &Url) -> Option<reqwest::StatusCode> {
    match client.get(url.clone()).send().await {
        Ok(response) => {
            let status = response.status();
            info!("Pinged {}: {}", url, status.as_u16());
            Some(status)
        }
        Err(e) => {
            warn!("Error pinging {}: {}", url, e);
            None
        }
    }
}

#[cfg(test)]
#[path = "keepalive_tests.rs"]
mod tests;
