use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, Response};

/// HTTP client with fixed connect and read timeouts.
///
/// Failures come back as raw `reqwest::Error` so callers can classify them
/// (timeout vs connection vs status) instead of getting a flattened report.
pub struct TimedClient {
    client: Client,
}

impl TimedClient {
    pub fn new(user_agent: &str, connect_timeout_secs: u64, read_timeout_secs: u64) -> Result<Self> {
        let client = Self::build_client(user_agent, connect_timeout_secs, read_timeout_secs)?;
        Ok(Self { client })
    }

    pub async fn get(&self, url: &str) -> reqwest::Result<Response> {
        self.client.get(url).send().await
    }

    fn build_client(
        user_agent: &str,
        connect_timeout_secs: u64,
        read_timeout_secs: u64,
    ) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .read_timeout(Duration::from_secs(read_timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }
}
