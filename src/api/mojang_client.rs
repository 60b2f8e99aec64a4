use anyhow::{Context, Result};
use log::warn;
use reqwest::StatusCode;
use uuid::Uuid;

use crate::api::models::ProfileResponse;
use crate::config::ApiSettings;
use crate::domain::Identity;
use crate::http::TimedClient;

/// Resolves usernames to player identities via the Mojang profile API.
///
/// Only the user-facing lookup command needs this; the cache core is keyed
/// by identity and never sees usernames.
pub struct MojangClient {
    client: TimedClient,
    base_url: String,
}

impl MojangClient {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let client = TimedClient::new(
            settings.user_agent,
            settings.connect_timeout_secs,
            settings.read_timeout_secs,
        )?;
        Ok(Self {
            client,
            base_url: settings.profile_base_url.to_string(),
        })
    }

    /// Look up the identity for a username; `None` when no such player exists
    pub async fn username_to_identity(&self, username: &str) -> Result<Option<Identity>> {
        let url = format!("{}/users/profiles/minecraft/{}", self.base_url, username);

        let response = self
            .client
            .get(&url)
            .await
            .with_context(|| format!("Failed to fetch profile for {username}"))?;

        match response.status() {
            StatusCode::OK => {
                let profile: ProfileResponse = response
                    .json()
                    .await
                    .context("Failed to parse profile response")?;
                let identity = Uuid::parse_str(&profile.id)
                    .with_context(|| format!("Malformed identity in profile: {}", profile.id))?;
                Ok(Some(identity))
            }
            StatusCode::NO_CONTENT | StatusCode::NOT_FOUND => Ok(None),
            status => {
                warn!("Unexpected status {status} while resolving username {username}");
                anyhow::bail!("Profile service returned status: {status}")
            }
        }
    }
}
