use async_trait::async_trait;
use log::warn;
use reqwest::StatusCode;

use crate::api::error::ApiError;
use crate::api::models::RankingsResponse;
use crate::config::ApiSettings;
use crate::domain::Identity;
use crate::http::TimedClient;

/// One network round trip returning tier data for every game mode
#[async_trait]
pub trait RankingClient: Send + Sync {
    async fn fetch_rankings(&self, identity: Identity) -> Result<RankingsResponse, ApiError>;
}

/// Ranking client backed by the subtiers.net API
pub struct SubtiersClient {
    client: TimedClient,
    base_url: String,
}

impl SubtiersClient {
    pub fn new(settings: &ApiSettings) -> anyhow::Result<Self> {
        let client = TimedClient::new(
            settings.user_agent,
            settings.connect_timeout_secs,
            settings.read_timeout_secs,
        )?;
        Ok(Self {
            client,
            base_url: settings.rankings_base_url.to_string(),
        })
    }

    fn build_rankings_url(&self, identity: Identity) -> String {
        // The service expects the identity without dashes
        format!("{}/api/rankings/{}", self.base_url, identity.simple())
    }
}

#[async_trait]
impl RankingClient for SubtiersClient {
    async fn fetch_rankings(&self, identity: Identity) -> Result<RankingsResponse, ApiError> {
        let url = self.build_rankings_url(identity);

        let response = self
            .client
            .get(&url)
            .await
            .map_err(|e| ApiError::Transient(e.to_string()))?;

        match response.status() {
            StatusCode::OK => {
                let body = response
                    .text()
                    .await
                    .map_err(|e| ApiError::Transient(e.to_string()))?;
                parse_rankings(&body)
            }
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            StatusCode::UNPROCESSABLE_ENTITY => Err(ApiError::Invalid),
            status => {
                warn!("Unexpected status {status} from ranking service");
                Err(ApiError::Transient(format!("unexpected status: {status}")))
            }
        }
    }
}

/// Decode a rankings body. A malformed body is transient (retryable), not a
/// confirmed "no tiers" result.
fn parse_rankings(body: &str) -> Result<RankingsResponse, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Transient(format!("bad rankings body: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rankings_body() {
        let body = r#"{"speed": {"tier": 2, "pos": 0, "retired": false}, "bow": {"tier": 5, "pos": 1}}"#;

        let response = parse_rankings(body).unwrap();
        assert_eq!(response.len(), 2);

        let speed = &response["speed"];
        assert_eq!(speed.tier, Some(2));
        assert_eq!(speed.pos, Some(0));
        assert!(!speed.retired);
        assert!(!response["bow"].retired);
    }

    #[test]
    fn test_malformed_body_is_transient() {
        let result = parse_rankings("not json at all");
        assert!(matches!(result, Err(ApiError::Transient(_))));
    }
}
