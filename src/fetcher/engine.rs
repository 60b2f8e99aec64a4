use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use tokio::runtime::Handle;
use tokio::time::sleep;

use crate::api::models::RankingsResponse;
use crate::api::RankingClient;
use crate::cache::{InFlightGuard, InFlightTracker, TierStore};
use crate::config::GameMode;
use crate::domain::{Identity, TierLabel, TierRecord};

const MAX_ATTEMPTS: u32 = 3;
const BACKOFF_BASE_SECS: u64 = 1;

/// Runs the full background refresh sequence for one identity.
///
/// A refresh is one network round trip covering every game mode, with retry
/// and exponential backoff for transient failures. All waiting happens on a
/// spawned worker task; the caller is never blocked.
pub struct FetchEngine {
    client: Arc<dyn RankingClient>,
    store: Arc<TierStore>,
    in_flight: Arc<InFlightTracker>,
    handle: Handle,
}

impl FetchEngine {
    pub fn new(
        client: Arc<dyn RankingClient>,
        store: Arc<TierStore>,
        in_flight: Arc<InFlightTracker>,
        handle: Handle,
    ) -> Self {
        Self {
            client,
            store,
            in_flight,
            handle,
        }
    }

    /// Fire-and-forget refresh. Silently a no-op when a fetch for this
    /// identity is already in flight.
    pub fn spawn_refresh(&self, identity: Identity) {
        let Some(guard) = InFlightGuard::acquire(Arc::clone(&self.in_flight), identity) else {
            return;
        };

        let client = Arc::clone(&self.client);
        let store = Arc::clone(&self.store);
        self.handle.spawn(async move {
            // The guard rides along with the task so the marker is released
            // on every exit path, panics included.
            let _guard = guard;
            run_attempts(client.as_ref(), store.as_ref(), identity).await;
        });
    }
}

async fn run_attempts(client: &dyn RankingClient, store: &TierStore, identity: Identity) {
    for attempt in 0..MAX_ATTEMPTS {
        match client.fetch_rankings(identity).await {
            Ok(response) => {
                store.put_all(identity, records_from_response(&response));
                info!("Fetched tiers for {identity}");
                return;
            }
            Err(err) if err.is_definitive() => {
                // Not an error from the user's point of view; cache the
                // negative result instead of hammering the service.
                warn!("No tier data for {identity}: {err}");
                store.put_all(identity, no_tier_records());
                return;
            }
            Err(err) => {
                warn!(
                    "Attempt {}/{} to fetch tiers for {identity} failed: {err}",
                    attempt + 1,
                    MAX_ATTEMPTS
                );
                sleep(backoff_delay(attempt)).await;
            }
        }
    }

    error!("Giving up on tier fetch for {identity} after {MAX_ATTEMPTS} attempts");
    store.put_all(identity, no_tier_records());
}

fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_secs(BACKOFF_BASE_SECS << attempt)
}

/// Build the full per-mode record map from one service response. Every mode
/// gets an entry; modes the service omitted come back as `NoTier`.
fn records_from_response(response: &RankingsResponse) -> HashMap<GameMode, TierRecord> {
    GameMode::ALL
        .into_iter()
        .map(|mode| {
            let label = response
                .get(mode.api_key())
                .map(TierLabel::from_ranking)
                .unwrap_or(TierLabel::NoTier);
            (mode, TierRecord::new(label))
        })
        .collect()
}

fn no_tier_records() -> HashMap<GameMode, TierRecord> {
    GameMode::ALL
        .into_iter()
        .map(|mode| (mode, TierRecord::no_tier()))
        .collect()
}
