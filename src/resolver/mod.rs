use std::sync::{Arc, Mutex, PoisonError};

use colored::Colorize;

use crate::cache::{DisplayCache, TierStore};
use crate::config::{GameMode, TaggerConfig};
use crate::domain::{Identity, TierLabel};
use crate::fetcher::FetchEngine;

/// Public entry point: turns a player identity into the name text to show.
///
/// Called once per name render from the host's own thread, so every path
/// here is non-blocking; a missing or stale tier returns the original name
/// while a background refresh fills the store for later calls.
pub struct TierResolver {
    store: Arc<TierStore>,
    display: Arc<DisplayCache>,
    engine: FetchEngine,
    last_used_mode: Mutex<Option<GameMode>>,
}

impl TierResolver {
    pub fn new(store: Arc<TierStore>, display: Arc<DisplayCache>, engine: FetchEngine) -> Self {
        Self {
            store,
            display,
            engine,
            last_used_mode: Mutex::new(None),
        }
    }

    /// Resolve the displayed name for a player under the configured mode.
    ///
    /// Never fails: any missing, stale, or inconsistent state degrades to
    /// the unmodified name.
    pub fn resolve(&self, identity: Identity, name: &str, config: &TaggerConfig) -> String {
        let active_mode = config.active_mode;
        self.invalidate_on_mode_change(active_mode);

        if !config.enabled {
            self.clear_all();
            return name.to_string();
        }

        if let Some(cached) = self.display.get(identity) {
            return cached;
        }

        if !self.store.contains(identity) {
            self.engine.spawn_refresh(identity);
            return name.to_string();
        }

        match self.store.get(identity, active_mode) {
            // An expired single-mode record does not retrigger a fetch;
            // refreshes only start from the "no entry at all" path.
            Some(record) if record.is_expired() => name.to_string(),
            Some(record) if !record.label.is_no_tier() => {
                let text = render(name, &record.label, active_mode, config);
                self.display.insert(identity, text.clone());
                text
            }
            // NoTier in the active mode, or a missing slot: show the
            // strongest tier the player holds anywhere instead.
            _ => self.resolve_fallback(identity, name, config),
        }
    }

    /// Session-boundary cleanup; safe to call repeatedly
    pub fn clear_all(&self) {
        self.store.clear();
        self.display.clear();
    }

    fn invalidate_on_mode_change(&self, active_mode: GameMode) {
        let mut last_used = self
            .last_used_mode
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if *last_used != Some(active_mode) {
            // Cached renderings embed the previous mode's icon and color
            self.display.clear();
            *last_used = Some(active_mode);
        }
    }

    fn resolve_fallback(&self, identity: Identity, name: &str, config: &TaggerConfig) -> String {
        let best = self
            .store
            .get_all(identity)
            .into_iter()
            .filter(|(_, record)| !record.label.is_no_tier())
            .max_by_key(|(_, record)| record.label.priority());

        match best {
            Some((mode, record)) => {
                let text = render(name, &record.label, mode, config);
                self.display.insert(identity, text.clone());
                text
            }
            None => name.to_string(),
        }
    }
}

/// `"{name} | {label} {icon}"` with the label in its tier color and the
/// icon in the source mode's color
fn render(name: &str, label: &TierLabel, mode: GameMode, config: &TaggerConfig) -> String {
    let (red, green, blue) = config.tier_rgb(label.as_str());
    let tier = label.as_str().truecolor(red, green, blue);

    let (red, green, blue) = mode.icon_rgb();
    let icon = mode.icon().truecolor(red, green, blue);

    format!("{name} {} {tier} {icon}", "|".bright_black())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{ModeRanking, RankingsResponse};
    use crate::api::{ApiError, RankingClient};
    use crate::cache::InFlightTracker;
    use crate::domain::TierRecord;
    use async_trait::async_trait;
    use chrono::{TimeDelta, Utc};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;
    use tokio::runtime::Handle;
    use tokio::time::sleep;
    use uuid::Uuid;

    struct CountingClient {
        calls: AtomicU32,
    }

    #[async_trait]
    impl RankingClient for CountingClient {
        async fn fetch_rankings(&self, _: Identity) -> Result<RankingsResponse, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut response = RankingsResponse::new();
            response.insert(
                "speed".to_string(),
                ModeRanking {
                    tier: Some(2),
                    pos: Some(0),
                    retired: false,
                },
            );
            Ok(response)
        }
    }

    fn build_resolver() -> (TierResolver, Arc<TierStore>, Arc<CountingClient>) {
        let client = Arc::new(CountingClient {
            calls: AtomicU32::new(0),
        });
        let store = Arc::new(TierStore::new());
        let engine = FetchEngine::new(
            Arc::clone(&client) as Arc<dyn RankingClient>,
            Arc::clone(&store),
            Arc::new(InFlightTracker::new()),
            Handle::current(),
        );
        let resolver = TierResolver::new(
            Arc::clone(&store),
            Arc::new(DisplayCache::new()),
            engine,
        );
        (resolver, store, client)
    }

    fn config_for(mode: GameMode) -> TaggerConfig {
        TaggerConfig {
            active_mode: mode,
            ..TaggerConfig::default()
        }
    }

    fn label(text: &str) -> TierLabel {
        if text == "NoTier" {
            TierLabel::NoTier
        } else {
            TierLabel::Ranked(text.to_string())
        }
    }

    fn put_tiers(store: &TierStore, identity: Identity, entries: &[(GameMode, &str)]) {
        let mut records: HashMap<GameMode, TierRecord> = GameMode::ALL
            .into_iter()
            .map(|mode| (mode, TierRecord::no_tier()))
            .collect();
        for (mode, text) in entries {
            records.insert(*mode, TierRecord::new(label(text)));
        }
        store.put_all(identity, records);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_identity_returns_name_and_fetches() {
        let (resolver, store, client) = build_resolver();
        let identity = Uuid::new_v4();

        let shown = resolver.resolve(identity, "Steve", &config_for(GameMode::Speed));
        assert_eq!(shown, "Steve");

        // Let the background worker settle
        sleep(Duration::from_secs(1)).await;
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
        assert!(store.contains(identity));
    }

    #[tokio::test]
    async fn test_decorated_name_for_active_mode() {
        let (resolver, store, client) = build_resolver();
        let identity = Uuid::new_v4();
        put_tiers(&store, identity, &[(GameMode::Speed, "HT2")]);

        let shown = resolver.resolve(identity, "Steve", &config_for(GameMode::Speed));
        assert!(shown.contains("Steve"));
        assert!(shown.contains("HT2"));
        assert!(shown.contains(GameMode::Speed.icon()));
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_display_cache_fast_path() {
        let (resolver, store, _) = build_resolver();
        let identity = Uuid::new_v4();
        put_tiers(&store, identity, &[(GameMode::Speed, "HT2")]);

        let config = config_for(GameMode::Speed);
        let first = resolver.resolve(identity, "Steve", &config);

        // A store wipe no longer matters once the rendering is memoized
        store.clear();
        let second = resolver.resolve(identity, "Steve", &config);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_mode_change_invalidates_display_cache() {
        let (resolver, store, _) = build_resolver();
        let identity = Uuid::new_v4();
        put_tiers(
            &store,
            identity,
            &[(GameMode::Bow, "HT1"), (GameMode::Speed, "HT2")],
        );

        let under_bow = resolver.resolve(identity, "Steve", &config_for(GameMode::Bow));
        assert!(under_bow.contains(GameMode::Bow.icon()));

        let under_speed = resolver.resolve(identity, "Steve", &config_for(GameMode::Speed));
        assert_ne!(under_speed, under_bow);
        assert!(under_speed.contains("HT2"));
        assert!(under_speed.contains(GameMode::Speed.icon()));
    }

    #[tokio::test]
    async fn test_fallback_selects_strongest_other_mode() {
        let (resolver, store, _) = build_resolver();
        let identity = Uuid::new_v4();
        put_tiers(
            &store,
            identity,
            &[
                (GameMode::Bow, "NoTier"),
                (GameMode::Speed, "HT2"),
                (GameMode::Bed, "LT4"),
            ],
        );

        let shown = resolver.resolve(identity, "Steve", &config_for(GameMode::Bow));
        assert!(shown.contains("HT2"));
        assert!(shown.contains(GameMode::Speed.icon()));
        assert!(!shown.contains("LT4"));
    }

    #[tokio::test]
    async fn test_all_no_tier_returns_unmodified_name() {
        let (resolver, store, _) = build_resolver();
        let identity = Uuid::new_v4();
        put_tiers(&store, identity, &[]);

        let shown = resolver.resolve(identity, "Steve", &config_for(GameMode::Bow));
        assert_eq!(shown, "Steve");
    }

    #[tokio::test]
    async fn test_expired_record_returns_unmodified_name() {
        let (resolver, store, client) = build_resolver();
        let identity = Uuid::new_v4();

        let stale = Utc::now() - TimeDelta::seconds(crate::domain::TIER_TTL_SECS + 1);
        let records: HashMap<GameMode, TierRecord> = GameMode::ALL
            .into_iter()
            .map(|mode| {
                (
                    mode,
                    TierRecord::with_created_at(TierLabel::Ranked("HT1".to_string()), stale),
                )
            })
            .collect();
        store.put_all(identity, records);

        let shown = resolver.resolve(identity, "Steve", &config_for(GameMode::Bow));
        assert_eq!(shown, "Steve");
        // Stale entries do not retrigger a refresh while they exist
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_disabled_clears_caches_and_returns_name() {
        let (resolver, store, _) = build_resolver();
        let identity = Uuid::new_v4();
        put_tiers(&store, identity, &[(GameMode::Speed, "HT2")]);

        let mut config = config_for(GameMode::Speed);
        config.enabled = false;

        let shown = resolver.resolve(identity, "Steve", &config);
        assert_eq!(shown, "Steve");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_clear_all_is_idempotent() {
        let (resolver, store, _) = build_resolver();
        put_tiers(&store, Uuid::new_v4(), &[(GameMode::Speed, "HT2")]);

        resolver.clear_all();
        assert!(store.is_empty());
        resolver.clear_all();
        assert!(store.is_empty());
    }
}
