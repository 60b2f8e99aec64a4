use std::collections::HashMap;

use dashmap::DashMap;
use log::info;

use crate::config::GameMode;
use crate::domain::{Identity, TierRecord};

/// Per-identity, per-mode tier records shared between the resolver and the
/// fetch workers.
///
/// `put_all` replaces an identity's whole per-mode map in one insert, so
/// readers never observe a half-populated fetch cycle. Records are only
/// dropped by `clear`; staleness is checked by readers via the record's own
/// expiry.
#[derive(Default)]
pub struct TierStore {
    tiers: DashMap<Identity, HashMap<GameMode, TierRecord>>,
}

impl TierStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, identity: Identity, mode: GameMode) -> Option<TierRecord> {
        self.tiers
            .get(&identity)
            .and_then(|modes| modes.get(&mode).cloned())
    }

    /// All records for an identity, in stable mode order
    pub fn get_all(&self, identity: Identity) -> Vec<(GameMode, TierRecord)> {
        let Some(modes) = self.tiers.get(&identity) else {
            return Vec::new();
        };
        GameMode::ALL
            .into_iter()
            .filter_map(|mode| modes.get(&mode).map(|record| (mode, record.clone())))
            .collect()
    }

    /// Replace every per-mode record for this identity at once
    pub fn put_all(&self, identity: Identity, records: HashMap<GameMode, TierRecord>) {
        self.tiers.insert(identity, records);
    }

    pub fn contains(&self, identity: Identity) -> bool {
        self.tiers.contains_key(&identity)
    }

    pub fn clear(&self) {
        self.tiers.clear();
        info!("Cleared tier store");
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TierLabel;
    use uuid::Uuid;

    fn records(entries: &[(GameMode, &str)]) -> HashMap<GameMode, TierRecord> {
        entries
            .iter()
            .map(|(mode, label)| {
                (
                    *mode,
                    TierRecord::new(TierLabel::Ranked(label.to_string())),
                )
            })
            .collect()
    }

    #[test]
    fn test_put_all_and_get() {
        let store = TierStore::new();
        let identity = Uuid::new_v4();

        store.put_all(identity, records(&[(GameMode::Bow, "HT1")]));

        let record = store.get(identity, GameMode::Bow).unwrap();
        assert_eq!(record.label, TierLabel::Ranked("HT1".to_string()));
        assert!(store.get(identity, GameMode::Speed).is_none());
    }

    #[test]
    fn test_get_all_follows_mode_order() {
        let store = TierStore::new();
        let identity = Uuid::new_v4();

        store.put_all(
            identity,
            records(&[
                (GameMode::Trident, "LT3"),
                (GameMode::Bow, "HT2"),
                (GameMode::Speed, "LT5"),
            ]),
        );

        let modes: Vec<GameMode> = store
            .get_all(identity)
            .into_iter()
            .map(|(mode, _)| mode)
            .collect();
        assert_eq!(modes, vec![GameMode::Bow, GameMode::Speed, GameMode::Trident]);
    }

    #[test]
    fn test_put_all_replaces_previous_entries() {
        let store = TierStore::new();
        let identity = Uuid::new_v4();

        store.put_all(identity, records(&[(GameMode::Bow, "HT1"), (GameMode::Bed, "LT2")]));
        store.put_all(identity, records(&[(GameMode::Speed, "HT3")]));

        assert!(store.get(identity, GameMode::Bow).is_none());
        assert!(store.get(identity, GameMode::Speed).is_some());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = TierStore::new();
        store.put_all(Uuid::new_v4(), records(&[(GameMode::Bow, "HT1")]));

        store.clear();
        assert!(store.is_empty());
        store.clear();
        assert!(store.is_empty());
    }
}
