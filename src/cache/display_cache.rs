use dashmap::DashMap;

use crate::domain::Identity;

/// Memoized rendered labels for the currently active game mode.
///
/// Every cached string embeds a mode-specific icon and color, so a mode
/// change invalidates the whole map rather than individual entries.
#[derive(Default)]
pub struct DisplayCache {
    rendered: DashMap<Identity, String>,
}

impl DisplayCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, identity: Identity) -> Option<String> {
        self.rendered.get(&identity).map(|entry| entry.value().clone())
    }

    pub fn insert(&self, identity: Identity, text: String) {
        self.rendered.insert(identity, text);
    }

    pub fn clear(&self) {
        self.rendered.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.rendered.is_empty()
    }
}
