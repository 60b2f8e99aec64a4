use std::sync::Arc;

use dashmap::DashSet;

use crate::domain::Identity;

/// Identities currently being refreshed in the background.
///
/// Membership is the only admission control: `try_acquire` is an atomic
/// check-and-insert, so at most one fetch sequence runs per identity.
#[derive(Default)]
pub struct InFlightTracker {
    fetching: DashSet<Identity>,
}

impl InFlightTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff this call newly marked the identity as in flight
    pub fn try_acquire(&self, identity: Identity) -> bool {
        self.fetching.insert(identity)
    }

    /// Idempotent removal
    pub fn release(&self, identity: Identity) {
        self.fetching.remove(&identity);
    }

    pub fn is_in_flight(&self, identity: Identity) -> bool {
        self.fetching.contains(&identity)
    }
}

/// Releases the in-flight marker on drop, no matter how the fetch ends
pub struct InFlightGuard {
    tracker: Arc<InFlightTracker>,
    identity: Identity,
}

impl InFlightGuard {
    /// Acquire the marker, or `None` if a fetch is already running
    pub fn acquire(tracker: Arc<InFlightTracker>, identity: Identity) -> Option<Self> {
        if tracker.try_acquire(identity) {
            Some(Self { tracker, identity })
        } else {
            None
        }
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.tracker.release(self.identity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_try_acquire_is_exclusive() {
        let tracker = InFlightTracker::new();
        let identity = Uuid::new_v4();

        assert!(tracker.try_acquire(identity));
        assert!(!tracker.try_acquire(identity));

        tracker.release(identity);
        assert!(tracker.try_acquire(identity));
    }

    #[test]
    fn test_release_is_idempotent() {
        let tracker = InFlightTracker::new();
        let identity = Uuid::new_v4();

        tracker.try_acquire(identity);
        tracker.release(identity);
        tracker.release(identity);
        assert!(!tracker.is_in_flight(identity));
    }

    #[test]
    fn test_guard_releases_on_drop() {
        let tracker = Arc::new(InFlightTracker::new());
        let identity = Uuid::new_v4();

        let guard = InFlightGuard::acquire(Arc::clone(&tracker), identity).unwrap();
        assert!(InFlightGuard::acquire(Arc::clone(&tracker), identity).is_none());

        drop(guard);
        assert!(!tracker.is_in_flight(identity));
    }
}
