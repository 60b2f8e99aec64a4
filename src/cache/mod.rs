pub mod display_cache;
pub mod in_flight;
pub mod tier_store;

pub use display_cache::DisplayCache;
pub use in_flight::{InFlightGuard, InFlightTracker};
pub use tier_store::TierStore;
