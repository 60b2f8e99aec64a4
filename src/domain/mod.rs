pub mod models;

pub use models::{Identity, TierLabel, TierRecord, TIER_TTL_SECS};
