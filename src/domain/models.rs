use chrono::{DateTime, TimeDelta, Utc};
use uuid::Uuid;

use crate::api::models::ModeRanking;

/// Opaque player identity, the key for every cache
pub type Identity = Uuid;

/// Freshness window for cached tier records
pub const TIER_TTL_SECS: i64 = 300;

/// Priority order for tier labels, weakest first. Labels not in this list
/// rank below everything in it.
const TIER_PRIORITY: [&str; 14] = [
    "LT5", "HT5", "LT4", "HT4", "LT3", "HT3", "RLT2", "LT2", "RHT2", "RHT1", "LT1", "RTLT1",
    "RLT1", "HT1",
];

/// Encoded rank for one game mode, e.g. `HT1` or `RLT2`, with `NoTier` as
/// the "confirmed unranked" sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TierLabel {
    NoTier,
    Ranked(String),
}

impl TierLabel {
    /// Derive a label from the ranking service's per-mode fields.
    ///
    /// `pos == 0` means high tier, anything else low tier; `retired` adds the
    /// `R` prefix. Missing tier or position data means the player has no
    /// usable rank in that mode.
    pub fn from_ranking(ranking: &ModeRanking) -> TierLabel {
        let (Some(tier), Some(pos)) = (ranking.tier, ranking.pos) else {
            return TierLabel::NoTier;
        };

        let position = if pos == 0 { "HT" } else { "LT" };
        let retired = if ranking.retired { "R" } else { "" };
        TierLabel::Ranked(format!("{retired}{position}{tier}"))
    }

    pub fn is_no_tier(&self) -> bool {
        matches!(self, TierLabel::NoTier)
    }

    pub fn as_str(&self) -> &str {
        match self {
            TierLabel::NoTier => "NoTier",
            TierLabel::Ranked(label) => label,
        }
    }

    /// Position in the fixed priority order; `None` for unknown labels and
    /// the `NoTier` sentinel, which compare below every known label.
    pub fn priority(&self) -> Option<usize> {
        match self {
            TierLabel::NoTier => None,
            TierLabel::Ranked(label) => TIER_PRIORITY.iter().position(|t| *t == label.as_str()),
        }
    }
}

/// One cached tier for one game mode, immutable once constructed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierRecord {
    pub label: TierLabel,
    pub created_at: DateTime<Utc>,
}

impl TierRecord {
    pub fn new(label: TierLabel) -> Self {
        Self::with_created_at(label, Utc::now())
    }

    pub fn with_created_at(label: TierLabel, created_at: DateTime<Utc>) -> Self {
        Self { label, created_at }
    }

    pub fn no_tier() -> Self {
        Self::new(TierLabel::NoTier)
    }

    /// Expiry is evaluated at read time; nothing sweeps stale records
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now - self.created_at > TimeDelta::seconds(TIER_TTL_SECS)
    }
}
