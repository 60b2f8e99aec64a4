use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Per-mode fields from the ranking service.
///
/// Tier and position can be missing independently; a mode without both is
/// treated as unranked rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeRanking {
    pub tier: Option<u8>,
    pub pos: Option<u8>,
    #[serde(default)]
    pub retired: bool,
}

/// Full rankings response, keyed by mode api key
pub type RankingsResponse = HashMap<String, ModeRanking>;

/// Profile lookup response from the identity service
#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}
