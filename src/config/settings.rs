use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::game_mode::GameMode;

const DEFAULT_TIER_COLOR: u32 = 0xFFFFFF;

/// User-facing tagger configuration, read on every resolve call.
///
/// Externally mutable (settings UI, command); the core only relies on the
/// mode being one of the known variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaggerConfig {
    pub enabled: bool,
    pub active_mode: GameMode,
    pub tier_colors: HashMap<String, u32>,
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            active_mode: GameMode::Minecart,
            tier_colors: default_tier_colors(),
        }
    }
}

impl TaggerConfig {
    /// Display color for a tier label, white for anything unmapped
    pub fn tier_color(&self, label: &str) -> u32 {
        self.tier_colors
            .get(label)
            .copied()
            .unwrap_or(DEFAULT_TIER_COLOR)
    }

    /// Tier color split into channels for terminal truecolor output
    pub fn tier_rgb(&self, label: &str) -> (u8, u8, u8) {
        let color = self.tier_color(label);
        ((color >> 16) as u8, (color >> 8) as u8, color as u8)
    }
}

fn default_tier_colors() -> HashMap<String, u32> {
    let colors = [
        ("HT1", 0xFF0000),
        ("LT1", 0xFFB6C1),
        ("HT2", 0xFFA500),
        ("LT2", 0xFFE4B5),
        ("HT3", 0xDAA520),
        ("LT3", 0xEEE8AA),
        ("HT4", 0x006400),
        ("LT4", 0x90EE90),
        ("HT5", 0x808080),
        ("LT5", 0xD3D3D3),
        ("RHT1", 0xFF0000),
        ("RLT1", 0xFFB6C1),
        ("RHT2", 0xFFA500),
        ("RLT2", 0xFFE4B5),
    ];
    colors
        .into_iter()
        .map(|(label, color)| (label.to_string(), color))
        .collect()
}

pub struct ApiSettings {
    pub rankings_base_url: &'static str,
    pub profile_base_url: &'static str,
    pub user_agent: &'static str,
    pub connect_timeout_secs: u64,
    pub read_timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            rankings_base_url: "https://subtiers.net",
            profile_base_url: "https://api.mojang.com",
            user_agent: "SubtierTagger/0.1",
            connect_timeout_secs: 5,
            read_timeout_secs: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_color_defaults() {
        let config = TaggerConfig::default();
        assert_eq!(config.tier_color("HT1"), 0xFF0000);
        assert_eq!(config.tier_color("RLT2"), 0xFFE4B5);
        assert_eq!(config.tier_color("NoTier"), 0xFFFFFF);
    }

    #[test]
    fn test_defaults() {
        let config = TaggerConfig::default();
        assert!(config.enabled);
        assert_eq!(config.active_mode, GameMode::Minecart);
    }
}
