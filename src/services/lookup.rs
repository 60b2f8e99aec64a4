use anyhow::Result;
use colored::Colorize;
use log::info;

use crate::api::{ApiError, MojangClient, RankingClient, SubtiersClient};
use crate::config::{ApiSettings, GameMode, TaggerConfig};
use crate::domain::TierLabel;

/// One-shot username lookup: resolve the identity, fetch rankings once, and
/// print a colored line per mode that has data.
pub struct LookupService {
    mojang: MojangClient,
    rankings: SubtiersClient,
    config: TaggerConfig,
}

impl LookupService {
    pub fn new(config: TaggerConfig) -> Result<Self> {
        let settings = ApiSettings::default();
        Ok(Self {
            mojang: MojangClient::new(&settings)?,
            rankings: SubtiersClient::new(&settings)?,
            config,
        })
    }

    pub async fn run(&self, username: &str) -> Result<()> {
        info!("Looking up tiers for {username}");

        let Some(identity) = self.mojang.username_to_identity(username).await? else {
            println!("No player found with username: {username}");
            return Ok(());
        };

        let response = match self.rankings.fetch_rankings(identity).await {
            Ok(response) => response,
            Err(ApiError::NotFound | ApiError::Invalid) => {
                println!("{username} has no tiers");
                return Ok(());
            }
            Err(ApiError::Transient(reason)) => {
                anyhow::bail!("Could not reach the ranking service: {reason}")
            }
        };

        println!("{}", format!("Tiers for {username}:").bold());
        for mode in GameMode::ALL {
            let Some(ranking) = response.get(mode.api_key()) else {
                continue;
            };
            let label = TierLabel::from_ranking(ranking);
            if label.is_no_tier() {
                continue;
            }
            println!("{}", self.format_mode_line(mode, &label));
        }

        Ok(())
    }

    fn format_mode_line(&self, mode: GameMode, label: &TierLabel) -> String {
        let (red, green, blue) = mode.icon_rgb();
        let mode_text = format!("{} {}", mode.icon(), mode.label()).truecolor(red, green, blue);

        let (red, green, blue) = self.config.tier_rgb(label.as_str());
        let tier_text = label.as_str().truecolor(red, green, blue).bold();

        format!("{mode_text} - {tier_text}")
    }
}
