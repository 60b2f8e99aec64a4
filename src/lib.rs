pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod fetcher;
pub mod http;
pub mod resolver;
pub mod services;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use colored::Colorize;

use crate::cli::Command;
use crate::config::{GameMode, TaggerConfig};
use crate::services::LookupService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_lookup(username: &str) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = LookupService::new(TaggerConfig::default())?;
        service.run(username).await
    })
}

pub fn handle_modes() -> Result<()> {
    for mode in GameMode::ALL {
        let (red, green, blue) = mode.icon_rgb();
        let colored_label = format!("{} {}", mode.icon(), mode.label()).truecolor(red, green, blue);
        println!("{colored_label} ({})", mode.api_key());
    }
    Ok(())
}
