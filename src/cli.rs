use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "subtier tagger core")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Fetch and print every ranked mode for a player by username
    Lookup {
        /// Player username
        username: String,
    },
    /// List the known game modes with their icons and api keys
    Modes,
}
