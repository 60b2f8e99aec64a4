use anyhow::Result;

use subtier_tagger::cli::Command;
use subtier_tagger::{handle_lookup, handle_modes, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Lookup { username } => handle_lookup(username),
        Command::Modes => handle_modes(),
    }
}
