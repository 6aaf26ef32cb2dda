use anyhow::Result;

use karate_tournament::cli::Command;
use karate_tournament::{
    handle_init, handle_kata, handle_rules, handle_serve, handle_standings, interpret,
};

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
        Command::Serve { port } => handle_serve(*port),
        Command::Init => handle_init(),
        Command::Kata { scores, judges } => handle_kata(scores, *judges),
        Command::Standings { tournament_id } => handle_standings(*tournament_id),
        Command::Rules {
            tournament_id,
            path,
        } => handle_rules(*tournament_id, path),
    }
}
