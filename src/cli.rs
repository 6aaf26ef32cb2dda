use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "karate tournament scoring and results backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Drop and recreate the database schema
    Init,
    /// Compute a kata final score from a judge panel
    Kata {
        /// Judge scores, one per judge
        #[arg(required = true, num_args = 1..)]
        scores: Vec<f64>,
        /// Panel size (5 or 7); defaults to the configured panel
        #[arg(short, long)]
        judges: Option<u8>,
    },
    /// Print the team championship table for a tournament
    Standings {
        tournament_id: i64,
    },
    /// Store tournament rules loaded from a JSON file
    Rules {
        tournament_id: i64,
        path: PathBuf,
    },
}
