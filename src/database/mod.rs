mod columns;
pub mod categories;
pub mod connection;
pub mod kata_scores;
pub mod kumite_matches;
pub mod results;
pub mod roster;
pub mod setup;
pub mod tournaments;

pub use connection::{create_memory_pool, create_pool, get_connection, DbConn, DbPool};
