pub mod aggregation;
pub mod championship;
pub mod ranking;
pub mod types;
pub mod visibility;

pub use aggregation::aggregate;
pub use championship::{compute_championship, TeamChampionship};
pub use ranking::rank;
pub use types::{Aggregation, TeamRecords, TeamStanding, TeamTally, UnresolvedTeamWarning};
pub use visibility::{visible_results, ResultView};
