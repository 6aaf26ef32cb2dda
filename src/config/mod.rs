pub mod settings;

pub use settings::{AppConfig, JudgeCount, PointTable, TournamentRules};
