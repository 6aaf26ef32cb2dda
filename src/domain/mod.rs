pub mod bout;
pub mod kata_sheet;
pub mod models;
pub mod roster;

pub use bout::{BoutUpdate, KumiteMatch};
pub use kata_sheet::{JudgeScore, KataScore};
pub use models::*;
pub use roster::{Roster, TeamResolver};
