pub mod kata;
pub mod kumite;
pub mod types;
pub mod win_condition;

pub use kata::{compute_for_panel, compute_kata_final_score};
pub use kumite::{append_event, total_points};
pub use types::{BoutDecision, Competitor, DecisionReason, KumitePoint, PointTotal, ScoreValue};
pub use win_condition::{decide, evaluate, SideScore, WINNING_LEAD};
