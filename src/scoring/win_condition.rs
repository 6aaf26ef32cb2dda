use super::kumite::total_points;
use super::types::{BoutDecision, Competitor, DecisionReason, KumitePoint, PointTotal};

/// A lead of this many points ends the bout immediately.
pub const WINNING_LEAD: PointTotal = 8;

/// One side's standing as seen by the decision rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideScore {
    pub points: PointTotal,
    /// Whether this side has logged any point event.
    pub has_scored: bool,
}

impl SideScore {
    pub fn from_events(events: &[KumitePoint]) -> Self {
        Self {
            points: total_points(events),
            has_scored: !events.is_empty(),
        }
    }
}

/// Decides a kumite bout from both point logs and the clock.
///
/// Rules are checked in a fixed order: point lead, time-up score,
/// Senshu, then undecided. Pure, so it can be re-run every timer tick.
pub fn evaluate(
    athlete1_events: &[KumitePoint],
    athlete2_events: &[KumitePoint],
    elapsed_seconds: u32,
    match_duration_seconds: u32,
    senshu_enabled: bool,
) -> BoutDecision {
    decide(
        SideScore::from_events(athlete1_events),
        SideScore::from_events(athlete2_events),
        elapsed_seconds,
        match_duration_seconds,
        senshu_enabled,
    )
}

pub fn decide(
    side1: SideScore,
    side2: SideScore,
    elapsed_seconds: u32,
    match_duration_seconds: u32,
    senshu_enabled: bool,
) -> BoutDecision {
    if let Some(leader) = check_point_lead(side1.points, side2.points) {
        return BoutDecision::won_by(leader, DecisionReason::Lead);
    }

    if elapsed_seconds < match_duration_seconds {
        return BoutDecision::undecided(DecisionReason::InProgress);
    }

    if let Some(leader) = higher_score(side1.points, side2.points) {
        return BoutDecision::won_by(leader, DecisionReason::TimeExpiredScore);
    }

    if senshu_enabled {
        if let Some(first) = senshu_holder(side1, side2) {
            return BoutDecision::won_by(first, DecisionReason::Senshu);
        }
    }

    BoutDecision::undecided(DecisionReason::RequiresDecision)
}

fn check_point_lead(points1: PointTotal, points2: PointTotal) -> Option<Competitor> {
    if points1.saturating_sub(points2) >= WINNING_LEAD {
        Some(Competitor::Athlete1)
    } else if points2.saturating_sub(points1) >= WINNING_LEAD {
        Some(Competitor::Athlete2)
    } else {
        None
    }
}

fn higher_score(points1: PointTotal, points2: PointTotal) -> Option<Competitor> {
    match points1.cmp(&points2) {
        std::cmp::Ordering::Greater => Some(Competitor::Athlete1),
        std::cmp::Ordering::Less => Some(Competitor::Athlete2),
        std::cmp::Ordering::Equal => None,
    }
}

// Only resolves the case where exactly one side has scored at all; interleaved
// logs are not compared chronologically.
fn senshu_holder(side1: SideScore, side2: SideScore) -> Option<Competitor> {
    match (side1.has_scored, side2.has_scored) {
        (true, false) => Some(Competitor::Athlete1),
        (false, true) => Some(Competitor::Athlete2),
        _ => None,
    }
}
