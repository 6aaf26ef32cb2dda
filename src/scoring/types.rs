use serde::{Deserialize, Serialize};

pub type ScoreValue = f64;
pub type PointTotal = u32;

/// Kumite scoring technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KumitePoint {
    Yuko,
    #[serde(rename = "Waza-ari")]
    WazaAri,
    Ippon,
}

impl KumitePoint {
    pub fn value(self) -> PointTotal {
        match self {
            KumitePoint::Yuko => 1,
            KumitePoint::WazaAri => 2,
            KumitePoint::Ippon => 3,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            KumitePoint::Yuko => "Yuko",
            KumitePoint::WazaAri => "Waza-ari",
            KumitePoint::Ippon => "Ippon",
        }
    }
}

/// Side of a kumite bout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Competitor {
    Athlete1,
    Athlete2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecisionReason {
    Lead,
    TimeExpiredScore,
    Senshu,
    RequiresDecision,
    InProgress,
}

impl DecisionReason {
    pub fn as_str(&self) -> &str {
        match self {
            DecisionReason::Lead => "8-point lead",
            DecisionReason::TimeExpiredScore => "Time up - higher score",
            DecisionReason::Senshu => "Senshu (first score advantage)",
            DecisionReason::RequiresDecision => "Tie - requires decision",
            DecisionReason::InProgress => "Match in progress",
        }
    }
}

/// Outcome of evaluating a bout. `winner` is `None` while undecided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoutDecision {
    pub winner: Option<Competitor>,
    pub reason: DecisionReason,
}

impl BoutDecision {
    pub fn won_by(competitor: Competitor, reason: DecisionReason) -> Self {
        Self {
            winner: Some(competitor),
            reason,
        }
    }

    pub fn undecided(reason: DecisionReason) -> Self {
        Self {
            winner: None,
            reason,
        }
    }
}
