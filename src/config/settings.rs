use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::Medal;
use crate::errors::with_parse_context;

/// Bout length used when an age bracket has no configured duration.
pub const DEFAULT_MATCH_DURATION_SECS: u32 = 120;

/// Size of the kata judging panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum JudgeCount {
    Five,
    Seven,
}

impl JudgeCount {
    pub fn as_usize(self) -> usize {
        match self {
            JudgeCount::Five => 5,
            JudgeCount::Seven => 7,
        }
    }
}

impl TryFrom<u8> for JudgeCount {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            5 => Ok(JudgeCount::Five),
            7 => Ok(JudgeCount::Seven),
            other => Err(format!("judge count must be 5 or 7, got {}", other)),
        }
    }
}

impl From<JudgeCount> for u8 {
    fn from(value: JudgeCount) -> Self {
        value.as_usize() as u8
    }
}

/// Team points awarded per medal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointTable {
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
}

impl Default for PointTable {
    fn default() -> Self {
        Self {
            gold: 3,
            silver: 2,
            bronze: 1,
        }
    }
}

impl PointTable {
    pub fn points_for(&self, medal: Medal) -> u32 {
        match medal {
            Medal::Gold => self.gold,
            Medal::Silver => self.silver,
            Medal::Bronze => self.bronze,
        }
    }

    /// Weighted medal total, capped at `u32::MAX` for oversized tables.
    pub fn total(&self, gold: u32, silver: u32, bronze: u32) -> u32 {
        gold.saturating_mul(self.gold)
            .saturating_add(silver.saturating_mul(self.silver))
            .saturating_add(bronze.saturating_mul(self.bronze))
    }
}

/// Per-tournament rule configuration. Read-only for the scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentRules {
    pub kata_judges_count: JudgeCount,
    /// Keyed by the minimum age of a category's bracket.
    pub kumite_match_duration: BTreeMap<u32, u32>,
    pub team_point_rules: PointTable,
    pub senshu_enabled: bool,
    #[serde(default)]
    pub tie_break_rule: Option<String>,
}

impl Default for TournamentRules {
    fn default() -> Self {
        Self {
            kata_judges_count: JudgeCount::Five,
            kumite_match_duration: BTreeMap::new(),
            team_point_rules: PointTable::default(),
            senshu_enabled: true,
            tie_break_rule: None,
        }
    }
}

impl TournamentRules {
    pub fn match_duration_for(&self, age_min: u32) -> u32 {
        self.kumite_match_duration
            .get(&age_min)
            .copied()
            .unwrap_or(DEFAULT_MATCH_DURATION_SECS)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        with_parse_context(serde_json::from_str(json), "tournament rules")
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read rules file: {}", path.display()))?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize tournament rules")
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_path: String,
    pub rules: TournamentRules,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        let database_path = std::env::var("DATABASE_PATH")
            .unwrap_or_else(|_| "karate_tournament.db".to_string());

        Self {
            database_path,
            rules: TournamentRules::default(),
        }
    }
}
