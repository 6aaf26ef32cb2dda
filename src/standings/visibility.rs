use serde::{Deserialize, Serialize};

use crate::domain::OfficialResult;

/// Audience a result listing is produced for. Whether the caller may use a
/// view is decided before this point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultView {
    Admin,
    Coach,
    Public,
}

impl ResultView {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => Some(ResultView::Admin),
            "coach" => Some(ResultView::Coach),
            "public" => Some(ResultView::Public),
            _ => None,
        }
    }
}

/// Admins see every result including pending and corrected ones; coaches
/// and the public only see official results.
pub fn visible_results(results: &[OfficialResult], view: ResultView) -> Vec<OfficialResult> {
    match view {
        ResultView::Admin => results.to_vec(),
        ResultView::Coach | ResultView::Public => {
            results.iter().filter(|r| r.is_official()).cloned().collect()
        }
    }
}
