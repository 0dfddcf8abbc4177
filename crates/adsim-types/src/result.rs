use serde::{Deserialize, Serialize};

/// Funnel metrics derived from one [`crate::ScenarioInput`].
///
/// Counts are truncated toward zero; currency and percent values are rounded
/// to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub revenue: f64,
    pub profit: f64,
    pub roi: f64,
    pub actual_cac: f64,
    pub reach_score: u64,
    pub engagement_score: u64,
}
