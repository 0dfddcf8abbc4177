use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of comparing one metric across the two scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    ScenarioA,
    ScenarioB,
    Tie,
}

impl Winner {
    pub fn label(&self) -> &'static str {
        match self {
            Winner::ScenarioA => "Scenario A",
            Winner::ScenarioB => "Scenario B",
            Winner::Tie => "Tie",
        }
    }

    /// Same outcome seen with the scenarios swapped
    pub fn swapped(&self) -> Winner {
        match self {
            Winner::ScenarioA => Winner::ScenarioB,
            Winner::ScenarioB => Winner::ScenarioA,
            Winner::Tie => Winner::Tie,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Per-metric winners. There is no overall winner; the three may disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonOutcome {
    /// Higher revenue wins
    pub revenue: Winner,
    /// Higher ROI wins
    pub roi: Winner,
    /// Lower actual CAC wins
    pub actual_cac: Winner,
}

impl ComparisonOutcome {
    pub fn swapped(&self) -> ComparisonOutcome {
        ComparisonOutcome {
            revenue: self.revenue.swapped(),
            roi: self.roi.swapped(),
            actual_cac: self.actual_cac.swapped(),
        }
    }
}
