use adsim_types::{ComparisonOutcome, ScenarioInput, ScenarioPair, ScenarioResult};
use serde::{Deserialize, Serialize};

use crate::engine::MetricsEngine;

/// One computed result pair together with the inputs that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRun {
    pub inputs: ScenarioPair<ScenarioInput>,
    pub results: ScenarioPair<ScenarioResult>,
    pub comparison: ComparisonOutcome,
}

impl SimulationRun {
    /// Compute both scenarios and compare them
    pub fn compute(inputs: ScenarioPair<ScenarioInput>) -> Self {
        let results = inputs.map(MetricsEngine::compute);
        let comparison = MetricsEngine::compare(&results.scenario_a, &results.scenario_b);
        SimulationRun {
            inputs,
            results,
            comparison,
        }
    }
}

/// Caller-owned holder for the most recent run.
///
/// A run replaces the held pair as a whole; reset discards it.
#[derive(Debug, Default)]
pub struct SimulationSession {
    current: Option<SimulationRun>,
    runs_started: u64,
}

impl SimulationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run both scenarios and hold the result pair
    pub fn run(&mut self, scenario_a: ScenarioInput, scenario_b: ScenarioInput) -> &SimulationRun {
        let run = SimulationRun::compute(ScenarioPair::new(scenario_a, scenario_b));
        self.runs_started += 1;

        tracing::debug!(
            run = self.runs_started,
            revenue_winner = %run.comparison.revenue,
            roi_winner = %run.comparison.roi,
            cac_winner = %run.comparison.actual_cac,
            "simulation run complete"
        );

        self.current.insert(run)
    }

    pub fn current(&self) -> Option<&SimulationRun> {
        self.current.as_ref()
    }

    pub fn comparison(&self) -> Option<ComparisonOutcome> {
        self.current.as_ref().map(|run| run.comparison)
    }

    /// Discard the held run, if any
    pub fn reset(&mut self) {
        if self.current.take().is_some() {
            tracing::debug!("simulation session reset");
        }
    }

    pub fn has_results(&self) -> bool {
        self.current.is_some()
    }

    /// Number of runs performed over the session's lifetime
    pub fn runs_started(&self) -> u64 {
        self.runs_started
    }
}
