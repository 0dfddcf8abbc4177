use adsim_engine::SimulationRun;
use adsim_types::{ComparisonOutcome, Result, ScenarioId, ScenarioInput, ScenarioPair, ScenarioResult};
use serde::{Deserialize, Serialize};

use crate::chart::ComparisonChart;
use crate::format::{format_cac, format_count, format_currency, format_percent, winner_headlines};
use crate::hashing::{compute_json_hash, HashRef};

/// Everything a renderer needs for one simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// SHA256 of the serialized input pair
    pub fingerprint: HashRef,
    pub inputs: ScenarioPair<ScenarioInput>,
    pub results: ScenarioPair<ScenarioResult>,
    pub comparison: ComparisonOutcome,
    pub chart: ComparisonChart,
}

impl SimulationReport {
    pub fn build(run: &SimulationRun) -> Result<Self> {
        Ok(SimulationReport {
            fingerprint: compute_json_hash(&run.inputs)?,
            inputs: run.inputs,
            results: run.results,
            comparison: run.comparison,
            chart: ComparisonChart::from_results(&run.results),
        })
    }
}

/// Output surface for a finished report
pub trait ReportRenderer {
    fn render(&self, report: &SimulationReport) -> Result<String>;
}

/// Pretty-printed JSON
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &SimulationReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

/// Plain-text layout for terminals
pub struct TextRenderer;

impl TextRenderer {
    fn scenario_block(out: &mut String, id: ScenarioId, result: &ScenarioResult) {
        let rows = [
            ("Impressions", format_count(result.impressions)),
            ("Clicks", format_count(result.clicks)),
            ("Conversions", format_count(result.conversions)),
            ("Revenue", format_currency(result.revenue)),
            ("Profit", format_currency(result.profit)),
            ("ROI", format_percent(result.roi)),
            ("Actual CAC", format_cac(result.actual_cac)),
            ("Reach Score", format_count(result.reach_score)),
            ("Engagement Score", format_count(result.engagement_score)),
        ];

        out.push_str(&format!("{} Results\n", id.label()));
        for (label, value) in rows {
            out.push_str(&format!("  {:<18}{:>20}\n", label, value));
        }
        out.push('\n');
    }
}

impl ReportRenderer for TextRenderer {
    fn render(&self, report: &SimulationReport) -> Result<String> {
        let mut out = String::new();

        out.push_str("Simulation Results\n");
        out.push_str("==================\n\n");
        for (id, result) in report.results.iter() {
            Self::scenario_block(&mut out, id, result);
        }

        out.push_str(&format!("{}\n", report.chart.title));
        out.push_str(&format!("  {:<14}{:>20}{:>20}\n", "Metric", "Scenario A", "Scenario B"));
        for metric in &report.chart.categories {
            if let Some((a, b)) = report.chart.row(*metric) {
                out.push_str(&format!("  {:<14}{:>20.2}{:>20.2}\n", metric.label(), a, b));
            }
        }
        out.push('\n');

        out.push_str("Winner Analysis\n");
        for (heading, winner) in winner_headlines(&report.comparison) {
            out.push_str(&format!("  {:<16}{}\n", heading, winner));
        }

        out.push_str(&format!("\nfingerprint {}\n", report.fingerprint));
        Ok(out)
    }
}
