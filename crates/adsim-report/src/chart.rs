use adsim_types::{ScenarioId, ScenarioPair, ScenarioResult};
use serde::{Deserialize, Serialize};

/// Metrics plotted in the grouped bar comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartMetric {
    Impressions,
    Clicks,
    Conversions,
    Revenue,
    Profit,
}

impl ChartMetric {
    pub fn all() -> &'static [ChartMetric] {
        &[
            ChartMetric::Impressions,
            ChartMetric::Clicks,
            ChartMetric::Conversions,
            ChartMetric::Revenue,
            ChartMetric::Profit,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartMetric::Impressions => "Impressions",
            ChartMetric::Clicks => "Clicks",
            ChartMetric::Conversions => "Conversions",
            ChartMetric::Revenue => "Revenue",
            ChartMetric::Profit => "Profit",
        }
    }

    pub fn value(&self, result: &ScenarioResult) -> f64 {
        match self {
            ChartMetric::Impressions => result.impressions as f64,
            ChartMetric::Clicks => result.clicks as f64,
            ChartMetric::Conversions => result.conversions as f64,
            ChartMetric::Revenue => result.revenue,
            ChartMetric::Profit => result.profit,
        }
    }
}

/// One bar group member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub scenario: ScenarioId,
    pub name: String,
    pub color: String,
    pub values: Vec<f64>,
}

/// Grouped bar chart data; rendering is left to the consumer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonChart {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub categories: Vec<ChartMetric>,
    pub series: Vec<ChartSeries>,
}

fn series_color(id: ScenarioId) -> &'static str {
    match id {
        ScenarioId::A => "#3b82f6",
        ScenarioId::B => "#10b981",
    }
}

impl ComparisonChart {
    pub fn from_results(results: &ScenarioPair<ScenarioResult>) -> Self {
        let categories = ChartMetric::all().to_vec();
        let series = results
            .iter()
            .map(|(id, result)| ChartSeries {
                scenario: id,
                name: id.label().to_string(),
                color: series_color(id).to_string(),
                values: categories.iter().map(|m| m.value(result)).collect(),
            })
            .collect();

        ComparisonChart {
            title: "Performance Metrics Comparison".to_string(),
            x_axis_title: "Metrics".to_string(),
            y_axis_title: "Value".to_string(),
            categories,
            series,
        }
    }

    /// Values of one metric as (scenario A, scenario B)
    pub fn row(&self, metric: ChartMetric) -> Option<(f64, f64)> {
        let idx = self.categories.iter().position(|m| *m == metric)?;
        let value_for = |id: ScenarioId| {
            self.series
                .iter()
                .find(|s| s.scenario == id)
                .and_then(|s| s.values.get(idx).copied())
        };
        Some((value_for(ScenarioId::A)?, value_for(ScenarioId::B)?))
    }
}
