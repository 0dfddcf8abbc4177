use adsim_types::{ComparisonOutcome, ScenarioInput, ScenarioResult, Winner};
use std::cmp::Ordering;

/// Fixed cost model: one impression per cent of spend
pub const IMPRESSIONS_PER_DOLLAR: f64 = 100.0;

/// Round to two decimals, half away from zero
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Truncate toward zero; negatives and NaN saturate to zero
fn truncate_count(value: f64) -> u64 {
    value as u64
}

/// Pure funnel model for a single scenario
pub struct MetricsEngine;

impl MetricsEngine {
    /// Derive funnel metrics from scenario inputs.
    ///
    /// Each stage narrows the previous one by a rate. Counts are truncated on
    /// output only; downstream formulas always use the untruncated values.
    pub fn compute(input: &ScenarioInput) -> ScenarioResult {
        let ad_spend = input.ad_spend;

        let impressions = ad_spend * IMPRESSIONS_PER_DOLLAR;
        let clicks = impressions * (input.click_through_rate / 100.0);
        let conversions = clicks * (input.conversion_rate / 100.0);
        let revenue = conversions * input.average_order_value;
        let profit = revenue - ad_spend;

        let roi = if ad_spend > 0.0 {
            (revenue - ad_spend) / ad_spend * 100.0
        } else {
            0.0
        };

        let actual_cac = if conversions > 0.0 {
            ad_spend / conversions
        } else {
            0.0
        };

        let reach_score = impressions * (f64::from(input.brand_awareness) / 100.0);
        let engagement_score = clicks * (input.social_engagement_rate / 100.0);

        tracing::trace!(
            ad_spend,
            impressions,
            clicks,
            conversions,
            revenue,
            "computed scenario funnel"
        );

        ScenarioResult {
            impressions: truncate_count(impressions),
            clicks: truncate_count(clicks),
            conversions: truncate_count(conversions),
            revenue: round_cents(revenue),
            profit: round_cents(profit),
            roi: round_cents(roi),
            actual_cac: round_cents(actual_cac),
            reach_score: truncate_count(reach_score),
            engagement_score: truncate_count(engagement_score),
        }
    }

    /// Per-metric winners between two results
    pub fn compare(a: &ScenarioResult, b: &ScenarioResult) -> ComparisonOutcome {
        ComparisonOutcome {
            revenue: Self::higher_wins(a.revenue, b.revenue),
            roi: Self::higher_wins(a.roi, b.roi),
            actual_cac: Self::higher_wins(a.actual_cac, b.actual_cac).swapped(),
        }
    }

    fn higher_wins(a: f64, b: f64) -> Winner {
        match a.partial_cmp(&b) {
            Some(Ordering::Greater) => Winner::ScenarioA,
            Some(Ordering::Less) => Winner::ScenarioB,
            // equal, or unordered input from a caller that skipped validation
            _ => Winner::Tie,
        }
    }
}
