mod chart;
mod format;
mod hashing;
mod reporter;

pub use chart::{ChartMetric, ChartSeries, ComparisonChart};
pub use format::{format_cac, format_count, format_currency, format_percent, winner_headlines};
pub use hashing::{compute_hash, compute_json_hash, HashRef};
pub use reporter::{JsonRenderer, ReportRenderer, SimulationReport, TextRenderer};
