mod engine;
mod session;

pub use engine::{round_cents, MetricsEngine, IMPRESSIONS_PER_DOLLAR};
pub use session::{SimulationRun, SimulationSession};
