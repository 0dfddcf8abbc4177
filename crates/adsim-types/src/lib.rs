mod scenario;
mod result;
mod comparison;
mod bounds;
mod error;

pub use scenario::{ScenarioId, ScenarioInput, ScenarioPair};
pub use result::ScenarioResult;
pub use comparison::{ComparisonOutcome, Winner};
pub use bounds::{FieldBounds, InputBounds, InputField};
pub use error::{AdSimError, Result};

#[cfg(test)]
mod tests;
