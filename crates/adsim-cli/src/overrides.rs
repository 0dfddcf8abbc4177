use adsim_types::{AdSimError, InputField, Result, ScenarioInput};
use std::str::FromStr;

/// `key=value` pairs applied on top of the default scenario, e.g. `spend=20000,ctr=3.1`
#[derive(Debug, Clone, PartialEq)]
pub struct Overrides(pub Vec<(InputField, f64)>);

impl FromStr for Overrides {
    type Err = AdSimError;

    fn from_str(s: &str) -> Result<Self> {
        let mut pairs = Vec::new();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = part
                .split_once('=')
                .ok_or_else(|| AdSimError::InvalidOverride(format!("expected key=value, got '{part}'")))?;

            let field = InputField::from_str(key)
                .ok_or_else(|| AdSimError::InvalidOverride(format!("unknown field '{}'", key.trim())))?;
            let value: f64 = value.trim().parse().map_err(|_| {
                AdSimError::InvalidOverride(format!("{field}: '{}' is not a number", value.trim()))
            })?;

            pairs.push((field, value));
        }

        if pairs.is_empty() {
            return Err(AdSimError::InvalidOverride("no overrides given".to_string()));
        }
        Ok(Overrides(pairs))
    }
}

/// Apply every override in order; later values win
pub fn apply_overrides(base: ScenarioInput, overrides: &[Overrides]) -> Result<ScenarioInput> {
    let mut input = base;
    for (field, value) in overrides.iter().flat_map(|o| o.0.iter()) {
        input.set(*field, *value)?;
    }
    Ok(input)
}
