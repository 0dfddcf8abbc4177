use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bounds::{InputBounds, InputField};
use crate::error::Result;

/// One of the two compared scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScenarioId {
    A,
    B,
}

impl ScenarioId {
    pub fn label(&self) -> &'static str {
        match self {
            ScenarioId::A => "Scenario A",
            ScenarioId::B => "Scenario B",
        }
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Campaign inputs for a single scenario.
///
/// Percent fields hold values in `[0, 100]`, not fractions. `target_cac` and
/// `email_open_rate` are collected and validated but no metric reads them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInput {
    pub ad_spend: f64,
    pub click_through_rate: f64,
    pub conversion_rate: f64,
    pub average_order_value: f64,
    pub target_cac: f64,
    pub brand_awareness: u8,
    pub email_open_rate: u8,
    pub social_engagement_rate: f64,
}

impl Default for ScenarioInput {
    fn default() -> Self {
        ScenarioInput {
            ad_spend: 10_000.0,
            click_through_rate: 2.5,
            conversion_rate: 3.0,
            average_order_value: 75.0,
            target_cac: 50.0,
            brand_awareness: 30,
            email_open_rate: 22,
            social_engagement_rate: 5.0,
        }
    }
}

impl ScenarioInput {
    /// Read a field as a float
    pub fn value(&self, field: InputField) -> f64 {
        match field {
            InputField::AdSpend => self.ad_spend,
            InputField::ClickThroughRate => self.click_through_rate,
            InputField::ConversionRate => self.conversion_rate,
            InputField::AverageOrderValue => self.average_order_value,
            InputField::TargetCac => self.target_cac,
            InputField::BrandAwareness => f64::from(self.brand_awareness),
            InputField::EmailOpenRate => f64::from(self.email_open_rate),
            InputField::SocialEngagementRate => self.social_engagement_rate,
        }
    }

    /// Set a field after checking it against the standard bounds
    pub fn set(&mut self, field: InputField, value: f64) -> Result<()> {
        InputBounds::standard().check(field, value)?;
        match field {
            InputField::AdSpend => self.ad_spend = value,
            InputField::ClickThroughRate => self.click_through_rate = value,
            InputField::ConversionRate => self.conversion_rate = value,
            InputField::AverageOrderValue => self.average_order_value = value,
            InputField::TargetCac => self.target_cac = value,
            // bounds guarantee a whole number in [0, 100]
            InputField::BrandAwareness => self.brand_awareness = value as u8,
            InputField::EmailOpenRate => self.email_open_rate = value as u8,
            InputField::SocialEngagementRate => self.social_engagement_rate = value,
        }
        Ok(())
    }

    /// Builder-style variant of [`ScenarioInput::set`]
    pub fn with(mut self, field: InputField, value: f64) -> Result<Self> {
        self.set(field, value)?;
        Ok(self)
    }

    /// Validate every field against the standard form bounds
    pub fn validate(&self) -> Result<()> {
        self.validate_with(&InputBounds::standard())
    }

    pub fn validate_with(&self, bounds: &InputBounds) -> Result<()> {
        for field in InputField::all() {
            bounds.check(*field, self.value(*field))?;
        }
        Ok(())
    }
}

/// A value held once per scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioPair<T> {
    pub scenario_a: T,
    pub scenario_b: T,
}

impl<T> ScenarioPair<T> {
    pub fn new(scenario_a: T, scenario_b: T) -> Self {
        ScenarioPair {
            scenario_a,
            scenario_b,
        }
    }

    /// Apply `f` to both scenarios
    pub fn map<U, F: FnMut(&T) -> U>(&self, mut f: F) -> ScenarioPair<U> {
        ScenarioPair {
            scenario_a: f(&self.scenario_a),
            scenario_b: f(&self.scenario_b),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ScenarioId, &T)> {
        [(ScenarioId::A, &self.scenario_a), (ScenarioId::B, &self.scenario_b)].into_iter()
    }
}

impl<T: Default> Default for ScenarioPair<T> {
    fn default() -> Self {
        ScenarioPair::new(T::default(), T::default())
    }
}
