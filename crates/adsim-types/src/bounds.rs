use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AdSimError, Result};

/// Scenario input fields, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    AdSpend,
    ClickThroughRate,
    ConversionRate,
    AverageOrderValue,
    TargetCac,
    BrandAwareness,
    EmailOpenRate,
    SocialEngagementRate,
}

impl InputField {
    /// Returns all fields in canonical order
    pub fn all() -> &'static [InputField] {
        &[
            InputField::AdSpend,
            InputField::ClickThroughRate,
            InputField::ConversionRate,
            InputField::AverageOrderValue,
            InputField::TargetCac,
            InputField::BrandAwareness,
            InputField::EmailOpenRate,
            InputField::SocialEngagementRate,
        ]
    }

    /// Field name as it appears in JSON bodies
    pub fn as_str(&self) -> &'static str {
        match self {
            InputField::AdSpend => "ad_spend",
            InputField::ClickThroughRate => "click_through_rate",
            InputField::ConversionRate => "conversion_rate",
            InputField::AverageOrderValue => "average_order_value",
            InputField::TargetCac => "target_cac",
            InputField::BrandAwareness => "brand_awareness",
            InputField::EmailOpenRate => "email_open_rate",
            InputField::SocialEngagementRate => "social_engagement_rate",
        }
    }

    /// Human-readable form label
    pub fn label(&self) -> &'static str {
        match self {
            InputField::AdSpend => "Ad Spend ($)",
            InputField::ClickThroughRate => "Click-Through Rate (%)",
            InputField::ConversionRate => "Conversion Rate (%)",
            InputField::AverageOrderValue => "Average Order Value ($)",
            InputField::TargetCac => "Target CAC ($)",
            InputField::BrandAwareness => "Brand Awareness (%)",
            InputField::EmailOpenRate => "Email Open Rate (%)",
            InputField::SocialEngagementRate => "Social Engagement Rate (%)",
        }
    }

    /// Parse a field from its full name or common short alias
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "ad_spend" | "spend" => Some(InputField::AdSpend),
            "click_through_rate" | "ctr" => Some(InputField::ClickThroughRate),
            "conversion_rate" | "conv_rate" | "conv" => Some(InputField::ConversionRate),
            "average_order_value" | "aov" => Some(InputField::AverageOrderValue),
            "target_cac" | "cac" => Some(InputField::TargetCac),
            "brand_awareness" | "brand" => Some(InputField::BrandAwareness),
            "email_open_rate" | "email" => Some(InputField::EmailOpenRate),
            "social_engagement_rate" | "social_eng" | "social" => {
                Some(InputField::SocialEngagementRate)
            }
            _ => None,
        }
    }

    /// Whether the field only accepts whole numbers
    pub fn is_whole_number(&self) -> bool {
        matches!(self, InputField::BrandAwareness | InputField::EmailOpenRate)
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inclusive range accepted for one field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldBounds {
    pub field: InputField,
    pub min: f64,
    pub max: f64,
    pub whole_number: bool,
}

impl FieldBounds {
    const fn new(field: InputField, min: f64, max: f64, whole_number: bool) -> Self {
        FieldBounds {
            field,
            min,
            max,
            whole_number,
        }
    }

    /// Check a single value against this range
    pub fn check(&self, value: f64) -> Result<()> {
        let field = self.field.as_str();
        if !value.is_finite() {
            return Err(AdSimError::NonFinite { field });
        }
        if value < self.min || value > self.max {
            return Err(AdSimError::OutOfRange {
                field,
                value,
                min: self.min,
                max: self.max,
            });
        }
        if self.whole_number && value.fract() != 0.0 {
            return Err(AdSimError::NotWholeNumber { field, value });
        }
        Ok(())
    }
}

/// Accepted range for every input field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputBounds {
    pub fields: Vec<FieldBounds>,
}

impl InputBounds {
    /// Ranges offered by the input form
    pub fn standard() -> Self {
        InputBounds {
            fields: vec![
                FieldBounds::new(InputField::AdSpend, 0.0, 1_000_000.0, false),
                FieldBounds::new(InputField::ClickThroughRate, 0.0, 20.0, false),
                FieldBounds::new(InputField::ConversionRate, 0.0, 20.0, false),
                FieldBounds::new(InputField::AverageOrderValue, 0.0, 1000.0, false),
                FieldBounds::new(InputField::TargetCac, 0.0, 500.0, false),
                FieldBounds::new(InputField::BrandAwareness, 0.0, 100.0, true),
                FieldBounds::new(InputField::EmailOpenRate, 0.0, 100.0, true),
                FieldBounds::new(InputField::SocialEngagementRate, 0.0, 20.0, false),
            ],
        }
    }

    pub fn get(&self, field: InputField) -> Option<&FieldBounds> {
        self.fields.iter().find(|b| b.field == field)
    }

    /// Check a value for `field`; fields without a declared range only need to be finite
    pub fn check(&self, field: InputField, value: f64) -> Result<()> {
        match self.get(field) {
            Some(bounds) => bounds.check(value),
            None if value.is_finite() => Ok(()),
            None => Err(AdSimError::NonFinite {
                field: field.as_str(),
            }),
        }
    }
}

impl Default for InputBounds {
    fn default() -> Self {
        Self::standard()
    }
}
