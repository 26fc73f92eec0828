//! Configuration types for the budget engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `engine.yaml`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Metadata identifying the engine build a configuration targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineMetadata {
    /// The human-readable engine name.
    pub name: String,
    /// The configuration version, reported on every recalculation.
    pub version: String,
}

impl Default for EngineMetadata {
    fn default() -> Self {
        Self {
            name: "Collaborative Budget Engine".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Values substituted for absent financial profile fields.
///
/// # Example
///
/// ```
/// use budget_engine::config::RateDefaults;
/// use rust_decimal::Decimal;
///
/// let defaults = RateDefaults::default();
/// assert_eq!(defaults.target_weeks_per_year, Decimal::new(43, 0));
/// assert_eq!(defaults.non_billable_percentage, Decimal::new(20, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateDefaults {
    /// Hours worked per day.
    pub target_hours_per_day: Decimal,
    /// Days worked per week.
    pub target_days_per_week: Decimal,
    /// Weeks worked per year.
    pub target_weeks_per_year: Decimal,
    /// Non-billable share of working time, as a 0-100 percentage.
    pub non_billable_percentage: Decimal,
    /// Minimum acceptable hourly rate.
    pub minimum_acceptable_rate: Decimal,
}

impl Default for RateDefaults {
    fn default() -> Self {
        Self {
            target_hours_per_day: Decimal::new(7, 0),
            target_days_per_week: Decimal::new(5, 0),
            target_weeks_per_year: Decimal::new(43, 0),
            non_billable_percentage: Decimal::new(20, 0),
            minimum_acceptable_rate: Decimal::new(25, 0),
        }
    }
}

impl RateDefaults {
    /// Rejects negative values and non-billable percentages above 100.
    pub fn validate(&self) -> EngineResult<()> {
        let fields = [
            ("target_hours_per_day", self.target_hours_per_day),
            ("target_days_per_week", self.target_days_per_week),
            ("target_weeks_per_year", self.target_weeks_per_year),
            ("non_billable_percentage", self.non_billable_percentage),
            ("minimum_acceptable_rate", self.minimum_acceptable_rate),
        ];

        for (field, value) in fields {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidConfig {
                    field: field.to_string(),
                    message: format!("must not be negative, got {}", value),
                });
            }
        }

        if self.non_billable_percentage > Decimal::ONE_HUNDRED {
            return Err(EngineError::InvalidConfig {
                field: "non_billable_percentage".to_string(),
                message: format!(
                    "must be between 0 and 100, got {}",
                    self.non_billable_percentage
                ),
            });
        }

        Ok(())
    }
}

/// The complete engine configuration loaded from `engine.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Engine metadata.
    #[serde(default)]
    engine: EngineMetadata,
    /// Defaults for absent profile fields.
    #[serde(default)]
    rate_defaults: RateDefaults,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(engine: EngineMetadata, rate_defaults: RateDefaults) -> Self {
        Self {
            engine,
            rate_defaults,
        }
    }

    /// Returns the engine metadata.
    pub fn engine(&self) -> &EngineMetadata {
        &self.engine
    }

    /// Returns the rate defaults.
    pub fn rate_defaults(&self) -> &RateDefaults {
        &self.rate_defaults
    }
}
