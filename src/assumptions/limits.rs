//! Contribution cap and income thresholds

use crate::input::TaxStrategy;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Annual allowance for combined employee and employer contributions (£)
pub const MAX_ANNUAL_CONTRIBUTIONS: f64 = 60_000.0;

/// Income above which the 40% rate applies (£)
pub const HIGHER_RATE_THRESHOLD: f64 = 50_270.0;

/// Income above which the personal allowance starts to taper (£)
pub const TAX_TRAP_THRESHOLD: f64 = 100_000.0;

/// Policy limits applied by the projection engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyLimits {
    pub max_annual_contributions: f64,
    pub higher_rate_threshold: f64,
    pub tax_trap_threshold: f64,
}

impl Default for PolicyLimits {
    fn default() -> Self {
        Self {
            max_annual_contributions: MAX_ANNUAL_CONTRIBUTIONS,
            higher_rate_threshold: HIGHER_RATE_THRESHOLD,
            tax_trap_threshold: TAX_TRAP_THRESHOLD,
        }
    }
}

impl PolicyLimits {
    /// Taxable income ceiling targeted by a strategy, if any
    pub fn threshold_for(&self, strategy: TaxStrategy) -> Option<f64> {
        match strategy {
            TaxStrategy::None => None,
            TaxStrategy::AvoidHigherRateTax => Some(self.higher_rate_threshold),
            TaxStrategy::AvoidTaxTrap => Some(self.tax_trap_threshold),
        }
    }

    /// Load limits from a JSON file; omitted fields keep their defaults
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    /// Load limits from any JSON reader
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self, Box<dyn Error>> {
        let limits: PolicyLimits = serde_json::from_reader(reader)?;
        limits.validate()?;
        Ok(limits)
    }

    /// Every limit must be a finite, non-negative amount
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        let fields = [
            ("max_annual_contributions", self.max_annual_contributions),
            ("higher_rate_threshold", self.higher_rate_threshold),
            ("tax_trap_threshold", self.tax_trap_threshold),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{} must be a non-negative number, got {}", name, value).into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = PolicyLimits::default();
        assert_eq!(limits.max_annual_contributions, 60_000.0);
        assert_eq!(limits.higher_rate_threshold, 50_270.0);
        assert_eq!(limits.tax_trap_threshold, 100_000.0);
    }

    #[test]
    fn test_threshold_for_strategy() {
        let limits = PolicyLimits::default();
        assert_eq!(limits.threshold_for(TaxStrategy::None), None);
        assert_eq!(limits.threshold_for(TaxStrategy::AvoidHigherRateTax), Some(50_270.0));
        assert_eq!(limits.threshold_for(TaxStrategy::AvoidTaxTrap), Some(100_000.0));
    }

    #[test]
    fn test_partial_json_override() {
        let json = r#"{ "max_annual_contributions": 40000 }"#;
        let limits = PolicyLimits::from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(limits.max_annual_contributions, 40_000.0);
        // Untouched fields keep the UK defaults
        assert_eq!(limits.higher_rate_threshold, HIGHER_RATE_THRESHOLD);
        assert_eq!(limits.tax_trap_threshold, TAX_TRAP_THRESHOLD);
    }

    #[test]
    fn test_load_limits_file() {
        let limits = PolicyLimits::from_json_path("data/limits.json").unwrap();
        assert_eq!(limits, PolicyLimits::default());
    }

    #[test]
    fn test_negative_limit_rejected() {
        let json = r#"{ "tax_trap_threshold": -1 }"#;
        assert!(PolicyLimits::from_json_reader(json.as_bytes()).is_err());
    }
}
