//! Typed projection inputs

use crate::error::{ProjectionError, Result};
use serde::{Deserialize, Serialize};

/// Tax-avoidance strategy applied to the employee contribution
///
/// At most one strategy can be active. The two checkbox flags of a form map
/// onto this through [`TaxStrategy::from_flags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaxStrategy {
    /// Contribute the configured percentages unchanged
    #[default]
    None,
    /// Raise the employee contribution so taxable income stays at the higher-rate threshold
    AvoidHigherRateTax,
    /// Raise the employee contribution so taxable income stays at the £100k threshold
    AvoidTaxTrap,
}

impl TaxStrategy {
    /// Build a strategy from two independent flags
    pub fn from_flags(avoid_higher_rate_tax: bool, avoid_tax_trap: bool) -> Result<Self> {
        match (avoid_higher_rate_tax, avoid_tax_trap) {
            (true, true) => Err(ProjectionError::configuration(
                "select only one of 'avoid higher rate tax' and 'avoid tax trap'",
            )),
            (true, false) => Ok(TaxStrategy::AvoidHigherRateTax),
            (false, true) => Ok(TaxStrategy::AvoidTaxTrap),
            (false, false) => Ok(TaxStrategy::None),
        }
    }
}

/// Oldest age accepted for either end of the projection range
pub const MAX_AGE: u32 = 150;

/// Inputs for a single projection run
///
/// Rates are fractions: 0.05 means 5%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    pub current_age: u32,
    pub retirement_age: u32,
    pub current_salary: f64,
    pub current_pension_pot: f64,
    pub salary_growth_rate: f64,
    pub employee_contribution_rate: f64,
    pub employer_contribution_rate: f64,
    #[serde(default)]
    pub tax_strategy: TaxStrategy,
}

impl ProjectionInput {
    /// Number of yearly records this input produces
    pub fn years(&self) -> usize {
        if self.retirement_age < self.current_age {
            0
        } else {
            (self.retirement_age - self.current_age) as usize + 1
        }
    }

    /// Check numeric fields before simulation
    pub fn validate(&self) -> Result<()> {
        let ages = [
            ("current_age", self.current_age),
            ("retirement_age", self.retirement_age),
        ];
        for (field, age) in ages {
            if age > MAX_AGE {
                return Err(ProjectionError::input(field, age.to_string()));
            }
        }

        let amounts = [
            ("current_salary", self.current_salary),
            ("current_pension_pot", self.current_pension_pot),
            ("employee_contribution_rate", self.employee_contribution_rate),
            ("employer_contribution_rate", self.employer_contribution_rate),
        ];
        for (field, value) in amounts {
            if !value.is_finite() {
                return Err(ProjectionError::NonFinite { field });
            }
            if value < 0.0 {
                return Err(ProjectionError::Negative { field, value });
            }
        }

        if !self.salary_growth_rate.is_finite() {
            return Err(ProjectionError::NonFinite { field: "salary_growth_rate" });
        }

        Ok(())
    }
}
