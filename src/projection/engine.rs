//! Core projection engine for yearly pension projections

use super::records::{ProjectionResult, YearRecord};
use super::state::ProjectionState;
use crate::assumptions::PolicyLimits;
use crate::error::Result;
use crate::input::ProjectionInput;
use log::{debug, warn};

/// Contributions for one year after strategy adjustment and capping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contributions {
    pub employee: f64,
    pub employer: f64,
    pub total: f64,
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    limits: PolicyLimits,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given limits
    pub fn new(limits: PolicyLimits) -> Self {
        Self { limits }
    }

    /// Run a projection from the current age to the retirement age inclusive
    ///
    /// Input is validated in full before the first year is projected, so the
    /// result is either complete or an error.
    pub fn project(&self, input: &ProjectionInput) -> Result<ProjectionResult> {
        input.validate()?;

        if input.retirement_age < input.current_age {
            warn!(
                "retirement age {} is below current age {}; projection is empty",
                input.retirement_age, input.current_age
            );
        }

        let mut result = ProjectionResult::with_capacity(input.years());

        let initial = ProjectionState::from_input(input);
        (input.current_age..=input.retirement_age).fold(initial, |state, age| {
            let (record, next) = self.project_year(input, &state, age);
            result.add_record(record);
            next
        });

        debug!(
            "projected {} years, final pot {:.2}",
            result.len(),
            result.final_record().map(|r| r.pot_balance).unwrap_or(0.0)
        );

        Ok(result)
    }

    /// Project a single year from the prior year's state
    fn project_year(
        &self,
        input: &ProjectionInput,
        state: &ProjectionState,
        age: u32,
    ) -> (YearRecord, ProjectionState) {
        let salary = state.salary_for(age, input.current_age, input.salary_growth_rate);
        let contributions = self.contributions(input, salary, age);

        let growth = state.growth.advance(contributions.total);
        let pot_balance = state.pot_balance + contributions.total;

        let record = YearRecord {
            age,
            salary,
            employee_contribution: contributions.employee,
            employer_contribution: contributions.employer,
            total_contribution: contributions.total,
            pot_balance,
            growth_balance_2pct: growth.two_pct,
            growth_balance_4pct: growth.four_pct,
            growth_balance_6pct: growth.six_pct,
        };

        let next = ProjectionState {
            salary,
            pot_balance,
            growth,
        };

        (record, next)
    }

    /// Calculate one year's contributions for a salary
    pub fn contributions(&self, input: &ProjectionInput, salary: f64, age: u32) -> Contributions {
        let mut employee = salary * input.employee_contribution_rate;
        let employer = salary * input.employer_contribution_rate;

        // Contribute enough to bring taxable income down to the strategy threshold
        if let Some(threshold) = self.limits.threshold_for(input.tax_strategy) {
            if salary - employee > threshold {
                let adjusted = salary - threshold;
                debug!(
                    "age {}: {:?} raises employee contribution {:.2} -> {:.2}",
                    age, input.tax_strategy, employee, adjusted
                );
                employee = adjusted;
            }
        }

        let mut total = employee + employer;

        // Annual allowance: the excess comes off the employee side only
        let max = self.limits.max_annual_contributions;
        if total > max {
            let excess = total - max;
            debug!("age {}: contributions {:.2} exceed allowance by {:.2}", age, total, excess);
            employee -= excess;
            total = max;

            if employee < 0.0 {
                warn!(
                    "age {}: employer contribution {:.2} alone exceeds the allowance; employee contribution is {:.2}",
                    age, employer, employee
                );
            }
        }

        Contributions { employee, employer, total }
    }
}

/// Run a projection with the default UK limits
pub fn project(input: &ProjectionInput) -> Result<ProjectionResult> {
    ProjectionEngine::default().project(input)
}
