//! Running state carried from one projection year to the next

use crate::input::ProjectionInput;
use crate::scenario::GrowthBalances;

/// State at the end of a projection year
#[derive(Debug, Clone, Copy)]
pub struct ProjectionState {
    /// Salary for the year just projected
    pub salary: f64,

    /// Starting pot plus every contribution so far, uncompounded
    pub pot_balance: f64,

    /// Compounding balances of the three growth scenarios
    pub growth: GrowthBalances,
}

impl ProjectionState {
    /// State before the first projected year
    pub fn from_input(input: &ProjectionInput) -> Self {
        Self {
            salary: input.current_salary,
            pot_balance: input.current_pension_pot,
            growth: GrowthBalances::seed(input.current_pension_pot),
        }
    }

    /// Salary for the given age: unchanged in the first year, grown afterwards
    pub fn salary_for(&self, age: u32, first_age: u32, growth_rate: f64) -> f64 {
        if age == first_age {
            self.salary
        } else {
            self.salary * (1.0 + growth_rate)
        }
    }
}
