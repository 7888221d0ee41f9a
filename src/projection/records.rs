//! Yearly output records for projections

use crate::scenario::GrowthScenario;
use serde::{Deserialize, Serialize};

/// One projected year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRecord {
    pub age: u32,
    pub salary: f64,
    pub employee_contribution: f64,
    pub employer_contribution: f64,
    pub total_contribution: f64,

    /// Uncompounded running total: starting pot plus contributions to date
    pub pot_balance: f64,

    // Growth scenarios
    pub growth_balance_2pct: f64,
    pub growth_balance_4pct: f64,
    pub growth_balance_6pct: f64,
}

impl YearRecord {
    /// Balance of one growth scenario at the end of this year
    pub fn growth_balance(&self, scenario: GrowthScenario) -> f64 {
        match scenario {
            GrowthScenario::TwoPercent => self.growth_balance_2pct,
            GrowthScenario::FourPercent => self.growth_balance_4pct,
            GrowthScenario::SixPercent => self.growth_balance_6pct,
        }
    }
}

/// Complete projection result, one record per age
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub records: Vec<YearRecord>,
}

impl ProjectionResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(years: usize) -> Self {
        Self {
            records: Vec::with_capacity(years),
        }
    }

    /// Add a year record
    pub fn add_record(&mut self, record: YearRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, YearRecord> {
        self.records.iter()
    }

    pub fn final_record(&self) -> Option<&YearRecord> {
        self.records.last()
    }

    /// (age, pot balance) pairs for charting
    pub fn pot_balance_series(&self) -> Vec<(u32, f64)> {
        self.records.iter().map(|r| (r.age, r.pot_balance)).collect()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_employee: f64 = self.records.iter().map(|r| r.employee_contribution).sum();
        let total_employer: f64 = self.records.iter().map(|r| r.employer_contribution).sum();
        let total_contributions: f64 = self.records.iter().map(|r| r.total_contribution).sum();

        let last = self.records.last();

        ProjectionSummary {
            years: self.records.len() as u32,
            retirement_age: last.map(|r| r.age),
            final_salary: last.map(|r| r.salary).unwrap_or(0.0),
            total_employee_contributions: total_employee,
            total_employer_contributions: total_employer,
            total_contributions,
            final_pot_balance: last.map(|r| r.pot_balance).unwrap_or(0.0),
            final_growth_2pct: last.map(|r| r.growth_balance_2pct).unwrap_or(0.0),
            final_growth_4pct: last.map(|r| r.growth_balance_4pct).unwrap_or(0.0),
            final_growth_6pct: last.map(|r| r.growth_balance_6pct).unwrap_or(0.0),
        }
    }
}

impl<'a> IntoIterator for &'a ProjectionResult {
    type Item = &'a YearRecord;
    type IntoIter = std::slice::Iter<'a, YearRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub years: u32,
    pub retirement_age: Option<u32>,
    pub final_salary: f64,
    pub total_employee_contributions: f64,
    pub total_employer_contributions: f64,
    pub total_contributions: f64,
    pub final_pot_balance: f64,
    pub final_growth_2pct: f64,
    pub final_growth_4pct: f64,
    pub final_growth_6pct: f64,
}
