//! Investment-growth scenarios run alongside the contribution projection
//!
//! Each scenario compounds the starting pot plus every year's contribution at
//! a fixed annual return. The scenarios are for comparison only and never feed
//! back into the uncompounded pot balance.

use serde::{Deserialize, Serialize};

/// Fixed annual-return scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthScenario {
    TwoPercent,
    FourPercent,
    SixPercent,
}

impl GrowthScenario {
    pub const ALL: [GrowthScenario; 3] = [
        GrowthScenario::TwoPercent,
        GrowthScenario::FourPercent,
        GrowthScenario::SixPercent,
    ];

    pub const fn annual_rate(&self) -> f64 {
        match self {
            GrowthScenario::TwoPercent => 0.02,
            GrowthScenario::FourPercent => 0.04,
            GrowthScenario::SixPercent => 0.06,
        }
    }

    /// Column heading used in reports
    pub const fn label(&self) -> &'static str {
        match self {
            GrowthScenario::TwoPercent => "2pct Growth",
            GrowthScenario::FourPercent => "4pct Growth",
            GrowthScenario::SixPercent => "6pct Growth",
        }
    }
}

/// Balances of the three growth scenarios at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthBalances {
    pub two_pct: f64,
    pub four_pct: f64,
    pub six_pct: f64,
}

impl GrowthBalances {
    /// All scenarios start from the same pot
    pub fn seed(pot: f64) -> Self {
        Self {
            two_pct: pot,
            four_pct: pot,
            six_pct: pot,
        }
    }

    /// Grow each balance by a year of its own return, then add the contribution
    pub fn advance(&self, contribution: f64) -> Self {
        let grow = |balance: f64, scenario: GrowthScenario| {
            balance * (1.0 + scenario.annual_rate()) + contribution
        };

        Self {
            two_pct: grow(self.two_pct, GrowthScenario::TwoPercent),
            four_pct: grow(self.four_pct, GrowthScenario::FourPercent),
            six_pct: grow(self.six_pct, GrowthScenario::SixPercent),
        }
    }
}
