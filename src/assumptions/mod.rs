//! Policy assumptions: the annual contribution allowance and tax thresholds

mod limits;

pub use limits::{
    PolicyLimits, HIGHER_RATE_THRESHOLD, MAX_ANNUAL_CONTRIBUTIONS, TAX_TRAP_THRESHOLD,
};
