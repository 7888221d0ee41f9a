//! Raw text-field input as supplied by a form, request body, or command line

use super::{ProjectionInput, TaxStrategy};
use crate::error::{ProjectionError, Result};
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

/// Unparsed projection input
///
/// Percent fields hold whole percentages ("5" means 5%) and are converted to
/// fractions during [`RawInput::parse`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawInput {
    #[serde(deserialize_with = "text_or_number")]
    pub current_age: String,
    #[serde(deserialize_with = "text_or_number")]
    pub retirement_age: String,
    #[serde(deserialize_with = "text_or_number")]
    pub current_salary: String,
    #[serde(deserialize_with = "text_or_number")]
    pub current_pension_pot: String,
    #[serde(deserialize_with = "text_or_number")]
    pub salary_growth: String,
    #[serde(deserialize_with = "text_or_number")]
    pub employee_contribution: String,
    #[serde(deserialize_with = "text_or_number")]
    pub employer_contribution: String,
    pub avoid_higher_rate_tax: bool,
    pub avoid_tax_trap: bool,
}

impl RawInput {
    /// Parse and validate into a [`ProjectionInput`]
    ///
    /// The strategy flags are checked before any numeric field. Numeric fields
    /// are parsed in form order and the first failure is reported.
    pub fn parse(&self) -> Result<ProjectionInput> {
        let tax_strategy = TaxStrategy::from_flags(self.avoid_higher_rate_tax, self.avoid_tax_trap)?;

        let input = ProjectionInput {
            current_age: parse_field("current_age", &self.current_age)?,
            retirement_age: parse_field("retirement_age", &self.retirement_age)?,
            current_salary: parse_field("current_salary", &self.current_salary)?,
            salary_growth_rate: parse_percent("salary_growth", &self.salary_growth)?,
            employee_contribution_rate: parse_percent(
                "employee_contribution",
                &self.employee_contribution,
            )?,
            employer_contribution_rate: parse_percent(
                "employer_contribution",
                &self.employer_contribution,
            )?,
            current_pension_pot: parse_field("current_pension_pot", &self.current_pension_pot)?,
            tax_strategy,
        };

        input.validate()?;
        Ok(input)
    }
}

fn parse_field<T: FromStr>(field: &'static str, text: &str) -> Result<T> {
    text.trim()
        .parse::<T>()
        .map_err(|_| ProjectionError::input(field, text))
}

fn parse_percent(field: &'static str, text: &str) -> Result<f64> {
    let value: f64 = parse_field(field, text)?;
    Ok(value / 100.0)
}

/// Accept either a JSON string or a JSON number for a text field
fn text_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_raw() -> RawInput {
        RawInput {
            current_age: "30".into(),
            retirement_age: "67".into(),
            current_salary: "50000".into(),
            current_pension_pot: "12500.50".into(),
            salary_growth: "2.5".into(),
            employee_contribution: "5".into(),
            employer_contribution: "3".into(),
            avoid_higher_rate_tax: false,
            avoid_tax_trap: false,
        }
    }

    #[test]
    fn test_parse_converts_percentages() {
        let input = sample_raw().parse().unwrap();
        assert_eq!(input.current_age, 30);
        assert_eq!(input.retirement_age, 67);
        assert_relative_eq!(input.current_salary, 50_000.0);
        assert_relative_eq!(input.current_pension_pot, 12_500.50);
        assert_relative_eq!(input.salary_growth_rate, 0.025);
        assert_relative_eq!(input.employee_contribution_rate, 0.05);
        assert_relative_eq!(input.employer_contribution_rate, 0.03);
        assert_eq!(input.tax_strategy, TaxStrategy::None);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let mut raw = sample_raw();
        raw.current_age = " 45 ".into();
        assert_eq!(raw.parse().unwrap().current_age, 45);
    }

    #[test]
    fn test_parse_names_failing_field() {
        let mut raw = sample_raw();
        raw.current_salary = "fifty thousand".into();
        let err = raw.parse().unwrap_err();
        assert!(err.is_input_error());
        assert_eq!(err.field(), Some("current_salary"));

        // Fractional age is not an integer
        let mut raw = sample_raw();
        raw.retirement_age = "67.5".into();
        assert_eq!(raw.parse().unwrap_err().field(), Some("retirement_age"));
    }

    #[test]
    fn test_missing_field_is_input_error() {
        let mut raw = sample_raw();
        raw.employer_contribution = String::new();
        assert_eq!(raw.parse().unwrap_err().field(), Some("employer_contribution"));
    }

    #[test]
    fn test_out_of_range_age_rejected() {
        let mut raw = sample_raw();
        raw.current_age = "0".into();
        raw.retirement_age = "4294967295".into();
        let err = raw.parse().unwrap_err();
        assert!(err.is_input_error());
        assert_eq!(err.field(), Some("retirement_age"));
    }

    #[test]
    fn test_flag_conflict_checked_first() {
        let mut raw = sample_raw();
        raw.current_salary = "not a number".into();
        raw.avoid_higher_rate_tax = true;
        raw.avoid_tax_trap = true;
        assert!(raw.parse().unwrap_err().is_configuration_error());
    }

    #[test]
    fn test_deserialize_numbers_and_strings() {
        let json = r#"{
            "current_age": 40,
            "retirement_age": "65",
            "current_salary": 80000.5,
            "current_pension_pot": "0",
            "salary_growth": 3,
            "employee_contribution": "10",
            "employer_contribution": 5,
            "avoid_tax_trap": true
        }"#;
        let raw: RawInput = serde_json::from_str(json).unwrap();
        let input = raw.parse().unwrap();
        assert_eq!(input.current_age, 40);
        assert_eq!(input.retirement_age, 65);
        assert_relative_eq!(input.current_salary, 80_000.5);
        assert_relative_eq!(input.salary_growth_rate, 0.03);
        assert_eq!(input.tax_strategy, TaxStrategy::AvoidTaxTrap);
    }
}
