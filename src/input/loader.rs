//! Load batches of projection inputs from CSV

use super::{ProjectionInput, RawInput};
use crate::error::LoadError;
use csv::Reader;
use std::path::Path;

/// Raw CSV row; percentages are whole numbers as on the input form
///
/// Numeric columns are read as text so parse failures name the field.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct CsvRow {
    id: Option<String>,
    current_age: String,
    retirement_age: String,
    current_salary: String,
    current_pension_pot: String,
    salary_growth_pct: String,
    employee_contribution_pct: String,
    employer_contribution_pct: String,
    avoid_higher_rate_tax: bool,
    avoid_tax_trap: bool,
}

impl CsvRow {
    fn to_input(self, row: usize) -> Result<LabelledInput, LoadError> {
        let raw = RawInput {
            current_age: self.current_age,
            retirement_age: self.retirement_age,
            current_salary: self.current_salary,
            current_pension_pot: self.current_pension_pot,
            salary_growth: self.salary_growth_pct,
            employee_contribution: self.employee_contribution_pct,
            employer_contribution: self.employer_contribution_pct,
            avoid_higher_rate_tax: self.avoid_higher_rate_tax,
            avoid_tax_trap: self.avoid_tax_trap,
        };
        let input = raw.parse().map_err(|source| LoadError::Row { row, source })?;

        Ok(LabelledInput {
            id: self.id.unwrap_or_else(|| row.to_string()),
            input,
        })
    }
}

/// A projection input tagged with its row label
#[derive(Debug, Clone, PartialEq)]
pub struct LabelledInput {
    pub id: String,
    pub input: ProjectionInput,
}

/// Load all inputs from a CSV file
pub fn load_inputs<P: AsRef<Path>>(path: P) -> Result<Vec<LabelledInput>, LoadError> {
    let reader = Reader::from_path(path)?;
    collect_rows(reader)
}

/// Load inputs from any reader (e.g., string buffer, request body)
pub fn load_inputs_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<LabelledInput>, LoadError> {
    collect_rows(Reader::from_reader(reader))
}

fn collect_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<LabelledInput>, LoadError> {
    let mut inputs = Vec::new();

    // Row labels are 1-indexed data rows, excluding the header
    for (index, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        inputs.push(row.to_input(index + 1)?);
    }

    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::TaxStrategy;
    use approx::assert_relative_eq;

    const HEADER: &str = "current_age,retirement_age,current_salary,current_pension_pot,salary_growth_pct,employee_contribution_pct,employer_contribution_pct,avoid_higher_rate_tax,avoid_tax_trap";

    #[test]
    fn test_load_inputs_from_reader() {
        let data = format!(
            "{}\n30,67,50000,0,2,5,3,false,false\n45,60,120000,250000,1.5,20,10,false,true\n",
            HEADER
        );
        let inputs = load_inputs_from_reader(data.as_bytes()).unwrap();
        assert_eq!(inputs.len(), 2);

        assert_eq!(inputs[0].id, "1");
        assert_eq!(inputs[0].input.current_age, 30);
        assert_relative_eq!(inputs[0].input.employee_contribution_rate, 0.05);
        assert_eq!(inputs[0].input.tax_strategy, TaxStrategy::None);

        assert_eq!(inputs[1].id, "2");
        assert_relative_eq!(inputs[1].input.salary_growth_rate, 0.015);
        assert_eq!(inputs[1].input.tax_strategy, TaxStrategy::AvoidTaxTrap);
    }

    #[test]
    fn test_load_sample_inputs() {
        let inputs = load_inputs("data/sample_inputs.csv").expect("Failed to load inputs");
        assert_eq!(inputs.len(), 4);
        assert_eq!(inputs[0].id, "baseline");
        assert_eq!(inputs[1].input.tax_strategy, TaxStrategy::AvoidHigherRateTax);
        assert_eq!(inputs[2].input.tax_strategy, TaxStrategy::AvoidTaxTrap);
    }

    #[test]
    fn test_id_column() {
        let data = "id,current_age,retirement_age,current_salary,current_pension_pot,salary_growth_pct,employee_contribution_pct,employer_contribution_pct\nalice,30,31,40000,0,0,5,5\n";
        let inputs = load_inputs_from_reader(data.as_bytes()).unwrap();
        assert_eq!(inputs[0].id, "alice");
        assert_eq!(inputs[0].input.tax_strategy, TaxStrategy::None);
    }

    #[test]
    fn test_conflicting_flags_rejected() {
        let data = format!("{}\n30,67,50000,0,2,5,3,true,true\n", HEADER);
        let err = load_inputs_from_reader(data.as_bytes()).unwrap_err();
        assert_eq!(err.row(), Some(1));
        assert!(err.projection_error().unwrap().is_configuration_error());
        assert!(err.to_string().starts_with("row 1:"));
    }

    #[test]
    fn test_unparsable_number_rejected() {
        let data = format!(
            "{}\n30,67,50000,0,2,5,3,false,false\n30,67,lots,0,2,5,3,false,false\n",
            HEADER
        );
        let err = load_inputs_from_reader(data.as_bytes()).unwrap_err();
        assert_eq!(err.row(), Some(2));
        let source = err.projection_error().unwrap();
        assert!(source.is_input_error());
        assert_eq!(source.field(), Some("current_salary"));
    }

    #[test]
    fn test_missing_column_names_field() {
        let data = "current_age,retirement_age,current_salary\n30,67,50000\n";
        let err = load_inputs_from_reader(data.as_bytes()).unwrap_err();
        // Percent columns report the form field they feed
        assert_eq!(err.projection_error().unwrap().field(), Some("salary_growth"));
    }

    #[test]
    fn test_unbounded_age_rejected() {
        let data = format!("{}\n0,4294967295,50000,0,2,5,3,false,false\n", HEADER);
        let err = load_inputs_from_reader(data.as_bytes()).unwrap_err();
        assert_eq!(err.projection_error().unwrap().field(), Some("retirement_age"));
    }
}
