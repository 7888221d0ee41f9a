//! CSV export of projection records and the pot-balance chart series

use crate::projection::ProjectionResult;
use csv::Writer;
use std::error::Error;
use std::io::Write;

/// Write every year record as a CSV row with raw numeric values
pub fn write_csv<W: Write>(result: &ProjectionResult, writer: W) -> Result<(), Box<dyn Error>> {
    let mut csv_writer = Writer::from_writer(writer);
    for record in result {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the (age, pot balance) series used for the balance chart
pub fn write_chart_series<W: Write>(result: &ProjectionResult, writer: W) -> Result<(), Box<dyn Error>> {
    let mut csv_writer = Writer::from_writer(writer);
    csv_writer.write_record(["age", "pot_balance"])?;
    for (age, balance) in result.pot_balance_series() {
        csv_writer.write_record(&[age.to_string(), format!("{:.2}", balance)])?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{ProjectionInput, TaxStrategy};
    use crate::projection::project;

    fn sample_result() -> ProjectionResult {
        project(&ProjectionInput {
            current_age: 64,
            retirement_age: 66,
            current_salary: 40_000.0,
            current_pension_pot: 1_000.0,
            salary_growth_rate: 0.0,
            employee_contribution_rate: 0.05,
            employer_contribution_rate: 0.05,
            tax_strategy: TaxStrategy::None,
        })
        .unwrap()
    }

    #[test]
    fn test_write_csv() {
        let mut buf = Vec::new();
        write_csv(&sample_result(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "age,salary,employee_contribution,employer_contribution,total_contribution,pot_balance,growth_balance_2pct,growth_balance_4pct,growth_balance_6pct"
        );
        assert!(lines[1].starts_with("64,"));
    }

    #[test]
    fn test_write_chart_series() {
        let mut buf = Vec::new();
        write_chart_series(&sample_result(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "age,pot_balance\n64,5000.00\n65,9000.00\n66,13000.00\n");
    }
}
