//! Formatted results table

use crate::projection::{ProjectionResult, YearRecord};
use crate::scenario::GrowthScenario;

/// Column headings, one per `YearRecord` field
pub const TABLE_HEADERS: [&str; 9] = [
    "Age",
    "Current Salary",
    "Employee Contributions",
    "Employer Contributions",
    "Total Contributions",
    "Pot Balance",
    GrowthScenario::TwoPercent.label(),
    GrowthScenario::FourPercent.label(),
    GrowthScenario::SixPercent.label(),
];

/// Format an amount as pounds with thousands separators and two decimals
///
/// `1234567.891` becomes `£1,234,567.89`; negatives carry a leading `-`.
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, pence) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // Amounts that round to zero print without a sign
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}£{}.{}", sign, grouped, pence)
}

/// Cells for one table row
pub fn row_cells(record: &YearRecord) -> [String; 9] {
    let [two_pct, four_pct, six_pct] =
        GrowthScenario::ALL.map(|scenario| format_currency(record.growth_balance(scenario)));
    [
        record.age.to_string(),
        format_currency(record.salary),
        format_currency(record.employee_contribution),
        format_currency(record.employer_contribution),
        format_currency(record.total_contribution),
        format_currency(record.pot_balance),
        two_pct,
        four_pct,
        six_pct,
    ]
}

/// Render the projection as a right-aligned text table
///
/// Column widths fit the widest cell, header included.
pub fn render_table(result: &ProjectionResult) -> String {
    let rows: Vec<[String; 9]> = result.iter().map(row_cells).collect();

    let mut widths: Vec<usize> = TABLE_HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |cells: &[&str]| -> String {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, &width)| format!("{:>width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ")
    };

    let header = format_line(&TABLE_HEADERS[..]);
    let rule = "-".repeat(header.chars().count());

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push_str(&format_line(&cells[..]));
        out.push('\n');
    }
    out
}
