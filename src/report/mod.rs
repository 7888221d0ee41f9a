//! Rendering and export of projection results

mod table;
mod export;

pub use table::{format_currency, render_table, row_cells, TABLE_HEADERS};
pub use export::{write_chart_series, write_csv};
