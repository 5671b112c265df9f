//! Export of stored shift records.
//!
//! Renders records and their totals as a spreadsheet-friendly CSV document.

mod csv;

pub use csv::{BYTE_ORDER_MARK, CSV_HEADER, ExportOptions, TOTAL_LABEL, render_csv};
