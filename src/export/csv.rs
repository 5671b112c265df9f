//! CSV rendering of stored shift records.

use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::ExportConfig;
use crate::models::{ShiftRecord, Totals};

/// UTF-8 byte order mark, so spreadsheet applications detect the encoding.
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Column header row.
pub const CSV_HEADER: [&str; 6] = [
    "勤務日",
    "時間",
    "休憩時間",
    "実働(時間)",
    "深夜分(分)",
    "給料(円)",
];

/// Label in the first column of the trailing total row.
pub const TOTAL_LABEL: &str = "合計";

const BREAK_SEPARATOR: &str = " / ";

/// Options controlling CSV rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Prefix the output with [`BYTE_ORDER_MARK`].
    pub byte_order_mark: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            byte_order_mark: true,
        }
    }
}

impl From<&ExportConfig> for ExportOptions {
    fn from(config: &ExportConfig) -> Self {
        Self {
            byte_order_mark: config.byte_order_mark,
        }
    }
}

/// Renders records and their totals as CSV text.
///
/// `totals` must come from [`compute_totals`](crate::calculation::compute_totals)
/// over the same records. Rows are joined with `\n` and the output has no
/// trailing newline.
///
/// # Example
///
/// ```
/// use shift_wage_engine::export::{ExportOptions, render_csv};
/// use shift_wage_engine::models::Totals;
///
/// let csv = render_csv(&[], &Totals::default(), ExportOptions { byte_order_mark: false });
/// assert_eq!(csv, "勤務日,時間,休憩時間,実働(時間),深夜分(分),給料(円)\n合計,,,0.00,0,0");
/// ```
pub fn render_csv(records: &[ShiftRecord], totals: &Totals, options: ExportOptions) -> String {
    let mut lines = Vec::with_capacity(records.len() + 2);
    lines.push(join_row(CSV_HEADER.iter().map(|h| h.to_string())));
    lines.extend(records.iter().map(record_row));
    lines.push(join_row([
        TOTAL_LABEL.to_string(),
        String::new(),
        String::new(),
        format!("{:.2}", round_hours(totals.sum_hours)),
        totals.sum_night_minutes.to_string(),
        totals.sum_wage.to_string(),
    ]));

    let body = lines.join("\n");
    if options.byte_order_mark {
        format!("{BYTE_ORDER_MARK}{body}")
    } else {
        body
    }
}

fn record_row(record: &ShiftRecord) -> String {
    let shift = &record.shift;
    let breaks = shift
        .breaks
        .iter()
        .map(|b| time_span(b.start_time, b.end_time))
        .collect::<Vec<_>>()
        .join(BREAK_SEPARATOR);

    join_row([
        shift.start_time.format("%m/%d/%Y").to_string(),
        time_span(shift.start_time, shift.end_time),
        breaks,
        round_hours(record.result.net_hours()).normalize().to_string(),
        record.result.night_minutes.to_string(),
        record.result.wage.to_string(),
    ])
}

fn time_span(start: NaiveDateTime, end: NaiveDateTime) -> String {
    format!("{} - {}", start.format("%-I:%M %p"), end.format("%-I:%M %p"))
}

fn round_hours(hours: Decimal) -> Decimal {
    hours.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn join_row<I>(fields: I) -> String
where
    I: IntoIterator<Item = String>,
{
    fields
        .into_iter()
        .map(|field| quote_field(&field))
        .collect::<Vec<_>>()
        .join(",")
}

/// Quotes a field per RFC 4180 when it contains a delimiter, quote or line break.
fn quote_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{WageRounding, calculate_shift, compute_totals};
    use crate::models::{Break, Shift};
    use chrono::{TimeZone, Utc};

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn record(id: i64, shift: Shift) -> ShiftRecord {
        let result = calculate_shift(&shift, WageRounding::default()).unwrap();
        ShiftRecord {
            id,
            shift,
            result,
            created_at: Utc.with_ymd_and_hms(2025, 10, 10, 0, 0, 0).unwrap(),
        }
    }

    fn day_shift(day: u32, rate: i64, breaks: Vec<Break>) -> Shift {
        Shift {
            start_time: at(&format!("2025-10-{day:02} 09:00")),
            end_time: at(&format!("2025-10-{day:02} 17:00")),
            breaks,
            hourly_rate: rate,
        }
    }

    fn render(records: &[ShiftRecord]) -> String {
        let totals = compute_totals(records.iter().map(|r| &r.result));
        render_csv(records, &totals, ExportOptions::default())
    }

    /// CSV-001: single record with one break
    #[test]
    fn test_single_record_row() {
        let lunch = Break::new(at("2025-10-10 12:00"), at("2025-10-10 13:00"));
        let csv = render(&[record(1, day_shift(10, 1200, vec![lunch]))]);
        let lines: Vec<&str> = csv.split('\n').collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "10/10/2025,9:00 AM - 5:00 PM,12:00 PM - 1:00 PM,7,0,8400"
        );
        assert_eq!(lines[2], "合計,,,7.00,0,8400");
    }

    /// CSV-002: header follows the byte order mark
    #[test]
    fn test_byte_order_mark_and_header() {
        let csv = render(&[]);
        assert!(csv.starts_with(BYTE_ORDER_MARK));
        let first_line = csv.trim_start_matches(BYTE_ORDER_MARK).lines().next().unwrap();
        assert_eq!(first_line, "勤務日,時間,休憩時間,実働(時間),深夜分(分),給料(円)");
    }

    #[test]
    fn test_without_byte_order_mark() {
        let csv = render_csv(&[], &Totals::default(), ExportOptions { byte_order_mark: false });
        assert!(csv.starts_with("勤務日"));
    }

    /// CSV-003: empty collection still renders header and zero total row
    #[test]
    fn test_empty_records() {
        let csv = render(&[]);
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "合計,,,0.00,0,0");
    }

    /// CSV-004: multiple records in id order with a summed total row
    #[test]
    fn test_multiple_records_and_totals() {
        let records = vec![
            record(1, day_shift(10, 1000, vec![])),
            record(2, day_shift(11, 1000, vec![])),
        ];
        let csv = render(&records);
        let lines: Vec<&str> = csv.split('\n').collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("10/10/2025,"));
        assert!(lines[2].starts_with("10/11/2025,"));
        assert_eq!(lines[3], "合計,,,16.00,0,16000");
    }

    /// CSV-005: fractional hours are rounded to two places
    #[test]
    fn test_fractional_hours() {
        let shift = Shift {
            start_time: at("2025-10-10 09:00"),
            end_time: at("2025-10-10 09:20"),
            breaks: vec![],
            hourly_rate: 1000,
        };
        let csv = render(&[record(1, shift)]);
        let lines: Vec<&str> = csv.split('\n').collect();

        assert!(lines[1].contains(",0.33,"), "row was {}", lines[1]);
        assert!(lines[2].starts_with("合計,,,0.33,"));
    }

    #[test]
    fn test_multiple_breaks_joined() {
        let breaks = vec![
            Break::new(at("2025-10-10 10:00"), at("2025-10-10 10:15")),
            Break::new(at("2025-10-10 12:00"), at("2025-10-10 12:45")),
        ];
        let csv = render(&[record(1, day_shift(10, 1000, breaks))]);
        assert!(csv.contains("10:00 AM - 10:15 AM / 12:00 PM - 12:45 PM"));
    }

    #[test]
    fn test_night_shift_row() {
        let shift = Shift {
            start_time: at("2025-10-10 22:00"),
            end_time: at("2025-10-11 05:00"),
            breaks: vec![],
            hourly_rate: 1000,
        };
        let csv = render(&[record(1, shift)]);
        assert!(csv.contains("10/10/2025,10:00 PM - 5:00 AM,,7,420,8750"));
    }

    #[test]
    fn test_quote_field() {
        assert_eq!(quote_field("plain"), "plain");
        assert_eq!(quote_field("a,b"), "\"a,b\"");
        assert_eq!(quote_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(quote_field("line\nbreak"), "\"line\nbreak\"");
    }
}
