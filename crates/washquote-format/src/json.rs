//! JSON output format.

use std::io::Write;
use washquote_types::EstimateReport;

use crate::{FormatError, ReportFormatter};

/// JSON output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum JsonStyle {
    /// JSON array (standard JSON).
    #[default]
    Array,
    /// Newline-delimited JSON (NDJSON/JSONL).
    Ndjson,
}

/// JSON formatter.
///
/// Objects use the spreadsheet column names as keys; undefined margins are
/// written as `null`.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Output style.
    style: JsonStyle,
    /// Whether to pretty-print (only for array style).
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default settings (array style).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Array,
            pretty: false,
        }
    }

    /// Creates a new NDJSON formatter.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
            pretty: false,
        }
    }

    /// Sets whether to pretty-print output (array style only).
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl ReportFormatter for JsonFormatter {
    fn write_reports<W: Write>(
        &self,
        reports: &[EstimateReport],
        mut writer: W,
    ) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Array => {
                if self.pretty {
                    serde_json::to_writer_pretty(&mut writer, reports)?;
                } else {
                    serde_json::to_writer(&mut writer, reports)?;
                }
                writeln!(writer)?;
            }
            JsonStyle::Ndjson => {
                for report in reports {
                    serde_json::to_writer(&mut writer, report)?;
                    writeln!(writer)?;
                }
            }
        }
        writer.flush()?;
        Ok(())
    }

    fn extension(&self) -> &str {
        match self.style {
            JsonStyle::Array => "json",
            JsonStyle::Ndjson => "ndjson",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn create_test_report() -> EstimateReport {
        EstimateReport {
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            customer: "Oak Ridge".to_string(),
            total_sqft: 3000.0,
            wall_sqft: 3000.0,
            deck_sqft: 0.0,
            total_hours: 1.121,
            labor_cost: 320.0,
            model_a_price: 3000.0,
            model_a_profit: 1960.0,
            model_a_margin: Some(65.5),
            model_b_price: 0.0,
            model_b_net_profit: -320.0,
            model_b_net_margin: None,
        }
    }

    fn render(formatter: &JsonFormatter, reports: &[EstimateReport]) -> String {
        let mut output = Cursor::new(Vec::new());
        formatter.write_reports(reports, &mut output).unwrap();
        String::from_utf8(output.into_inner()).unwrap()
    }

    #[test]
    fn test_json_array() {
        let result = render(&JsonFormatter::new(), &[create_test_report()]);
        assert!(result.starts_with('['));
        assert!(result.contains("\"Date\":\"2024-05-01\""));
        assert!(result.contains("\"Model A Price\":3000.0"));
        assert!(result.contains("\"Model B Net Margin\":null"));
    }

    #[test]
    fn test_ndjson() {
        let reports = vec![create_test_report(), create_test_report()];
        let result = render(&JsonFormatter::ndjson(), &reports);
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('{'));

        let parsed: EstimateReport = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(parsed, reports[1]);
    }

    #[test]
    fn test_pretty_json() {
        let formatter = JsonFormatter::new().with_pretty(true);
        let result = render(&formatter, &[create_test_report()]);
        assert!(result.contains('\n'));
        assert!(result.contains("  "));
    }

    #[test]
    fn test_extension() {
        assert_eq!(JsonFormatter::new().extension(), "json");
        assert_eq!(JsonFormatter::ndjson().extension(), "ndjson");
    }
}
