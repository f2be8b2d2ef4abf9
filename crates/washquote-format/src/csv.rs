//! CSV output format.

use std::borrow::Cow;
use std::io::Write;
use washquote_types::EstimateReport;

use crate::{FormatError, ReportFormatter};

/// CSV formatter.
///
/// Undefined margins are written as empty cells.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }

    /// Quotes a text cell when it contains the delimiter, a quote or a line
    /// break.
    fn quote<'a>(&self, cell: &'a str) -> Cow<'a, str> {
        let needs_quotes = cell
            .chars()
            .any(|c| c == self.delimiter || c == '"' || c == '\n' || c == '\r');
        if needs_quotes {
            Cow::Owned(format!("\"{}\"", cell.replace('"', "\"\"")))
        } else {
            Cow::Borrowed(cell)
        }
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl ReportFormatter for CsvFormatter {
    fn write_reports<W: Write>(
        &self,
        reports: &[EstimateReport],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            let header: Vec<_> = EstimateReport::COLUMNS
                .iter()
                .map(|column| self.quote(column))
                .collect();
            writeln!(writer, "{}", header.join(&d.to_string()))?;
        }

        for report in reports {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                report.date.format("%Y-%m-%d"),
                self.quote(&report.customer),
                report.total_sqft,
                report.wall_sqft,
                report.deck_sqft,
                report.total_hours,
                report.labor_cost,
                report.model_a_price,
                report.model_a_profit,
                optional(report.model_a_margin),
                report.model_b_price,
                report.model_b_net_profit,
                optional(report.model_b_net_margin),
            )?;
        }

        writer.flush()?;
        Ok(())
    }

    fn extension(&self) -> &str {
        if self.delimiter == '\t' { "tsv" } else { "csv" }
    }
}
