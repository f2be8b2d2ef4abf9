//! Plain-text estimate summary.

use std::io::Write;
use washquote_types::{EstimateResult, JobInputs};

use crate::FormatError;

/// Formats a dollar amount with thousands separators, e.g. `-$1,234.50`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn money(value: f64) -> String {
    let cents = (value.abs() * 100.0).round();
    let whole = (cents / 100.0).trunc() as u64;
    let frac = (cents % 100.0) as u64;
    let sign = if value < 0.0 && cents > 0.0 { "-" } else { "" };
    format!("{sign}${}.{frac:02}", group_thousands(whole))
}

/// Formats hours with two decimals.
#[must_use]
pub fn hours(value: f64) -> String {
    format!("{value:.2}")
}

/// Formats a percentage with one decimal, or `n/a` when undefined.
#[must_use]
pub fn percent(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.1}%"))
}

/// Formats square footage rounded to whole feet.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn sqft(value: f64) -> String {
    group_thousands(value.max(0.0).round() as u64)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Human-readable summary of one estimate.
#[derive(Debug, Clone, Default)]
pub struct SummaryFormatter {
    /// Heading line, usually the customer name and date.
    title: Option<String>,
    /// Whether to print the per-model cost breakdowns.
    breakdown: bool,
}

impl SummaryFormatter {
    /// Creates a summary formatter that prints cost breakdowns.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            title: None,
            breakdown: true,
        }
    }

    /// Sets the heading line.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets whether to print the per-model cost breakdowns.
    #[must_use]
    pub const fn with_breakdown(mut self, breakdown: bool) -> Self {
        self.breakdown = breakdown;
        self
    }

    /// Writes the summary for `result`, which must have been estimated
    /// from `job`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_summary<W: Write>(
        &self,
        job: &JobInputs,
        result: &EstimateResult,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let w = &mut writer;
        let shares = &job.targets.cost_shares;
        let (areas, time, schedule, labor) =
            (&result.areas, &result.time, &result.schedule, &result.labor);

        if let Some(title) = &self.title {
            writeln!(w, "{title}")?;
            writeln!(w, "{}", "=".repeat(title.chars().count()))?;
            writeln!(w)?;
        }

        writeln!(w, "Areas")?;
        writeln!(w, "  Wall SqFt:          {}", sqft(areas.wall_sqft))?;
        writeln!(w, "  Breezeway SqFt:     {}", sqft(areas.breezeway_sqft))?;
        writeln!(w, "  Flatwork SqFt:      {}", sqft(areas.flatwork_sqft))?;
        writeln!(w, "  Deck SqFt:          {}", sqft(areas.deck_sqft))?;
        writeln!(w, "  Total SqFt:         {}", sqft(areas.total_sqft))?;
        writeln!(w)?;

        writeln!(w, "Time ({})", time.mode.label())?;
        writeln!(w, "  Cleaning Time:      {} hrs", hours(time.cleaning_hours))?;
        if job.add_ons.any() {
            writeln!(w, "  Add-On Time:        {} hrs", hours(time.add_on_hours()))?;
        }
        writeln!(w, "  Setup Time:         {} hrs", hours(time.setup_hours))?;
        writeln!(w, "  Breakdown Time:     {} hrs", hours(time.breakdown_hours))?;
        writeln!(w, "  Drive Time:         {} hrs", hours(time.drive_hours))?;
        writeln!(w, "  Total Hours:        {} hrs", hours(result.total_hours()))?;
        let days = if job.day_override.is_some() {
            format!("{} (estimated {})", schedule.days, schedule.estimated_days)
        } else {
            schedule.days.to_string()
        };
        writeln!(w, "  Days:               {days}")?;
        writeln!(w)?;

        writeln!(w, "Crew")?;
        writeln!(w, "  Technicians:        {}", labor.tech_count)?;
        writeln!(w, "  Blended Rate:       {}/hr", money(labor.blended_rate))?;
        writeln!(w, "  Labor Cost:         {}", money(labor.labor_cost))?;
        writeln!(
            w,
            "  Usable Hours:       {} hrs",
            hours(labor.usable_total_hours)
        )?;
        writeln!(w)?;

        let a = &result.model_a;
        writeln!(w, "Model A: Daily Revenue")?;
        writeln!(w, "  Price:              {}", money(a.price))?;
        writeln!(w, "  Profit:             {}", money(a.profit))?;
        writeln!(w, "  Margin:             {}", percent(a.margin_pct))?;
        if self.breakdown {
            writeln!(w, "  Cost Breakdown")?;
            writeln!(w, "    Labor:            {}", money(labor.labor_cost))?;
            share_line(w, "Fuel", shares.fuel_pct, a.fuel)?;
            share_line(w, "Chemicals", shares.chemical_pct, a.chemical)?;
            share_line(w, "Marketing", shares.marketing_pct, a.marketing)?;
            share_line(w, "Royalty", shares.royalty_pct, a.royalty)?;
        }
        writeln!(w)?;

        let b = &result.model_b;
        writeln!(w, "Model B: Hourly Target")?;
        writeln!(w, "  Final Price:        {}", money(b.price))?;
        writeln!(w, "  Net Profit:         {}", money(b.net_profit))?;
        writeln!(w, "  Net Margin:         {}", percent(b.net_margin_pct))?;
        writeln!(w, "  Net Profit / Day:   {}", money(b.net_profit_per_day))?;
        writeln!(
            w,
            "  Net Profit / Hour:  {}",
            b.net_profit_per_hour.map_or_else(|| "n/a".to_string(), money)
        )?;
        if self.breakdown {
            writeln!(w, "  Cost Breakdown")?;
            writeln!(w, "    Labor:            {}", money(labor.labor_cost))?;
            share_line(w, "Fuel", shares.fuel_pct, b.fuel)?;
            share_line(w, "Chemicals", shares.chemical_pct, b.chemical)?;
            share_line(w, "Marketing", shares.marketing_pct, b.marketing)?;
        }

        w.flush()?;
        Ok(())
    }
}

fn share_line<W: Write>(w: &mut W, name: &str, pct: f64, amount: f64) -> std::io::Result<()> {
    let label = format!("{name} ({pct:.0}%):");
    writeln!(w, "    {label:<18}{}", money(amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use washquote_engine::estimate;

    fn render(formatter: &SummaryFormatter, job: &JobInputs) -> String {
        let result = estimate(job).unwrap();
        let mut output = Cursor::new(Vec::new());
        formatter.write_summary(job, &result, &mut output).unwrap();
        String::from_utf8(output.into_inner()).unwrap()
    }

    #[test]
    fn test_money() {
        assert_eq!(money(0.0), "$0.00");
        assert_eq!(money(20.0), "$20.00");
        assert_eq!(money(1234.5), "$1,234.50");
        assert_eq!(money(1_234_567.891), "$1,234,567.89");
        assert_eq!(money(-320.0), "-$320.00");
        assert_eq!(money(-0.001), "$0.00");
    }

    #[test]
    fn test_percent_and_hours() {
        assert_eq!(percent(Some(65.333)), "65.3%");
        assert_eq!(percent(None), "n/a");
        assert_eq!(hours(0.7009), "0.70");
        assert_eq!(sqft(108_000.4), "108,000");
    }

    #[test]
    fn test_summary_sections() {
        let output = render(
            &SummaryFormatter::new().with_title("Oak Ridge HOA"),
            &JobInputs::default(),
        );

        assert!(output.starts_with("Oak Ridge HOA\n=============\n"));
        assert!(output.contains("Time (Parallel (Crew Efficient))"));
        assert!(output.contains("Blended Rate:       $20.00/hr"));
        assert!(output.contains("Model A: Daily Revenue"));
        assert!(output.contains("Royalty (10%):"));
        assert!(output.contains("Model B: Hourly Target"));
    }

    #[test]
    fn test_summary_without_breakdown() {
        let output = render(
            &SummaryFormatter::new().with_breakdown(false),
            &JobInputs::default(),
        );
        assert!(!output.contains("Cost Breakdown"));
        assert!(!output.contains("Royalty"));
    }

    #[test]
    fn test_summary_shows_override() {
        let job = JobInputs::default().with_day_override(Some(3));
        let output = render(&SummaryFormatter::new(), &job);
        assert!(output.contains("Days:               3 (estimated 1)"));
    }

    #[test]
    fn test_summary_override_matching_estimate_still_noted() {
        let job = JobInputs::default().with_day_override(Some(1));
        let output = render(&SummaryFormatter::new(), &job);
        assert!(output.contains("Days:               1 (estimated 1)"));

        let output = render(&SummaryFormatter::new(), &JobInputs::default());
        assert!(output.contains("Days:               1\n"));
    }

    #[test]
    fn test_summary_add_on_time_only_with_add_ons() {
        let output = render(&SummaryFormatter::new(), &JobInputs::default());
        assert!(!output.contains("Add-On Time"));

        let mut job = JobInputs::default();
        job.add_ons.flatwork_sqft = 1000.0;
        let result = estimate(&job).unwrap();
        let output = render(&SummaryFormatter::new(), &job);
        assert!(output.contains(&format!(
            "Add-On Time:        {} hrs",
            hours(result.time.add_on_hours())
        )));
    }
}
