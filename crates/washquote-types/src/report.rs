//! Exported report row.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::EstimateResult;

/// One exported estimate.
///
/// Field order and serialized names match existing spreadsheet exports and
/// must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateReport {
    /// Date the estimate was prepared.
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    /// Customer or job name.
    #[serde(rename = "Customer")]
    pub customer: String,
    /// Total square footage.
    #[serde(rename = "Total SqFt")]
    pub total_sqft: f64,
    /// Wall square footage.
    #[serde(rename = "Wall SqFt")]
    pub wall_sqft: f64,
    /// Deck and patio square footage.
    #[serde(rename = "Deck SqFt")]
    pub deck_sqft: f64,
    /// Cleaning, setup, breakdown and drive hours.
    #[serde(rename = "Total Hours")]
    pub total_hours: f64,
    /// Total labor cost.
    #[serde(rename = "Labor Cost")]
    pub labor_cost: f64,
    /// Daily-revenue model price.
    #[serde(rename = "Model A Price")]
    pub model_a_price: f64,
    /// Daily-revenue model profit.
    #[serde(rename = "Model A Profit")]
    pub model_a_profit: f64,
    /// Daily-revenue model margin in percent.
    #[serde(rename = "Model A Margin")]
    pub model_a_margin: Option<f64>,
    /// Hourly-target model price.
    #[serde(rename = "Model B Price")]
    pub model_b_price: f64,
    /// Hourly-target model net profit.
    #[serde(rename = "Model B Net Profit")]
    pub model_b_net_profit: f64,
    /// Hourly-target model net margin in percent.
    #[serde(rename = "Model B Net Margin")]
    pub model_b_net_margin: Option<f64>,
}

impl EstimateReport {
    /// Column headers in export order.
    pub const COLUMNS: [&'static str; 13] = [
        "Date",
        "Customer",
        "Total SqFt",
        "Wall SqFt",
        "Deck SqFt",
        "Total Hours",
        "Labor Cost",
        "Model A Price",
        "Model A Profit",
        "Model A Margin",
        "Model B Price",
        "Model B Net Profit",
        "Model B Net Margin",
    ];

    /// Builds a report row from an estimate.
    #[must_use]
    pub fn new(date: NaiveDate, customer: impl Into<String>, estimate: &EstimateResult) -> Self {
        Self {
            date,
            customer: customer.into(),
            total_sqft: estimate.areas.total_sqft,
            wall_sqft: estimate.areas.wall_sqft,
            deck_sqft: estimate.areas.deck_sqft,
            total_hours: estimate.total_hours(),
            labor_cost: estimate.labor.labor_cost,
            model_a_price: estimate.model_a.price,
            model_a_profit: estimate.model_a.profit,
            model_a_margin: estimate.model_a.margin_pct,
            model_b_price: estimate.model_b.price,
            model_b_net_profit: estimate.model_b.net_profit,
            model_b_net_margin: estimate.model_b.net_margin_pct,
        }
    }

    /// Returns a file stem for exports, falling back to `default` when the
    /// customer name is blank.
    #[must_use]
    pub fn file_stem(&self, default: &str) -> String {
        let stem: String = self
            .customer
            .trim()
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        if stem.is_empty() {
            default.to_string()
        } else {
            stem
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(customer: &str) -> EstimateReport {
        EstimateReport {
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            customer: customer.to_string(),
            total_sqft: 0.0,
            wall_sqft: 0.0,
            deck_sqft: 0.0,
            total_hours: 0.0,
            labor_cost: 0.0,
            model_a_price: 0.0,
            model_a_profit: 0.0,
            model_a_margin: None,
            model_b_price: 0.0,
            model_b_net_profit: 0.0,
            model_b_net_margin: None,
        }
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(report("Oak Ridge HOA").file_stem("estimate"), "Oak_Ridge_HOA");
        assert_eq!(report("   ").file_stem("estimate"), "estimate");
    }

    #[test]
    fn test_column_count_matches_fields() {
        let value = serde_json::to_value(report("x")).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), EstimateReport::COLUMNS.len());
        for column in EstimateReport::COLUMNS {
            assert!(object.contains_key(column), "missing {column}");
        }
    }
}
