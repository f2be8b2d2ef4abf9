//! Business defaults applied to new jobs.

use serde::{Deserialize, Serialize};
use washquote_types::{
    CostShares, CrewConfig, Experience, JobInputs, Logistics, PricingTargets, ProductionRates,
    TruckCrew,
};

use crate::{ProfileError, Result};

/// Defaults an estimator would otherwise retype for every job.
///
/// Only business-level settings live here. Building geometry, add-ons and
/// surface conditions belong to each job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessProfile {
    /// Paid hours per technician per day.
    pub daily_hours_per_tech: f64,
    /// Lead technician hourly rate.
    pub lead_rate: f64,
    /// Junior technician hourly rate.
    pub junior_rate: f64,
    /// Usual crew experience.
    pub experience: Experience,
    /// Reimbursement per mile driven.
    pub mileage_rate: f64,
    /// Average driving speed in miles per hour.
    pub average_speed_mph: f64,
    /// Reference wall-cleaning rate in square feet per minute.
    pub reference_wall_rate: f64,
    /// Breezeway cleaning rate in square feet per hour.
    pub breezeway_rate: f64,
    /// Flatwork cleaning rate in square feet per hour.
    pub flatwork_rate: f64,
    /// Target revenue per truck per day.
    pub daily_revenue_per_truck: f64,
    /// Target revenue per usable technician hour.
    pub hourly_rate: f64,
    /// Markup on the hourly model, in percent.
    pub competitive_advantage_pct: f64,
    /// Fixed cost shares.
    pub cost_shares: CostShares,
}

impl Default for BusinessProfile {
    fn default() -> Self {
        Self::from_job(&JobInputs::default())
    }
}

impl BusinessProfile {
    /// Keys accepted by [`BusinessProfile::set`].
    pub const KEYS: [&'static str; 16] = [
        "daily_hours_per_tech",
        "lead_rate",
        "junior_rate",
        "experience",
        "mileage_rate",
        "average_speed_mph",
        "reference_wall_rate",
        "breezeway_rate",
        "flatwork_rate",
        "daily_revenue_per_truck",
        "hourly_rate",
        "competitive_advantage_pct",
        "fuel_pct",
        "chemical_pct",
        "marketing_pct",
        "royalty_pct",
    ];

    /// Extracts the business-level settings of a job.
    ///
    /// Rates are taken from the first truck.
    #[must_use]
    pub fn from_job(job: &JobInputs) -> Self {
        let truck = job.crew.trucks.first().copied().unwrap_or_default();
        Self {
            daily_hours_per_tech: job.crew.daily_hours_per_tech,
            lead_rate: truck.lead_rate,
            junior_rate: truck.junior_rate,
            experience: job.crew.experience,
            mileage_rate: job.logistics.mileage_rate,
            average_speed_mph: job.logistics.average_speed_mph,
            reference_wall_rate: job.rates.reference_wall_rate,
            breezeway_rate: job.rates.breezeway_rate,
            flatwork_rate: job.rates.flatwork_rate,
            daily_revenue_per_truck: job.targets.daily_revenue_per_truck,
            hourly_rate: job.targets.hourly_rate,
            competitive_advantage_pct: job.targets.competitive_advantage_pct,
            cost_shares: job.targets.cost_shares,
        }
    }

    /// Builds a one-truck job seeded from this profile.
    #[must_use]
    pub fn job_template(&self) -> JobInputs {
        JobInputs {
            crew: CrewConfig {
                daily_hours_per_tech: self.daily_hours_per_tech,
                experience: self.experience,
                trucks: vec![TruckCrew::new(self.lead_rate, self.junior_rate)],
            },
            logistics: Logistics {
                mileage_rate: self.mileage_rate,
                average_speed_mph: self.average_speed_mph,
                ..Logistics::default()
            },
            rates: ProductionRates {
                reference_wall_rate: self.reference_wall_rate,
                breezeway_rate: self.breezeway_rate,
                flatwork_rate: self.flatwork_rate,
                ..ProductionRates::default()
            },
            targets: PricingTargets {
                daily_revenue_per_truck: self.daily_revenue_per_truck,
                hourly_rate: self.hourly_rate,
                competitive_advantage_pct: self.competitive_advantage_pct,
                cost_shares: self.cost_shares,
            },
            ..JobInputs::default()
        }
    }

    /// Updates one setting by key.
    ///
    /// The profile is left unchanged if the value does not parse or would
    /// make the job template invalid.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown key, an unparsable value, or a value
    /// outside the valid domain.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut updated = self.clone();
        let key = key.trim().to_lowercase().replace('-', "_");

        if key == "experience" {
            updated.experience = value.parse()?;
        } else {
            let field = updated
                .number_mut(&key)
                .ok_or_else(|| ProfileError::UnknownKey(key.clone()))?;
            *field = value
                .trim()
                .parse()
                .map_err(|_| ProfileError::InvalidValue {
                    key: key.clone(),
                    value: value.to_string(),
                })?;
        }

        updated.job_template().validate()?;
        *self = updated;
        Ok(())
    }

    /// Returns the current value of a setting as text.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let key = key.trim().to_lowercase().replace('-', "_");
        if key == "experience" {
            return Some(self.experience.to_string());
        }
        let mut copy = self.clone();
        copy.number_mut(&key).map(|v| v.to_string())
    }

    fn number_mut(&mut self, key: &str) -> Option<&mut f64> {
        let field = match key {
            "daily_hours_per_tech" => &mut self.daily_hours_per_tech,
            "lead_rate" => &mut self.lead_rate,
            "junior_rate" => &mut self.junior_rate,
            "mileage_rate" => &mut self.mileage_rate,
            "average_speed_mph" => &mut self.average_speed_mph,
            "reference_wall_rate" => &mut self.reference_wall_rate,
            "breezeway_rate" => &mut self.breezeway_rate,
            "flatwork_rate" => &mut self.flatwork_rate,
            "daily_revenue_per_truck" => &mut self.daily_revenue_per_truck,
            "hourly_rate" => &mut self.hourly_rate,
            "competitive_advantage_pct" => &mut self.competitive_advantage_pct,
            "fuel_pct" => &mut self.cost_shares.fuel_pct,
            "chemical_pct" => &mut self.cost_shares.chemical_pct,
            "marketing_pct" => &mut self.cost_shares.marketing_pct,
            "royalty_pct" => &mut self.cost_shares.royalty_pct,
            _ => return None,
        };
        Some(field)
    }
}
