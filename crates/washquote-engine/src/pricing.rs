//! The two pricing models.
//!
//! Both models share the same labor cost. Model A prices by target revenue
//! per truck-day and pays a royalty; Model B prices usable technician-hours
//! at an hourly target plus a competitive markup and pays no royalty.

use washquote_types::{CostShares, ModelAQuote, ModelBQuote, PricingTargets, checked_ratio};

const fn share(price: f64, pct: f64) -> f64 {
    price * pct / 100.0
}

/// Prices the job from target daily revenue per truck.
#[must_use]
pub fn model_a(
    targets: &PricingTargets,
    truck_count: u32,
    days: u32,
    labor_cost: f64,
) -> ModelAQuote {
    let CostShares {
        fuel_pct,
        chemical_pct,
        marketing_pct,
        royalty_pct,
    } = targets.cost_shares;

    let price = targets.daily_revenue_per_truck * f64::from(truck_count) * f64::from(days);
    let fuel = share(price, fuel_pct);
    let chemical = share(price, chemical_pct);
    let marketing = share(price, marketing_pct);
    let royalty = share(price, royalty_pct);
    let total_cost = labor_cost + fuel + chemical + marketing + royalty;
    let profit = price - total_cost;

    ModelAQuote {
        price,
        fuel,
        chemical,
        marketing,
        royalty,
        total_cost,
        profit,
        margin_pct: checked_ratio(profit, price).map(|m| m * 100.0),
    }
}

/// Prices the job from usable technician-hours and the hourly target.
#[must_use]
pub fn model_b(
    targets: &PricingTargets,
    usable_total_hours: f64,
    days: u32,
    labor_cost: f64,
) -> ModelBQuote {
    let shares = targets.cost_shares;

    let gross = usable_total_hours * targets.hourly_rate;
    let price = gross * (1.0 + targets.competitive_advantage_pct / 100.0);
    let fuel = share(price, shares.fuel_pct);
    let chemical = share(price, shares.chemical_pct);
    let marketing = share(price, shares.marketing_pct);
    let total_cost = labor_cost + fuel + chemical + marketing;
    let net_profit = price - total_cost;

    ModelBQuote {
        gross,
        price,
        fuel,
        chemical,
        marketing,
        total_cost,
        net_profit,
        net_margin_pct: checked_ratio(net_profit, price).map(|m| m * 100.0),
        net_profit_per_day: net_profit / f64::from(days),
        net_profit_per_hour: checked_ratio(net_profit, usable_total_hours),
    }
}
