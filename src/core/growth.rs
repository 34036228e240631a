use super::types::{
    FutureValue, GrowthMode, GrowthResult, GrowthYear, OpportunityCost, OpportunityYear,
};

pub const DEFAULT_GROWTH_RATE: f64 = 0.12;
pub const DEFAULT_INFLATION: f64 = 0.06;
pub const DEFAULT_FUTURE_VALUE_RATE: f64 = 0.07;
pub const DEFAULT_FUTURE_VALUE_INFLATION: f64 = 0.03;

const MONTHS_PER_YEAR: u32 = 12;

pub fn compute_growth(
    principal: f64,
    years: u32,
    annual_rate: f64,
    mode: GrowthMode,
    inflation: f64,
) -> GrowthResult {
    let yearly = match mode {
        GrowthMode::Lumpsum => lumpsum_path(principal, years, annual_rate, inflation),
        GrowthMode::Recurring => recurring_path(principal, years, annual_rate, inflation),
    };

    let (nominal_final, real_final) = yearly
        .last()
        .map(|y| (y.nominal, y.real))
        .unwrap_or((principal, principal));

    let cagr = if years > 0 && principal > 0.0 {
        ((nominal_final / principal).powf(1.0 / years as f64) - 1.0) * 100.0
    } else {
        0.0
    };

    GrowthResult {
        mode,
        nominal_final,
        real_final,
        cagr,
        yearly,
    }
}

fn lumpsum_path(principal: f64, years: u32, annual_rate: f64, inflation: f64) -> Vec<GrowthYear> {
    let mut nominal = principal;
    (1..=years)
        .map(|year| {
            nominal *= 1.0 + annual_rate;
            let growth_pct = if principal != 0.0 {
                (nominal - principal) / principal * 100.0
            } else {
                0.0
            };
            GrowthYear {
                year,
                nominal,
                real: deflate(nominal, inflation, year),
                growth_pct,
            }
        })
        .collect()
}

// Contribution lands before the month's compounding; growth is measured
// against contributions to date rather than a single principal.
fn recurring_path(
    monthly_contribution: f64,
    years: u32,
    annual_rate: f64,
    inflation: f64,
) -> Vec<GrowthYear> {
    let monthly_factor = (1.0 + annual_rate).powf(1.0 / MONTHS_PER_YEAR as f64);
    let mut nominal = 0.0;
    (1..=years)
        .map(|year| {
            for _ in 0..MONTHS_PER_YEAR {
                nominal += monthly_contribution;
                nominal *= monthly_factor;
            }
            let contributed = monthly_contribution * (MONTHS_PER_YEAR * year) as f64;
            let growth_pct = if contributed != 0.0 {
                (nominal / contributed - 1.0) * 100.0
            } else {
                0.0
            };
            GrowthYear {
                year,
                nominal,
                real: deflate(nominal, inflation, year),
                growth_pct,
            }
        })
        .collect()
}

fn deflate(nominal: f64, inflation: f64, year: u32) -> f64 {
    nominal / (1.0 + inflation).powi(year as i32)
}

pub fn future_value(amount: f64, years: f64, rate: f64, inflation: f64) -> FutureValue {
    let nominal = amount * (1.0 + rate).powf(years);
    FutureValue {
        nominal,
        real: nominal / (1.0 + inflation).powf(years),
    }
}

/// Value `amount` would reach if invested once instead of spent, reported
/// per year. Each year is computed from the base amount.
pub fn compute_opportunity_cost(amount: f64, years: u32, alt_return_rate: f64) -> OpportunityCost {
    let yearly: Vec<OpportunityYear> = (1..=years)
        .map(|year| OpportunityYear {
            year,
            cumulative_value: amount * ((1.0 + alt_return_rate).powi(year as i32) - 1.0),
        })
        .collect();
    let total = yearly.last().map(|y| y.cumulative_value).unwrap_or(0.0);
    OpportunityCost { total, yearly }
}
