use std::collections::BTreeMap;

use chrono::{Months, NaiveDate};
use rand::Rng;

use super::growth::{DEFAULT_FUTURE_VALUE_INFLATION, DEFAULT_FUTURE_VALUE_RATE, future_value};
use super::types::{ForecastMonth, FutureValue, OptimizedAllocation};

const NOISE_MIN: f64 = 0.95;
const NOISE_MAX: f64 = 1.15;
const SEASONAL_CATEGORY: &str = "Shopping";
const SEASONAL_MONTH: u32 = 12;
const SEASONAL_MULTIPLIER: f64 = 1.5;
pub const DEFAULT_BASE_YEAR: i32 = 2023;

/// Illustrative, not reproducible: draws from the thread RNG.
pub fn forecast_spending(budget: &OptimizedAllocation, months: u32) -> Vec<ForecastMonth> {
    forecast_spending_with_rng(budget, months, DEFAULT_BASE_YEAR, &mut rand::thread_rng())
}

pub fn forecast_spending_with_rng<R: Rng>(
    budget: &OptimizedAllocation,
    months: u32,
    base_year: i32,
    rng: &mut R,
) -> Vec<ForecastMonth> {
    (1..=months)
        .map(|month| {
            let amounts: BTreeMap<String, f64> = budget
                .iter()
                .map(|(name, base)| {
                    let mut value = base * rng.gen_range(NOISE_MIN..=NOISE_MAX);
                    if month == SEASONAL_MONTH && name == SEASONAL_CATEGORY {
                        value *= SEASONAL_MULTIPLIER;
                    }
                    (name.clone(), value)
                })
                .collect();
            let total = amounts.values().sum();
            ForecastMonth {
                month,
                label: month_label(base_year, month),
                amounts,
                total,
            }
        })
        .collect()
}

/// "Jan 2023" style label for the 1-based `month` counted from January of `base_year`.
pub fn month_label(base_year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(base_year, 1, 1)
        .and_then(|start| start.checked_add_months(Months::new(month.saturating_sub(1))))
        .map(|date| date.format("%b %Y").to_string())
        .unwrap_or_else(|| format!("Month {month}"))
}

/// Running total of `income` minus each month's forecast spend.
pub fn cumulative_savings(income: f64, forecast: &[ForecastMonth]) -> Vec<f64> {
    forecast
        .iter()
        .scan(0.0, |running, month| {
            *running += income - month.total;
            Some(*running)
        })
        .collect()
}

/// Final cumulative savings annualised and compounded over the forecast horizon.
pub fn potential_investment_value(cumulative: &[f64], months: u32) -> FutureValue {
    let last = cumulative.last().copied().unwrap_or(0.0);
    if months == 0 {
        return future_value(0.0, 0.0, DEFAULT_FUTURE_VALUE_RATE, DEFAULT_FUTURE_VALUE_INFLATION);
    }
    let annual = last / months as f64 * 12.0;
    future_value(
        annual,
        months as f64 / 12.0,
        DEFAULT_FUTURE_VALUE_RATE,
        DEFAULT_FUTURE_VALUE_INFLATION,
    )
}
