use std::collections::BTreeMap;

use minilp::{ComparisonOp, LinearExpr, OptimizationDirection, Problem, Variable};
use tracing::{debug, warn};

use super::error::{EngineError, Result};
use super::types::{
    CategoryChange, OptimizationOutcome, OptimizationSummary, OptimizedAllocation, SpendingMap,
};

/// Lower-cased category names that never drop below `ESSENTIAL_FLOOR`.
pub const ESSENTIAL_KEYWORDS: [&str; 2] = ["rent", "utilities"];
pub const ESSENTIAL_FLOOR: f64 = 0.9;
pub const MIN_SPEND_SHARE: f64 = 0.4;

const RISK_TOLERANT_THRESHOLD: f64 = 0.5;
const TOP_CHANGES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryBounds {
    pub lower: f64,
    pub upper: f64,
}

impl CategoryBounds {
    pub fn for_amount(amount: f64, risk_appetite: f64) -> Self {
        let (lower_factor, upper_factor) = if risk_appetite > RISK_TOLERANT_THRESHOLD {
            (0.7, 1.3)
        } else {
            (0.9, 1.1)
        };
        Self {
            lower: amount * lower_factor,
            upper: amount * upper_factor,
        }
    }
}

pub fn is_essential_keyword(category: &str) -> bool {
    let lowered = category.to_lowercase();
    ESSENTIAL_KEYWORDS.contains(&lowered.as_str())
}

pub fn optimize_budget(
    income: f64,
    spending: &SpendingMap,
    min_savings: f64,
    risk_appetite: f64,
) -> Result<OptimizedAllocation> {
    optimize_budget_detailed(income, spending, min_savings, risk_appetite)
        .map(|outcome| outcome.allocation)
}

pub fn optimize_budget_detailed(
    income: f64,
    spending: &SpendingMap,
    min_savings: f64,
    risk_appetite: f64,
) -> Result<OptimizationOutcome> {
    validate_inputs(income, spending, min_savings, risk_appetite)?;

    let spend_cap = income - min_savings;
    let spend_floor = income * MIN_SPEND_SHARE;

    // The savings term carries no decision variable; it only shifts the
    // reported objective.
    let savings_term = if income > 0.0 {
        min_savings / income * (1.0 - risk_appetite)
    } else {
        0.0
    };
    let objective_offset = savings_term * spending.len() as f64;

    if spending.is_empty() {
        if spend_cap >= 0.0 && spend_floor <= 0.0 {
            return Ok(OptimizationOutcome {
                allocation: OptimizedAllocation::new(),
                objective: objective_offset,
            });
        }
        warn!(income, min_savings, "no categories to satisfy budget bounds");
        return Err(EngineError::Infeasible(
            "no spending categories to meet the minimum spend".to_string(),
        ));
    }

    debug!(
        categories = spending.len(),
        income, min_savings, risk_appetite, "solving budget model"
    );

    let mut problem = Problem::new(OptimizationDirection::Maximize);
    let mut vars: Vec<(&str, Variable)> = Vec::with_capacity(spending.len());
    for (name, category) in spending {
        let happiness_per_rupee = if category.amount > 0.0 {
            category.happiness as f64 / category.amount
        } else {
            0.0
        };
        let bounds = CategoryBounds::for_amount(category.amount, risk_appetite);
        let var = problem.add_var(
            happiness_per_rupee * risk_appetite,
            (bounds.lower, bounds.upper),
        );
        vars.push((name.as_str(), var));
    }

    problem.add_constraint(total_spend(&vars), ComparisonOp::Le, spend_cap);
    problem.add_constraint(total_spend(&vars), ComparisonOp::Ge, spend_floor);

    for &(name, var) in &vars {
        if is_essential_keyword(name) {
            let amount = spending[name].amount;
            let mut floor = LinearExpr::empty();
            floor.add(var, 1.0);
            problem.add_constraint(floor, ComparisonOp::Ge, amount * ESSENTIAL_FLOOR);
        }
    }

    let solution = problem.solve().map_err(|e| {
        warn!(income, min_savings, risk_appetite, error = ?e, "budget model has no solution");
        EngineError::from(e)
    })?;

    let allocation: OptimizedAllocation = vars
        .iter()
        .map(|&(name, var)| (name.to_string(), solution[var].max(0.0)))
        .collect();
    let objective = solution.objective() + objective_offset;
    debug!(objective, "budget model solved");

    Ok(OptimizationOutcome {
        allocation,
        objective,
    })
}

fn total_spend(vars: &[(&str, Variable)]) -> LinearExpr {
    let mut expr = LinearExpr::empty();
    for &(_, var) in vars {
        expr.add(var, 1.0);
    }
    expr
}

fn validate_inputs(
    income: f64,
    spending: &SpendingMap,
    min_savings: f64,
    risk_appetite: f64,
) -> Result<()> {
    if !income.is_finite() || !min_savings.is_finite() {
        return Err(EngineError::InvalidInput(
            "income and min_savings must be finite".to_string(),
        ));
    }
    if !(0.0..=1.0).contains(&risk_appetite) {
        return Err(EngineError::InvalidInput(
            "risk_appetite must be between 0 and 1".to_string(),
        ));
    }
    for (name, category) in spending {
        if !category.amount.is_finite() || category.amount < 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "amount for '{name}' must be a non-negative number"
            )));
        }
    }
    Ok(())
}

/// Happiness per unit of spend, normalised by the largest category amount.
pub fn value_efficiency(spending: &SpendingMap) -> BTreeMap<String, f64> {
    let max_amount = spending
        .values()
        .map(|c| c.amount)
        .fold(0.0_f64, f64::max);

    spending
        .iter()
        .map(|(name, category)| {
            let relative = if max_amount > 0.0 {
                category.amount / max_amount
            } else {
                0.0
            };
            let efficiency = if relative > 0.0 {
                category.happiness as f64 / relative
            } else {
                0.0
            };
            (name.clone(), efficiency)
        })
        .collect()
}

pub fn summarize_optimization(
    income: f64,
    spending: &SpendingMap,
    allocation: &OptimizedAllocation,
) -> OptimizationSummary {
    let changes: Vec<CategoryChange> = spending
        .iter()
        .map(|(name, category)| {
            let optimized = allocation.get(name).copied().unwrap_or(0.0);
            let change_amount = optimized - category.amount;
            let change_pct = if category.amount > 0.0 {
                change_amount / category.amount * 100.0
            } else {
                0.0
            };
            CategoryChange {
                category: name.clone(),
                current: category.amount,
                optimized,
                happiness: category.happiness,
                change_amount,
                change_pct,
            }
        })
        .collect();

    let current_total: f64 = changes.iter().map(|c| c.current).sum();
    let optimized_total: f64 = changes.iter().map(|c| c.optimized).sum();
    let weighted_happiness = |total: f64, pick: fn(&CategoryChange) -> f64| {
        if total > 0.0 {
            changes
                .iter()
                .map(|c| pick(c) * c.happiness as f64)
                .sum::<f64>()
                / total
        } else {
            0.0
        }
    };
    let current_avg_happiness = weighted_happiness(current_total, |c| c.current);
    let optimized_avg_happiness = weighted_happiness(optimized_total, |c| c.optimized);

    let savings = income - optimized_total;
    let savings_rate = if income > 0.0 {
        savings / income * 100.0
    } else {
        0.0
    };

    let mut by_change = changes.clone();
    by_change.sort_by(|a, b| b.change_pct.total_cmp(&a.change_pct));
    let top_increases: Vec<CategoryChange> = by_change.iter().take(TOP_CHANGES).cloned().collect();
    let top_decreases: Vec<CategoryChange> =
        by_change.iter().rev().take(TOP_CHANGES).cloned().collect();

    OptimizationSummary {
        current_total,
        optimized_total,
        savings,
        savings_rate,
        current_avg_happiness,
        optimized_avg_happiness,
        changes,
        top_increases,
        top_decreases,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::SpendingCategory;
    use proptest::prelude::{prop_assert, proptest};

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}, tolerance {tol}"
        );
    }

    fn category(amount: f64, happiness: u8, essential: bool) -> SpendingCategory {
        SpendingCategory {
            amount,
            happiness,
            essential,
        }
    }

    fn sample_spending() -> SpendingMap {
        let mut spending = SpendingMap::new();
        spending.insert("Rent".to_string(), category(15_000.0, 6, true));
        spending.insert("Food".to_string(), category(8_000.0, 8, true));
        spending.insert("Transport".to_string(), category(3_000.0, 5, true));
        spending.insert("Entertainment".to_string(), category(5_000.0, 7, false));
        spending.insert("Shopping".to_string(), category(4_000.0, 4, false));
        spending
    }

    #[test]
    fn bounds_widen_for_risk_tolerant_users() {
        let cautious = CategoryBounds::for_amount(1_000.0, 0.5);
        assert_close(cautious.lower, 900.0, 1e-9);
        assert_close(cautious.upper, 1_100.0, 1e-9);

        let tolerant = CategoryBounds::for_amount(1_000.0, 0.8);
        assert_close(tolerant.lower, 700.0, 1e-9);
        assert_close(tolerant.upper, 1_300.0, 1e-9);
    }

    #[test]
    fn essential_keywords_match_case_insensitively() {
        assert!(is_essential_keyword("Rent"));
        assert!(is_essential_keyword("UTILITIES"));
        assert!(!is_essential_keyword("Rental car"));
        assert!(!is_essential_keyword("Food"));
    }

    #[test]
    fn min_savings_above_income_is_infeasible() {
        let err = optimize_budget(40_000.0, &sample_spending(), 50_000.0, 0.5)
            .expect_err("must be infeasible");
        assert!(matches!(err, EngineError::Infeasible(_)));
    }

    #[test]
    fn essential_floors_can_make_savings_goal_infeasible() {
        // Rent alone needs 13,500 but only 12,000 may be spent.
        let mut spending = SpendingMap::new();
        spending.insert("Rent".to_string(), category(15_000.0, 6, true));
        let err = optimize_budget(20_000.0, &spending, 8_000.0, 0.9).expect_err("infeasible");
        assert!(matches!(err, EngineError::Infeasible(_)));
    }

    #[test]
    fn tolerant_user_shifts_spend_toward_happiness_per_rupee() {
        let spending = sample_spending();
        let outcome =
            optimize_budget_detailed(60_000.0, &spending, 10_000.0, 0.9).expect("feasible");
        let allocation = &outcome.allocation;

        let total: f64 = allocation.values().sum();
        assert!(total <= 50_000.0 + 1e-6);
        assert!(total >= 24_000.0 - 1e-6);

        // Every category has a positive coefficient, so each goes to its upper bound.
        assert_close(allocation["Food"], 10_400.0, 1e-6);
        assert_close(allocation["Shopping"], 5_200.0, 1e-6);
        assert_close(allocation["Rent"], 19_500.0, 1e-6);
        assert!(allocation["Rent"] >= 13_500.0);
        assert!(outcome.objective > 0.0);
    }

    #[test]
    fn spend_cap_binds_and_keeps_rent_floor() {
        let spending = sample_spending();
        // Cap of 30,000 sits below the 35,000 current spend.
        let allocation = optimize_budget(40_000.0, &spending, 10_000.0, 0.9).expect("feasible");
        let total: f64 = allocation.values().sum();
        assert_close(total, 30_000.0, 1e-6);
        assert!(allocation["Rent"] >= 13_500.0 - 1e-6);
        for (name, current) in &spending {
            let bounds = CategoryBounds::for_amount(current.amount, 0.9);
            assert!(allocation[name] >= bounds.lower - 1e-6);
            assert!(allocation[name] <= bounds.upper + 1e-6);
        }
    }

    #[test]
    fn minimum_spend_share_rejects_tiny_budgets() {
        // 40% of 1,200,000 dwarfs the 38,500 maximum spend.
        let err = optimize_budget(1_200_000.0, &sample_spending(), 10_000.0, 0.5)
            .expect_err("must be infeasible");
        assert!(matches!(err, EngineError::Infeasible(_)));
    }

    #[test]
    fn empty_spending_map_checks_total_constraints() {
        let err = optimize_budget(10_000.0, &SpendingMap::new(), 0.0, 0.5).expect_err("floor");
        assert!(matches!(err, EngineError::Infeasible(_)));

        let allocation = optimize_budget(0.0, &SpendingMap::new(), 0.0, 0.5).expect("trivial");
        assert!(allocation.is_empty());
    }

    #[test]
    fn invalid_risk_appetite_is_rejected() {
        let err = optimize_budget(50_000.0, &sample_spending(), 0.0, 1.5).expect_err("invalid");
        assert!(matches!(err, EngineError::InvalidInput(_)));
    }

    #[test]
    fn value_efficiency_normalises_by_largest_amount() {
        let efficiency = value_efficiency(&sample_spending());
        assert_close(efficiency["Rent"], 6.0, 1e-9);
        assert_close(efficiency["Shopping"], 4.0 / (4_000.0 / 15_000.0), 1e-9);
        assert!(value_efficiency(&SpendingMap::new()).is_empty());
    }

    #[test]
    fn summary_reports_totals_and_biggest_changes() {
        let spending = sample_spending();
        let mut allocation = OptimizedAllocation::new();
        allocation.insert("Rent".to_string(), 13_500.0);
        allocation.insert("Food".to_string(), 9_600.0);
        allocation.insert("Transport".to_string(), 3_000.0);
        allocation.insert("Entertainment".to_string(), 6_500.0);
        allocation.insert("Shopping".to_string(), 2_800.0);

        let summary = summarize_optimization(50_000.0, &spending, &allocation);
        assert_close(summary.current_total, 35_000.0, 1e-9);
        assert_close(summary.optimized_total, 35_400.0, 1e-9);
        assert_close(summary.savings, 14_600.0, 1e-9);
        assert_close(summary.savings_rate, 29.2, 1e-9);
        assert_eq!(summary.top_increases[0].category, "Entertainment");
        assert_eq!(summary.top_increases[1].category, "Food");
        assert_eq!(summary.top_decreases[0].category, "Shopping");
        assert_close(summary.top_decreases[0].change_pct, -30.0, 1e-9);
        assert!(summary.optimized_avg_happiness > summary.current_avg_happiness);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(32))]

        #[test]
        fn prop_feasible_allocations_respect_savings_and_essential_floors(
            income in 20_000u32..200_000,
            min_savings in 0u32..60_000,
            risk_pct in 0u32..101,
            rent in 1_000u32..30_000,
            food in 1_000u32..20_000,
            fun in 1_000u32..20_000,
            fun_happiness in 1u8..11
        ) {
            let mut spending = SpendingMap::new();
            spending.insert("Rent".to_string(), category(rent as f64, 5, true));
            spending.insert("Food".to_string(), category(food as f64, 7, true));
            spending.insert("Fun".to_string(), category(fun as f64, fun_happiness, false));

            let income = income as f64;
            let min_savings = min_savings as f64;
            let risk = risk_pct as f64 / 100.0;

            match optimize_budget(income, &spending, min_savings, risk) {
                Ok(allocation) => {
                    let total: f64 = allocation.values().sum();
                    prop_assert!(total <= income - min_savings + 1e-6);
                    prop_assert!(total >= income * MIN_SPEND_SHARE - 1e-6);
                    prop_assert!(allocation["Rent"] >= rent as f64 * ESSENTIAL_FLOOR - 1e-6);
                    for value in allocation.values() {
                        prop_assert!(*value >= 0.0);
                    }
                }
                Err(err) => {
                    prop_assert!(matches!(err, EngineError::Infeasible(_)));
                }
            }
        }
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(24))]

        #[test]
        fn prop_savings_goal_above_income_never_solves(
            income in 1_000u32..100_000,
            excess in 1u32..50_000
        ) {
            let min_savings = income as f64 + excess as f64;
            let result = optimize_budget(income as f64, &sample_spending(), min_savings, 0.5);
            prop_assert!(matches!(result, Err(EngineError::Infeasible(_))));
        }
    }
}
