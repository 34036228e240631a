use super::types::{
    HealthComponents, HealthGrade, HealthInputs, HealthScore, InsuranceComponents, InsuranceNeed,
    Recommendation, ScoreComponent,
};

const INCOME_REPLACEMENT_MULTIPLE: f64 = 10.0;
const LIABILITIES_COVER_MULTIPLE: f64 = 1.2;
const EDUCATION_COVER_PER_DEPENDENT: f64 = 500_000.0;

const SAVINGS_WEIGHT: f64 = 25.0;
const INVESTMENT_WEIGHT: f64 = 25.0;
const DEBT_WEIGHT: f64 = 20.0;
const INSURANCE_WEIGHT: f64 = 15.0;
const EXPENSE_WEIGHT: f64 = 15.0;

const IDEAL_SAVINGS_RATIO: f64 = 0.2;
const IDEAL_INVESTMENT_RATIO: f64 = 2.0;
const IDEAL_EXPENSE_RATIO: f64 = 0.6;
const EXPENSE_PENALTY_SPAN: f64 = 0.4;
const DEBT_INCOME_SHARE: f64 = 0.5;
const MIN_INVESTING_YEARS: u32 = 5;
const INVESTING_START_AGE: u32 = 25;

/// `age` does not enter the heuristic.
pub fn compute_insurance_need(
    _age: u32,
    annual_income: f64,
    dependents: u32,
    liabilities: f64,
    existing_cover: f64,
) -> InsuranceNeed {
    let components = InsuranceComponents {
        income_replacement: annual_income * INCOME_REPLACEMENT_MULTIPLE,
        liabilities_cover: liabilities * LIABILITIES_COVER_MULTIPLE,
        education_cover: EDUCATION_COVER_PER_DEPENDENT * dependents as f64,
    };
    let total_needs =
        components.income_replacement + components.liabilities_cover + components.education_cover;

    InsuranceNeed {
        total_needs,
        existing_cover,
        additional_needed: (total_needs - existing_cover).max(0.0),
        components,
    }
}

fn investing_years(age: u32) -> u32 {
    age.saturating_sub(INVESTING_START_AGE).max(MIN_INVESTING_YEARS)
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

pub fn compute_health_score(inputs: &HealthInputs) -> HealthScore {
    let income = inputs.income;
    let guarded = |numerator: f64, denominator: f64| {
        if income > 0.0 {
            ratio(numerator, denominator)
        } else {
            0.0
        }
    };

    let savings_ratio = guarded(inputs.savings, income);
    let investment_ratio = guarded(
        inputs.investments,
        income * investing_years(inputs.age) as f64,
    );
    let debt_ratio = guarded(inputs.liabilities, income * DEBT_INCOME_SHARE);
    let insurance_ratio = guarded(inputs.insurance_cover, income * INCOME_REPLACEMENT_MULTIPLE);
    let expense_ratio = guarded(inputs.expenses, income);
    let excess_expense = (expense_ratio - IDEAL_EXPENSE_RATIO).max(0.0);

    let components = HealthComponents {
        savings: ScoreComponent {
            ratio: savings_ratio,
            score: (savings_ratio / IDEAL_SAVINGS_RATIO).min(1.0) * SAVINGS_WEIGHT,
            ideal_target: IDEAL_SAVINGS_RATIO,
            weight: SAVINGS_WEIGHT,
        },
        investments: ScoreComponent {
            ratio: investment_ratio,
            score: (investment_ratio / IDEAL_INVESTMENT_RATIO).min(1.0) * INVESTMENT_WEIGHT,
            ideal_target: IDEAL_INVESTMENT_RATIO,
            weight: INVESTMENT_WEIGHT,
        },
        debt: ScoreComponent {
            ratio: debt_ratio,
            score: (1.0 - debt_ratio.min(1.0)) * DEBT_WEIGHT,
            ideal_target: 1.0,
            weight: DEBT_WEIGHT,
        },
        insurance: ScoreComponent {
            ratio: insurance_ratio,
            score: insurance_ratio.min(1.0) * INSURANCE_WEIGHT,
            ideal_target: 1.0,
            weight: INSURANCE_WEIGHT,
        },
        expenses: ScoreComponent {
            ratio: expense_ratio,
            score: (1.0 - (excess_expense / EXPENSE_PENALTY_SPAN).min(1.0)) * EXPENSE_WEIGHT,
            ideal_target: IDEAL_EXPENSE_RATIO,
            weight: EXPENSE_WEIGHT,
        },
    };

    let total_score = components
        .iter()
        .map(|(_, c)| c.score)
        .sum::<f64>()
        .clamp(0.0, 100.0);

    HealthScore {
        total_score,
        grade: HealthGrade::from_score(total_score),
        components,
    }
}

impl HealthGrade {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            HealthGrade::Excellent
        } else if score >= 60.0 {
            HealthGrade::Good
        } else if score >= 40.0 {
            HealthGrade::Fair
        } else {
            HealthGrade::NeedsImprovement
        }
    }
}

/// Improvement suggestions for every metric outside its healthy range.
/// Empty when income is not positive.
pub fn health_recommendations(inputs: &HealthInputs) -> Vec<Recommendation> {
    let income = inputs.income;
    if income <= 0.0 {
        return Vec::new();
    }

    let recommendation = |title: &str, detail: String, action: &str| Recommendation {
        title: title.to_string(),
        detail,
        action: action.to_string(),
    };
    let mut out = Vec::new();

    let savings_ratio = inputs.savings / income;
    if savings_ratio < IDEAL_SAVINGS_RATIO {
        let gap = (IDEAL_SAVINGS_RATIO - savings_ratio) * income;
        out.push(recommendation(
            "Increase Savings",
            format!("{gap:.0}/year needed to reach 20% savings rate"),
            "Set up automatic transfers to savings account",
        ));
    }

    let investment_multiple = inputs.investments / income;
    let target_multiple = investing_years(inputs.age) as f64;
    if investment_multiple < target_multiple {
        let gap = (target_multiple - investment_multiple) * income;
        out.push(recommendation(
            "Boost Investments",
            format!("{gap:.0} needed to reach {target_multiple:.1}x income"),
            "Increase SIP amounts or start new investments",
        ));
    }

    let debt_ratio = inputs.liabilities / (income * DEBT_INCOME_SHARE);
    if debt_ratio > 1.0 {
        out.push(recommendation(
            "Reduce Debt",
            format!("High debt ratio: {debt_ratio:.1} (should be <1.0)"),
            "Prioritize high-interest debt repayment",
        ));
    }

    let recommended_cover = income * INCOME_REPLACEMENT_MULTIPLE;
    if inputs.insurance_cover < recommended_cover {
        let gap = recommended_cover - inputs.insurance_cover;
        out.push(recommendation(
            "Increase Insurance",
            format!("{gap:.0} additional coverage needed"),
            "Consider term insurance for life coverage",
        ));
    }

    let expense_ratio = inputs.expenses / income;
    if expense_ratio > IDEAL_EXPENSE_RATIO {
        out.push(recommendation(
            "Reduce Expenses",
            format!(
                "High expense ratio: {:.1}% (should be <60%)",
                expense_ratio * 100.0
            ),
            "Track spending and identify areas to cut back",
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, proptest};

    const EPS: f64 = 1e-9;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn ideal_inputs() -> HealthInputs {
        // age 35 => 10 investing years, so 2x ideal means 20x income invested
        HealthInputs {
            income: 1_000_000.0,
            expenses: 600_000.0,
            savings: 200_000.0,
            investments: 20_000_000.0,
            liabilities: 0.0,
            insurance_cover: 10_000_000.0,
            age: 35,
        }
    }

    #[test]
    fn insurance_need_sums_components() {
        let need = compute_insurance_need(35, 1_200_000.0, 2, 200_000.0, 1_500_000.0);
        assert_approx(need.components.income_replacement, 12_000_000.0);
        assert_approx(need.components.liabilities_cover, 240_000.0);
        assert_approx(need.components.education_cover, 1_000_000.0);
        assert_approx(need.total_needs, 13_240_000.0);
        assert_approx(need.additional_needed, 11_740_000.0);
    }

    #[test]
    fn insurance_need_floors_additional_at_zero() {
        let need = compute_insurance_need(40, 100_000.0, 0, 0.0, 5_000_000.0);
        assert_approx(need.additional_needed, 0.0);
    }

    #[test]
    fn ideal_ratios_score_one_hundred() {
        let score = compute_health_score(&ideal_inputs());
        assert_approx(score.total_score, 100.0);
        assert_eq!(score.grade, HealthGrade::Excellent);
        assert!(health_recommendations(&ideal_inputs()).is_empty());
    }

    #[test]
    fn zero_income_yields_finite_zero_ratios() {
        let inputs = HealthInputs {
            income: 0.0,
            ..ideal_inputs()
        };
        let score = compute_health_score(&inputs);
        for (_, component) in score.components.iter() {
            assert_approx(component.ratio, 0.0);
            assert!(component.score.is_finite());
        }
        assert_approx(score.components.savings.score, 0.0);
        assert_approx(score.components.investments.score, 0.0);
        assert_approx(score.components.insurance.score, 0.0);
        // zero debt and expense ratios still read as healthy
        assert_approx(score.total_score, 35.0);
        assert!(health_recommendations(&inputs).is_empty());
    }

    #[test]
    fn young_savers_use_five_year_investment_floor() {
        let inputs = HealthInputs {
            age: 22,
            investments: 5_000_000.0,
            ..ideal_inputs()
        };
        let score = compute_health_score(&inputs);
        assert_approx(score.components.investments.ratio, 1.0);
        assert_approx(score.components.investments.score, 12.5);
    }

    #[test]
    fn expense_score_zeroed_at_full_income_spend() {
        let inputs = HealthInputs {
            expenses: 1_000_000.0,
            ..ideal_inputs()
        };
        let score = compute_health_score(&inputs);
        assert_approx(score.components.expenses.score, 0.0);

        let partial = compute_health_score(&HealthInputs {
            expenses: 800_000.0,
            ..ideal_inputs()
        });
        assert_approx(partial.components.expenses.score, 7.5);
    }

    #[test]
    fn recommendations_flag_each_weak_metric() {
        let inputs = HealthInputs {
            income: 1_000_000.0,
            expenses: 900_000.0,
            savings: 50_000.0,
            investments: 100_000.0,
            liabilities: 800_000.0,
            insurance_cover: 0.0,
            age: 30,
        };
        let titles: Vec<String> = health_recommendations(&inputs)
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(
            titles,
            vec![
                "Increase Savings",
                "Boost Investments",
                "Reduce Debt",
                "Increase Insurance",
                "Reduce Expenses",
            ]
        );
    }

    #[test]
    fn grade_thresholds() {
        assert_eq!(HealthGrade::from_score(80.0), HealthGrade::Excellent);
        assert_eq!(HealthGrade::from_score(79.9), HealthGrade::Good);
        assert_eq!(HealthGrade::from_score(40.0), HealthGrade::Fair);
        assert_eq!(HealthGrade::from_score(39.0), HealthGrade::NeedsImprovement);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_components_bounded_by_weight(
            income in 0u32..5_000_000,
            expenses in 0u32..6_000_000,
            savings in 0u32..3_000_000,
            investments in 0u32..50_000_000,
            liabilities in 0u32..10_000_000,
            cover in 0u32..100_000_000,
            age in 18u32..80
        ) {
            let inputs = HealthInputs {
                income: income as f64,
                expenses: expenses as f64,
                savings: savings as f64,
                investments: investments as f64,
                liabilities: liabilities as f64,
                insurance_cover: cover as f64,
                age,
            };
            let score = compute_health_score(&inputs);
            let mut sum = 0.0;
            for (_, component) in score.components.iter() {
                prop_assert!(component.score >= 0.0 && component.score <= component.weight + 1e-9);
                sum += component.score;
            }
            prop_assert!((0.0..=100.0).contains(&score.total_score));
            prop_assert!((sum - score.total_score).abs() <= 1e-9);
        }
    }
}
