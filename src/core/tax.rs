use super::types::{
    DeductionLimit, GstCategory, GstResult, SlabBreakdown, TaxRegime, TaxResult, TaxSavingOption,
};

pub const CESS_RATE: f64 = 0.04;

const NEW_REGIME_SLABS: [(f64, f64); 7] = [
    (250_000.0, 0.0),
    (500_000.0, 0.05),
    (750_000.0, 0.10),
    (1_000_000.0, 0.15),
    (1_250_000.0, 0.20),
    (1_500_000.0, 0.25),
    (f64::INFINITY, 0.30),
];

const OLD_REGIME_SLABS: [(f64, f64); 4] = [
    (250_000.0, 0.0),
    (500_000.0, 0.05),
    (1_000_000.0, 0.20),
    (f64::INFINITY, 0.30),
];

const SECTION_80C_LIMIT: f64 = 150_000.0;
const SECTION_80C_NEW_REGIME_INCOME: f64 = 750_000.0;
const HOME_LOAN_INTEREST_CAP: f64 = 200_000.0;

/// Upper limits and marginal rates, ascending.
pub fn slab_table(regime: TaxRegime) -> &'static [(f64, f64)] {
    match regime {
        TaxRegime::New => &NEW_REGIME_SLABS,
        TaxRegime::Old => &OLD_REGIME_SLABS,
    }
}

pub fn compute_income_tax(gross_income: f64, regime: TaxRegime, deductions: f64) -> TaxResult {
    let taxable_income = (gross_income - deductions).max(0.0);

    let mut base_tax = 0.0;
    let mut prev_limit = 0.0;
    let mut slab_breakdown = Vec::new();
    for &(limit, rate) in slab_table(regime) {
        if taxable_income <= prev_limit {
            break;
        }
        let taxed_amount = taxable_income.min(limit) - prev_limit;
        let tax_on_slab = taxed_amount * rate;
        base_tax += tax_on_slab;
        slab_breakdown.push(SlabBreakdown {
            from: prev_limit,
            to: limit.is_finite().then_some(limit),
            rate: rate * 100.0,
            taxed_amount,
            tax_on_slab,
        });
        prev_limit = limit;
    }

    let cess = base_tax * CESS_RATE;
    let total_tax = base_tax + cess;
    let effective_rate = if gross_income > 0.0 {
        total_tax / gross_income * 100.0
    } else {
        0.0
    };

    TaxResult {
        regime,
        gross_income,
        deductions,
        taxable_income,
        base_tax,
        cess,
        total_tax,
        effective_rate,
        slab_breakdown,
    }
}

pub fn gst_rate(category: GstCategory) -> f64 {
    match category {
        GstCategory::Essential => 0.05,
        GstCategory::Standard => 0.12,
        GstCategory::Luxury => 0.18,
        GstCategory::Special => 0.28,
    }
}

pub fn compute_gst(amount: f64, category: &str) -> GstResult {
    let category = GstCategory::from_label(category);
    let rate = gst_rate(category);
    let gst_amount = amount * rate;
    GstResult {
        category,
        base_price: amount,
        rate,
        rate_pct: rate * 100.0,
        gst_amount,
        total: amount + gst_amount,
    }
}

pub fn tax_saving_options(income: f64, regime: TaxRegime) -> Vec<TaxSavingOption> {
    let option = |name: &str, limit: DeductionLimit, description: &str| TaxSavingOption {
        name: name.to_string(),
        limit,
        description: description.to_string(),
    };

    let mut options = Vec::new();
    if regime == TaxRegime::Old || income > SECTION_80C_NEW_REGIME_INCOME {
        options.push(option(
            "Section 80C (ELSS, PPF, etc.)",
            DeductionLimit::Amount(SECTION_80C_LIMIT),
            "Invest in tax-saving instruments",
        ));
    }

    match regime {
        TaxRegime::Old => {
            options.push(option(
                "Section 80D (Health Insurance)",
                DeductionLimit::Amount(25_000.0),
                "Health insurance premium",
            ));
            options.push(option(
                "NPS (Additional 50k)",
                DeductionLimit::Amount(50_000.0),
                "National Pension Scheme contribution",
            ));
            options.push(option(
                "Home Loan Interest",
                DeductionLimit::Amount(HOME_LOAN_INTEREST_CAP.min(income.max(0.0) * 0.3)),
                "Interest on home loan",
            ));
            options.push(option(
                "Education Loan Interest",
                DeductionLimit::FullAmount,
                "Interest on education loan",
            ));
            options.push(option(
                "Donations (80G)",
                DeductionLimit::Varies,
                "Eligible charitable donations",
            ));
        }
        TaxRegime::New => {
            options.push(option(
                "NPS (Employer Contribution)",
                DeductionLimit::Amount(50_000.0),
                "Employer's NPS contribution",
            ));
        }
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, proptest};

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn zero_income_has_no_tax_and_zero_effective_rate() {
        for regime in [TaxRegime::New, TaxRegime::Old] {
            let result = compute_income_tax(0.0, regime, 0.0);
            assert_approx(result.total_tax, 0.0);
            assert_approx(result.effective_rate, 0.0);
            assert!(result.slab_breakdown.is_empty());
        }
    }

    #[test]
    fn new_regime_matches_hand_calculation() {
        // 0 + 12,500 + 25,000 + 37,500 + 50,000 + 0.25 * 100,000
        let result = compute_income_tax(1_350_000.0, TaxRegime::New, 0.0);
        assert_approx(result.base_tax, 150_000.0);
        assert_approx(result.cess, 6_000.0);
        assert_approx(result.total_tax, 156_000.0);
        assert_eq!(result.slab_breakdown.len(), 6);
        let last = result.slab_breakdown.last().expect("slab expected");
        assert_approx(last.from, 1_250_000.0);
        assert_eq!(last.to, Some(1_500_000.0));
        assert_approx(last.rate, 25.0);
        assert_approx(last.taxed_amount, 100_000.0);
    }

    #[test]
    fn old_regime_top_slab_is_open_ended() {
        let result = compute_income_tax(1_200_000.0, TaxRegime::Old, 0.0);
        // 12,500 + 100,000 + 60,000
        assert_approx(result.base_tax, 172_500.0);
        let last = result.slab_breakdown.last().expect("slab expected");
        assert_eq!(last.to, None);
        assert_approx(last.taxed_amount, 200_000.0);
    }

    #[test]
    fn effective_rate_divides_by_gross_not_taxable_income() {
        let result = compute_income_tax(1_000_000.0, TaxRegime::Old, 200_000.0);
        assert_approx(result.taxable_income, 800_000.0);
        // 12,500 + 60,000 = 72,500 base
        assert_approx(result.total_tax, 75_400.0);
        assert_approx(result.effective_rate, 7.54);
    }

    #[test]
    fn deductions_above_income_floor_taxable_at_zero() {
        let result = compute_income_tax(100_000.0, TaxRegime::New, 300_000.0);
        assert_approx(result.taxable_income, 0.0);
        assert_approx(result.total_tax, 0.0);
    }

    #[test]
    fn gst_rates_per_category_and_unknown_fallback() {
        let essential = compute_gst(1_000.0, "Essential");
        assert_approx(essential.gst_amount, 50.0);
        assert_approx(essential.total, 1_050.0);

        let special = compute_gst(1_000.0, "Special");
        assert_approx(special.rate_pct, 28.0);

        let unknown = compute_gst(1_000.0, "Gadgets");
        let standard = compute_gst(1_000.0, "Standard");
        assert_eq!(unknown.category, GstCategory::Standard);
        assert_approx(unknown.rate, standard.rate);
    }

    #[test]
    fn tax_saving_options_differ_by_regime() {
        let old = tax_saving_options(600_000.0, TaxRegime::Old);
        assert_eq!(old.len(), 6);
        assert_eq!(old[3].limit, DeductionLimit::Amount(180_000.0));
        assert_eq!(old[4].limit, DeductionLimit::FullAmount);

        let new_low = tax_saving_options(600_000.0, TaxRegime::New);
        assert_eq!(new_low.len(), 1);
        assert_eq!(new_low[0].name, "NPS (Employer Contribution)");

        let new_high = tax_saving_options(900_000.0, TaxRegime::New);
        assert_eq!(new_high.len(), 2);
        assert_eq!(new_high[0].limit, DeductionLimit::Amount(SECTION_80C_LIMIT));
    }

    #[test]
    fn home_loan_interest_is_capped() {
        let options = tax_saving_options(5_000_000.0, TaxRegime::Old);
        let home_loan = options
            .iter()
            .find(|o| o.name == "Home Loan Interest")
            .expect("home loan option");
        assert_eq!(home_loan.limit, DeductionLimit::Amount(HOME_LOAN_INTEREST_CAP));
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_slabs_cover_taxable_income_and_cess_is_four_percent(
            income in 0u32..5_000_000,
            deductions in 0u32..400_000,
            old in proptest::bool::ANY
        ) {
            let regime = if old { TaxRegime::Old } else { TaxRegime::New };
            let result = compute_income_tax(income as f64, regime, deductions as f64);

            let covered: f64 = result.slab_breakdown.iter().map(|s| s.taxed_amount).sum();
            prop_assert!((covered - result.taxable_income).abs() <= 1e-6);
            prop_assert!((result.total_tax - result.base_tax * 1.04).abs() <= 1e-6);

            let mut expected_from = 0.0;
            for slab in &result.slab_breakdown {
                prop_assert!((slab.from - expected_from).abs() <= 1e-9);
                prop_assert!(slab.taxed_amount > 0.0);
                expected_from = slab.to.unwrap_or(f64::INFINITY);
            }
            prop_assert!(result.effective_rate >= 0.0 && result.effective_rate < 31.2 + 1e-9);
        }
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(32))]

        #[test]
        fn prop_gst_total_is_base_plus_tax(amount in 0u32..10_000_000, idx in 0usize..5) {
            let label = ["Essential", "Standard", "Luxury", "Special", "Other"][idx];
            let result = compute_gst(amount as f64, label);
            prop_assert!((result.total - (result.base_price + result.gst_amount)).abs() <= 1e-6);
        }
    }
}
