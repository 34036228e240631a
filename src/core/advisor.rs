use super::growth::{DEFAULT_GROWTH_RATE, compute_opportunity_cost};
use super::tax::gst_rate;
use super::types::{
    BulkPurchaseAnalysis, ExpenseBreakdown, ExpenseGstLine, GstCategory, InsuranceCostComparison,
    SpendingEquivalent,
};

const EQUIVALENTS: [(f64, &str); 4] = [
    (200_000.0, "years of rent at 20k/month"),
    (50_000.0, "international vacations"),
    (10_000.0, "months of grocery bills"),
    (15_000.0, "new smartphones"),
];

/// Typical household split of annual expenses. Shares add up to 108%, so the
/// allocated total runs above the input.
const EXPENSE_SHARES: [(&str, f64, GstCategory); 10] = [
    ("Housing", 0.25, GstCategory::Standard),
    ("Food", 0.15, GstCategory::Essential),
    ("Transport", 0.10, GstCategory::Standard),
    ("Insurance", 0.08, GstCategory::Standard),
    ("Entertainment", 0.10, GstCategory::Luxury),
    ("Shopping", 0.10, GstCategory::Luxury),
    ("Utilities", 0.08, GstCategory::Essential),
    ("Healthcare", 0.07, GstCategory::Standard),
    ("Education", 0.05, GstCategory::Standard),
    ("Other", 0.10, GstCategory::Standard),
];

const TERM_PREMIUM_SHARE: f64 = 0.01;
const WHOLE_LIFE_MULTIPLE: f64 = 3.0;
const PREMIUM_COMPARISON_YEARS: u32 = 20;

pub fn bulk_purchase_analysis(
    unit_price: f64,
    bulk_price: f64,
    usage_rate: f64,
    shelf_life: f64,
    storage_cost: f64,
) -> BulkPurchaseAnalysis {
    let outlay = bulk_price + storage_cost;
    let usable_units = usage_rate * shelf_life;
    if unit_price <= 0.0 {
        return BulkPurchaseAnalysis {
            worthwhile: false,
            savings: -outlay,
            break_even: 0.0,
        };
    }

    let break_even = outlay / unit_price;
    BulkPurchaseAnalysis {
        worthwhile: usable_units >= break_even,
        savings: unit_price * usable_units - outlay,
        break_even,
    }
}

pub fn expense_gst_breakdown(annual_expenses: f64) -> ExpenseBreakdown {
    let lines: Vec<ExpenseGstLine> = EXPENSE_SHARES
        .iter()
        .map(|&(category, share, gst_category)| {
            let amount = annual_expenses * share;
            ExpenseGstLine {
                category: category.to_string(),
                share,
                amount,
                gst_category,
                gst_amount: amount * gst_rate(gst_category),
            }
        })
        .collect();
    ExpenseBreakdown {
        total_allocated: lines.iter().map(|line| line.amount).sum(),
        total_gst: lines.iter().map(|line| line.gst_amount).sum(),
        lines,
    }
}

/// Term cover priced at 1% of income against whole life at three times that,
/// with the premium gap invested for twenty years.
pub fn insurance_cost_comparison(annual_income: f64) -> InsuranceCostComparison {
    let term_premium = annual_income * TERM_PREMIUM_SHARE;
    let whole_life_premium = term_premium * WHOLE_LIFE_MULTIPLE;
    let premium_difference = whole_life_premium - term_premium;
    let opportunity = compute_opportunity_cost(
        premium_difference,
        PREMIUM_COMPARISON_YEARS,
        DEFAULT_GROWTH_RATE,
    );
    InsuranceCostComparison {
        term_premium,
        whole_life_premium,
        premium_difference,
        years: PREMIUM_COMPARISON_YEARS,
        opportunity_cost: opportunity.total,
    }
}

/// Expresses `value` as counts of familiar purchases.
pub fn spending_equivalents(value: f64) -> Vec<SpendingEquivalent> {
    EQUIVALENTS
        .iter()
        .map(|&(price, description)| SpendingEquivalent {
            count: value / price,
            description: description.to_string(),
        })
        .collect()
}
