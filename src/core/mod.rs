mod advisor;
mod error;
mod forecast;
mod growth;
mod health;
mod optimizer;
mod tax;
mod types;

pub use advisor::{
    bulk_purchase_analysis, expense_gst_breakdown, insurance_cost_comparison, spending_equivalents,
};
pub use error::{EngineError, Result};
pub use forecast::{
    DEFAULT_BASE_YEAR, cumulative_savings, forecast_spending, forecast_spending_with_rng,
    month_label, potential_investment_value,
};
pub use growth::{
    DEFAULT_FUTURE_VALUE_INFLATION, DEFAULT_FUTURE_VALUE_RATE, DEFAULT_GROWTH_RATE,
    DEFAULT_INFLATION, compute_growth, compute_opportunity_cost, future_value,
};
pub use health::{compute_health_score, compute_insurance_need, health_recommendations};
pub use optimizer::{
    CategoryBounds, ESSENTIAL_FLOOR, ESSENTIAL_KEYWORDS, MIN_SPEND_SHARE, is_essential_keyword,
    optimize_budget, optimize_budget_detailed, summarize_optimization, value_efficiency,
};
pub use tax::{CESS_RATE, compute_gst, compute_income_tax, gst_rate, slab_table, tax_saving_options};
pub use types::{
    BulkPurchaseAnalysis, CategoryChange, DeductionLimit, ExpenseBreakdown, ExpenseGstLine,
    ForecastMonth, FutureValue, GrowthMode, GrowthResult, GrowthYear, GstCategory, GstResult,
    HealthComponents, HealthGrade, HealthInputs, HealthScore, InsuranceComponents,
    InsuranceCostComparison, InsuranceNeed, OpportunityCost, OpportunityYear, OptimizationOutcome,
    OptimizationSummary, OptimizedAllocation, Recommendation, ScoreComponent, SlabBreakdown,
    SpendingCategory, SpendingEquivalent, SpendingMap, TaxRegime, TaxResult, TaxSavingOption,
};
