use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxRegime {
    New,
    Old,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum GstCategory {
    Essential,
    Standard,
    Luxury,
    Special,
}

impl GstCategory {
    /// Unknown labels fall back to `Standard`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Essential" => GstCategory::Essential,
            "Luxury" => GstCategory::Luxury,
            "Special" => GstCategory::Special,
            _ => GstCategory::Standard,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthMode {
    Lumpsum,
    Recurring,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlabBreakdown {
    pub from: f64,
    /// `None` for the open-ended top slab.
    pub to: Option<f64>,
    pub rate: f64,
    pub taxed_amount: f64,
    pub tax_on_slab: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxResult {
    pub regime: TaxRegime,
    pub gross_income: f64,
    pub deductions: f64,
    pub taxable_income: f64,
    pub base_tax: f64,
    pub cess: f64,
    pub total_tax: f64,
    pub effective_rate: f64,
    pub slab_breakdown: Vec<SlabBreakdown>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GstResult {
    pub category: GstCategory,
    pub base_price: f64,
    pub rate: f64,
    pub rate_pct: f64,
    pub gst_amount: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthYear {
    pub year: u32,
    pub nominal: f64,
    pub real: f64,
    pub growth_pct: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthResult {
    pub mode: GrowthMode,
    pub nominal_final: f64,
    pub real_final: f64,
    pub cagr: f64,
    pub yearly: Vec<GrowthYear>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FutureValue {
    pub nominal: f64,
    pub real: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityYear {
    pub year: u32,
    pub cumulative_value: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityCost {
    pub total: f64,
    pub yearly: Vec<OpportunityYear>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceComponents {
    pub income_replacement: f64,
    pub liabilities_cover: f64,
    pub education_cover: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceNeed {
    pub total_needs: f64,
    pub existing_cover: f64,
    pub additional_needed: f64,
    pub components: InsuranceComponents,
}

/// Inputs to the health scorer and its recommendations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthInputs {
    pub income: f64,
    pub expenses: f64,
    pub savings: f64,
    pub investments: f64,
    pub liabilities: f64,
    pub insurance_cover: f64,
    pub age: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreComponent {
    pub ratio: f64,
    pub score: f64,
    pub ideal_target: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthComponents {
    pub savings: ScoreComponent,
    pub investments: ScoreComponent,
    pub debt: ScoreComponent,
    pub insurance: ScoreComponent,
    pub expenses: ScoreComponent,
}

impl HealthComponents {
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ScoreComponent)> {
        [
            ("savings", &self.savings),
            ("investments", &self.investments),
            ("debt", &self.debt),
            ("insurance", &self.insurance),
            ("expenses", &self.expenses),
        ]
        .into_iter()
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HealthGrade {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthScore {
    pub total_score: f64,
    pub grade: HealthGrade,
    pub components: HealthComponents,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub title: String,
    pub detail: String,
    pub action: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingCategory {
    pub amount: f64,
    pub happiness: u8,
    #[serde(default)]
    pub essential: bool,
}

pub type SpendingMap = BTreeMap<String, SpendingCategory>;

pub type OptimizedAllocation = BTreeMap<String, f64>;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationOutcome {
    pub allocation: OptimizedAllocation,
    pub objective: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryChange {
    pub category: String,
    pub current: f64,
    pub optimized: f64,
    pub happiness: u8,
    pub change_amount: f64,
    pub change_pct: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationSummary {
    pub current_total: f64,
    pub optimized_total: f64,
    pub savings: f64,
    pub savings_rate: f64,
    pub current_avg_happiness: f64,
    pub optimized_avg_happiness: f64,
    pub changes: Vec<CategoryChange>,
    pub top_increases: Vec<CategoryChange>,
    pub top_decreases: Vec<CategoryChange>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastMonth {
    pub month: u32,
    pub label: String,
    pub amounts: BTreeMap<String, f64>,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum DeductionLimit {
    Amount(f64),
    FullAmount,
    Varies,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxSavingOption {
    pub name: String,
    pub limit: DeductionLimit,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkPurchaseAnalysis {
    pub worthwhile: bool,
    pub savings: f64,
    pub break_even: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingEquivalent {
    pub count: f64,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseGstLine {
    pub category: String,
    pub share: f64,
    pub amount: f64,
    pub gst_category: GstCategory,
    pub gst_amount: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseBreakdown {
    pub lines: Vec<ExpenseGstLine>,
    pub total_allocated: f64,
    pub total_gst: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceCostComparison {
    pub term_premium: f64,
    pub whole_life_premium: f64,
    pub premium_difference: f64,
    pub years: u32,
    pub opportunity_cost: f64,
}
