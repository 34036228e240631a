use std::collections::BTreeMap;
use std::net::SocketAddr;

use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::core::{
    BulkPurchaseAnalysis, DEFAULT_BASE_YEAR, DEFAULT_FUTURE_VALUE_INFLATION,
    DEFAULT_FUTURE_VALUE_RATE, DEFAULT_GROWTH_RATE, DEFAULT_INFLATION, EngineError,
    ExpenseBreakdown, ForecastMonth, FutureValue, GrowthMode, GrowthResult, GstResult, HealthInputs,
    HealthScore, InsuranceCostComparison, InsuranceNeed, OpportunityCost, OptimizationSummary,
    OptimizedAllocation, Recommendation, SpendingCategory, SpendingEquivalent, SpendingMap,
    TaxRegime, TaxResult, TaxSavingOption, bulk_purchase_analysis, compute_growth, compute_gst,
    compute_health_score, compute_income_tax, compute_insurance_need, compute_opportunity_cost,
    cumulative_savings, expense_gst_breakdown, forecast_spending_with_rng, future_value,
    health_recommendations, insurance_cost_comparison, optimize_budget_detailed,
    potential_investment_value, spending_equivalents, summarize_optimization, tax_saving_options,
    value_efficiency,
};

pub const MAX_YEARS: u32 = 100;
pub const MAX_FORECAST_MONTHS: u32 = 120;

/// Figures used wherever a request leaves a field out.
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialProfile {
    pub income: f64,
    pub expenses: f64,
    pub savings: f64,
    pub investments: f64,
    pub liabilities: f64,
    pub insurance_cover: f64,
    pub age: u32,
    pub dependents: u32,
    pub tax_regime: TaxRegime,
    pub monthly_income: f64,
    pub min_savings: f64,
    pub risk_appetite: f64,
    pub spending: SpendingMap,
}

impl Default for FinancialProfile {
    fn default() -> Self {
        Self {
            income: 1_200_000.0,
            expenses: 720_000.0,
            savings: 300_000.0,
            investments: 800_000.0,
            liabilities: 200_000.0,
            insurance_cover: 1_500_000.0,
            age: 35,
            dependents: 2,
            tax_regime: TaxRegime::New,
            monthly_income: 60_000.0,
            min_savings: 10_000.0,
            risk_appetite: 0.5,
            spending: default_spending(),
        }
    }
}

pub fn default_spending() -> SpendingMap {
    let entries = [
        ("Rent", 15_000.0, 6, true),
        ("Food", 8_000.0, 8, true),
        ("Transport", 3_000.0, 5, true),
        ("Entertainment", 5_000.0, 7, false),
        ("Shopping", 4_000.0, 4, false),
    ];
    entries
        .into_iter()
        .map(|(name, amount, happiness, essential)| {
            (
                name.to_string(),
                SpendingCategory {
                    amount,
                    happiness,
                    essential,
                },
            )
        })
        .collect()
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiTaxRegime {
    #[serde(alias = "New")]
    New,
    #[serde(alias = "Old")]
    Old,
}

impl From<ApiTaxRegime> for TaxRegime {
    fn from(value: ApiTaxRegime) -> Self {
        match value {
            ApiTaxRegime::New => TaxRegime::New,
            ApiTaxRegime::Old => TaxRegime::Old,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiGrowthMode {
    #[serde(alias = "lump-sum", alias = "lumpSum")]
    Lumpsum,
    #[serde(alias = "sip", alias = "monthly")]
    Recurring,
}

impl From<ApiGrowthMode> for GrowthMode {
    fn from(value: ApiGrowthMode) -> Self {
        match value {
            ApiGrowthMode::Lumpsum => GrowthMode::Lumpsum,
            ApiGrowthMode::Recurring => GrowthMode::Recurring,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct TaxPayload {
    income: Option<f64>,
    regime: Option<ApiTaxRegime>,
    deductions: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct GstPayload {
    amount: Option<f64>,
    category: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct GrowthPayload {
    principal: Option<f64>,
    years: Option<u32>,
    rate: Option<f64>,
    mode: Option<ApiGrowthMode>,
    inflation: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct InsurancePayload {
    age: Option<u32>,
    income: Option<f64>,
    dependents: Option<u32>,
    liabilities: Option<f64>,
    existing_cover: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct HealthPayload {
    income: Option<f64>,
    expenses: Option<f64>,
    savings: Option<f64>,
    investments: Option<f64>,
    liabilities: Option<f64>,
    insurance_cover: Option<f64>,
    age: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct OpportunityPayload {
    amount: Option<f64>,
    years: Option<u32>,
    rate: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct OptimizePayload {
    income: Option<f64>,
    spending: Option<SpendingMap>,
    min_savings: Option<f64>,
    risk_appetite: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ForecastPayload {
    budget: Option<OptimizedAllocation>,
    months: Option<u32>,
    income: Option<f64>,
    seed: Option<u64>,
    base_year: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct TaxSavingPayload {
    income: Option<f64>,
    regime: Option<ApiTaxRegime>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct BulkPurchasePayload {
    unit_price: Option<f64>,
    bulk_price: Option<f64>,
    usage_rate: Option<f64>,
    shelf_life: Option<f64>,
    storage_cost: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct FutureValuePayload {
    amount: Option<f64>,
    years: Option<f64>,
    rate: Option<f64>,
    inflation: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ExpenseBreakdownPayload {
    expenses: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct InsuranceComparisonPayload {
    income: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    score: HealthScore,
    recommendations: Vec<Recommendation>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OptimizeResponse {
    allocation: OptimizedAllocation,
    objective: f64,
    summary: OptimizationSummary,
    value_efficiency: BTreeMap<String, f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ForecastResponse {
    months: Vec<ForecastMonth>,
    cumulative_savings: Vec<f64>,
    investment_value: FutureValue,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FutureValueResponse {
    value: FutureValue,
    equivalents: Vec<SpendingEquivalent>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Clone, PartialEq)]
enum ApiError {
    BadRequest(String),
    Unprocessable(String),
}

impl From<EngineError> for ApiError {
    fn from(value: EngineError) -> Self {
        match value {
            EngineError::InvalidInput(msg) => ApiError::BadRequest(msg),
            other => ApiError::Unprocessable(other.to_string()),
        }
    }
}

fn require_non_negative(name: &str, value: f64) -> Result<f64, ApiError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ApiError::BadRequest(format!("{name} must be >= 0")));
    }
    Ok(value)
}

fn require_years(name: &str, value: u32) -> Result<u32, ApiError> {
    if value == 0 || value > MAX_YEARS {
        return Err(ApiError::BadRequest(format!(
            "{name} must be between 1 and {MAX_YEARS}"
        )));
    }
    Ok(value)
}

fn percent_to_rate(name: &str, value: f64) -> Result<f64, ApiError> {
    if !value.is_finite() || value <= -100.0 {
        return Err(ApiError::BadRequest(format!("{name} must be > -100")));
    }
    Ok(value / 100.0)
}

fn evaluate_tax(payload: TaxPayload) -> Result<TaxResult, ApiError> {
    let profile = FinancialProfile::default();
    let income = require_non_negative("income", payload.income.unwrap_or(profile.income))?;
    let deductions = require_non_negative("deductions", payload.deductions.unwrap_or(0.0))?;
    let regime = payload.regime.map(Into::into).unwrap_or(profile.tax_regime);
    Ok(compute_income_tax(income, regime, deductions))
}

fn evaluate_gst(payload: GstPayload) -> Result<GstResult, ApiError> {
    let amount = require_non_negative("amount", payload.amount.unwrap_or(0.0))?;
    let category = payload.category.unwrap_or_else(|| "Standard".to_string());
    Ok(compute_gst(amount, &category))
}

fn evaluate_growth(payload: GrowthPayload) -> Result<GrowthResult, ApiError> {
    let principal = payload.principal.unwrap_or(100_000.0);
    if !principal.is_finite() || principal <= 0.0 {
        return Err(ApiError::BadRequest("principal must be > 0".to_string()));
    }
    let years = require_years("years", payload.years.unwrap_or(10))?;
    let rate = match payload.rate {
        Some(v) => percent_to_rate("rate", v)?,
        None => DEFAULT_GROWTH_RATE,
    };
    let inflation = match payload.inflation {
        Some(v) => percent_to_rate("inflation", v)?,
        None => DEFAULT_INFLATION,
    };
    let mode = payload.mode.map(Into::into).unwrap_or(GrowthMode::Lumpsum);
    Ok(compute_growth(principal, years, rate, mode, inflation))
}

fn evaluate_insurance(payload: InsurancePayload) -> Result<InsuranceNeed, ApiError> {
    let profile = FinancialProfile::default();
    let income = require_non_negative("income", payload.income.unwrap_or(profile.income))?;
    let liabilities = require_non_negative(
        "liabilities",
        payload.liabilities.unwrap_or(profile.liabilities),
    )?;
    let existing_cover = require_non_negative(
        "existingCover",
        payload.existing_cover.unwrap_or(profile.insurance_cover),
    )?;
    Ok(compute_insurance_need(
        payload.age.unwrap_or(profile.age),
        income,
        payload.dependents.unwrap_or(profile.dependents),
        liabilities,
        existing_cover,
    ))
}

fn health_inputs_from_payload(payload: HealthPayload) -> Result<HealthInputs, ApiError> {
    let profile = FinancialProfile::default();
    Ok(HealthInputs {
        income: require_non_negative("income", payload.income.unwrap_or(profile.income))?,
        expenses: require_non_negative("expenses", payload.expenses.unwrap_or(profile.expenses))?,
        savings: require_non_negative("savings", payload.savings.unwrap_or(profile.savings))?,
        investments: require_non_negative(
            "investments",
            payload.investments.unwrap_or(profile.investments),
        )?,
        liabilities: require_non_negative(
            "liabilities",
            payload.liabilities.unwrap_or(profile.liabilities),
        )?,
        insurance_cover: require_non_negative(
            "insuranceCover",
            payload.insurance_cover.unwrap_or(profile.insurance_cover),
        )?,
        age: payload.age.unwrap_or(profile.age),
    })
}

fn evaluate_health(payload: HealthPayload) -> Result<HealthResponse, ApiError> {
    let inputs = health_inputs_from_payload(payload)?;
    Ok(HealthResponse {
        score: compute_health_score(&inputs),
        recommendations: health_recommendations(&inputs),
    })
}

fn evaluate_opportunity_cost(payload: OpportunityPayload) -> Result<OpportunityCost, ApiError> {
    let amount = require_non_negative("amount", payload.amount.unwrap_or(0.0))?;
    let years = require_years("years", payload.years.unwrap_or(5))?;
    let rate = match payload.rate {
        Some(v) => percent_to_rate("rate", v)?,
        None => DEFAULT_GROWTH_RATE,
    };
    Ok(compute_opportunity_cost(amount, years, rate))
}

fn validate_spending(spending: &SpendingMap) -> Result<(), ApiError> {
    for (name, category) in spending {
        if name.trim().is_empty() {
            return Err(ApiError::BadRequest(
                "spending category names must not be empty".to_string(),
            ));
        }
        require_non_negative(&format!("spending.{name}.amount"), category.amount)?;
        if !(1..=10).contains(&category.happiness) {
            return Err(ApiError::BadRequest(format!(
                "spending.{name}.happiness must be between 1 and 10"
            )));
        }
    }
    Ok(())
}

fn evaluate_optimize(payload: OptimizePayload) -> Result<OptimizeResponse, ApiError> {
    let profile = FinancialProfile::default();
    let income = payload.income.unwrap_or(profile.monthly_income);
    let income = require_non_negative("income", income)?;
    let min_savings = payload.min_savings.unwrap_or(profile.min_savings);
    let min_savings = require_non_negative("minSavings", min_savings)?;
    let risk_appetite = payload.risk_appetite.unwrap_or(profile.risk_appetite);
    if !(0.0..=1.0).contains(&risk_appetite) {
        return Err(ApiError::BadRequest("riskAppetite must be between 0 and 1".to_string()));
    }
    let spending = payload.spending.unwrap_or(profile.spending);
    validate_spending(&spending)?;

    let outcome = optimize_budget_detailed(income, &spending, min_savings, risk_appetite)?;
    let summary = summarize_optimization(income, &spending, &outcome.allocation);
    Ok(OptimizeResponse {
        value_efficiency: value_efficiency(&spending),
        allocation: outcome.allocation,
        objective: outcome.objective,
        summary,
    })
}

fn evaluate_forecast(payload: ForecastPayload) -> Result<ForecastResponse, ApiError> {
    let profile = FinancialProfile::default();
    let months = payload.months.unwrap_or(12);
    if months == 0 || months > MAX_FORECAST_MONTHS {
        return Err(ApiError::BadRequest(format!(
            "months must be between 1 and {MAX_FORECAST_MONTHS}"
        )));
    }
    let income = payload.income.unwrap_or(profile.monthly_income);
    let income = require_non_negative("income", income)?;
    let budget = match payload.budget {
        Some(budget) => {
            for (name, amount) in &budget {
                require_non_negative(&format!("budget.{name}"), *amount)?;
            }
            budget
        }
        None => profile
            .spending
            .iter()
            .map(|(name, category)| (name.clone(), category.amount))
            .collect(),
    };

    let mut rng = match payload.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let base_year = payload.base_year.unwrap_or(DEFAULT_BASE_YEAR);
    let forecast = forecast_spending_with_rng(&budget, months, base_year, &mut rng);
    let cumulative_savings = cumulative_savings(income, &forecast);
    Ok(ForecastResponse {
        investment_value: potential_investment_value(&cumulative_savings, months),
        months: forecast,
        cumulative_savings,
    })
}

fn evaluate_tax_saving_options(
    payload: TaxSavingPayload,
) -> Result<Vec<TaxSavingOption>, ApiError> {
    let profile = FinancialProfile::default();
    let income = require_non_negative("income", payload.income.unwrap_or(profile.income))?;
    let regime = payload.regime.map(Into::into).unwrap_or(profile.tax_regime);
    Ok(tax_saving_options(income, regime))
}

fn evaluate_bulk_purchase(payload: BulkPurchasePayload) -> Result<BulkPurchaseAnalysis, ApiError> {
    let unit_price = payload.unit_price.unwrap_or(50.0);
    if !unit_price.is_finite() || unit_price <= 0.0 {
        return Err(ApiError::BadRequest("unitPrice must be > 0".to_string()));
    }
    Ok(bulk_purchase_analysis(
        unit_price,
        require_non_negative("bulkPrice", payload.bulk_price.unwrap_or(400.0))?,
        require_non_negative("usageRate", payload.usage_rate.unwrap_or(4.0))?,
        require_non_negative("shelfLife", payload.shelf_life.unwrap_or(6.0))?,
        require_non_negative("storageCost", payload.storage_cost.unwrap_or(0.0))?,
    ))
}

fn evaluate_future_value(payload: FutureValuePayload) -> Result<FutureValueResponse, ApiError> {
    let amount = require_non_negative("amount", payload.amount.unwrap_or(0.0))?;
    let years = require_non_negative("years", payload.years.unwrap_or(5.0))?;
    let rate = match payload.rate {
        Some(v) => percent_to_rate("rate", v)?,
        None => DEFAULT_FUTURE_VALUE_RATE,
    };
    let inflation = match payload.inflation {
        Some(v) => percent_to_rate("inflation", v)?,
        None => DEFAULT_FUTURE_VALUE_INFLATION,
    };
    let value = future_value(amount, years, rate, inflation);
    Ok(FutureValueResponse {
        equivalents: spending_equivalents(value.nominal),
        value,
    })
}

fn evaluate_expense_breakdown(
    payload: ExpenseBreakdownPayload,
) -> Result<ExpenseBreakdown, ApiError> {
    let profile = FinancialProfile::default();
    let expenses = payload.expenses.unwrap_or(profile.expenses);
    Ok(expense_gst_breakdown(require_non_negative("expenses", expenses)?))
}

fn evaluate_insurance_comparison(
    payload: InsuranceComparisonPayload,
) -> Result<InsuranceCostComparison, ApiError> {
    let profile = FinancialProfile::default();
    let income = payload.income.unwrap_or(profile.income);
    Ok(insurance_cost_comparison(require_non_negative("income", income)?))
}

pub fn router() -> Router {
    Router::new()
        .route("/api/tax", get(tax_get_handler).post(tax_post_handler))
        .route("/api/gst", get(gst_get_handler).post(gst_post_handler))
        .route(
            "/api/growth",
            get(growth_get_handler).post(growth_post_handler),
        )
        .route(
            "/api/insurance",
            get(insurance_get_handler).post(insurance_post_handler),
        )
        .route(
            "/api/health",
            get(health_get_handler).post(health_post_handler),
        )
        .route(
            "/api/opportunity-cost",
            get(opportunity_get_handler).post(opportunity_post_handler),
        )
        .route("/api/optimize", post(optimize_handler))
        .route("/api/forecast", post(forecast_handler))
        .route(
            "/api/tax-saving-options",
            get(tax_saving_get_handler).post(tax_saving_post_handler),
        )
        .route(
            "/api/bulk-purchase",
            get(bulk_purchase_get_handler).post(bulk_purchase_post_handler),
        )
        .route(
            "/api/future-value",
            get(future_value_get_handler).post(future_value_post_handler),
        )
        .route(
            "/api/expense-breakdown",
            get(expense_breakdown_get_handler).post(expense_breakdown_post_handler),
        )
        .route(
            "/api/insurance-comparison",
            get(insurance_comparison_get_handler).post(insurance_comparison_post_handler),
        )
        .fallback(not_found_handler)
}

pub async fn run_http_server(host: &str, port: u16) -> std::io::Result<()> {
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let listener = TcpListener::bind(addr).await?;
    info!("OptiSpend HTTP API listening on http://{addr}");

    axum::serve(listener, router()).await
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn tax_get_handler(Query(payload): Query<TaxPayload>) -> Response {
    respond(evaluate_tax(payload))
}

async fn tax_post_handler(Json(payload): Json<TaxPayload>) -> Response {
    respond(evaluate_tax(payload))
}

async fn gst_get_handler(Query(payload): Query<GstPayload>) -> Response {
    respond(evaluate_gst(payload))
}

async fn gst_post_handler(Json(payload): Json<GstPayload>) -> Response {
    respond(evaluate_gst(payload))
}

async fn growth_get_handler(Query(payload): Query<GrowthPayload>) -> Response {
    respond(evaluate_growth(payload))
}

async fn growth_post_handler(Json(payload): Json<GrowthPayload>) -> Response {
    respond(evaluate_growth(payload))
}

async fn insurance_get_handler(Query(payload): Query<InsurancePayload>) -> Response {
    respond(evaluate_insurance(payload))
}

async fn insurance_post_handler(Json(payload): Json<InsurancePayload>) -> Response {
    respond(evaluate_insurance(payload))
}

async fn health_get_handler(Query(payload): Query<HealthPayload>) -> Response {
    respond(evaluate_health(payload))
}

async fn health_post_handler(Json(payload): Json<HealthPayload>) -> Response {
    respond(evaluate_health(payload))
}

async fn opportunity_get_handler(Query(payload): Query<OpportunityPayload>) -> Response {
    respond(evaluate_opportunity_cost(payload))
}

async fn opportunity_post_handler(Json(payload): Json<OpportunityPayload>) -> Response {
    respond(evaluate_opportunity_cost(payload))
}

async fn optimize_handler(Json(payload): Json<OptimizePayload>) -> Response {
    respond(evaluate_optimize(payload))
}

async fn forecast_handler(Json(payload): Json<ForecastPayload>) -> Response {
    respond(evaluate_forecast(payload))
}

async fn tax_saving_get_handler(Query(payload): Query<TaxSavingPayload>) -> Response {
    respond(evaluate_tax_saving_options(payload))
}

async fn tax_saving_post_handler(Json(payload): Json<TaxSavingPayload>) -> Response {
    respond(evaluate_tax_saving_options(payload))
}

async fn bulk_purchase_get_handler(Query(payload): Query<BulkPurchasePayload>) -> Response {
    respond(evaluate_bulk_purchase(payload))
}

async fn bulk_purchase_post_handler(Json(payload): Json<BulkPurchasePayload>) -> Response {
    respond(evaluate_bulk_purchase(payload))
}

async fn future_value_get_handler(Query(payload): Query<FutureValuePayload>) -> Response {
    respond(evaluate_future_value(payload))
}

async fn future_value_post_handler(Json(payload): Json<FutureValuePayload>) -> Response {
    respond(evaluate_future_value(payload))
}

async fn expense_breakdown_get_handler(Query(payload): Query<ExpenseBreakdownPayload>) -> Response {
    respond(evaluate_expense_breakdown(payload))
}

async fn expense_breakdown_post_handler(Json(payload): Json<ExpenseBreakdownPayload>) -> Response {
    respond(evaluate_expense_breakdown(payload))
}

async fn insurance_comparison_get_handler(
    Query(payload): Query<InsuranceComparisonPayload>,
) -> Response {
    respond(evaluate_insurance_comparison(payload))
}

async fn insurance_comparison_post_handler(
    Json(payload): Json<InsuranceComparisonPayload>,
) -> Response {
    respond(evaluate_insurance_comparison(payload))
}

fn respond<T: Serialize>(result: Result<T, ApiError>) -> Response {
    match result {
        Ok(body) => json_response(StatusCode::OK, body),
        Err(ApiError::BadRequest(msg)) => {
            warn!(error = %msg, "rejected request");
            error_response(StatusCode::BAD_REQUEST, &msg)
        }
        Err(ApiError::Unprocessable(msg)) => {
            warn!(error = %msg, "calculation failed");
            error_response(StatusCode::UNPROCESSABLE_ENTITY, &msg)
        }
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}
