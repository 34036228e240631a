//! Command-line interface definitions and command dispatch
//!
//! Every calculation prints its result as pretty JSON on stdout. Values the
//! user leaves out fall back to the same default profile the HTTP API uses.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::api::{FinancialProfile, MAX_FORECAST_MONTHS, MAX_YEARS, run_http_server};
use crate::core::{
    DEFAULT_BASE_YEAR, GrowthMode, HealthInputs, OptimizedAllocation, SpendingMap, TaxRegime,
    TaxResult, TaxSavingOption, bulk_purchase_analysis, compute_growth, compute_gst,
    compute_health_score, compute_income_tax, compute_insurance_need, compute_opportunity_cost,
    cumulative_savings, expense_gst_breakdown, forecast_spending_with_rng, health_recommendations,
    insurance_cost_comparison, optimize_budget_detailed, potential_investment_value,
    summarize_optimization, tax_saving_options,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum CliTaxRegime {
    New,
    Old,
}

impl From<CliTaxRegime> for TaxRegime {
    fn from(value: CliTaxRegime) -> Self {
        match value {
            CliTaxRegime::New => TaxRegime::New,
            CliTaxRegime::Old => TaxRegime::Old,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum CliGrowthMode {
    Lumpsum,
    Recurring,
}

impl From<CliGrowthMode> for GrowthMode {
    fn from(value: CliGrowthMode) -> Self {
        match value {
            CliGrowthMode::Lumpsum => GrowthMode::Lumpsum,
            CliGrowthMode::Recurring => GrowthMode::Recurring,
        }
    }
}

/// OptiSpend - personal finance what-if calculator
#[derive(Parser, Debug)]
#[command(name = "optispend")]
#[command(about = "Tax, growth, insurance, health score and budget optimisation calculator")]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the JSON HTTP API
    Serve {
        #[arg(short, long, default_value_t = 8080)]
        port: u16,

        #[arg(long, default_value = "0.0.0.0")]
        host: String,
    },

    /// Income tax with slab breakdown
    Tax {
        #[arg(long)]
        income: Option<f64>,
        #[arg(long, value_enum, default_value_t = CliTaxRegime::New)]
        regime: CliTaxRegime,
        #[arg(long, default_value_t = 0.0)]
        deductions: f64,
        /// Also list deductions available under the regime
        #[arg(long)]
        options: bool,
    },

    /// GST on a purchase
    Gst {
        #[arg(long)]
        amount: f64,
        /// Essential, Standard, Luxury or Special; anything else is taxed as Standard
        #[arg(long, default_value = "Standard")]
        category: String,
    },

    /// Investment growth projection
    Growth {
        /// Lump sum, or monthly contribution in recurring mode
        #[arg(long)]
        principal: f64,
        #[arg(long, default_value_t = 10)]
        years: u32,
        #[arg(long, default_value_t = 12.0, help = "Expected annual return in percent")]
        rate: f64,
        #[arg(long, value_enum, default_value_t = CliGrowthMode::Lumpsum)]
        mode: CliGrowthMode,
        #[arg(long, default_value_t = 6.0, help = "Annual inflation in percent")]
        inflation: f64,
    },

    /// Life insurance cover estimate
    Insurance {
        #[arg(long)]
        age: Option<u32>,
        #[arg(long)]
        income: Option<f64>,
        #[arg(long)]
        dependents: Option<u32>,
        #[arg(long)]
        liabilities: Option<f64>,
        #[arg(long)]
        existing_cover: Option<f64>,
    },

    /// Financial health score and recommendations
    Health {
        #[arg(long)]
        income: Option<f64>,
        #[arg(long)]
        expenses: Option<f64>,
        #[arg(long)]
        savings: Option<f64>,
        #[arg(long)]
        investments: Option<f64>,
        #[arg(long)]
        liabilities: Option<f64>,
        #[arg(long)]
        insurance_cover: Option<f64>,
        #[arg(long)]
        age: Option<u32>,
    },

    /// What a one-off spend would have grown to if invested
    OpportunityCost {
        #[arg(long)]
        amount: f64,
        #[arg(long, default_value_t = 5)]
        years: u32,
        #[arg(long, default_value_t = 12.0, help = "Alternative annual return in percent")]
        rate: f64,
    },

    /// Optimise a spending plan with the budget linear program
    Optimize {
        /// JSON object of category -> {amount, happiness, essential}; defaults to a sample plan
        #[arg(long)]
        spending: Option<PathBuf>,
        /// Monthly income
        #[arg(long)]
        income: Option<f64>,
        #[arg(long)]
        min_savings: Option<f64>,
        /// Between 0 (protect savings) and 1 (chase happiness)
        #[arg(long)]
        risk_appetite: Option<f64>,
    },

    /// Noisy month-by-month spending forecast
    Forecast {
        /// JSON object of category -> monthly amount; defaults to the sample plan amounts
        #[arg(long)]
        budget: Option<PathBuf>,
        #[arg(long, default_value_t = 12)]
        months: u32,
        /// Monthly income used for the cumulative savings column
        #[arg(long)]
        income: Option<f64>,
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Annual expenses split by category with the GST each share carries
    ExpenseBreakdown {
        #[arg(long)]
        expenses: Option<f64>,
    },

    /// Term against whole-life premiums and the cost of the difference
    InsuranceComparison {
        #[arg(long)]
        income: Option<f64>,
    },

    /// Whether buying in bulk pays off
    BulkPurchase {
        #[arg(long)]
        unit_price: f64,
        #[arg(long)]
        bulk_price: f64,
        /// Units used per month
        #[arg(long)]
        usage_rate: f64,
        /// Months before the stock expires
        #[arg(long)]
        shelf_life: f64,
        #[arg(long, default_value_t = 0.0)]
        storage_cost: f64,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TaxReport {
    tax: TaxResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    saving_options: Option<Vec<TaxSavingOption>>,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &PathBuf) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid JSON in {}", path.display()))
}

fn ensure_non_negative(flag: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        bail!("--{flag} must be >= 0");
    }
    Ok(value)
}

fn ensure_years(flag: &str, value: u32) -> Result<u32> {
    if value == 0 || value > MAX_YEARS {
        bail!("--{flag} must be between 1 and {MAX_YEARS}");
    }
    Ok(value)
}

/// Percent flag to a fraction.
fn percent_to_rate(flag: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value <= -100.0 {
        bail!("--{flag} must be > -100");
    }
    Ok(value / 100.0)
}

pub async fn run(command: Commands) -> Result<()> {
    let profile = FinancialProfile::default();
    match command {
        Commands::Serve { port, host } => {
            run_http_server(&host, port).await?;
        }
        Commands::Tax {
            income,
            regime,
            deductions,
            options,
        } => {
            let income = ensure_non_negative("income", income.unwrap_or(profile.income))?;
            let deductions = ensure_non_negative("deductions", deductions)?;
            let regime = regime.into();
            print_json(&TaxReport {
                tax: compute_income_tax(income, regime, deductions),
                saving_options: options.then(|| tax_saving_options(income, regime)),
            })?;
        }
        Commands::Gst { amount, category } => {
            print_json(&compute_gst(ensure_non_negative("amount", amount)?, &category))?;
        }
        Commands::Growth {
            principal,
            years,
            rate,
            mode,
            inflation,
        } => {
            if !principal.is_finite() || principal <= 0.0 {
                bail!("--principal must be > 0");
            }
            print_json(&compute_growth(
                principal,
                ensure_years("years", years)?,
                percent_to_rate("rate", rate)?,
                mode.into(),
                percent_to_rate("inflation", inflation)?,
            ))?;
        }
        Commands::Insurance {
            age,
            income,
            dependents,
            liabilities,
            existing_cover,
        } => {
            print_json(&compute_insurance_need(
                age.unwrap_or(profile.age),
                ensure_non_negative("income", income.unwrap_or(profile.income))?,
                dependents.unwrap_or(profile.dependents),
                ensure_non_negative("liabilities", liabilities.unwrap_or(profile.liabilities))?,
                ensure_non_negative(
                    "existing-cover",
                    existing_cover.unwrap_or(profile.insurance_cover),
                )?,
            ))?;
        }
        Commands::Health {
            income,
            expenses,
            savings,
            investments,
            liabilities,
            insurance_cover,
            age,
        } => {
            let inputs = HealthInputs {
                income: ensure_non_negative("income", income.unwrap_or(profile.income))?,
                expenses: ensure_non_negative("expenses", expenses.unwrap_or(profile.expenses))?,
                savings: ensure_non_negative("savings", savings.unwrap_or(profile.savings))?,
                investments: ensure_non_negative(
                    "investments",
                    investments.unwrap_or(profile.investments),
                )?,
                liabilities: ensure_non_negative(
                    "liabilities",
                    liabilities.unwrap_or(profile.liabilities),
                )?,
                insurance_cover: ensure_non_negative(
                    "insurance-cover",
                    insurance_cover.unwrap_or(profile.insurance_cover),
                )?,
                age: age.unwrap_or(profile.age),
            };
            print_json(&serde_json::json!({
                "score": compute_health_score(&inputs),
                "recommendations": health_recommendations(&inputs),
            }))?;
        }
        Commands::OpportunityCost {
            amount,
            years,
            rate,
        } => {
            print_json(&compute_opportunity_cost(
                ensure_non_negative("amount", amount)?,
                ensure_years("years", years)?,
                percent_to_rate("rate", rate)?,
            ))?;
        }
        Commands::Optimize {
            spending,
            income,
            min_savings,
            risk_appetite,
        } => {
            let spending: SpendingMap = match spending {
                Some(path) => read_json(&path)?,
                None => profile.spending.clone(),
            };
            for (name, category) in &spending {
                if !category.amount.is_finite() || category.amount < 0.0 {
                    bail!("amount for {name} must be >= 0");
                }
                if !(1..=10).contains(&category.happiness) {
                    bail!("happiness for {name} must be between 1 and 10");
                }
            }
            let income = ensure_non_negative("income", income.unwrap_or(profile.monthly_income))?;
            let min_savings =
                ensure_non_negative("min-savings", min_savings.unwrap_or(profile.min_savings))?;
            let risk_appetite = risk_appetite.unwrap_or(profile.risk_appetite);
            let outcome = optimize_budget_detailed(income, &spending, min_savings, risk_appetite)
                .context("budget optimisation failed")?;
            print_json(&serde_json::json!({
                "allocation": &outcome.allocation,
                "objective": outcome.objective,
                "summary": summarize_optimization(income, &spending, &outcome.allocation),
            }))?;
        }
        Commands::Forecast {
            budget,
            months,
            income,
            seed,
        } => {
            if months == 0 || months > MAX_FORECAST_MONTHS {
                bail!("--months must be between 1 and {MAX_FORECAST_MONTHS}");
            }
            let income = ensure_non_negative("income", income.unwrap_or(profile.monthly_income))?;
            let budget: OptimizedAllocation = match budget {
                Some(path) => read_json(&path)?,
                None => profile
                    .spending
                    .iter()
                    .map(|(name, category)| (name.clone(), category.amount))
                    .collect(),
            };
            for (name, amount) in &budget {
                if !amount.is_finite() || *amount < 0.0 {
                    bail!("budget amount for {name} must be >= 0");
                }
            }
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let forecast = forecast_spending_with_rng(&budget, months, DEFAULT_BASE_YEAR, &mut rng);
            let savings = cumulative_savings(income, &forecast);
            print_json(&serde_json::json!({
                "investmentValue": potential_investment_value(&savings, months),
                "cumulativeSavings": savings,
                "months": forecast,
            }))?;
        }
        Commands::ExpenseBreakdown { expenses } => {
            let expenses = ensure_non_negative("expenses", expenses.unwrap_or(profile.expenses))?;
            print_json(&expense_gst_breakdown(expenses))?;
        }
        Commands::InsuranceComparison { income } => {
            let income = ensure_non_negative("income", income.unwrap_or(profile.income))?;
            print_json(&insurance_cost_comparison(income))?;
        }
        Commands::BulkPurchase {
            unit_price,
            bulk_price,
            usage_rate,
            shelf_life,
            storage_cost,
        } => {
            if !unit_price.is_finite() || unit_price <= 0.0 {
                bail!("--unit-price must be > 0");
            }
            print_json(&bulk_purchase_analysis(
                unit_price,
                ensure_non_negative("bulk-price", bulk_price)?,
                ensure_non_negative("usage-rate", usage_rate)?,
                ensure_non_negative("shelf-life", shelf_life)?,
                ensure_non_negative("storage-cost", storage_cost)?,
            ))?;
        }
    }
    Ok(())
}
