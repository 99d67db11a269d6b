// Infrastructure: run configuration
// Flags (or PORTFOLIO_* env vars) override an optional JSON budget file,
// which overrides the reference defaults.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use clap::{Args, Parser};

use super::catalog_reader::DEFAULT_DELIMITER;
use crate::domain::{
    errors::{PortfolioError, Result},
    models::BudgetConfig,
    value_objects::SolverBackend,
};

#[derive(Parser, Debug)]
#[command(
    name = "portfolio-select",
    version,
    about = "Select investment projects that maximize expected return within a budget"
)]
pub struct RunArgs {
    /// Delimited project catalog
    #[arg(long, env = "PORTFOLIO_CATALOG")]
    pub catalog: PathBuf,

    #[arg(long, env = "PORTFOLIO_DELIMITER", default_value_t = DEFAULT_DELIMITER as char)]
    pub delimiter: char,

    #[arg(long, value_enum, env = "PORTFOLIO_SOLVER", default_value_t = SolverBackend::Auto)]
    pub solver: SolverBackend,

    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,

    #[command(flatten)]
    pub budget: BudgetArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct BudgetArgs {
    /// JSON file shaped like {"total_budget", "min_count", "max_cost"}
    #[arg(long, env = "PORTFOLIO_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "PORTFOLIO_BUDGET", allow_hyphen_values = true)]
    pub budget: Option<f64>,

    #[arg(long, env = "PORTFOLIO_MAX_COST_LOW", allow_hyphen_values = true)]
    pub max_cost_low: Option<f64>,

    #[arg(long, env = "PORTFOLIO_MAX_COST_MEDIUM", allow_hyphen_values = true)]
    pub max_cost_medium: Option<f64>,

    #[arg(long, env = "PORTFOLIO_MAX_COST_HIGH", allow_hyphen_values = true)]
    pub max_cost_high: Option<f64>,

    #[arg(long, env = "PORTFOLIO_MIN_LOW")]
    pub min_low: Option<u32>,

    #[arg(long, env = "PORTFOLIO_MIN_MEDIUM")]
    pub min_medium: Option<u32>,

    #[arg(long, env = "PORTFOLIO_MIN_HIGH")]
    pub min_high: Option<u32>,
}

impl BudgetArgs {
    pub fn resolve(&self) -> Result<BudgetConfig> {
        let mut config = match &self.config {
            Some(path) => load_budget_config(path)?,
            None => BudgetConfig::default(),
        };

        if let Some(v) = self.budget {
            config.total_budget = v;
        }
        if let Some(v) = self.max_cost_low {
            config.max_cost.low = v;
        }
        if let Some(v) = self.max_cost_medium {
            config.max_cost.medium = v;
        }
        if let Some(v) = self.max_cost_high {
            config.max_cost.high = v;
        }
        if let Some(v) = self.min_low {
            config.min_count.low = v;
        }
        if let Some(v) = self.min_medium {
            config.min_count.medium = v;
        }
        if let Some(v) = self.min_high {
            config.min_count.high = v;
        }

        config.validate().map_err(PortfolioError::Configuration)?;
        Ok(config)
    }
}

pub fn load_budget_config(path: &Path) -> Result<BudgetConfig> {
    let file = File::open(path)?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        PortfolioError::Configuration(format!("{}: {}", path.display(), e))
    })
}

/// Fully resolved settings for one run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub catalog: PathBuf,
    pub delimiter: u8,
    pub backend: SolverBackend,
    pub budget: BudgetConfig,
    pub json: bool,
}

impl RunConfig {
    pub fn from_args(args: &RunArgs) -> Result<Self> {
        let delimiter = u8::try_from(args.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| {
                PortfolioError::Configuration(format!(
                    "delimiter must be a single ASCII character, got '{}'",
                    args.delimiter
                ))
            })?;

        Ok(Self {
            catalog: args.catalog.clone(),
            delimiter,
            backend: args.solver,
            budget: args.budget.resolve()?,
            json: args.json,
        })
    }
}
