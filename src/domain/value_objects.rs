// Domain value objects representing core business concepts

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Risk classification attached to every project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskCategory {
    Low,
    Medium,
    High,
}

impl RiskCategory {
    pub const ALL: [RiskCategory; 3] = [RiskCategory::Low, RiskCategory::Medium, RiskCategory::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Low => "Low",
            RiskCategory::Medium => "Medium",
            RiskCategory::High => "High",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label that is not one of the three risk categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRiskLabel(pub String);

impl FromStr for RiskCategory {
    type Err = UnknownRiskLabel;

    /// Accepts English labels and the Portuguese labels used by the
    /// original project sheets (`Baixo`, `Médio`, `Alto`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" | "baixo" => Ok(RiskCategory::Low),
            "medium" | "médio" | "medio" => Ok(RiskCategory::Medium),
            "high" | "alto" => Ok(RiskCategory::High),
            _ => Err(UnknownRiskLabel(s.to_string())),
        }
    }
}

/// Type of constraint comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintType {
    /// Less than or equal (≤)
    LessThanOrEqual,
    /// Equal (=)
    Equal,
    /// Greater than or equal (≥)
    GreaterThanOrEqual,
}

impl fmt::Display for ConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintType::LessThanOrEqual => write!(f, "<="),
            ConstraintType::Equal => write!(f, "=="),
            ConstraintType::GreaterThanOrEqual => write!(f, ">="),
        }
    }
}

/// Direction of optimization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizationType {
    /// Minimize the objective function
    Minimize,
    /// Maximize the objective function
    Maximize,
}

/// Termination status reported by a solver backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionStatus {
    /// Found optimal solution
    Optimal,
    /// Problem has no feasible solution
    Infeasible,
    /// Objective can be improved infinitely
    Unbounded,
    /// Backend stopped without a usable verdict
    Error,
}

impl fmt::Display for SolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolutionStatus::Optimal => write!(f, "Optimal"),
            SolutionStatus::Infeasible => write!(f, "Infeasible"),
            SolutionStatus::Unbounded => write!(f, "Unbounded"),
            SolutionStatus::Error => write!(f, "Error"),
        }
    }
}

/// Solver backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SolverBackend {
    /// Best backend compiled into this build
    Auto,
    /// Built-in exhaustive search over all 0/1 assignments
    Enumeration,
    /// COIN-OR CBC via good_lp
    #[value(name = "cbc")]
    CoinCbc,
    /// HiGHS
    Highs,
}

impl fmt::Display for SolverBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverBackend::Auto => write!(f, "Auto"),
            SolverBackend::Enumeration => write!(f, "Enumeration"),
            SolverBackend::CoinCbc => write!(f, "COIN-OR CBC"),
            SolverBackend::Highs => write!(f, "HiGHS"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_english_and_portuguese_labels() {
        assert_eq!("Low".parse(), Ok(RiskCategory::Low));
        assert_eq!(" baixo ".parse(), Ok(RiskCategory::Low));
        assert_eq!("Médio".parse(), Ok(RiskCategory::Medium));
        assert_eq!("MEDIUM".parse(), Ok(RiskCategory::Medium));
        assert_eq!("Alto".parse(), Ok(RiskCategory::High));
    }

    #[test]
    fn rejects_unknown_label() {
        assert_eq!(
            "Unknown".parse::<RiskCategory>(),
            Err(UnknownRiskLabel("Unknown".to_string()))
        );
        assert!("".parse::<RiskCategory>().is_err());
    }
}
