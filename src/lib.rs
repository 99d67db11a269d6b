// Domain layer: Projects, budget rules and the solver contract
pub mod domain;

// Application layer: Model building, solving and result mapping
pub mod application;

// Infrastructure layer: External concerns (catalog files, CLI config, output)
pub mod infrastructure;

// Solver adapters: Concrete implementations of SolverService
pub mod solver;

// Re-export commonly used types
pub use domain::{
    BudgetConfig, Catalog, Constraint, ConstraintType, DataError, ObjectiveFunction,
    OptimizationProblem, OptimizationType, PerCategory, PortfolioError, Project, ProjectRecord,
    RiskCategory, Solution, SolutionStatus, SolverBackend, SolverError, SolverService, Variable,
};

pub use application::{
    build_model, extract_selection, solve, total_return, PortfolioModel, PortfolioService,
    ReportStatus, SelectionReport, SolveResult,
};

pub use infrastructure::{RunArgs, RunConfig};

pub use solver::{EnumerationSolver, SolverFactory};

#[cfg(feature = "good_lp")]
pub use solver::CoinCbcSolver;

#[cfg(feature = "highs")]
pub use solver::HighsSolver;
