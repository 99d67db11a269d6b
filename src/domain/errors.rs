// Error taxonomy for the portfolio selection use case

use super::solver_service::SolverError;

/// A catalog row that cannot take part in a model
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DataError {
    #[error("project '{project}' has unknown risk category '{label}'")]
    UnknownRiskCategory { project: String, label: String },

    #[error("project '{project}' has negative {field} ({value})")]
    NegativeAmount {
        project: String,
        field: &'static str,
        value: f64,
    },

    #[error("project '{project}' has a non-finite {field}")]
    NonFiniteAmount { project: String, field: &'static str },

    #[error("project '{project}' appears more than once in the catalog")]
    DuplicateProject { project: String },

    #[error("catalog contains no projects")]
    EmptyCatalog,
}

/// Errors surfaced by the build-and-solve pipeline
///
/// An infeasible model is not an error; it is reported through
/// [`SolveResult::Infeasible`](crate::application::SolveResult).
#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Solver unavailable: {0}")]
    SolverUnavailable(String),

    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Solver execution failed: {0}")]
    SolverFailed(String),

    #[error("Catalog could not be read: {0}")]
    Catalog(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Solve task did not complete: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl From<SolverError> for PortfolioError {
    fn from(err: SolverError) -> Self {
        match err {
            SolverError::SolverNotAvailable(msg) => PortfolioError::SolverUnavailable(msg),
            SolverError::InvalidProblem(msg) => PortfolioError::InvalidModel(msg),
            SolverError::ExecutionFailed(msg) => PortfolioError::SolverFailed(msg),
        }
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
