// Solver capability contract
// Any backend that can maximize a linear objective over binary variables
// subject to linear constraints fits behind this trait.

use super::models::{OptimizationProblem, Solution};

/// Error types for the solver service
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("Invalid problem: {0}")]
    InvalidProblem(String),

    #[error("Solver not available: {0}")]
    SolverNotAvailable(String),

    #[error("Solver execution failed: {0}")]
    ExecutionFailed(String),
}

pub type Result<T> = std::result::Result<T, SolverError>;

/// Contract for 0/1 linear program solvers
///
/// Implementations return `Ok` with a non-optimal status for infeasible or
/// unbounded problems and reserve `Err` for problems they cannot run at all.
pub trait SolverService: Send + Sync {
    /// Solve an optimization problem
    fn solve(&self, problem: &OptimizationProblem) -> Result<Solution>;

    /// Validate a problem without solving it
    fn validate(&self, problem: &OptimizationProblem) -> Result<()> {
        let mut errors = Vec::new();

        let num_vars = problem.num_variables();

        if problem.variables.len() != num_vars {
            errors.push(format!(
                "Number of variables ({}) doesn't match objective coefficients ({})",
                problem.variables.len(),
                num_vars
            ));
        }

        if problem.objective.coefficients.iter().any(|c| !c.is_finite()) {
            errors.push("Objective has non-finite coefficients".to_string());
        }

        for (i, constraint) in problem.constraints.iter().enumerate() {
            if constraint.num_variables() != num_vars {
                errors.push(format!(
                    "Constraint {} has {} coefficients but problem has {} variables",
                    i,
                    constraint.num_variables(),
                    num_vars
                ));
            }
            if !constraint.bound.is_finite()
                || constraint.coefficients.iter().any(|c| !c.is_finite())
            {
                errors.push(format!("Constraint {} '{}' is not finite", i, constraint.name));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SolverError::InvalidProblem(errors.join("; ")))
        }
    }

    /// Get the name of this solver backend
    fn name(&self) -> &str;
}
