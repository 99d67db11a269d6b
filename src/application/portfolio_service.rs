// Solver adapter and selection pipeline
// catalog rows -> model -> injected solver -> SolveResult -> SelectionReport

use std::sync::Arc;

use super::mappers::{self, SelectionReport, SolveResult};
use super::model_builder::{self, PortfolioModel};
use crate::domain::{
    errors::Result,
    models::{BudgetConfig, Catalog, ProjectRecord},
    solver_service::{SolverError, SolverService},
};

/// Submit a built model to `solver` and map its verdict.
///
/// The model is consumed: each model is solved at most once.
pub fn solve(model: PortfolioModel, solver: &dyn SolverService) -> Result<SolveResult> {
    let PortfolioModel { problem, variables } = model;

    tracing::info!(
        solver = solver.name(),
        variables = problem.num_variables(),
        constraints = problem.constraints.len(),
        "solving portfolio model"
    );

    match solver.solve(&problem) {
        Ok(solution) => {
            tracing::debug!(
                status = %solution.status,
                solve_time_ms = solution.statistics.solve_time_ms,
                nodes = solution.statistics.nodes_explored,
                max_violation = problem.max_violation(&solution.variable_values),
                "solver finished"
            );
            mappers::domain_solution_to_result(&variables, solution)
        }
        Err(SolverError::ExecutionFailed(msg)) => {
            tracing::warn!(solver = solver.name(), error = %msg, "solver failed; reporting as infeasible");
            Ok(SolveResult::Infeasible)
        }
        Err(e) => Err(e.into()),
    }
}

/// Portfolio selection use case bound to one solver backend
pub struct PortfolioService {
    solver: Arc<dyn SolverService>,
}

impl PortfolioService {
    pub fn new(solver: Arc<dyn SolverService>) -> Self {
        Self { solver }
    }

    pub fn solver_name(&self) -> &str {
        self.solver.name()
    }

    /// Validate, build and solve synchronously
    pub fn select(&self, records: &[ProjectRecord], config: &BudgetConfig) -> Result<SelectionReport> {
        let (catalog, model) = self.prepare(records, config)?;
        let result = solve(model, self.solver.as_ref())?;
        Ok(self.report(&catalog, &result))
    }

    /// Same as [`select`](Self::select) with the solve call on tokio's
    /// blocking pool
    pub async fn select_async(
        &self,
        records: &[ProjectRecord],
        config: &BudgetConfig,
    ) -> Result<SelectionReport> {
        let (catalog, model) = self.prepare(records, config)?;
        let solver = Arc::clone(&self.solver);
        let result = tokio::task::spawn_blocking(move || solve(model, solver.as_ref())).await??;
        Ok(self.report(&catalog, &result))
    }

    fn prepare(
        &self,
        records: &[ProjectRecord],
        config: &BudgetConfig,
    ) -> Result<(Catalog, PortfolioModel)> {
        let (catalog, model) = model_builder::build_model_from_records(records, config)?;

        for m in model_builder::unsatisfiable_minimums(&catalog, config) {
            tracing::warn!(
                category = %m.category,
                required = m.required,
                available = m.available,
                "minimum count cannot be met; model will be infeasible"
            );
        }

        Ok((catalog, model))
    }

    fn report(&self, catalog: &Catalog, result: &SolveResult) -> SelectionReport {
        let report = SelectionReport::from_result(catalog, result, self.solver.name());
        if let Some(total) = report.total_return {
            tracing::info!(
                selected = report.selected.len(),
                total_return = total,
                "optimal portfolio found"
            );
        }
        report
    }
}
