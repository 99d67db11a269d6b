// HiGHS Solver Adapter
// Translates the binary program into a HiGHS row-wise problem

use crate::domain::{
    models::{OptimizationProblem, Solution as DomainSolution, SolverStatistics},
    solver_service::{Result, SolverError, SolverService},
    value_objects::{ConstraintType, OptimizationType, SolutionStatus as DomainSolutionStatus},
};
use highs::{HighsModelStatus, RowProblem, Sense};
use std::time::Instant;

pub struct HighsSolver;

impl HighsSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HighsSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for HighsSolver {
    fn solve(&self, problem: &OptimizationProblem) -> Result<DomainSolution> {
        self.validate(problem)?;

        let start_time = Instant::now();
        let num_vars = problem.num_variables();

        let mut pb = RowProblem::default();
        let cols: Vec<_> = problem
            .objective
            .coefficients
            .iter()
            .map(|&coeff| pb.add_integer_column(coeff, 0.0..=1.0))
            .collect();

        for constraint in &problem.constraints {
            let terms: Vec<_> = constraint
                .coefficients
                .iter()
                .zip(&cols)
                .filter(|(coeff, _)| **coeff != 0.0)
                .map(|(&coeff, &col)| (col, coeff))
                .collect();

            match constraint.constraint_type {
                ConstraintType::LessThanOrEqual => pb.add_row(..=constraint.bound, &terms),
                ConstraintType::Equal => pb.add_row(constraint.bound..=constraint.bound, &terms),
                ConstraintType::GreaterThanOrEqual => pb.add_row(constraint.bound.., &terms),
            }
        }

        let sense = match problem.objective.optimization_type {
            OptimizationType::Maximize => Sense::Maximise,
            OptimizationType::Minimize => Sense::Minimise,
        };

        let mut model = pb.optimise(sense);
        model.set_option("output_flag", false);
        let solved = model
            .try_solve()
            .map_err(|status| SolverError::ExecutionFailed(format!("HiGHS returned {:?}", status)))?;

        let statistics = SolverStatistics {
            nodes_explored: 0,
            solve_time_ms: start_time.elapsed().as_secs_f64() * 1000.0,
            num_variables: num_vars as u32,
            num_constraints: problem.constraints.len() as u32,
        };

        let solution = match solved.status() {
            HighsModelStatus::Optimal => {
                let variable_values = solved.get_solution().columns().to_vec();
                let objective = problem.objective.evaluate(&variable_values);

                let mut solution = DomainSolution::optimal(objective, variable_values);
                solution.message = format!("Optimal solution found for '{}'", problem.name);
                solution
            }
            HighsModelStatus::Infeasible => DomainSolution::new(
                DomainSolutionStatus::Infeasible,
                "Problem is infeasible: no solution satisfies all constraints",
            ),
            HighsModelStatus::Unbounded | HighsModelStatus::UnboundedOrInfeasible => {
                DomainSolution::new(
                    DomainSolutionStatus::Unbounded,
                    "Problem is unbounded: objective can be improved infinitely",
                )
            }
            status => DomainSolution::new(
                DomainSolutionStatus::Error,
                format!("HiGHS stopped with status {:?}", status),
            ),
        };

        Ok(solution.with_statistics(statistics))
    }

    fn name(&self) -> &str {
        "HiGHS"
    }
}
