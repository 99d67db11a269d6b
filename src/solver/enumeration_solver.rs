// Exhaustive 0/1 enumeration backend
// Exact for small catalogs and needs no native solver library.

use crate::domain::{
    models::{OptimizationProblem, Solution as DomainSolution, SolverStatistics},
    solver_service::{Result, SolverError, SolverService},
    value_objects::{OptimizationType, SolutionStatus},
};
use std::time::Instant;

/// Largest problem the backend accepts (2^24 assignments)
pub const MAX_VARIABLES: usize = 24;

/// Relative feasibility tolerance for constraint checks
const FEASIBILITY_TOLERANCE: f64 = 1e-9;

pub struct EnumerationSolver {
    max_variables: usize,
}

impl EnumerationSolver {
    pub fn new() -> Self {
        Self {
            max_variables: MAX_VARIABLES,
        }
    }

    pub fn with_max_variables(max_variables: usize) -> Self {
        Self {
            max_variables: max_variables.min(MAX_VARIABLES),
        }
    }
}

impl Default for EnumerationSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for EnumerationSolver {
    fn solve(&self, problem: &OptimizationProblem) -> Result<DomainSolution> {
        self.validate(problem)?;

        let num_vars = problem.num_variables();
        if num_vars > self.max_variables {
            return Err(SolverError::SolverNotAvailable(format!(
                "enumeration backend handles at most {} variables, problem has {}",
                self.max_variables, num_vars
            )));
        }

        let start_time = Instant::now();
        let maximize = problem.objective.optimization_type == OptimizationType::Maximize;

        let mut values = vec![0.0; num_vars];
        let mut best: Option<(f64, Vec<f64>)> = None;
        let mut explored = 0u64;

        // Masks are visited in increasing order, so ties keep the first one found.
        for mask in 0u64..(1u64 << num_vars) {
            explored += 1;
            for (i, value) in values.iter_mut().enumerate() {
                *value = if mask & (1 << i) != 0 { 1.0 } else { 0.0 };
            }

            if !problem
                .constraints
                .iter()
                .all(|c| c.is_satisfied(&values, FEASIBILITY_TOLERANCE))
            {
                continue;
            }

            let objective = problem.objective.evaluate(&values);
            let improves = match &best {
                None => true,
                Some((incumbent, _)) if maximize => objective > *incumbent,
                Some((incumbent, _)) => objective < *incumbent,
            };
            if improves {
                best = Some((objective, values.clone()));
            }
        }

        let statistics = SolverStatistics {
            nodes_explored: explored,
            solve_time_ms: start_time.elapsed().as_secs_f64() * 1000.0,
            num_variables: num_vars as u32,
            num_constraints: problem.constraints.len() as u32,
        };

        let solution = match best {
            Some((objective, values)) => {
                let mut solution = DomainSolution::optimal(objective, values);
                solution.message = format!("Optimal solution found for '{}'", problem.name);
                solution
            }
            None => DomainSolution::new(
                SolutionStatus::Infeasible,
                "Problem is infeasible: no solution satisfies all constraints",
            ),
        };

        Ok(solution.with_statistics(statistics))
    }

    fn name(&self) -> &str {
        "Enumeration"
    }
}
