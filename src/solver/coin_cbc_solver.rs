use crate::domain::{
    models::{OptimizationProblem, Solution as DomainSolution, SolverStatistics},
    solver_service::{Result, SolverError, SolverService},
    value_objects::{ConstraintType, OptimizationType, SolutionStatus as DomainSolutionStatus},
};
use good_lp::{
    solvers::coin_cbc, variable, variables, Expression, ResolutionError,
    Solution as GoodLpSolutionTrait, SolverModel, Variable as GoodLpVariable,
};
use std::time::Instant;

pub struct CoinCbcSolver;

impl CoinCbcSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CoinCbcSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for CoinCbcSolver {
    fn solve(&self, problem: &OptimizationProblem) -> Result<DomainSolution> {
        self.validate(problem)?;

        let start_time = Instant::now();
        let num_vars = problem.num_variables();

        let mut vars = variables!();
        let lp_variables: Vec<GoodLpVariable> = problem
            .variables
            .iter()
            .map(|v| vars.add(variable().binary().name(v.name.clone())))
            .collect();

        let mut obj_expr: Expression = 0.into();
        for (&coeff, &var) in problem.objective.coefficients.iter().zip(&lp_variables) {
            if coeff != 0.0 {
                obj_expr += coeff * var;
            }
        }

        let mut lp_model = match problem.objective.optimization_type {
            OptimizationType::Maximize => vars.maximise(obj_expr),
            OptimizationType::Minimize => vars.minimise(obj_expr),
        }
        .using(coin_cbc::coin_cbc);
        lp_model.set_parameter("log", "0");

        for constraint in &problem.constraints {
            let mut lhs: Expression = 0.into();
            for (&coeff, &var) in constraint.coefficients.iter().zip(&lp_variables) {
                if coeff != 0.0 {
                    lhs += coeff * var;
                }
            }

            lp_model = match constraint.constraint_type {
                ConstraintType::LessThanOrEqual => lp_model.with(lhs.leq(constraint.bound)),
                ConstraintType::Equal => lp_model.with(lhs.eq(constraint.bound)),
                ConstraintType::GreaterThanOrEqual => lp_model.with(lhs.geq(constraint.bound)),
            };
        }

        let solution_result = lp_model.solve();

        let statistics = SolverStatistics {
            nodes_explored: 0,
            solve_time_ms: start_time.elapsed().as_secs_f64() * 1000.0,
            num_variables: num_vars as u32,
            num_constraints: problem.constraints.len() as u32,
        };

        match solution_result {
            Ok(sol) => {
                let variable_values: Vec<f64> =
                    lp_variables.iter().map(|&var| sol.value(var)).collect();
                let objective = problem.objective.evaluate(&variable_values);

                let mut solution = DomainSolution::optimal(objective, variable_values);
                solution.message = format!("Optimal solution found for '{}'", problem.name);
                Ok(solution.with_statistics(statistics))
            }
            Err(ResolutionError::Infeasible) => Ok(DomainSolution::new(
                DomainSolutionStatus::Infeasible,
                "Problem is infeasible: no solution satisfies all constraints",
            )
            .with_statistics(statistics)),
            Err(ResolutionError::Unbounded) => Ok(DomainSolution::new(
                DomainSolutionStatus::Unbounded,
                "Problem is unbounded: objective can be improved infinitely",
            )
            .with_statistics(statistics)),
            Err(e) => Err(SolverError::ExecutionFailed(format!("{:?}", e))),
        }
    }

    fn name(&self) -> &str {
        "COIN-OR CBC"
    }
}
