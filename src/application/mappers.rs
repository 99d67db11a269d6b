// Mappers: Convert solver output into domain-level outcomes
// The solver only knows columns and values; project ids live here.

use serde::Serialize;

use super::model_builder::DecisionVariables;
use crate::domain::{
    errors::{PortfolioError, Result},
    models::{Catalog, Project, Solution},
};

/// Outcome of one build-and-solve cycle
#[derive(Debug, Clone, PartialEq)]
pub enum SolveResult {
    Optimal {
        /// Every project with its 0/1 decision, in catalog order
        assignment: Vec<(String, bool)>,
        objective_value: f64,
    },
    Infeasible,
}

impl SolveResult {
    pub fn is_optimal(&self) -> bool {
        matches!(self, SolveResult::Optimal { .. })
    }
}

/// Translate a backend solution into a [`SolveResult`].
///
/// Only an optimal termination counts as solved; every other status maps to
/// `Infeasible` since a 0/1 model is always bounded.
pub fn domain_solution_to_result(
    variables: &DecisionVariables,
    solution: Solution,
) -> Result<SolveResult> {
    if !solution.is_optimal() {
        tracing::info!(status = %solution.status, message = %solution.message, "no optimal solution");
        return Ok(SolveResult::Infeasible);
    }

    if solution.variable_values.len() != variables.len() {
        return Err(PortfolioError::SolverFailed(format!(
            "solver returned {} values for {} variables",
            solution.variable_values.len(),
            variables.len()
        )));
    }

    let assignment: Vec<(String, bool)> = variables
        .project_ids()
        .iter()
        .zip(&solution.variable_values)
        .map(|(id, &value)| (id.clone(), value.round() >= 1.0))
        .collect();

    let objective_value = solution.optimal_value.ok_or_else(|| {
        PortfolioError::SolverFailed("optimal solution without objective value".to_string())
    })?;

    Ok(SolveResult::Optimal {
        assignment,
        objective_value,
    })
}

/// Ids of the selected projects, in catalog order. Empty when infeasible.
pub fn extract_selection(result: &SolveResult) -> Vec<String> {
    match result {
        SolveResult::Optimal { assignment, .. } => assignment
            .iter()
            .filter(|(_, selected)| *selected)
            .map(|(id, _)| id.clone())
            .collect(),
        SolveResult::Infeasible => Vec::new(),
    }
}

/// Objective value reported by the solver
pub fn total_return(result: &SolveResult) -> Option<f64> {
    match result {
        SolveResult::Optimal {
            objective_value, ..
        } => Some(*objective_value),
        SolveResult::Infeasible => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Solved,
    NotSolved,
}

/// Structured output handed to presentation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionReport {
    pub status: ReportStatus,
    pub solver: String,
    pub total_return: Option<f64>,
    pub total_cost: Option<f64>,
    pub selected: Vec<Project>,
}

impl SelectionReport {
    pub fn from_result(catalog: &Catalog, result: &SolveResult, solver: &str) -> Self {
        match result {
            SolveResult::Optimal { .. } => {
                let selected: Vec<Project> = extract_selection(result)
                    .iter()
                    .filter_map(|id| catalog.get(id).cloned())
                    .collect();
                let total_cost = selected.iter().map(|p| p.expected_cost).sum();

                Self {
                    status: ReportStatus::Solved,
                    solver: solver.to_string(),
                    total_return: total_return(result),
                    total_cost: Some(total_cost),
                    selected,
                }
            }
            SolveResult::Infeasible => Self {
                status: ReportStatus::NotSolved,
                solver: solver.to_string(),
                total_return: None,
                total_cost: None,
                selected: Vec::new(),
            },
        }
    }

    pub fn is_solved(&self) -> bool {
        self.status == ReportStatus::Solved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::model_builder::build_decision_variables;
    use crate::domain::value_objects::{RiskCategory, SolutionStatus};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Project::new("a", 10.0, 4.0, RiskCategory::Low),
            Project::new("b", 20.0, 5.0, RiskCategory::High),
            Project::new("c", 30.0, 6.0, RiskCategory::Medium),
        ])
        .unwrap()
    }

    #[test]
    fn optimal_solution_maps_to_catalog_ordered_selection() {
        let vars = build_decision_variables(&catalog());
        let solution = Solution::optimal(40.0, vec![1.0, 0.0, 0.999_999_9]);

        let result = domain_solution_to_result(&vars, solution).unwrap();
        assert_eq!(extract_selection(&result), ["a", "c"]);
        assert_eq!(total_return(&result), Some(40.0));
    }

    #[test]
    fn any_other_status_is_infeasible() {
        let vars = build_decision_variables(&catalog());
        for status in [
            SolutionStatus::Infeasible,
            SolutionStatus::Unbounded,
            SolutionStatus::Error,
        ] {
            let result = domain_solution_to_result(&vars, Solution::new(status, "")).unwrap();
            assert_eq!(result, SolveResult::Infeasible);
            assert!(extract_selection(&result).is_empty());
            assert_eq!(total_return(&result), None);
        }
    }

    #[test]
    fn short_assignment_is_a_solver_failure() {
        let vars = build_decision_variables(&catalog());
        let err = domain_solution_to_result(&vars, Solution::optimal(1.0, vec![1.0])).unwrap_err();
        assert!(matches!(err, PortfolioError::SolverFailed(_)));
    }

    #[test]
    fn report_lists_selected_projects() {
        let catalog = catalog();
        let result = SolveResult::Optimal {
            assignment: vec![
                ("a".to_string(), false),
                ("b".to_string(), true),
                ("c".to_string(), true),
            ],
            objective_value: 50.0,
        };

        let report = SelectionReport::from_result(&catalog, &result, "Enumeration");
        assert!(report.is_solved());
        assert_eq!(report.total_return, Some(50.0));
        assert_eq!(report.total_cost, Some(11.0));
        let ids: Vec<_> = report.selected.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["b", "c"]);
    }

    #[test]
    fn infeasible_report_is_not_solved() {
        let report = SelectionReport::from_result(&catalog(), &SolveResult::Infeasible, "HiGHS");
        assert_eq!(report.status, ReportStatus::NotSolved);
        assert!(report.selected.is_empty());
        assert_eq!(report.total_return, None);
    }
}
