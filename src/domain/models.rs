use super::errors::DataError;
use super::value_objects::{ConstraintType, OptimizationType, RiskCategory, SolutionStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Raw catalog row as delivered by ingestion, before validation
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectRecord {
    #[serde(alias = "Descrição", alias = "Descricao")]
    pub description: String,
    #[serde(alias = "Retorno esperado (R$)")]
    pub expected_return: f64,
    #[serde(alias = "Custo do investimento (R$)")]
    pub expected_cost: f64,
    #[serde(alias = "Risco do investimento")]
    pub risk_category: String,
}

impl ProjectRecord {
    pub fn new(
        description: impl Into<String>,
        expected_return: f64,
        expected_cost: f64,
        risk_category: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            expected_return,
            expected_cost,
            risk_category: risk_category.into(),
        }
    }
}

/// Candidate investment project
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: String,
    pub expected_return: f64,
    pub expected_cost: f64,
    pub risk_category: RiskCategory,
}

impl Project {
    pub fn new(
        id: impl Into<String>,
        expected_return: f64,
        expected_cost: f64,
        risk_category: RiskCategory,
    ) -> Self {
        Self {
            id: id.into(),
            expected_return,
            expected_cost,
            risk_category,
        }
    }

    /// Validate a raw row into a project
    pub fn from_record(record: &ProjectRecord) -> Result<Self, DataError> {
        let risk_category = record.risk_category.parse::<RiskCategory>().map_err(|e| {
            DataError::UnknownRiskCategory {
                project: record.description.clone(),
                label: e.0,
            }
        })?;

        let project = Self::new(
            record.description.clone(),
            record.expected_return,
            record.expected_cost,
            risk_category,
        );
        project.check_amounts()?;
        Ok(project)
    }

    fn check_amounts(&self) -> Result<(), DataError> {
        for (field, value) in [
            ("expected return", self.expected_return),
            ("expected cost", self.expected_cost),
        ] {
            if !value.is_finite() {
                return Err(DataError::NonFiniteAmount {
                    project: self.id.clone(),
                    field,
                });
            }
            if value < 0.0 {
                return Err(DataError::NegativeAmount {
                    project: self.id.clone(),
                    field,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Ordered, validated list of projects with unique ids
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Result<Self, DataError> {
        if projects.is_empty() {
            return Err(DataError::EmptyCatalog);
        }

        let mut seen = HashSet::with_capacity(projects.len());
        for project in &projects {
            project.check_amounts()?;
            if !seen.insert(project.id.as_str()) {
                return Err(DataError::DuplicateProject {
                    project: project.id.clone(),
                });
            }
        }

        Ok(Self { projects })
    }

    /// Validate ingestion rows, failing on the first bad row
    pub fn from_records(records: &[ProjectRecord]) -> Result<Self, DataError> {
        let projects = records
            .iter()
            .map(Project::from_record)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(projects)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn in_category(&self, category: RiskCategory) -> impl Iterator<Item = &Project> {
        self.projects
            .iter()
            .filter(move |p| p.risk_category == category)
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

/// One value per risk category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PerCategory<T> {
    pub low: T,
    pub medium: T,
    pub high: T,
}

impl<T: Copy> PerCategory<T> {
    pub fn new(low: T, medium: T, high: T) -> Self {
        Self { low, medium, high }
    }

    pub fn get(&self, category: RiskCategory) -> T {
        match category {
            RiskCategory::Low => self.low,
            RiskCategory::Medium => self.medium,
            RiskCategory::High => self.high,
        }
    }
}

/// Spending ceilings and diversification floors for one selection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetConfig {
    pub total_budget: f64,
    pub min_count: PerCategory<u32>,
    pub max_cost: PerCategory<f64>,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            total_budget: 2_400_000.0,
            min_count: PerCategory::new(2, 2, 1),
            max_cost: PerCategory::new(1_200_000.0, 1_500_000.0, 900_000.0),
        }
    }
}

impl BudgetConfig {
    /// Reject negative or non-finite ceilings
    pub fn validate(&self) -> Result<(), String> {
        let mut errors = Vec::new();

        if !self.total_budget.is_finite() || self.total_budget < 0.0 {
            errors.push(format!(
                "total budget must be a non-negative amount, got {}",
                self.total_budget
            ));
        }

        for category in RiskCategory::ALL {
            let ceiling = self.max_cost.get(category);
            if !ceiling.is_finite() || ceiling < 0.0 {
                errors.push(format!(
                    "{} risk cost ceiling must be a non-negative amount, got {}",
                    category, ceiling
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors.join("; "))
        }
    }
}

/// Binary decision variable (domain {0, 1})
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
}

impl Variable {
    pub fn binary(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Linear objective over the decision variables
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectiveFunction {
    pub optimization_type: OptimizationType,
    pub coefficients: Vec<f64>,
}

impl ObjectiveFunction {
    pub fn new(optimization_type: OptimizationType, coefficients: Vec<f64>) -> Self {
        Self {
            optimization_type,
            coefficients,
        }
    }

    pub fn maximize(coefficients: Vec<f64>) -> Self {
        Self::new(OptimizationType::Maximize, coefficients)
    }

    pub fn num_variables(&self) -> usize {
        self.coefficients.len()
    }

    pub fn evaluate(&self, values: &[f64]) -> f64 {
        dot(&self.coefficients, values)
    }
}

/// Linear constraint on variables
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub constraint_type: ConstraintType,
    pub coefficients: Vec<f64>,
    pub bound: f64,
    pub name: String,
}

impl Constraint {
    pub fn new(constraint_type: ConstraintType, coefficients: Vec<f64>, bound: f64) -> Self {
        Self {
            constraint_type,
            coefficients,
            bound,
            name: String::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn num_variables(&self) -> usize {
        self.coefficients.len()
    }

    /// Left-hand side at the given assignment
    pub fn evaluate(&self, values: &[f64]) -> f64 {
        dot(&self.coefficients, values)
    }

    /// Amount by which the assignment breaks this constraint (0 when satisfied)
    pub fn violation(&self, values: &[f64]) -> f64 {
        let lhs = self.evaluate(values);
        match self.constraint_type {
            ConstraintType::LessThanOrEqual => (lhs - self.bound).max(0.0),
            ConstraintType::GreaterThanOrEqual => (self.bound - lhs).max(0.0),
            ConstraintType::Equal => (lhs - self.bound).abs(),
        }
    }

    pub fn is_satisfied(&self, values: &[f64], tolerance: f64) -> bool {
        self.violation(values) <= tolerance * self.bound.abs().max(1.0)
    }
}

fn dot(coefficients: &[f64], values: &[f64]) -> f64 {
    coefficients
        .iter()
        .zip(values)
        .map(|(c, v)| c * v)
        .sum()
}

/// Binary program handed to a solver backend
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationProblem {
    pub name: String,
    pub objective: ObjectiveFunction,
    pub constraints: Vec<Constraint>,
    pub variables: Vec<Variable>,
}

impl OptimizationProblem {
    pub fn new(objective: ObjectiveFunction) -> Self {
        Self {
            name: String::new(),
            objective,
            constraints: Vec::new(),
            variables: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn add_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn with_variables(mut self, variables: Vec<Variable>) -> Self {
        self.variables = variables;
        self
    }

    pub fn num_variables(&self) -> usize {
        self.objective.num_variables()
    }

    /// Largest violation over all constraints at the given assignment
    pub fn max_violation(&self, values: &[f64]) -> f64 {
        self.constraints
            .iter()
            .map(|c| c.violation(values))
            .fold(0.0, f64::max)
    }
}

/// Statistics about the solve process
#[derive(Debug, Clone, Default)]
pub struct SolverStatistics {
    pub nodes_explored: u64,
    pub solve_time_ms: f64,
    pub num_variables: u32,
    pub num_constraints: u32,
}

/// Backend verdict for one problem
#[derive(Debug, Clone)]
pub struct Solution {
    pub status: SolutionStatus,
    pub optimal_value: Option<f64>,
    pub variable_values: Vec<f64>,
    pub message: String,
    pub statistics: SolverStatistics,
}

impl Solution {
    pub fn new(status: SolutionStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            optimal_value: None,
            variable_values: Vec::new(),
            message: message.into(),
            statistics: SolverStatistics::default(),
        }
    }

    pub fn optimal(value: f64, variable_values: Vec<f64>) -> Self {
        Self {
            status: SolutionStatus::Optimal,
            optimal_value: Some(value),
            variable_values,
            message: "Optimal solution found".to_string(),
            statistics: SolverStatistics::default(),
        }
    }

    pub fn with_statistics(mut self, statistics: SolverStatistics) -> Self {
        self.statistics = statistics;
        self
    }

    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }
}
