// Model Builder: translates a project catalog and budget rules into a
// binary linear program. Pure and deterministic, no I/O.

use std::collections::HashMap;

use crate::domain::{
    errors::{PortfolioError, Result},
    models::{
        BudgetConfig, Catalog, Constraint, ObjectiveFunction, OptimizationProblem, Project,
        ProjectRecord, Variable,
    },
    value_objects::{ConstraintType, RiskCategory},
};

/// One binary variable per project, in catalog order
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionVariables {
    project_ids: Vec<String>,
    variables: Vec<Variable>,
    index: HashMap<String, usize>,
}

impl DecisionVariables {
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Column of the variable deciding `project_id`
    pub fn index_of(&self, project_id: &str) -> Option<usize> {
        self.index.get(project_id).copied()
    }

    pub fn variable(&self, project_id: &str) -> Option<&Variable> {
        self.index_of(project_id).map(|i| &self.variables[i])
    }

    pub fn project_ids(&self) -> &[String] {
        &self.project_ids
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }
}

/// A built model together with the project ↔ variable mapping used to read
/// its solution back
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioModel {
    pub problem: OptimizationProblem,
    pub variables: DecisionVariables,
}

pub fn build_decision_variables(catalog: &Catalog) -> DecisionVariables {
    let project_ids: Vec<String> = catalog.projects().iter().map(|p| p.id.clone()).collect();
    let variables = (0..project_ids.len())
        .map(|i| Variable::binary(format!("select_{}", i)))
        .collect();
    let index = project_ids
        .iter()
        .enumerate()
        .map(|(i, id)| (id.clone(), i))
        .collect();

    DecisionVariables {
        project_ids,
        variables,
        index,
    }
}

/// Dense coefficient row with `coefficient(p)` in each matching project's column
fn coefficient_row<F, C>(
    catalog: &Catalog,
    variables: &DecisionVariables,
    include: F,
    coefficient: C,
) -> Vec<f64>
where
    F: Fn(&Project) -> bool,
    C: Fn(&Project) -> f64,
{
    let mut row = vec![0.0; variables.len()];
    for project in catalog.projects().iter().filter(|p| include(p)) {
        if let Some(i) = variables.index_of(&project.id) {
            row[i] = coefficient(project);
        }
    }
    row
}

/// Maximize Σ expected_return[p] · x[p]
pub fn build_objective(catalog: &Catalog, variables: &DecisionVariables) -> ObjectiveFunction {
    ObjectiveFunction::maximize(coefficient_row(
        catalog,
        variables,
        |_| true,
        |p| p.expected_return,
    ))
}

/// Σ expected_cost[p] · x[p] ≤ total_budget
pub fn build_budget_constraint(
    catalog: &Catalog,
    variables: &DecisionVariables,
    config: &BudgetConfig,
) -> Constraint {
    Constraint::new(
        ConstraintType::LessThanOrEqual,
        coefficient_row(catalog, variables, |_| true, |p| p.expected_cost),
        config.total_budget,
    )
    .with_name("total_budget")
}

/// Σ x[p] over `category` ≥ minimum
pub fn build_risk_count_constraint(
    catalog: &Catalog,
    variables: &DecisionVariables,
    category: RiskCategory,
    minimum: u32,
) -> Constraint {
    Constraint::new(
        ConstraintType::GreaterThanOrEqual,
        coefficient_row(
            catalog,
            variables,
            |p| p.risk_category == category,
            |_| 1.0,
        ),
        f64::from(minimum),
    )
    .with_name(format!("min_count_{}", category.as_str().to_lowercase()))
}

/// Σ expected_cost[p] · x[p] over `category` ≤ maximum
pub fn build_risk_cost_constraint(
    catalog: &Catalog,
    variables: &DecisionVariables,
    category: RiskCategory,
    maximum: f64,
) -> Constraint {
    Constraint::new(
        ConstraintType::LessThanOrEqual,
        coefficient_row(
            catalog,
            variables,
            |p| p.risk_category == category,
            |p| p.expected_cost,
        ),
        maximum,
    )
    .with_name(format!("max_cost_{}", category.as_str().to_lowercase()))
}

/// Compose the full model.
///
/// Constraint order is fixed: budget; minimum count for High, Medium, Low;
/// maximum cost for Low, Medium, High.
pub fn build_model(catalog: &Catalog, config: &BudgetConfig) -> Result<PortfolioModel> {
    config.validate().map_err(PortfolioError::Configuration)?;

    let variables = build_decision_variables(catalog);
    let objective = build_objective(catalog, &variables);

    let mut problem = OptimizationProblem::new(objective)
        .with_name("maximize_expected_return")
        .with_variables(variables.variables().to_vec())
        .add_constraint(build_budget_constraint(catalog, &variables, config));

    for category in [RiskCategory::High, RiskCategory::Medium, RiskCategory::Low] {
        problem = problem.add_constraint(build_risk_count_constraint(
            catalog,
            &variables,
            category,
            config.min_count.get(category),
        ));
    }

    for category in [RiskCategory::Low, RiskCategory::Medium, RiskCategory::High] {
        problem = problem.add_constraint(build_risk_cost_constraint(
            catalog,
            &variables,
            category,
            config.max_cost.get(category),
        ));
    }

    tracing::debug!(
        variables = problem.num_variables(),
        constraints = problem.constraints.len(),
        "built portfolio model"
    );

    Ok(PortfolioModel { problem, variables })
}

/// Validate raw rows, then build. Nothing is constructed if any row is bad.
pub fn build_model_from_records(
    records: &[ProjectRecord],
    config: &BudgetConfig,
) -> Result<(Catalog, PortfolioModel)> {
    let catalog = Catalog::from_records(records)?;
    let model = build_model(&catalog, config)?;
    Ok((catalog, model))
}

/// A minimum count that exceeds the projects available in its category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsatisfiableMinimum {
    pub category: RiskCategory,
    pub required: u32,
    pub available: usize,
}

/// Minimum-count rules that no assignment can meet
pub fn unsatisfiable_minimums(catalog: &Catalog, config: &BudgetConfig) -> Vec<UnsatisfiableMinimum> {
    RiskCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let required = config.min_count.get(category);
            let available = catalog.in_category(category).count();
            (required as usize > available).then_some(UnsatisfiableMinimum {
                category,
                required,
                available,
            })
        })
        .collect()
}
