mod common;

use std::sync::Arc;

use portfolio_select::application::model_builder::build_model_from_records;
use portfolio_select::{
    extract_selection, solve, total_return, BudgetConfig, DataError, EnumerationSolver,
    PortfolioError, PortfolioService, SolveResult,
};

fn service() -> PortfolioService {
    PortfolioService::new(Arc::new(EnumerationSolver::new()))
}

#[test]
fn reference_catalog_has_an_optimal_selection() {
    let config = BudgetConfig::default();
    let report = service().select(&common::reference_records(), &config).unwrap();

    assert!(report.is_solved());
    common::assert_respects_rules(&report, &config);

    let best_single = common::reference_records()
        .iter()
        .filter(|r| r.expected_cost <= config.total_budget)
        .map(|r| r.expected_return)
        .fold(0.0, f64::max);
    assert!(report.total_return.unwrap() > best_single);
    assert_eq!(report.total_return, Some(2_220_000.0));

    let ids: Vec<_> = report.selected.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "Ampliação da capacidade do armazém ZDP em 5%",
            "Ampliação da capacidade do armazém MGL em 7%",
            "Projeto de P&D I",
            "Projeto de P&D II",
            "Aquisição de novos equipamentos",
            "Capacitação de funcionários",
            "Construção de datacenter",
            "Terceirizar serviço de otimização da logística",
        ]
    );
}

#[test]
fn projects_over_budget_are_infeasible() {
    let report = service()
        .select(&common::oversized_records(), &BudgetConfig::default())
        .unwrap();
    assert!(!report.is_solved());
    assert!(report.selected.is_empty());
}

#[test]
fn unknown_risk_category_fails_before_solving() {
    let mut records = common::reference_records();
    records[3].risk_category = "Unknown".to_string();

    match service().select(&records, &BudgetConfig::default()) {
        Err(PortfolioError::Data(DataError::UnknownRiskCategory { project, label })) => {
            assert_eq!(project, "Projeto de P&D I");
            assert_eq!(label, "Unknown");
        }
        other => panic!("expected a data error, got {:?}", other),
    }
}

#[test]
fn selection_follows_catalog_order_and_matches_objective() {
    let (_, model) =
        build_model_from_records(&common::reference_records(), &BudgetConfig::default()).unwrap();
    let result = solve(model, &EnumerationSolver::new()).unwrap();

    let SolveResult::Optimal { assignment, .. } = &result else {
        panic!("expected an optimal result");
    };
    assert_eq!(assignment.len(), 13);

    let selected = extract_selection(&result);
    let positions: Vec<usize> = selected
        .iter()
        .map(|id| assignment.iter().position(|(a, _)| a == id).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    let recomputed: f64 = common::reference_records()
        .iter()
        .filter(|r| selected.contains(&r.description))
        .map(|r| r.expected_return)
        .sum();
    assert!((total_return(&result).unwrap() - recomputed).abs() < 1e-6);
}

#[test]
fn tighter_rules_still_hold() {
    let mut config = BudgetConfig::default();
    config.total_budget = 1_500_000.0;
    config.max_cost.medium = 600_000.0;
    config.min_count.high = 2;

    let report = service().select(&common::reference_records(), &config).unwrap();
    assert!(report.is_solved());
    common::assert_respects_rules(&report, &config);
}

#[test]
fn minimum_above_available_projects_is_infeasible_not_an_error() {
    let mut config = BudgetConfig::default();
    config.min_count.high = 4;

    let report = service().select(&common::reference_records(), &config).unwrap();
    assert!(!report.is_solved());
}

#[test]
fn zero_minimums_allow_an_empty_category() {
    let mut config = BudgetConfig::default();
    config.min_count.high = 0;
    config.max_cost.high = 0.0;

    let report = service().select(&common::reference_records(), &config).unwrap();
    assert!(report.is_solved());
    assert!(report
        .selected
        .iter()
        .all(|p| p.risk_category != portfolio_select::RiskCategory::High));
    common::assert_respects_rules(&report, &config);
}

#[tokio::test]
async fn async_pipeline_matches_blocking_one() {
    let config = BudgetConfig::default();
    let blocking = service().select(&common::reference_records(), &config).unwrap();
    let awaited = service()
        .select_async(&common::reference_records(), &config)
        .await
        .unwrap();
    assert_eq!(blocking, awaited);
}

#[tokio::test]
async fn async_pipeline_reports_infeasible() {
    let report = service()
        .select_async(&common::oversized_records(), &BudgetConfig::default())
        .await
        .unwrap();
    assert!(!report.is_solved());
}
