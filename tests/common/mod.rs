#![allow(dead_code)]

use portfolio_select::{BudgetConfig, Project, ProjectRecord, RiskCategory, SelectionReport};
use std::path::PathBuf;

/// The thirteen reference projects, in sheet order
pub fn reference_records() -> Vec<ProjectRecord> {
    [
        ("Ampliação da capacidade do armazém ZDP em 5%", 410000.0, 470000.0, "Baixo"),
        ("Ampliação da capacidade do armazém MGL em 7%", 330000.0, 400000.0, "Baixo"),
        ("Compra de empilhadeira", 140000.0, 170000.0, "Médio"),
        ("Projeto de P&D I", 250000.0, 270000.0, "Médio"),
        ("Projeto de P&D II", 320000.0, 340000.0, "Médio"),
        ("Aquisição de novos equipamentos", 320000.0, 230000.0, "Médio"),
        ("Capacitação de funcionários", 90000.0, 50000.0, "Médio"),
        ("Ampliação da estrutura de carga rodoviária", 190000.0, 440000.0, "Alto"),
        ("Construção de datacenter", 120000.0, 320000.0, "Alto"),
        ("Aquisição de empresa concorrente", 450000.0, 800000.0, "Alto"),
        ("Compra de serviços em nuvem", 80000.0, 120000.0, "Baixo"),
        ("Criação de aplicativo mobile e desktop", 120000.0, 150000.0, "Baixo"),
        ("Terceirizar serviço de otimização da logística", 380000.0, 300000.0, "Médio"),
    ]
    .into_iter()
    .map(|(name, ret, cost, risk)| ProjectRecord::new(name, ret, cost, risk))
    .collect()
}

/// Four projects that are each more expensive than the whole budget
pub fn oversized_records() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord::new("projeto1", 1_000_000.0, 8_000_000.0, "Baixo"),
        ProjectRecord::new("projeto2", 1_500_000.0, 5_000_000.0, "Médio"),
        ProjectRecord::new("projeto3", 2_000_000.0, 7_000_000.0, "Alto"),
        ProjectRecord::new("projeto4", 1_200_000.0, 4_000_000.0, "Médio"),
    ]
}

pub fn reference_catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/projects.csv")
}

fn within(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * a.abs().max(b.abs()).max(1.0)
}

/// Check every budget and risk rule against a solved report
pub fn assert_respects_rules(report: &SelectionReport, config: &BudgetConfig) {
    let total_cost: f64 = report.selected.iter().map(|p| p.expected_cost).sum();
    assert!(total_cost <= config.total_budget, "budget exceeded: {}", total_cost);

    for category in RiskCategory::ALL {
        let chosen: Vec<&Project> = report
            .selected
            .iter()
            .filter(|p| p.risk_category == category)
            .collect();
        assert!(
            chosen.len() as u32 >= config.min_count.get(category),
            "too few {} projects",
            category
        );
        let spent: f64 = chosen.iter().map(|p| p.expected_cost).sum();
        assert!(
            spent <= config.max_cost.get(category),
            "{} ceiling exceeded: {}",
            category,
            spent
        );
    }

    let recomputed: f64 = report.selected.iter().map(|p| p.expected_return).sum();
    let reported = report.total_return.expect("solved report has a total");
    assert!(
        within(recomputed, reported),
        "objective {} differs from recomputed {}",
        reported,
        recomputed
    );
}
