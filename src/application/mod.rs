// Application layer: model building, solving and result mapping

pub mod mappers;
pub mod model_builder;
pub mod portfolio_service;

pub use mappers::{extract_selection, total_return, ReportStatus, SelectionReport, SolveResult};
pub use model_builder::{build_model, DecisionVariables, PortfolioModel};
pub use portfolio_service::{solve, PortfolioService};
