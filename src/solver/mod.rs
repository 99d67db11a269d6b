// Solver adapters module

#[cfg(feature = "good_lp")]
pub mod coin_cbc_solver;
pub mod enumeration_solver;
pub mod factory;
#[cfg(feature = "highs")]
pub mod highs_solver;

#[cfg(feature = "good_lp")]
pub use coin_cbc_solver::CoinCbcSolver;
pub use enumeration_solver::EnumerationSolver;
pub use factory::SolverFactory;
#[cfg(feature = "highs")]
pub use highs_solver::HighsSolver;
