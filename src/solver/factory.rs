use crate::domain::{
    solver_service::{Result, SolverError, SolverService},
    value_objects::SolverBackend,
};
use crate::solver::EnumerationSolver;
use std::sync::Arc;

/// Factory for creating solver instances based on configuration
pub struct SolverFactory;

impl SolverFactory {
    /// Create a solver for a specific backend.
    ///
    /// Native backends exist only when their cargo feature is enabled.
    pub fn create_from_backend(backend: SolverBackend) -> Result<Arc<dyn SolverService>> {
        match backend {
            SolverBackend::Auto => Ok(Self::default_solver()),
            SolverBackend::Enumeration => Ok(Arc::new(EnumerationSolver::new())),
            SolverBackend::CoinCbc => Self::coin_cbc(),
            SolverBackend::Highs => Self::highs(),
        }
    }

    /// HiGHS if compiled in, then CBC, then enumeration
    pub fn default_solver() -> Arc<dyn SolverService> {
        match Self::highs().or_else(|_| Self::coin_cbc()) {
            Ok(solver) => solver,
            Err(_) => Arc::new(EnumerationSolver::new()),
        }
    }

    /// Backends usable in this build
    pub fn available_backends() -> Vec<SolverBackend> {
        [SolverBackend::Enumeration, SolverBackend::CoinCbc, SolverBackend::Highs]
            .into_iter()
            .filter(|&b| Self::create_from_backend(b).is_ok())
            .collect()
    }

    #[cfg(feature = "good_lp")]
    fn coin_cbc() -> Result<Arc<dyn SolverService>> {
        Ok(Arc::new(crate::solver::CoinCbcSolver::new()))
    }

    #[cfg(not(feature = "good_lp"))]
    fn coin_cbc() -> Result<Arc<dyn SolverService>> {
        Err(not_compiled(SolverBackend::CoinCbc, "good_lp"))
    }

    #[cfg(feature = "highs")]
    fn highs() -> Result<Arc<dyn SolverService>> {
        Ok(Arc::new(crate::solver::HighsSolver::new()))
    }

    #[cfg(not(feature = "highs"))]
    fn highs() -> Result<Arc<dyn SolverService>> {
        Err(not_compiled(SolverBackend::Highs, "highs"))
    }
}

#[cfg(not(all(feature = "good_lp", feature = "highs")))]
fn not_compiled(backend: SolverBackend, feature: &str) -> SolverError {
    SolverError::SolverNotAvailable(format!(
        "{} backend is not compiled in (enable the '{}' feature)",
        backend, feature
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumeration_is_always_available() {
        let solver = SolverFactory::create_from_backend(SolverBackend::Enumeration).unwrap();
        assert_eq!(solver.name(), "Enumeration");
        assert!(SolverFactory::available_backends().contains(&SolverBackend::Enumeration));
    }

    #[test]
    fn auto_picks_a_backend() {
        let solver = SolverFactory::create_from_backend(SolverBackend::Auto).unwrap();
        let expected = if cfg!(feature = "highs") {
            "HiGHS"
        } else if cfg!(feature = "good_lp") {
            "COIN-OR CBC"
        } else {
            "Enumeration"
        };
        assert_eq!(solver.name(), expected);
    }

    #[cfg(not(feature = "highs"))]
    #[test]
    fn missing_highs_is_not_available() {
        match SolverFactory::create_from_backend(SolverBackend::Highs) {
            Err(SolverError::SolverNotAvailable(msg)) => assert!(msg.contains("'highs' feature")),
            Err(other) => panic!("unexpected error {:?}", other),
            Ok(_) => panic!("HiGHS should not be available"),
        }
    }
}
