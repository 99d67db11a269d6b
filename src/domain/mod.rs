// Domain module: Business logic and models

pub mod errors;
pub mod models;
pub mod solver_service;
pub mod value_objects;

pub use errors::{DataError, PortfolioError};
pub use models::*;
pub use solver_service::{SolverError, SolverService};
pub use value_objects::*;
