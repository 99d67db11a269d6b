// Infrastructure: catalog ingestion, run configuration and report output

pub mod catalog_reader;
pub mod config;
pub mod report;

pub use catalog_reader::{read_catalog_file, read_records};
pub use config::{BudgetArgs, RunArgs, RunConfig};
