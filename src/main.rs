use std::process::ExitCode;

use clap::Parser;
use portfolio_select::infrastructure::{catalog_reader, report};
use portfolio_select::{PortfolioService, RunArgs, RunConfig, SolverFactory};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(RunArgs::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = RunConfig::from_args(&args)?;

    // Create solver instance
    let service = PortfolioService::new(SolverFactory::create_from_backend(config.backend)?);
    tracing::info!(
        solver = service.solver_name(),
        catalog = %config.catalog.display(),
        "starting selection"
    );

    let records = catalog_reader::read_catalog_file(&config.catalog, config.delimiter)?;
    let selection = service.select_async(&records, &config.budget).await?;

    if config.json {
        println!("{}", report::render_json(&selection)?);
    } else {
        print!("{}", report::render_text(&selection));
    }

    Ok(())
}
