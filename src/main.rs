//! Salary service entry point.
//!
//! Loads the service configuration (from the file named by
//! `SALARY_ENGINE_CONFIG`, or built-in defaults), builds the tax schedule,
//! and serves the API until the process is stopped.

use tracing::info;
use tracing_subscriber::EnvFilter;

use salary_engine::api::{AppState, create_app};
use salary_engine::config::ConfigLoader;
use salary_engine::schedule::TaxSchedule;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigLoader::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .init();

    let schedule = TaxSchedule::resident_2019_20()?;
    let app = create_app(AppState::new(schedule), &config.cors);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!(address = %listener.local_addr()?, "salary-engine listening");
    axum::serve(listener, app).await?;

    Ok(())
}
