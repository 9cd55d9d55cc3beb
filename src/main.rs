use std::sync::Arc;

use color_eyre::eyre::{Result, WrapErr};
use dotenv::dotenv;
use timetabler_api::{ApiState, config::ApiConfig};
use timetabler_core::{catalog::Catalog, generator::GeneratorOptions, store::SelectedScheduleStore};
use timetabler_db::{MemoryScheduleStore, PgScheduleStore, create_pool, schema::initialize_database};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Load the course catalog once; it is read-only afterwards
    let raw = tokio::fs::read_to_string(&config.catalog_path)
        .await
        .wrap_err_with(|| format!("Failed to read catalog {}", config.catalog_path.display()))?;
    let catalog = Catalog::from_json_str(&raw)?;

    // Selected schedules go to Postgres when configured, memory otherwise
    let store: Arc<dyn SelectedScheduleStore> = match &config.database_url {
        Some(database_url) => {
            let db_pool = create_pool(database_url).await?;
            initialize_database(&db_pool).await?;
            Arc::new(PgScheduleStore::new(db_pool))
        }
        None => Arc::new(MemoryScheduleStore::new()),
    };

    let state = ApiState::new(catalog, store)
        .with_options(GeneratorOptions {
            max_timetables: config.max_timetables,
        })
        .with_search_limit(config.search_limit);

    // Start API server
    timetabler_api::start_server(config, state).await?;

    Ok(())
}
