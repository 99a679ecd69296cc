use anyhow::{Context, Result};
use sea_orm::DatabaseConnection;

use crate::domain::region;
use crate::shared::config::{self, Config};
use crate::shared::data::db;

/// Загрузить конфигурацию и открыть базу данных каталога
pub async fn initialize() -> Result<(Config, DatabaseConnection)> {
    let config = config::load_config().context("loading configuration")?;
    let db_path = config::get_database_path(&config)?;
    let conn = db::initialize_database(&db_path)
        .await
        .with_context(|| format!("opening database {}", db_path.display()))?;

    report(&config, &conn).await?;
    Ok((config, conn))
}

/// Log what the availability and dependency services will operate on.
async fn report(config: &Config, conn: &DatabaseConnection) -> Result<()> {
    let regions = region::repository::list_regions(conn).await?;
    tracing::info!(
        "Region lookup: {} regions {}",
        regions.len(),
        serde_json::to_string(&regions)?
    );

    for table in &config.availability.tables {
        tracing::info!(
            "Availability bindings for {}: {}({}, {}, {})",
            table.entity,
            table.table,
            table.entity_column,
            table.region_column,
            table.available_column
        );
    }
    tracing::info!(
        "Dependency checks limited to depth {}",
        config.dependency.max_depth
    );
    Ok(())
}
