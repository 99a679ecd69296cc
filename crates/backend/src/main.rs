#[tokio::main]
async fn main() -> anyhow::Result<()> {
    backend::system::tracing::initialize()?;

    let (config, _conn) = backend::system::initialization::initialize().await?;
    tracing::info!(
        "Catalog admin ready: {} binding tables configured",
        config.availability.tables.len()
    );

    Ok(())
}
