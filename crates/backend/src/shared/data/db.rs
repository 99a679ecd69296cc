use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr};
use std::path::Path;

/// Catalog tables used by availability bindings and dependency checks.
/// Binding tables keep at most one row per (entity, region) pair.
const SCHEMA: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS region (
        id INTEGER PRIMARY KEY NOT NULL,
        title TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS catalog (
        id INTEGER PRIMARY KEY NOT NULL,
        title TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS product (
        id INTEGER PRIMARY KEY NOT NULL,
        title TEXT NOT NULL,
        catalog INTEGER NOT NULL REFERENCES catalog(id)
    )"#,
    r#"CREATE TABLE IF NOT EXISTS item (
        id INTEGER PRIMARY KEY NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        product INTEGER NOT NULL REFERENCES product(id)
    )"#,
    r#"CREATE TABLE IF NOT EXISTS category (
        id INTEGER PRIMARY KEY NOT NULL,
        title TEXT NOT NULL,
        parent INTEGER REFERENCES category(id)
    )"#,
    r#"CREATE TABLE IF NOT EXISTS category_product_binding (
        category INTEGER NOT NULL REFERENCES category(id),
        product INTEGER NOT NULL REFERENCES product(id)
    )"#,
    r#"CREATE UNIQUE INDEX IF NOT EXISTS category_product_binding_pair
        ON category_product_binding (category, product)"#,
    r#"CREATE TABLE IF NOT EXISTS country (
        id INTEGER PRIMARY KEY NOT NULL,
        title TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS province (
        id INTEGER PRIMARY KEY NOT NULL,
        title TEXT NOT NULL,
        country INTEGER NOT NULL REFERENCES country(id)
    )"#,
    r#"CREATE TABLE IF NOT EXISTS address (
        id INTEGER PRIMARY KEY NOT NULL,
        fullname TEXT NOT NULL,
        country INTEGER NOT NULL REFERENCES country(id),
        province INTEGER REFERENCES province(id)
    )"#,
    r#"CREATE TABLE IF NOT EXISTS payment_type (
        id INTEGER PRIMARY KEY NOT NULL,
        title TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS catalog_region_binding (
        catalog INTEGER NOT NULL REFERENCES catalog(id),
        region INTEGER NOT NULL REFERENCES region(id),
        available INTEGER NOT NULL DEFAULT 1
    )"#,
    r#"CREATE UNIQUE INDEX IF NOT EXISTS catalog_region_binding_pair
        ON catalog_region_binding (catalog, region)"#,
    r#"CREATE TABLE IF NOT EXISTS item_region_binding (
        item INTEGER NOT NULL REFERENCES item(id),
        region INTEGER NOT NULL REFERENCES region(id),
        available INTEGER NOT NULL DEFAULT 1
    )"#,
    r#"CREATE UNIQUE INDEX IF NOT EXISTS item_region_binding_pair
        ON item_region_binding (item, region)"#,
    r#"CREATE TABLE IF NOT EXISTS payment_type_region_binding (
        payment_type INTEGER NOT NULL REFERENCES payment_type(id),
        region INTEGER NOT NULL REFERENCES region(id),
        available INTEGER NOT NULL DEFAULT 1
    )"#,
    r#"CREATE UNIQUE INDEX IF NOT EXISTS payment_type_region_binding_pair
        ON payment_type_region_binding (payment_type, region)"#,
];

/// Открыть файл SQLite (создаётся при необходимости) и подготовить схему
pub async fn initialize_database(db_file: &Path) -> anyhow::Result<DatabaseConnection> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    tracing::info!("Opening database {}", db_url);
    let conn = Database::connect(&db_url).await?;
    bootstrap_schema(&conn).await?;
    Ok(conn)
}

/// Create catalog tables that do not exist yet
pub async fn bootstrap_schema<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    for sql in SCHEMA {
        db.execute_unprepared(sql).await?;
    }
    tracing::debug!("Schema bootstrap finished: {} statements", SCHEMA.len());
    Ok(())
}
