//! In-memory catalog database for tests

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, FromQueryResult};

use super::db::bootstrap_schema;
use super::executor::statement;

/// Fresh in-memory database with the catalog schema.
///
/// A single pooled connection keeps every query on the same in-memory database.
pub async fn memory_database() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();
    bootstrap_schema(&db).await.unwrap();
    db
}

pub async fn exec(db: &DatabaseConnection, sql: &str) {
    db.execute_unprepared(sql).await.unwrap();
}

/// Regions 5 "Canada", 7 "United States", 9 "Mexico".
pub async fn seed_regions(db: &DatabaseConnection) {
    exec(
        db,
        "INSERT INTO region (id, title) VALUES (5, 'Canada'), (7, 'United States'), (9, 'Mexico')",
    )
    .await;
}

/// Catalog 1 with product 10 and items 41, 42, 43.
pub async fn seed_items(db: &DatabaseConnection) {
    exec(db, "INSERT INTO catalog (id, title) VALUES (1, 'Spring')").await;
    exec(db, "INSERT INTO product (id, title, catalog) VALUES (10, 'Tulip bulbs', 1)").await;
    exec(
        db,
        "INSERT INTO item (id, description, product) VALUES (41, 'Red', 10), (42, 'Yellow', 10), (43, 'White', 10)",
    )
    .await;
}

#[derive(Debug, FromQueryResult)]
struct CountRow {
    n: i64,
}

pub async fn count(db: &DatabaseConnection, sql: &str) -> i64 {
    CountRow::find_by_statement(statement(db, sql, vec![]))
        .one(db)
        .await
        .unwrap()
        .map(|row| row.n)
        .unwrap_or_default()
}

/// Rows modified on the single pooled connection since it was opened.
pub async fn total_changes(db: &DatabaseConnection) -> i64 {
    count(db, "SELECT total_changes() AS n").await
}
