use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DbErr, FromQueryResult};

use super::registry::{DependencySource, EntityTable};
use crate::shared::data::executor::{id_values, placeholders, statement, MAX_IN_LIST};

#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct DependentRow {
    pub parent_id: i64,
    pub dep_id: i64,
    pub dep_title: Option<String>,
}

#[derive(Debug, FromQueryResult)]
struct TitleRow {
    id: i64,
    title: String,
}

/// Зависимые строки для набора родительских id
///
/// Sorted by parent, then dependent id.
pub async fn list_dependents<C: ConnectionTrait>(
    db: &C,
    source: &DependencySource,
    parent_ids: &[i64],
) -> Result<Vec<DependentRow>, DbErr> {
    let backend = db.get_database_backend();
    let title = match source.title_column {
        Some(column) => column.to_string(),
        None => "NULL".to_string(),
    };
    let mut rows = Vec::new();

    for chunk in parent_ids.chunks(MAX_IN_LIST) {
        let sql = format!(
            "SELECT {parent} AS parent_id, {id} AS dep_id, {title} AS dep_title \
             FROM {table} WHERE {parent} IN ({params}) ORDER BY {parent}, {id}",
            parent = source.parent_column,
            id = source.id_column,
            title = title,
            table = source.table,
            params = placeholders(backend, 1, chunk.len())
        );
        let mut found = DependentRow::find_by_statement(statement(db, &sql, id_values(chunk)))
            .all(db)
            .await?;
        rows.append(&mut found);
    }

    Ok(rows)
}

/// Названия сущностей по id; отсутствующие id не попадают в результат
pub async fn load_titles<C: ConnectionTrait>(
    db: &C,
    table: &EntityTable,
    ids: &[i64],
) -> Result<HashMap<i64, String>, DbErr> {
    let backend = db.get_database_backend();
    let mut titles = HashMap::with_capacity(ids.len());

    for chunk in ids.chunks(MAX_IN_LIST) {
        let sql = format!(
            "SELECT {id} AS id, {title} AS title FROM {table} WHERE {id} IN ({params})",
            id = table.id_column,
            title = table.title_column,
            table = table.table,
            params = placeholders(backend, 1, chunk.len())
        );
        let found = TitleRow::find_by_statement(statement(db, &sql, id_values(chunk)))
            .all(db)
            .await?;
        titles.extend(found.into_iter().map(|row| (row.id, row.title)));
    }

    Ok(titles)
}
