use sea_orm::{ConnectionTrait, DbErr, FromQueryResult, Value};

use super::binding_table::BindingTable;
use crate::shared::data::executor::{
    id_values, placeholder, placeholders, statement, MAX_BIND_VALUES, MAX_IN_LIST,
};

#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct BindingRow {
    pub entity_id: i64,
    pub region_id: i64,
    pub available: bool,
}

/// Удалить привязки сущностей; при `region = Some(..)` только в этом регионе
pub async fn delete_bindings<C: ConnectionTrait>(
    db: &C,
    table: &BindingTable,
    entity_ids: &[i64],
    region: Option<i64>,
) -> Result<u64, DbErr> {
    let backend = db.get_database_backend();
    let mut deleted = 0;

    for chunk in entity_ids.chunks(MAX_IN_LIST) {
        let mut sql = format!(
            "DELETE FROM {} WHERE {} IN ({})",
            table.table,
            table.entity_column,
            placeholders(backend, 1, chunk.len())
        );
        let mut values = id_values(chunk);
        if let Some(region_id) = region {
            sql.push_str(&format!(
                " AND {} = {}",
                table.region_column,
                placeholder(backend, chunk.len() + 1)
            ));
            values.push(region_id.into());
        }

        let result = db.execute(statement(db, &sql, values)).await?;
        deleted += result.rows_affected();
    }

    Ok(deleted)
}

/// Вставить по одной строке на каждую пару (сущность, регион)
pub async fn insert_bindings<C: ConnectionTrait>(
    db: &C,
    table: &BindingTable,
    entity_ids: &[i64],
    region_ids: &[i64],
    available: bool,
) -> Result<u64, DbErr> {
    let backend = db.get_database_backend();
    let pairs: Vec<(i64, i64)> = entity_ids
        .iter()
        .flat_map(|entity_id| region_ids.iter().map(move |region_id| (*entity_id, *region_id)))
        .collect();

    let mut inserted = 0;
    for batch in pairs.chunks(MAX_BIND_VALUES / 3) {
        let rows: Vec<String> = (0..batch.len())
            .map(|i| format!("({})", placeholders(backend, i * 3 + 1, 3)))
            .collect();
        let sql = format!(
            "INSERT INTO {} ({}, {}, {}) VALUES {}",
            table.table,
            table.entity_column,
            table.region_column,
            table.available_column,
            rows.join(", ")
        );
        let values: Vec<Value> = batch
            .iter()
            .flat_map(|(entity_id, region_id)| {
                [
                    Value::from(*entity_id),
                    Value::from(*region_id),
                    Value::from(available),
                ]
            })
            .collect();

        let result = db.execute(statement(db, &sql, values)).await?;
        tracing::debug!(
            "Inserted {} rows into {}",
            result.rows_affected(),
            table.table
        );
        inserted += result.rows_affected();
    }

    Ok(inserted)
}

/// Привязки сущностей, упорядоченные по сущности и региону
pub async fn list_bindings<C: ConnectionTrait>(
    db: &C,
    table: &BindingTable,
    entity_ids: &[i64],
) -> Result<Vec<BindingRow>, DbErr> {
    let backend = db.get_database_backend();
    let mut rows = Vec::new();

    for chunk in entity_ids.chunks(MAX_IN_LIST) {
        let sql = format!(
            "SELECT {entity} AS entity_id, {region} AS region_id, {available} AS available \
             FROM {table} WHERE {entity} IN ({params}) ORDER BY {entity}, {region}",
            entity = table.entity_column,
            region = table.region_column,
            available = table.available_column,
            table = table.table,
            params = placeholders(backend, 1, chunk.len())
        );
        let mut found = BindingRow::find_by_statement(statement(db, &sql, id_values(chunk)))
            .all(db)
            .await?;
        rows.append(&mut found);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support::{count, exec, memory_database, seed_items, seed_regions};
    use contracts::enums::entity_type::EntityType;

    fn items_table() -> BindingTable {
        BindingTable::new(EntityType::Item, "item_region_binding", "item")
    }

    #[tokio::test]
    async fn test_delete_scoped_to_region() {
        let db = memory_database().await;
        seed_regions(&db).await;
        seed_items(&db).await;
        exec(
            &db,
            "INSERT INTO item_region_binding (item, region, available) VALUES (41, 5, 1), (41, 7, 1), (42, 7, 0)",
        )
        .await;

        let deleted = delete_bindings(&db, &items_table(), &[41, 42], Some(7)).await.unwrap();
        assert_eq!(deleted, 2);

        let rows = list_bindings(&db, &items_table(), &[41, 42]).await.unwrap();
        assert_eq!(
            rows,
            vec![BindingRow {
                entity_id: 41,
                region_id: 5,
                available: true
            }]
        );
    }

    #[tokio::test]
    async fn test_insert_cross_product() {
        let db = memory_database().await;
        seed_regions(&db).await;
        seed_items(&db).await;

        let inserted = insert_bindings(&db, &items_table(), &[41, 42], &[5, 7, 9], false)
            .await
            .unwrap();
        assert_eq!(inserted, 6);
        assert_eq!(
            count(&db, "SELECT COUNT(*) AS n FROM item_region_binding WHERE available = 0").await,
            6
        );
    }

    #[tokio::test]
    async fn test_insert_splits_large_batches() {
        let db = memory_database().await;
        exec(&db, "INSERT INTO catalog (id, title) VALUES (1, 'Bulk')").await;
        exec(&db, "INSERT INTO product (id, title, catalog) VALUES (1, 'Bulk', 1)").await;
        exec(
            &db,
            "WITH RECURSIVE n(i) AS (SELECT 1 UNION ALL SELECT i + 1 FROM n WHERE i < 400) \
             INSERT INTO item (id, description, product) SELECT i, 'Item', 1 FROM n",
        )
        .await;
        seed_regions(&db).await;

        let ids: Vec<i64> = (1..=400).collect();
        let inserted = insert_bindings(&db, &items_table(), &ids, &[5, 7, 9], true)
            .await
            .unwrap();
        assert_eq!(inserted, 1200);
        assert_eq!(list_bindings(&db, &items_table(), &ids).await.unwrap().len(), 1200);
    }
}
