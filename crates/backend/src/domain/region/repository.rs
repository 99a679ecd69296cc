use contracts::domain::region::aggregate::Region;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "region")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub title: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Region {
    fn from(m: Model) -> Self {
        Region {
            id: m.id,
            title: m.title,
        }
    }
}

/// Справочник регионов, отсортированный по названию
pub async fn list_regions<C: ConnectionTrait>(db: &C) -> Result<Vec<Region>, DbErr> {
    let items = Entity::find()
        .order_by_asc(Column::Title)
        .order_by_asc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support::{memory_database, seed_regions};

    #[tokio::test]
    async fn test_list_regions_orders_by_title() {
        let db = memory_database().await;
        seed_regions(&db).await;

        let regions = list_regions(&db).await.unwrap();
        let titles: Vec<&str> = regions.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Canada", "Mexico", "United States"]);
        assert_eq!(regions[2], Region::new(7, "United States"));
    }

    #[tokio::test]
    async fn test_list_regions_empty() {
        let db = memory_database().await;
        assert!(list_regions(&db).await.unwrap().is_empty());
    }
}
