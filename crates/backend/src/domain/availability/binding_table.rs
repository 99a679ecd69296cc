use contracts::enums::entity_type::EntityType;
use serde::{Deserialize, Serialize};

use crate::shared::data::executor::is_identifier;

/// Many-to-many table between one entity type and `region`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingTable {
    pub entity: EntityType,
    pub table: String,
    pub entity_column: String,
    #[serde(default = "default_region_column")]
    pub region_column: String,
    #[serde(default = "default_available_column")]
    pub available_column: String,
}

fn default_region_column() -> String {
    "region".to_string()
}

fn default_available_column() -> String {
    "available".to_string()
}

impl BindingTable {
    pub fn new(entity: EntityType, table: impl Into<String>, entity_column: impl Into<String>) -> Self {
        Self {
            entity,
            table: table.into(),
            entity_column: entity_column.into(),
            region_column: default_region_column(),
            available_column: default_available_column(),
        }
    }

    /// Names are spliced into SQL, so they must be plain identifiers.
    pub fn validate(&self) -> anyhow::Result<()> {
        for (what, name) in [
            ("table", &self.table),
            ("entity_column", &self.entity_column),
            ("region_column", &self.region_column),
            ("available_column", &self.available_column),
        ] {
            if !is_identifier(name) {
                anyhow::bail!(
                    "binding table for '{}': {} '{}' is not a valid identifier",
                    self.entity,
                    what,
                    name
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_columns() {
        let table = BindingTable::new(EntityType::Item, "item_region_binding", "item");
        assert_eq!(table.region_column, "region");
        assert_eq!(table.available_column, "available");
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_column() {
        let mut table = BindingTable::new(EntityType::Catalog, "catalog_region_binding", "catalog");
        table.available_column = "available = 1 OR 1".into();
        let err = table.validate().unwrap_err();
        assert!(err.to_string().contains("available_column"));
    }
}
