use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::availability::binding_table::BindingTable;
use contracts::enums::entity_type::EntityType;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub dependency: DependencyConfig,
    #[serde(default)]
    pub availability: AvailabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DependencyConfig {
    /// Maximum nesting of the dependency walk before it is treated as corrupt data.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for DependencyConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

fn default_max_depth() -> usize {
    32
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AvailabilityConfig {
    #[serde(default)]
    pub tables: Vec<BindingTable>,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[database]
path = "target/db/catalog.db"

[dependency]
max_depth = 32

[[availability.tables]]
entity = "catalog"
table = "catalog_region_binding"
entity_column = "catalog"
region_column = "region"
available_column = "available"

[[availability.tables]]
entity = "item"
table = "item_region_binding"
entity_column = "item"
region_column = "region"
available_column = "available"

[[availability.tables]]
entity = "payment_type"
table = "payment_type_region_binding"
entity_column = "payment_type"
region_column = "region"
available_column = "available"
"#;

impl Config {
    /// Binding table configured for the given entity type
    pub fn binding_table(&self, entity: EntityType) -> Option<&BindingTable> {
        self.availability.tables.iter().find(|t| t.entity == entity)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.dependency.max_depth == 0 {
            anyhow::bail!("dependency.max_depth must be at least 1");
        }
        for table in &self.availability.tables {
            table.validate()?;
        }
        for (idx, table) in self.availability.tables.iter().enumerate() {
            if self.availability.tables[..idx]
                .iter()
                .any(|other| other.entity == table.entity)
            {
                anyhow::bail!("binding table for '{}' is configured twice", table.entity);
            }
        }
        Ok(())
    }
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

/// Get the database file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_database_path(config: &Config) -> anyhow::Result<PathBuf> {
    let db_path_str = &config.database.path;
    let db_path = Path::new(db_path_str);

    if db_path.is_absolute() {
        return Ok(db_path.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Ok(exe_dir.join(db_path));
        }
    }

    Ok(PathBuf::from(db_path_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.database.path, "target/db/catalog.db");
        assert_eq!(config.dependency.max_depth, 32);
        assert_eq!(config.availability.tables.len(), 3);

        let items = config.binding_table(EntityType::Item).unwrap();
        assert_eq!(items.table, "item_region_binding");
        assert_eq!(items.entity_column, "item");
        assert!(config.binding_table(EntityType::Category).is_none());
    }

    #[test]
    fn test_sections_are_optional() {
        let config = parse_config("[database]\npath = \"x.db\"\n").unwrap();
        assert_eq!(config.dependency.max_depth, 32);
        assert!(config.availability.tables.is_empty());
    }

    #[test]
    fn test_rejects_unsafe_identifiers() {
        let contents = r#"
[database]
path = "x.db"

[[availability.tables]]
entity = "item"
table = "item_region_binding; DROP TABLE item"
entity_column = "item"
region_column = "region"
available_column = "available"
"#;
        assert!(parse_config(contents).is_err());
    }

    #[test]
    fn test_rejects_zero_depth_and_duplicates() {
        assert!(parse_config("[database]\npath = \"x.db\"\n[dependency]\nmax_depth = 0\n").is_err());

        let duplicated = r#"
[database]
path = "x.db"

[[availability.tables]]
entity = "item"
table = "item_region_binding"
entity_column = "item"

[[availability.tables]]
entity = "item"
table = "item_region_binding_v2"
entity_column = "item"
"#;
        assert!(parse_config(duplicated).is_err());
    }
}
