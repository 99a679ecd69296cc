use serde::{Deserialize, Serialize};

use crate::domain::region::aggregate::Region;
use crate::enums::availability_status::AvailabilityStatus;

/// Result of one bulk availability change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyOutcome {
    pub deleted: u64,
    pub inserted: u64,
}

/// Флаг доступности в одном регионе
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionAvailability {
    pub region: Region,
    pub available: bool,
}

/// How much of the region lookup an entity is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coverage {
    All,
    Partial,
    None,
}

/// Сводка доступности сущности по регионам (данные для ячейки таблицы)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySummary {
    pub entity_id: i64,
    pub status: AvailabilityStatus,
    pub coverage: Coverage,
    pub regions: Vec<RegionAvailability>,
    pub text: String,
}
