use contracts::enums::entity_type::EntityType;
use sea_orm::DbErr;

#[derive(Debug, thiserror::Error)]
pub enum DependencyError {
    #[error("no entities selected")]
    EmptySelection,

    /// The containment hierarchy nests deeper than allowed; the data is corrupt
    /// or the limit is misconfigured.
    #[error("dependency walk below {entity_type} reached depth {depth}, maximum is {max_depth}")]
    DepthExceeded {
        entity_type: EntityType,
        depth: usize,
        max_depth: usize,
    },

    #[error("dependency query failed: {0}")]
    Query(#[from] DbErr),
}
