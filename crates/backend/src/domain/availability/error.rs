use sea_orm::DbErr;

#[derive(Debug, thiserror::Error)]
pub enum AvailabilityError {
    #[error("no entities selected")]
    EmptySelection,

    #[error("unknown region id {0}")]
    InvalidScope(i64),

    /// The delete/insert unit failed and was rolled back.
    #[error("availability update rolled back: {0}")]
    TransactionFailure(#[source] DbErr),

    #[error("availability query failed: {0}")]
    Query(#[source] DbErr),
}
