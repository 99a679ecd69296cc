//! Helpers for building parameterised statements
//!
//! Identifiers (table and column names) come from configuration or the static
//! dependency registry and are checked with [`is_identifier`]. Every value is
//! bound as a parameter.

use sea_orm::{ConnectionTrait, DatabaseBackend, Statement, Value};

/// Upper bound on ids bound into one `IN (...)` list.
pub const MAX_IN_LIST: usize = 500;

/// Upper bound on bound values in one multi-row insert.
pub const MAX_BIND_VALUES: usize = 900;

/// Placeholder for the `n`-th (1-based) bound value.
pub fn placeholder(backend: DatabaseBackend, n: usize) -> String {
    match backend {
        DatabaseBackend::Postgres => format!("${}", n),
        _ => "?".to_string(),
    }
}

/// Comma-separated placeholders for values `first..first + count`.
pub fn placeholders(backend: DatabaseBackend, first: usize, count: usize) -> String {
    (first..first + count)
        .map(|n| placeholder(backend, n))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn statement<C: ConnectionTrait>(db: &C, sql: &str, values: Vec<Value>) -> Statement {
    Statement::from_sql_and_values(db.get_database_backend(), sql, values)
}

pub fn id_values(ids: &[i64]) -> Vec<Value> {
    ids.iter().map(|id| Value::from(*id)).collect()
}

/// Plain SQL identifier: `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
