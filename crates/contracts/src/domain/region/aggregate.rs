use serde::{Deserialize, Serialize};

/// Регион (справочник, только чтение)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub id: i64,
    pub title: String,
}

impl Region {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}
