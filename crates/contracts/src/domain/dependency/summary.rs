use serde::{Deserialize, Serialize};

use crate::enums::entity_type::EntityType;

/// Overall deletion safety. Variants are ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusLevel {
    /// Nothing depends on the selection.
    None,
    /// Dependents exist and are deleted along with the selection.
    Delete,
    /// Dependents exist that block deletion.
    NoDelete,
}

/// Static classification of a dependency kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyClassification {
    HardBlock,
    SoftCascade,
}

impl DependencyClassification {
    /// Severity contributed by a kind with a nonzero count.
    pub fn status_level(&self) -> StatusLevel {
        match self {
            DependencyClassification::HardBlock => StatusLevel::NoDelete,
            DependencyClassification::SoftCascade => StatusLevel::Delete,
        }
    }
}

/// Узел дерева зависимостей
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyNode {
    pub entity_type: EntityType,
    pub id: i64,
    pub title: String,
    /// Kind through which this node was reached; `None` for the checked entities.
    pub dependency_kind: Option<String>,
    pub child_nodes: Vec<DependencyNode>,
}

impl DependencyNode {
    /// Number of nodes below this one, at any depth.
    pub fn descendant_count(&self) -> usize {
        self.child_nodes
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }
}

/// Сообщение по одному виду зависимостей
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyMessage {
    /// Type that declares the kind.
    pub entity_type: EntityType,
    pub kind: String,
    pub classification: DependencyClassification,
    pub count: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencySummary {
    pub entity_type: EntityType,
    pub ids: Vec<i64>,
    pub status_level: StatusLevel,
    pub messages: Vec<DependencyMessage>,
    pub nodes: Vec<DependencyNode>,
}

impl DependencySummary {
    pub fn can_delete(&self) -> bool {
        self.status_level != StatusLevel::NoDelete
    }

    pub fn requires_confirmation(&self) -> bool {
        self.status_level == StatusLevel::Delete
    }

    pub fn message_for(&self, entity_type: EntityType, kind: &str) -> Option<&DependencyMessage> {
        self.messages
            .iter()
            .find(|m| m.entity_type == entity_type && m.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_levels_are_ordered_by_severity() {
        assert!(StatusLevel::None < StatusLevel::Delete);
        assert!(StatusLevel::Delete < StatusLevel::NoDelete);
        assert_eq!(
            [StatusLevel::Delete, StatusLevel::NoDelete, StatusLevel::None]
                .into_iter()
                .max(),
            Some(StatusLevel::NoDelete)
        );
    }

    #[test]
    fn test_descendant_count() {
        let leaf = |id| DependencyNode {
            entity_type: EntityType::Category,
            id,
            title: format!("Category {}", id),
            dependency_kind: Some("sub-categories".into()),
            child_nodes: vec![],
        };
        let mut middle = leaf(2);
        middle.child_nodes = vec![leaf(3), leaf(4)];
        let root = DependencyNode {
            entity_type: EntityType::Category,
            id: 1,
            title: "Root".into(),
            dependency_kind: None,
            child_nodes: vec![middle],
        };
        assert_eq!(root.descendant_count(), 3);
    }
}
