use std::collections::{BTreeSet, HashMap};

use contracts::domain::dependency::summary::{
    DependencyMessage, DependencyNode, DependencySummary, StatusLevel,
};
use contracts::enums::entity_type::EntityType;
use sea_orm::ConnectionTrait;

use super::error::DependencyError;
use super::registry::{self, DependencyKind};
use super::repository;
use crate::shared::config::DependencyConfig;
use crate::shared::i18n::Pluralizer;

#[derive(Debug, Clone, Copy)]
pub struct CheckOptions {
    /// Deepest nesting below the checked entities that is accepted.
    pub max_depth: usize,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self { max_depth: 32 }
    }
}

impl From<&DependencyConfig> for CheckOptions {
    fn from(config: &DependencyConfig) -> Self {
        Self {
            max_depth: config.max_depth,
        }
    }
}

/// Arena entry; children always sit at higher indices than their parent.
struct Slot {
    entity_type: EntityType,
    id: i64,
    title: String,
    kind: Option<&'static str>,
    children: Vec<usize>,
}

/// One pending level of the walk: `parents` are arena slots of `entity_type`.
struct Frame {
    entity_type: EntityType,
    parents: Vec<usize>,
    depth: usize,
}

struct Tally {
    entity_type: EntityType,
    kind: &'static DependencyKind,
    count: usize,
}

/// Проверка возможности удаления сущностей
///
/// Walks the dependency registry depth-first from `ids`. Read-only: takes no
/// locks and writes nothing, so it may be called speculatively.
pub async fn check<C, P>(
    db: &C,
    entity_type: EntityType,
    ids: &[i64],
    options: &CheckOptions,
    pluralizer: &P,
) -> Result<DependencySummary, DependencyError>
where
    C: ConnectionTrait,
    P: Pluralizer + ?Sized,
{
    let ids: Vec<i64> = ids
        .iter()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    if ids.is_empty() {
        return Err(DependencyError::EmptySelection);
    }

    let root_table = registry::entity_table(entity_type);
    let mut root_titles = repository::load_titles(db, &root_table, &ids).await?;

    let mut arena: Vec<Slot> = ids
        .iter()
        .map(|id| Slot {
            entity_type,
            id: *id,
            title: root_titles.remove(id).unwrap_or_else(|| id.to_string()),
            kind: None,
            children: Vec::new(),
        })
        .collect();
    let roots: Vec<usize> = (0..arena.len()).collect();

    let mut tallies: Vec<Tally> = Vec::new();
    let mut stack = vec![Frame {
        entity_type,
        parents: roots.clone(),
        depth: 0,
    }];

    while let Some(frame) = stack.pop() {
        if frame.depth > options.max_depth {
            tracing::error!(
                "Dependency walk from {} {:?} exceeded max depth {}",
                entity_type,
                ids,
                options.max_depth
            );
            return Err(DependencyError::DepthExceeded {
                entity_type: frame.entity_type,
                depth: frame.depth,
                max_depth: options.max_depth,
            });
        }

        let mut slot_by_id: HashMap<i64, usize> = HashMap::with_capacity(frame.parents.len());
        for &slot in &frame.parents {
            slot_by_id.entry(arena[slot].id).or_insert(slot);
        }
        let mut parent_ids: Vec<i64> = slot_by_id.keys().copied().collect();
        parent_ids.sort_unstable();

        tracing::debug!(
            "Checking {} {} at depth {}",
            parent_ids.len(),
            frame.entity_type.plural_noun(),
            frame.depth
        );

        let mut nested = Vec::new();
        for kind in registry::dependency_kinds(frame.entity_type) {
            let rows = repository::list_dependents(db, &kind.source, &parent_ids).await?;
            if rows.is_empty() {
                continue;
            }

            let titles = if kind.source.title_column.is_none() {
                let dep_ids: Vec<i64> = rows
                    .iter()
                    .map(|r| r.dep_id)
                    .collect::<BTreeSet<_>>()
                    .into_iter()
                    .collect();
                repository::load_titles(db, &registry::entity_table(kind.node_type), &dep_ids)
                    .await?
            } else {
                HashMap::new()
            };

            match tallies
                .iter_mut()
                .find(|t| t.entity_type == frame.entity_type && t.kind.name == kind.name)
            {
                Some(tally) => tally.count += rows.len(),
                None => tallies.push(Tally {
                    entity_type: frame.entity_type,
                    kind,
                    count: rows.len(),
                }),
            }

            let mut children = Vec::with_capacity(rows.len());
            for row in rows {
                let title = row
                    .dep_title
                    .or_else(|| titles.get(&row.dep_id).cloned())
                    .unwrap_or_else(|| row.dep_id.to_string());
                let slot = arena.len();
                arena.push(Slot {
                    entity_type: kind.node_type,
                    id: row.dep_id,
                    title,
                    kind: Some(kind.name),
                    children: Vec::new(),
                });
                if let Some(&parent) = slot_by_id.get(&row.parent_id) {
                    arena[parent].children.push(slot);
                }
                children.push(slot);
            }

            if kind.descend {
                nested.push(Frame {
                    entity_type: kind.node_type,
                    parents: children,
                    depth: frame.depth + 1,
                });
            }
        }

        // Reversed so the first declared kind is walked first.
        stack.extend(nested.into_iter().rev());
    }

    let status_level = tallies
        .iter()
        .map(|t| t.kind.classification.status_level())
        .max()
        .unwrap_or(StatusLevel::None);

    let messages: Vec<DependencyMessage> = tallies
        .iter()
        .map(|t| DependencyMessage {
            entity_type: t.entity_type,
            kind: t.kind.name.to_string(),
            classification: t.kind.classification,
            count: t.count,
            text: pluralizer.pluralize(t.count, t.kind.singular, t.kind.plural),
        })
        .collect();

    let nodes = assemble_nodes(arena, &roots);

    tracing::info!(
        "Dependency check for {} {:?}: {:?} ({} kinds)",
        entity_type,
        ids,
        status_level,
        messages.len()
    );

    Ok(DependencySummary {
        entity_type,
        ids,
        status_level,
        messages,
        nodes,
    })
}

/// Build the node tree bottom-up from the arena.
fn assemble_nodes(arena: Vec<Slot>, roots: &[usize]) -> Vec<DependencyNode> {
    let mut built: Vec<Option<DependencyNode>> = Vec::with_capacity(arena.len());
    built.resize_with(arena.len(), || None);

    for (idx, slot) in arena.into_iter().enumerate().rev() {
        let child_nodes = slot
            .children
            .iter()
            .filter_map(|child| built[*child].take())
            .collect();
        built[idx] = Some(DependencyNode {
            entity_type: slot.entity_type,
            id: slot.id,
            title: slot.title,
            dependency_kind: slot.kind.map(str::to_string),
            child_nodes,
        });
    }

    roots.iter().filter_map(|idx| built[*idx].take()).collect()
}
