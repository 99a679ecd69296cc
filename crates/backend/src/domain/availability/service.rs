use std::collections::{BTreeSet, HashMap};

use contracts::domain::availability::scope::RegionScope;
use contracts::domain::availability::summary::{
    ApplyOutcome, AvailabilitySummary, Coverage, RegionAvailability,
};
use contracts::domain::region::aggregate::Region;
use contracts::enums::availability_status::AvailabilityStatus;
use sea_orm::{ConnectionTrait, DbErr, TransactionTrait};

use super::binding_table::BindingTable;
use super::error::AvailabilityError;
use super::repository;
use crate::domain::region;

/// Sorted, duplicate-free selection.
fn normalize_ids(entity_ids: &[i64]) -> Vec<i64> {
    entity_ids
        .iter()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Массовое изменение доступности выбранных сущностей
///
/// Bindings in the scope are always deleted first. For any status other than
/// `Disabled` one row per (entity, region) pair in the scope is inserted. Both
/// steps run in one transaction: on failure nothing changes.
pub async fn apply<C>(
    db: &C,
    table: &BindingTable,
    entity_ids: &[i64],
    status: AvailabilityStatus,
    scope: RegionScope,
) -> Result<ApplyOutcome, AvailabilityError>
where
    C: ConnectionTrait + TransactionTrait,
{
    let entity_ids = normalize_ids(entity_ids);
    if entity_ids.is_empty() {
        return Err(AvailabilityError::EmptySelection);
    }

    let regions = region::repository::list_regions(db)
        .await
        .map_err(AvailabilityError::Query)?;
    let target_regions: Vec<i64> = match scope {
        RegionScope::All => regions.iter().map(|r| r.id).collect(),
        RegionScope::Region(id) => {
            if !regions.iter().any(|r| r.id == id) {
                return Err(AvailabilityError::InvalidScope(id));
            }
            vec![id]
        }
    };

    let txn = db
        .begin()
        .await
        .map_err(AvailabilityError::TransactionFailure)?;

    match replace_bindings(&txn, table, &entity_ids, status, scope, &target_regions).await {
        Ok(outcome) => {
            txn.commit()
                .await
                .map_err(AvailabilityError::TransactionFailure)?;
            tracing::info!(
                "Availability of {} {} set to {} in {}: deleted={}, inserted={}",
                entity_ids.len(),
                table.entity.plural_noun(),
                status,
                scope,
                outcome.deleted,
                outcome.inserted
            );
            Ok(outcome)
        }
        Err(err) => {
            tracing::warn!(
                "Availability update on {} failed, rolling back: {}",
                table.table,
                err
            );
            if let Err(rollback_err) = txn.rollback().await {
                tracing::warn!("Rollback on {} failed: {}", table.table, rollback_err);
            }
            Err(AvailabilityError::TransactionFailure(err))
        }
    }
}

async fn replace_bindings<C: ConnectionTrait>(
    txn: &C,
    table: &BindingTable,
    entity_ids: &[i64],
    status: AvailabilityStatus,
    scope: RegionScope,
    target_regions: &[i64],
) -> Result<ApplyOutcome, DbErr> {
    let deleted = repository::delete_bindings(txn, table, entity_ids, scope.region_id()).await?;

    let inserted = match status.binding_flag() {
        Some(available) => {
            repository::insert_bindings(txn, table, entity_ids, target_regions, available).await?
        }
        None => 0,
    };

    Ok(ApplyOutcome { deleted, inserted })
}

/// Сводка доступности по каждой сущности (для отображения в списке)
pub async fn summarize<C: ConnectionTrait>(
    db: &C,
    table: &BindingTable,
    entity_ids: &[i64],
) -> Result<Vec<AvailabilitySummary>, AvailabilityError> {
    let entity_ids = normalize_ids(entity_ids);
    if entity_ids.is_empty() {
        return Ok(Vec::new());
    }

    let regions = region::repository::list_regions(db)
        .await
        .map_err(AvailabilityError::Query)?;
    let rows = repository::list_bindings(db, table, &entity_ids)
        .await
        .map_err(AvailabilityError::Query)?;

    let mut flags: HashMap<i64, HashMap<i64, bool>> = HashMap::new();
    for row in rows {
        flags
            .entry(row.entity_id)
            .or_default()
            .insert(row.region_id, row.available);
    }

    let summaries = entity_ids
        .into_iter()
        .map(|entity_id| {
            let bound = flags.remove(&entity_id).unwrap_or_default();
            summarize_entity(entity_id, &regions, &bound)
        })
        .collect();

    Ok(summaries)
}

fn summarize_entity(
    entity_id: i64,
    regions: &[Region],
    bound: &HashMap<i64, bool>,
) -> AvailabilitySummary {
    // Rows pointing at regions missing from the lookup are ignored.
    let regions_bound: Vec<RegionAvailability> = regions
        .iter()
        .filter_map(|region| {
            bound.get(&region.id).map(|available| RegionAvailability {
                region: region.clone(),
                available: *available,
            })
        })
        .collect();

    let status = if regions_bound.is_empty() {
        AvailabilityStatus::Disabled
    } else if regions_bound.iter().any(|r| r.available) {
        AvailabilityStatus::Enabled
    } else {
        AvailabilityStatus::EnabledInSeason
    };

    let coverage = if regions_bound.is_empty() {
        Coverage::None
    } else if regions_bound.len() == regions.len() {
        Coverage::All
    } else {
        Coverage::Partial
    };

    let text = match coverage {
        Coverage::All => "All regions".to_string(),
        Coverage::None => "None".to_string(),
        Coverage::Partial => regions_bound
            .iter()
            .map(|r| r.region.title.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    };

    AvailabilitySummary {
        entity_id,
        status,
        coverage,
        regions: regions_bound,
        text,
    }
}
