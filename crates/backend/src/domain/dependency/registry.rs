//! Static dependency graph of the catalog
//!
//! Every entity type lists, in check order, the kinds of rows that depend on
//! it. A kind with `descend = true` is checked again one level down, on the
//! dependent ids, using the dependency kinds of `node_type`.

use contracts::domain::dependency::summary::DependencyClassification;
use contracts::enums::entity_type::EntityType;

use DependencyClassification::{HardBlock, SoftCascade};

/// Table holding an entity type's own rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityTable {
    pub table: &'static str,
    pub id_column: &'static str,
    pub title_column: &'static str,
}

/// Where dependent rows are found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencySource {
    pub table: &'static str,
    /// Column referencing the checked entity.
    pub parent_column: &'static str,
    /// Column identifying the dependent (its id, or the bound entity's id).
    pub id_column: &'static str,
    /// `None` resolves titles from the `node_type` entity table.
    pub title_column: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyKind {
    pub name: &'static str,
    pub source: DependencySource,
    pub classification: DependencyClassification,
    pub node_type: EntityType,
    pub descend: bool,
    pub singular: &'static str,
    pub plural: &'static str,
}

const fn binding_kind(
    name: &'static str,
    table: &'static str,
    parent_column: &'static str,
    id_column: &'static str,
    node_type: EntityType,
    singular: &'static str,
    plural: &'static str,
) -> DependencyKind {
    DependencyKind {
        name,
        source: DependencySource {
            table,
            parent_column,
            id_column,
            title_column: None,
        },
        classification: SoftCascade,
        node_type,
        descend: false,
        singular,
        plural,
    }
}

static CATALOG_KINDS: &[DependencyKind] = &[
    DependencyKind {
        name: "products",
        source: DependencySource {
            table: "product",
            parent_column: "catalog",
            id_column: "id",
            title_column: Some("title"),
        },
        classification: HardBlock,
        node_type: EntityType::Product,
        descend: true,
        singular: "%s dependent product",
        plural: "%s dependent products",
    },
    binding_kind(
        "region bindings",
        "catalog_region_binding",
        "catalog",
        "region",
        EntityType::Region,
        "%s dependent region binding",
        "%s dependent region bindings",
    ),
];

static PRODUCT_KINDS: &[DependencyKind] = &[
    DependencyKind {
        name: "items",
        source: DependencySource {
            table: "item",
            parent_column: "product",
            id_column: "id",
            title_column: Some("description"),
        },
        classification: SoftCascade,
        node_type: EntityType::Item,
        descend: true,
        singular: "%s dependent item",
        plural: "%s dependent items",
    },
    binding_kind(
        "category bindings",
        "category_product_binding",
        "product",
        "category",
        EntityType::Category,
        "%s dependent category binding",
        "%s dependent category bindings",
    ),
];

static ITEM_KINDS: &[DependencyKind] = &[binding_kind(
    "region bindings",
    "item_region_binding",
    "item",
    "region",
    EntityType::Region,
    "%s dependent region binding",
    "%s dependent region bindings",
)];

static CATEGORY_KINDS: &[DependencyKind] = &[
    DependencyKind {
        name: "sub-categories",
        source: DependencySource {
            table: "category",
            parent_column: "parent",
            id_column: "id",
            title_column: Some("title"),
        },
        classification: HardBlock,
        node_type: EntityType::Category,
        descend: true,
        singular: "%s dependent sub-category",
        plural: "%s dependent sub-categories",
    },
    // Only the category/product association goes, never the product.
    binding_kind(
        "products",
        "category_product_binding",
        "category",
        "product",
        EntityType::Product,
        "%s dependent product",
        "%s dependent products",
    ),
];

static COUNTRY_KINDS: &[DependencyKind] = &[
    DependencyKind {
        name: "provinces/states",
        source: DependencySource {
            table: "province",
            parent_column: "country",
            id_column: "id",
            title_column: Some("title"),
        },
        classification: SoftCascade,
        node_type: EntityType::Province,
        descend: true,
        singular: "%s dependent province/state",
        plural: "%s dependent provinces/states",
    },
    DependencyKind {
        name: "addresses",
        source: DependencySource {
            table: "address",
            parent_column: "country",
            id_column: "id",
            title_column: Some("fullname"),
        },
        classification: SoftCascade,
        node_type: EntityType::Address,
        descend: false,
        singular: "%s dependent address",
        plural: "%s dependent addresses",
    },
];

static PROVINCE_KINDS: &[DependencyKind] = &[DependencyKind {
    name: "addresses",
    source: DependencySource {
        table: "address",
        parent_column: "province",
        id_column: "id",
        title_column: Some("fullname"),
    },
    classification: SoftCascade,
    node_type: EntityType::Address,
    descend: false,
    singular: "%s dependent address",
    plural: "%s dependent addresses",
}];

static PAYMENT_TYPE_KINDS: &[DependencyKind] = &[binding_kind(
    "region bindings",
    "payment_type_region_binding",
    "payment_type",
    "region",
    EntityType::Region,
    "%s dependent region binding",
    "%s dependent region bindings",
)];

static REGION_KINDS: &[DependencyKind] = &[
    binding_kind(
        "catalog bindings",
        "catalog_region_binding",
        "region",
        "catalog",
        EntityType::Catalog,
        "%s dependent catalog binding",
        "%s dependent catalog bindings",
    ),
    binding_kind(
        "item bindings",
        "item_region_binding",
        "region",
        "item",
        EntityType::Item,
        "%s dependent item binding",
        "%s dependent item bindings",
    ),
    binding_kind(
        "payment type bindings",
        "payment_type_region_binding",
        "region",
        "payment_type",
        EntityType::PaymentType,
        "%s dependent payment type binding",
        "%s dependent payment type bindings",
    ),
];

/// Ordered dependency kinds declared by `entity_type`
pub fn dependency_kinds(entity_type: EntityType) -> &'static [DependencyKind] {
    match entity_type {
        EntityType::Catalog => CATALOG_KINDS,
        EntityType::Product => PRODUCT_KINDS,
        EntityType::Item => ITEM_KINDS,
        EntityType::Category => CATEGORY_KINDS,
        EntityType::Country => COUNTRY_KINDS,
        EntityType::Province => PROVINCE_KINDS,
        EntityType::PaymentType => PAYMENT_TYPE_KINDS,
        EntityType::Region => REGION_KINDS,
        EntityType::Address => &[],
    }
}

pub fn entity_table(entity_type: EntityType) -> EntityTable {
    let (table, title_column) = match entity_type {
        EntityType::Catalog => ("catalog", "title"),
        EntityType::Product => ("product", "title"),
        EntityType::Item => ("item", "description"),
        EntityType::Category => ("category", "title"),
        EntityType::Country => ("country", "title"),
        EntityType::Province => ("province", "title"),
        EntityType::Address => ("address", "fullname"),
        EntityType::PaymentType => ("payment_type", "title"),
        EntityType::Region => ("region", "title"),
    };
    EntityTable {
        table,
        id_column: "id",
        title_column,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::executor::is_identifier;

    #[test]
    fn test_registry_identifiers_are_plain() {
        for entity_type in EntityType::all() {
            let table = entity_table(entity_type);
            assert!(is_identifier(table.table));
            assert!(is_identifier(table.title_column));
            for kind in dependency_kinds(entity_type) {
                assert!(is_identifier(kind.source.table), "{}", kind.name);
                assert!(is_identifier(kind.source.parent_column), "{}", kind.name);
                assert!(is_identifier(kind.source.id_column), "{}", kind.name);
                if let Some(title) = kind.source.title_column {
                    assert!(is_identifier(title), "{}", kind.name);
                }
            }
        }
    }

    #[test]
    fn test_kind_names_unique_per_type() {
        for entity_type in EntityType::all() {
            let kinds = dependency_kinds(entity_type);
            for (idx, kind) in kinds.iter().enumerate() {
                assert!(
                    kinds[..idx].iter().all(|k| k.name != kind.name),
                    "{} declares {} twice",
                    entity_type,
                    kind.name
                );
            }
        }
    }

    #[test]
    fn test_descending_kinds_follow_containment() {
        // Descending kinds list rows of their own node type, so the walk
        // only ever moves from parent to child.
        for entity_type in EntityType::all() {
            for kind in dependency_kinds(entity_type).iter().filter(|k| k.descend) {
                assert_eq!(kind.source.table, entity_table(kind.node_type).table);
                assert!(kind.source.title_column.is_some());
            }
        }
    }

    #[test]
    fn test_sub_categories_block_deletion() {
        let kinds = dependency_kinds(EntityType::Category);
        assert_eq!(kinds[0].name, "sub-categories");
        assert_eq!(kinds[0].classification, HardBlock);
        assert_eq!(kinds[1].classification, SoftCascade);
        assert!(dependency_kinds(EntityType::Address).is_empty());
    }
}
