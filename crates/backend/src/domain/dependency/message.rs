use contracts::domain::dependency::summary::{DependencySummary, StatusLevel};

use crate::shared::i18n::Pluralizer;

/// Итоговое сообщение о возможности удаления выбранных сущностей
pub fn status_message<P: Pluralizer + ?Sized>(summary: &DependencySummary, pluralizer: &P) -> String {
    let count = summary.ids.len();
    let one = summary.entity_type.singular_noun();
    let many = summary.entity_type.plural_noun();

    let (singular, plural) = match summary.status_level {
        StatusLevel::None => (
            format!("The selected {} can be deleted.", one),
            format!("The %s selected {} can be deleted.", many),
        ),
        StatusLevel::Delete => (
            format!(
                "Deleting the selected {} will also delete the dependents listed below.",
                one
            ),
            format!(
                "Deleting the %s selected {} will also delete the dependents listed below.",
                many
            ),
        ),
        StatusLevel::NoDelete => (
            format!(
                "The selected {} cannot be deleted because it has dependents that must be removed first.",
                one
            ),
            format!(
                "The %s selected {} cannot be deleted because they have dependents that must be removed first.",
                many
            ),
        ),
    };

    pluralizer.pluralize(count, &singular, &plural)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::i18n::EnglishPluralizer;
    use contracts::enums::entity_type::EntityType;

    fn summary(entity_type: EntityType, ids: Vec<i64>, status_level: StatusLevel) -> DependencySummary {
        DependencySummary {
            entity_type,
            ids,
            status_level,
            messages: vec![],
            nodes: vec![],
        }
    }

    #[test]
    fn test_status_message_per_level() {
        let p = EnglishPluralizer;
        assert_eq!(
            status_message(&summary(EntityType::Category, vec![1], StatusLevel::None), &p),
            "The selected category can be deleted."
        );
        assert_eq!(
            status_message(&summary(EntityType::Category, vec![1, 2, 3], StatusLevel::None), &p),
            "The 3 selected categories can be deleted."
        );
        assert_eq!(
            status_message(&summary(EntityType::Country, vec![4], StatusLevel::Delete), &p),
            "Deleting the selected country will also delete the dependents listed below."
        );
        assert_eq!(
            status_message(&summary(EntityType::Catalog, vec![1, 2], StatusLevel::NoDelete), &p),
            "The 2 selected catalogs cannot be deleted because they have dependents that must be removed first."
        );
    }
}
