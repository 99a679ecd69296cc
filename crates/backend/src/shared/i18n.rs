//! Localised pluralisation
//!
//! Messages are built from a singular and a plural template. The core picks
//! neither form itself: it hands count and templates to a [`Pluralizer`].

/// Collaborator that chooses the plural form for a count.
pub trait Pluralizer: Send + Sync {
    fn pluralize(&self, count: usize, singular: &str, plural: &str) -> String;
}

/// English rules: singular only for exactly one. `%s` is replaced by the count.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishPluralizer;

impl Pluralizer for EnglishPluralizer {
    fn pluralize(&self, count: usize, singular: &str, plural: &str) -> String {
        let template = if count == 1 { singular } else { plural };
        template.replace("%s", &count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_pluralizer() {
        let p = EnglishPluralizer;
        let one = "%s dependent sub-category";
        let many = "%s dependent sub-categories";
        assert_eq!(p.pluralize(1, one, many), "1 dependent sub-category");
        assert_eq!(p.pluralize(3, one, many), "3 dependent sub-categories");
        assert_eq!(p.pluralize(0, one, many), "0 dependent sub-categories");
    }

    #[test]
    fn test_templates_without_placeholder() {
        let p = EnglishPluralizer;
        assert_eq!(
            p.pluralize(1, "The selected item", "The %s selected items"),
            "The selected item"
        );
    }
}
