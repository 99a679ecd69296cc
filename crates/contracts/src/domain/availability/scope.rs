use serde::{Deserialize, Serialize};

/// Form value that selects every known region.
pub const ALL_REGIONS: &str = "all";

/// Область применения массового изменения доступности
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionScope {
    All,
    Region(i64),
}

impl RegionScope {
    /// Парсинг значения из формы: `"all"` или числовой id региона
    pub fn from_form_value(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case(ALL_REGIONS) {
            return Some(RegionScope::All);
        }
        value.parse::<i64>().ok().map(RegionScope::Region)
    }

    pub fn form_value(&self) -> String {
        match self {
            RegionScope::All => ALL_REGIONS.to_string(),
            RegionScope::Region(id) => id.to_string(),
        }
    }

    pub fn region_id(&self) -> Option<i64> {
        match self {
            RegionScope::All => None,
            RegionScope::Region(id) => Some(*id),
        }
    }
}

impl std::fmt::Display for RegionScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegionScope::All => f.write_str("all regions"),
            RegionScope::Region(id) => write!(f, "region {}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_form_value() {
        assert_eq!(RegionScope::from_form_value("all"), Some(RegionScope::All));
        assert_eq!(RegionScope::from_form_value(" ALL "), Some(RegionScope::All));
        assert_eq!(RegionScope::from_form_value("7"), Some(RegionScope::Region(7)));
        assert_eq!(RegionScope::from_form_value(""), None);
        assert_eq!(RegionScope::from_form_value("seven"), None);
    }

    #[test]
    fn test_form_value_matches_parser() {
        let scope = RegionScope::Region(42);
        assert_eq!(RegionScope::from_form_value(&scope.form_value()), Some(scope));
    }
}
