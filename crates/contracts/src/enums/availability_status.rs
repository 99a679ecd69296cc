use serde::{Deserialize, Serialize};

/// Статус доступности сущности в регионах
///
/// `EnabledInSeason` still creates binding rows, but stores them with
/// `available = false`. Only `Enabled` stores `available = true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityStatus {
    Enabled,
    EnabledInSeason,
    Disabled,
}

impl AvailabilityStatus {
    /// Получить код статуса
    pub fn code(&self) -> &'static str {
        match self {
            AvailabilityStatus::Enabled => "enabled",
            AvailabilityStatus::EnabledInSeason => "enabled_in_season",
            AvailabilityStatus::Disabled => "disabled",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            AvailabilityStatus::Enabled => "Enabled",
            AvailabilityStatus::EnabledInSeason => "Enabled (in season)",
            AvailabilityStatus::Disabled => "Disabled",
        }
    }

    /// Value of the `available` column for rows created with this status.
    /// `None` means no rows are created at all.
    pub fn binding_flag(&self) -> Option<bool> {
        match self {
            AvailabilityStatus::Enabled => Some(true),
            AvailabilityStatus::EnabledInSeason => Some(false),
            AvailabilityStatus::Disabled => None,
        }
    }

    /// Все статусы в порядке отображения во flydown
    pub fn all() -> Vec<AvailabilityStatus> {
        vec![
            AvailabilityStatus::Enabled,
            AvailabilityStatus::EnabledInSeason,
            AvailabilityStatus::Disabled,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "enabled" => Some(AvailabilityStatus::Enabled),
            "enabled_in_season" => Some(AvailabilityStatus::EnabledInSeason),
            "disabled" => Some(AvailabilityStatus::Disabled),
            _ => None,
        }
    }
}

impl std::fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_for_every_status() {
        for status in AvailabilityStatus::all() {
            assert_eq!(AvailabilityStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(AvailabilityStatus::from_code("seasonal"), None);
    }

    #[test]
    fn test_only_enabled_stores_available_flag() {
        assert_eq!(AvailabilityStatus::Enabled.binding_flag(), Some(true));
        assert_eq!(AvailabilityStatus::EnabledInSeason.binding_flag(), Some(false));
        assert_eq!(AvailabilityStatus::Disabled.binding_flag(), None);
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&AvailabilityStatus::EnabledInSeason).unwrap();
        assert_eq!(json, "\"enabled_in_season\"");
    }
}
