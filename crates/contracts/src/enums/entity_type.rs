use serde::{Deserialize, Serialize};

/// Типы сущностей каталога, участвующие в проверке зависимостей
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Catalog,
    Product,
    Item,
    Category,
    Country,
    Province,
    Address,
    PaymentType,
    Region,
}

impl EntityType {
    /// Получить код типа
    pub fn code(&self) -> &'static str {
        match self {
            EntityType::Catalog => "catalog",
            EntityType::Product => "product",
            EntityType::Item => "item",
            EntityType::Category => "category",
            EntityType::Country => "country",
            EntityType::Province => "province",
            EntityType::Address => "address",
            EntityType::PaymentType => "payment_type",
            EntityType::Region => "region",
        }
    }

    /// Noun used in messages about a single entity.
    pub fn singular_noun(&self) -> &'static str {
        match self {
            EntityType::Catalog => "catalog",
            EntityType::Product => "product",
            EntityType::Item => "item",
            EntityType::Category => "category",
            EntityType::Country => "country",
            EntityType::Province => "province/state",
            EntityType::Address => "address",
            EntityType::PaymentType => "payment type",
            EntityType::Region => "region",
        }
    }

    pub fn plural_noun(&self) -> &'static str {
        match self {
            EntityType::Catalog => "catalogs",
            EntityType::Product => "products",
            EntityType::Item => "items",
            EntityType::Category => "categories",
            EntityType::Country => "countries",
            EntityType::Province => "provinces/states",
            EntityType::Address => "addresses",
            EntityType::PaymentType => "payment types",
            EntityType::Region => "regions",
        }
    }

    pub fn all() -> Vec<EntityType> {
        vec![
            EntityType::Catalog,
            EntityType::Product,
            EntityType::Item,
            EntityType::Category,
            EntityType::Country,
            EntityType::Province,
            EntityType::Address,
            EntityType::PaymentType,
            EntityType::Region,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code)
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
