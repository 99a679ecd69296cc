pub mod config;
pub mod data;
pub mod i18n;
