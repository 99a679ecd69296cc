pub mod error;
pub mod message;
pub mod registry;
pub mod repository;
pub mod service;

pub use error::DependencyError;
