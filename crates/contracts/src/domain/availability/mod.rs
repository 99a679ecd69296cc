pub mod scope;
pub mod summary;
