pub mod availability;
pub mod dependency;
pub mod region;
