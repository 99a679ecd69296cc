pub mod availability_status;
pub mod entity_type;
