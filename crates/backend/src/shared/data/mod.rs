pub mod db;
pub mod executor;

#[cfg(test)]
pub mod test_support;
