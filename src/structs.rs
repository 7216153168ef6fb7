pub mod posts;
pub mod records;
