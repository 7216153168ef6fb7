pub mod markdown;
pub mod posts;
