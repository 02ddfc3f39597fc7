//! Domain logic: sentiment buckets and article filtering

pub mod articles;
pub mod sentiment;
