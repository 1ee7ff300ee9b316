pub mod category;
pub mod cli;
pub mod context;
pub mod models;
pub mod persist;
pub mod summary;
pub mod types;
