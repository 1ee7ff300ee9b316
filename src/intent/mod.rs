pub mod intent_parser;
pub mod intent_resolver;
pub mod keywords;
pub mod models;
