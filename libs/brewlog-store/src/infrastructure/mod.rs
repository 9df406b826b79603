//! Infrastructure adapters

mod jsonl_repository;

pub use jsonl_repository::{table_file_name, JsonLinesRepository};
