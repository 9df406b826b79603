//! # BrewLog Store
//!
//! Storage adapter implementing the domain `TableRepository` port over a
//! directory of JSON-lines files, one file per table.

pub mod infrastructure;

pub use infrastructure::JsonLinesRepository;
