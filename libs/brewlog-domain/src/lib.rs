//! # BrewLog Domain Layer
//!
//! This crate contains the pure business logic and domain models of the
//! BrewLog coffee tracker. It follows hexagonal architecture principles:
//!
//! - **Entities**: Core domain models (BrewMeasurement, Coffee, BrewLogEntry)
//! - **Engine**: Pure extraction arithmetic and zone classification
//! - **Ports**: Trait definitions for external dependencies (TableRepository)
//! - **Services**: Business logic orchestration (BrewService)
//!
//! ## Architecture
//!
//! This layer has NO dependencies on infrastructure concerns (files,
//! spreadsheets, terminals). Storage is expressed as a trait (port) that is
//! implemented by adapter layers.
//!
//! ## Example
//!
//! ```rust
//! use brewlog_domain::extraction::{calculate, BrewMeasurement, Zone};
//!
//! let measurement = BrewMeasurement::new(20.0, 0.0, 40.0, 300.0, 256.0);
//! let result = calculate(&measurement).unwrap();
//! assert_eq!(result.zone, Zone::Ideal);
//! ```

pub mod brewing;
pub mod cache;
pub mod extraction;
pub mod ids;
pub mod inventory;
pub mod ports;
pub mod suggestions;
pub mod tables;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use brewing::{BrewLogEntry, BrewLogError, BrewRequest, BrewService, BrewStats, ServiceConfig};
pub use extraction::{BrewMeasurement, ExtractionError, ExtractionResult, Zone};
pub use ids::{BrewId, CoffeeId};
pub use inventory::{Coffee, NewCoffee};
pub use ports::{Row, TableRepository};
pub use suggestions::{suggest, BrewingSuggestion, SuggestedDefaults};
pub use tables::Table;
