//! Extraction domain module
//!
//! This module contains the extraction engine: the arithmetic that turns
//! scale readings into TDS, extraction yield and brew ratio, and the zone
//! classification of the result.

pub mod engine;
pub mod entity;
pub mod error;

pub use engine::{
    calculate, classify, compute, validate, GROUNDS_RETAINED_SOLIDS_FRACTION,
    IDEAL_YIELD_MAX_PERCENT, IDEAL_YIELD_MIN_PERCENT,
};
pub use entity::{BrewMeasurement, ExtractionResult, MeasurementBuilder, MeasurementField, Zone};
pub use error::ExtractionError;
