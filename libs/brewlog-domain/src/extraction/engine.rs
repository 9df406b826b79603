//! Extraction engine - pure brewing arithmetic
//!
//! Converts scale readings into brewing metrics and classifies the
//! extraction yield into a zone. Every function here is pure: no I/O,
//! no shared state, safe to call from any number of threads.

use tracing::debug;

use super::{BrewMeasurement, ExtractionError, ExtractionResult, MeasurementField, Zone};

/// Fraction of the coffee dose assumed to stay in the spent grounds as
/// dissolved solids that never reach the cup.
///
/// The yield denominator is `dose - GROUNDS_RETAINED_SOLIDS_FRACTION * dose`.
/// Tune here if a different grounds-retention model is adopted.
pub const GROUNDS_RETAINED_SOLIDS_FRACTION: f64 = 0.035;

/// Lowest extraction yield (inclusive) of the ideal band, in percent
pub const IDEAL_YIELD_MIN_PERCENT: f64 = 17.0;

/// Highest extraction yield (inclusive) of the ideal band, in percent
pub const IDEAL_YIELD_MAX_PERCENT: f64 = 22.0;

const WET_BELOW_DRY: &str = "wet weight must be >= dry weight";
const BEVERAGE_ABOVE_WATER: &str = "beverage weight cannot exceed total water";

/// Check that a measurement is complete and physically consistent
///
/// Checks run in order and stop at the first failure:
/// 1. every reading is present and non-negative, and the coffee dose is non-zero
/// 2. wet weight is at least the dry weight
/// 3. beverage weight does not exceed the total water
///
/// # Errors
///
/// - `ExtractionError::MissingInput` if a reading is absent (`NaN`) or the dose is zero
/// - `ExtractionError::InvalidWeights` for negative readings or a failed consistency check
pub fn validate(measurement: &BrewMeasurement) -> Result<(), ExtractionError> {
    for field in MeasurementField::ALL {
        let value = measurement.get(field);

        if value.is_nan() {
            return Err(ExtractionError::MissingInput(field));
        }

        if value.is_infinite() || value < 0.0 {
            return Err(ExtractionError::invalid_weights(format!(
                "{} must be a non-negative number",
                field
            )));
        }

        if field == MeasurementField::CoffeeDose && value == 0.0 {
            return Err(ExtractionError::MissingInput(field));
        }
    }

    if measurement.wet_weight_g < measurement.dry_weight_g {
        return Err(ExtractionError::invalid_weights(WET_BELOW_DRY));
    }

    if measurement.beverage_weight_g > measurement.total_water_g {
        return Err(ExtractionError::invalid_weights(BEVERAGE_ABOVE_WATER));
    }

    Ok(())
}

/// Derive the brewing metrics from a validated measurement
///
/// The yield is reported as computed, never clamped: flagging implausible
/// numbers is left to the caller.
///
/// # Errors
///
/// Returns `ExtractionError::DivisionUndefined` if the coffee dose or the
/// coffee water (total water minus retention) is zero.
pub fn compute(measurement: &BrewMeasurement) -> Result<ExtractionResult, ExtractionError> {
    let dose = measurement.coffee_dose_g;
    if dose == 0.0 {
        return Err(ExtractionError::DivisionUndefined("coffee dose"));
    }

    let water_retention = measurement.wet_weight_g - measurement.dry_weight_g;
    let coffee_water = measurement.total_water_g - water_retention;
    if coffee_water == 0.0 {
        return Err(ExtractionError::DivisionUndefined("coffee water"));
    }

    let dissolved_solids = (coffee_water - measurement.beverage_weight_g).abs();
    let tds_percent = (dissolved_solids / coffee_water) * 100.0;
    let extraction_yield = (tds_percent * measurement.beverage_weight_g)
        / (dose - (GROUNDS_RETAINED_SOLIDS_FRACTION * dose));
    let brew_ratio = measurement.total_water_g / dose;

    Ok(ExtractionResult {
        water_retention_g: water_retention,
        coffee_water_g: coffee_water,
        dissolved_solids_g: dissolved_solids,
        tds_percent,
        extraction_yield_percent: extraction_yield,
        brew_ratio,
        zone: classify(extraction_yield),
    })
}

/// Classify an extraction yield into a zone
///
/// Both band edges belong to the ideal zone. A `NaN` yield is never
/// reported as ideal.
pub fn classify(extraction_yield_percent: f64) -> Zone {
    if extraction_yield_percent < IDEAL_YIELD_MIN_PERCENT {
        Zone::UnderExtracted
    } else if extraction_yield_percent <= IDEAL_YIELD_MAX_PERCENT {
        Zone::Ideal
    } else {
        Zone::OverExtracted
    }
}

/// Validate then compute in one call
///
/// Formulas are never evaluated for an invalid measurement.
pub fn calculate(measurement: &BrewMeasurement) -> Result<ExtractionResult, ExtractionError> {
    validate(measurement)?;
    let result = compute(measurement)?;

    debug!(
        tds_percent = result.tds_percent,
        extraction_yield = result.extraction_yield_percent,
        zone = %result.zone,
        "Computed extraction"
    );

    Ok(result)
}
