//! Domain entities for extraction calculations
//!
//! A `BrewMeasurement` holds the raw scale readings taken during a pour-over
//! brew. An `ExtractionResult` is the immutable value derived from them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::extraction::error::ExtractionError;

/// One of the five scale readings that make up a measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementField {
    CoffeeDose,
    DryWeight,
    WetWeight,
    TotalWater,
    BeverageWeight,
}

impl MeasurementField {
    /// All fields, in the order they are validated
    pub const ALL: [MeasurementField; 5] = [
        MeasurementField::CoffeeDose,
        MeasurementField::DryWeight,
        MeasurementField::WetWeight,
        MeasurementField::TotalWater,
        MeasurementField::BeverageWeight,
    ];

    /// Human-readable name of the field
    pub fn label(&self) -> &'static str {
        match self {
            MeasurementField::CoffeeDose => "coffee dose",
            MeasurementField::DryWeight => "dry weight",
            MeasurementField::WetWeight => "wet weight",
            MeasurementField::TotalWater => "total water",
            MeasurementField::BeverageWeight => "beverage weight",
        }
    }
}

impl fmt::Display for MeasurementField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw scale readings for a single brew, all in grams
///
/// - `coffee_dose_g`: ground coffee put in the brewer
/// - `dry_weight_g`: brewer + filter + grounds before brewing
/// - `wet_weight_g`: the same after the drawdown, holding retained water
/// - `total_water_g`: water poured over the bed
/// - `beverage_weight_g`: liquid that ended up in the cup
///
/// A `NaN` reading stands for a value the user has not entered yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrewMeasurement {
    pub coffee_dose_g: f64,
    pub dry_weight_g: f64,
    pub wet_weight_g: f64,
    pub total_water_g: f64,
    pub beverage_weight_g: f64,
}

impl BrewMeasurement {
    /// Create a measurement from the five readings
    pub fn new(
        coffee_dose_g: f64,
        dry_weight_g: f64,
        wet_weight_g: f64,
        total_water_g: f64,
        beverage_weight_g: f64,
    ) -> Self {
        Self {
            coffee_dose_g,
            dry_weight_g,
            wet_weight_g,
            total_water_g,
            beverage_weight_g,
        }
    }

    /// Start building a measurement from optional form inputs
    pub fn builder() -> MeasurementBuilder {
        MeasurementBuilder::default()
    }

    /// Get the reading for a given field
    pub fn get(&self, field: MeasurementField) -> f64 {
        match field {
            MeasurementField::CoffeeDose => self.coffee_dose_g,
            MeasurementField::DryWeight => self.dry_weight_g,
            MeasurementField::WetWeight => self.wet_weight_g,
            MeasurementField::TotalWater => self.total_water_g,
            MeasurementField::BeverageWeight => self.beverage_weight_g,
        }
    }
}

/// Collects readings that may be absent (e.g. an empty form field)
#[derive(Debug, Clone, Default)]
pub struct MeasurementBuilder {
    coffee_dose_g: Option<f64>,
    dry_weight_g: Option<f64>,
    wet_weight_g: Option<f64>,
    total_water_g: Option<f64>,
    beverage_weight_g: Option<f64>,
}

impl MeasurementBuilder {
    pub fn coffee_dose(mut self, grams: f64) -> Self {
        self.coffee_dose_g = Some(grams);
        self
    }

    pub fn dry_weight(mut self, grams: f64) -> Self {
        self.dry_weight_g = Some(grams);
        self
    }

    pub fn wet_weight(mut self, grams: f64) -> Self {
        self.wet_weight_g = Some(grams);
        self
    }

    pub fn total_water(mut self, grams: f64) -> Self {
        self.total_water_g = Some(grams);
        self
    }

    pub fn beverage_weight(mut self, grams: f64) -> Self {
        self.beverage_weight_g = Some(grams);
        self
    }

    /// Finish the measurement
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError::MissingInput` naming the first absent field.
    pub fn build(self) -> Result<BrewMeasurement, ExtractionError> {
        let require = |value: Option<f64>, field| value.ok_or(ExtractionError::MissingInput(field));

        Ok(BrewMeasurement {
            coffee_dose_g: require(self.coffee_dose_g, MeasurementField::CoffeeDose)?,
            dry_weight_g: require(self.dry_weight_g, MeasurementField::DryWeight)?,
            wet_weight_g: require(self.wet_weight_g, MeasurementField::WetWeight)?,
            total_water_g: require(self.total_water_g, MeasurementField::TotalWater)?,
            beverage_weight_g: require(self.beverage_weight_g, MeasurementField::BeverageWeight)?,
        })
    }
}

/// Extraction band derived from the extraction yield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    UnderExtracted,
    Ideal,
    OverExtracted,
}

impl Zone {
    /// Label shown next to the extraction yield
    pub fn label(&self) -> &'static str {
        match self {
            Zone::UnderExtracted => "Under-extracted",
            Zone::Ideal => "Ideal range",
            Zone::OverExtracted => "Over-extracted",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Brewing metrics computed from one measurement
///
/// Values are kept at full precision; rounding happens only in `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub water_retention_g: f64,
    pub coffee_water_g: f64,
    pub dissolved_solids_g: f64,
    pub tds_percent: f64,
    pub extraction_yield_percent: f64,
    /// Water-to-coffee ratio, reported as `1:brew_ratio`
    pub brew_ratio: f64,
    pub zone: Zone,
}

impl fmt::Display for ExtractionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Water Retention:  {:.1} g", self.water_retention_g)?;
        writeln!(f, "Brew Ratio:       1:{:.1}", self.brew_ratio)?;
        writeln!(f, "Dissolved Solids: {:.1} g", self.dissolved_solids_g)?;
        writeln!(f, "TDS:              {:.2}%", self.tds_percent)?;
        write!(
            f,
            "Extraction Yield: {:.2}% - {}",
            self.extraction_yield_percent, self.zone
        )
    }
}
