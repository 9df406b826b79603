//! Brew log entities
//!
//! A `BrewLogEntry` is the persisted record of one brew: what was brewed,
//! how, and the extraction metrics it produced.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::brewing::BrewLogError;
use crate::extraction::{classify, BrewMeasurement, ExtractionResult, Zone};
use crate::ids::{BrewId, CoffeeId};
use crate::inventory::Coffee;
use crate::ports::Row;
use crate::tables::{cell, optional_cell};

/// Date format of rows written before entries carried a full timestamp
const LEGACY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Everything the user entered for a brew they want to log
#[derive(Debug, Clone, PartialEq)]
pub struct BrewRequest {
    pub coffee_id: CoffeeId,
    pub measurement: BrewMeasurement,
    pub grind_size: String,
    /// Free text, usually `mm:ss`
    pub brew_time: String,
    pub water_recipe: Option<String>,
    pub brewer: Option<String>,
    pub notes: String,
}

impl BrewRequest {
    /// Create a request with only the required parts
    pub fn new(coffee_id: CoffeeId, measurement: BrewMeasurement) -> Self {
        Self {
            coffee_id,
            measurement,
            grind_size: String::new(),
            brew_time: String::new(),
            water_recipe: None,
            brewer: None,
            notes: String::new(),
        }
    }
}

/// A logged brew
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrewLogEntry {
    /// Absent on rows logged before brews had IDs
    pub id: Option<BrewId>,
    pub date: DateTime<Utc>,
    pub coffee_id: CoffeeId,
    pub coffee_name: String,
    pub dose: f64,
    pub water_recipe: Option<String>,
    pub total_water: f64,
    pub brew_time: String,
    pub grind_size: String,
    pub tds_percent: f64,
    pub extraction_yield: f64,
    pub brewer: Option<String>,
    pub notes: String,
}

impl BrewLogEntry {
    /// Build the entry for a brew whose extraction has been computed
    pub fn new(
        coffee: &Coffee,
        request: &BrewRequest,
        result: &ExtractionResult,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(BrewId::new()),
            date,
            coffee_id: coffee.id.clone(),
            coffee_name: coffee.name.clone(),
            dose: request.measurement.coffee_dose_g,
            water_recipe: request.water_recipe.clone(),
            total_water: request.measurement.total_water_g,
            brew_time: request.brew_time.clone(),
            grind_size: request.grind_size.clone(),
            tds_percent: result.tds_percent,
            extraction_yield: result.extraction_yield_percent,
            brewer: request.brewer.clone(),
            notes: request.notes.clone(),
        }
    }

    /// Zone of the logged extraction yield
    pub fn zone(&self) -> Zone {
        classify(self.extraction_yield)
    }

    /// Rebuild an entry from a Brew Log row
    ///
    /// Numeric cells that cannot be parsed come back as `NaN`, so that a
    /// hand-edited row does not hide the rest of the log.
    ///
    /// # Errors
    ///
    /// Returns `BrewLogError::InvalidRow` if the date or coffee ID is missing
    /// or unreadable.
    pub fn from_row(row: &Row) -> Result<Self, BrewLogError> {
        let date_text = cell(row, "date");
        let date = parse_date(date_text).ok_or_else(|| {
            BrewLogError::invalid_row(format!("brew has unreadable date '{}'", date_text))
        })?;

        let coffee_id = optional_cell(row, "coffee_id")
            .ok_or_else(|| BrewLogError::invalid_row("brew row has no coffee_id"))?;

        let id = match optional_cell(row, "id") {
            Some(text) => Some(text.parse::<BrewId>().map_err(|e| {
                BrewLogError::invalid_row(format!("brew has bad id '{}': {}", text, e))
            })?),
            None => None,
        };

        Ok(Self {
            id,
            date,
            coffee_id: CoffeeId::new(coffee_id),
            coffee_name: cell(row, "coffee_name").to_string(),
            dose: lenient_number(row, "dose"),
            water_recipe: optional_cell(row, "water_recipe"),
            total_water: lenient_number(row, "total_water"),
            brew_time: cell(row, "brew_time").to_string(),
            grind_size: cell(row, "grind_size").to_string(),
            tds_percent: lenient_number(row, "tds_percent"),
            extraction_yield: lenient_number(row, "extraction_yield"),
            brewer: optional_cell(row, "brewer"),
            notes: cell(row, "notes").to_string(),
        })
    }

    /// Convert to a Brew Log row
    pub fn to_row(&self) -> Row {
        let mut row = Row::new();
        row.insert(
            "id".into(),
            self.id.map(|id| id.to_string()).unwrap_or_default(),
        );
        row.insert("date".into(), self.date.to_rfc3339());
        row.insert("coffee_id".into(), self.coffee_id.to_string());
        row.insert("coffee_name".into(), self.coffee_name.clone());
        row.insert("dose".into(), self.dose.to_string());
        row.insert(
            "water_recipe".into(),
            self.water_recipe.clone().unwrap_or_default(),
        );
        row.insert("total_water".into(), self.total_water.to_string());
        row.insert("brew_time".into(), self.brew_time.clone());
        row.insert("grind_size".into(), self.grind_size.clone());
        row.insert("tds_percent".into(), self.tds_percent.to_string());
        row.insert("extraction_yield".into(), self.extraction_yield.to_string());
        row.insert("zone".into(), self.zone().label().to_string());
        row.insert("brewer".into(), self.brewer.clone().unwrap_or_default());
        row.insert("notes".into(), self.notes.clone());
        row
    }
}

/// Result of logging a brew
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedBrew {
    pub entry: BrewLogEntry,
    pub result: ExtractionResult,
    /// Grams of the coffee left after the dose was taken out
    pub remaining_g: f64,
    pub low_supply: bool,
}

fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(text) {
        return Some(date.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(text, LEGACY_DATE_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

fn lenient_number(row: &Row, column: &str) -> f64 {
    cell(row, column).parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::Table;
    use crate::extraction::compute;
    use crate::inventory::NewCoffee;
    use chrono::TimeZone;

    fn coffee() -> Coffee {
        NewCoffee {
            name: "Kochere".to_string(),
            grams: 250.0,
            ..Default::default()
        }
        .into_coffee(CoffeeId::new("c-1"))
    }

    fn entry() -> BrewLogEntry {
        let measurement = BrewMeasurement::new(20.0, 0.0, 40.0, 300.0, 256.0);
        let mut request = BrewRequest::new(CoffeeId::new("c-1"), measurement);
        request.brewer = Some("V60".to_string());
        request.brew_time = "03:10".to_string();

        let result = compute(&measurement).unwrap();
        let date = Utc.with_ymd_and_hms(2024, 3, 9, 7, 30, 0).unwrap();
        BrewLogEntry::new(&coffee(), &request, &result, date)
    }

    #[test]
    fn test_entry_copies_request_and_result() {
        let entry = entry();

        assert_eq!(entry.coffee_name, "Kochere");
        assert_eq!(entry.dose, 20.0);
        assert_eq!(entry.total_water, 300.0);
        assert_eq!(entry.brewer.as_deref(), Some("V60"));
        assert_eq!(entry.zone(), Zone::Ideal);
        assert!(entry.id.is_some());
    }

    #[test]
    fn test_entry_row_conversion() {
        let entry = entry();
        let row = entry.to_row();

        assert_eq!(row["zone"], "Ideal range");
        assert_eq!(row["water_recipe"], "");
        assert_eq!(BrewLogEntry::from_row(&row).unwrap(), entry);
    }

    #[test]
    fn test_entry_from_legacy_row() {
        let row: Row = [
            ("date", "2024-02-01 08:15"),
            ("coffee_id", "20240101120000"),
            ("coffee_name", "Finca"),
            ("dose", "15"),
            ("total_water", "250"),
            ("tds_percent", "1.35"),
            ("extraction_yield", ""),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let entry = BrewLogEntry::from_row(&row).unwrap();
        assert_eq!(entry.id, None);
        assert_eq!(
            entry.date,
            Utc.with_ymd_and_hms(2024, 2, 1, 8, 15, 0).unwrap()
        );
        assert_eq!(entry.tds_percent, 1.35);
        assert!(entry.extraction_yield.is_nan());
        assert_eq!(entry.brewer, None);
    }

    #[test]
    fn test_entry_from_row_requires_date() {
        let mut row = entry().to_row();
        row.insert("date".into(), "yesterday".into());

        assert!(matches!(
            BrewLogEntry::from_row(&row),
            Err(BrewLogError::InvalidRow(_))
        ));
    }

    #[test]
    fn test_entry_row_has_brew_log_columns() {
        let row = entry().to_row();
        let mut columns: Vec<&str> = Table::BrewLog.columns().to_vec();
        columns.sort_unstable();

        assert_eq!(row.keys().map(String::as_str).collect::<Vec<_>>(), columns);
    }
}
