//! Tracker tables and row helpers

use std::fmt;

use crate::brewing::BrewLogError;
use crate::ports::Row;

/// The tables a tracker is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    BeansInventory,
    BrewLog,
    Brewers,
    WaterRecipes,
}

impl Table {
    /// Every table, in provisioning order
    pub const ALL: [Table; 4] = [
        Table::BeansInventory,
        Table::BrewLog,
        Table::Brewers,
        Table::WaterRecipes,
    ];

    /// Table name as stored
    pub fn name(&self) -> &'static str {
        match self {
            Table::BeansInventory => "Beans Inventory",
            Table::BrewLog => "Brew Log",
            Table::Brewers => "Brewers",
            Table::WaterRecipes => "Water Recipes",
        }
    }

    /// Column headers of the table, checked against the entity rows
    #[cfg(test)]
    pub(crate) fn columns(&self) -> &'static [&'static str] {
        match self {
            Table::BeansInventory => &[
                "id",
                "name",
                "varietal",
                "process",
                "origin",
                "roast_date",
                "grams_remaining",
                "notes",
            ],
            Table::BrewLog => &[
                "id",
                "date",
                "coffee_id",
                "coffee_name",
                "dose",
                "water_recipe",
                "total_water",
                "brew_time",
                "grind_size",
                "tds_percent",
                "extraction_yield",
                "zone",
                "brewer",
                "notes",
            ],
            Table::Brewers => &["id", "name", "type", "capacity", "notes"],
            Table::WaterRecipes => &[
                "id",
                "name",
                "magnesium_drops",
                "calcium_drops",
                "sodium_drops",
                "potassium_drops",
                "total_volume_ml",
                "notes",
            ],
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Text of a cell, empty when the column is absent
pub(crate) fn cell<'a>(row: &'a Row, column: &str) -> &'a str {
    row.get(column).map(|value| value.trim()).unwrap_or("")
}

/// Text of a cell, `None` when absent or blank
pub(crate) fn optional_cell(row: &Row, column: &str) -> Option<String> {
    let value = cell(row, column);
    (!value.is_empty()).then(|| value.to_string())
}

/// Numeric cell
pub(crate) fn number_cell(row: &Row, column: &str) -> Result<f64, BrewLogError> {
    let value = cell(row, column);
    value.parse::<f64>().map_err(|_| {
        BrewLogError::invalid_row(format!(
            "column '{}' is not a number: '{}'",
            column, value
        ))
    })
}
