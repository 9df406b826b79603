//! Coffee inventory entities

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::brewing::BrewLogError;
use crate::ids::CoffeeId;
use crate::ports::Row;
use crate::tables::{cell, number_cell, optional_cell};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A coffee held in the inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coffee {
    pub id: CoffeeId,
    pub name: String,
    pub varietal: String,
    pub process: String,
    pub origin: String,
    pub roast_date: Option<NaiveDate>,
    /// Can go below zero when more was brewed than was recorded
    pub grams_remaining: f64,
    pub notes: String,
}

impl Coffee {
    /// Whether the remaining amount is under the given threshold
    pub fn is_low_supply(&self, threshold_g: f64) -> bool {
        self.grams_remaining < threshold_g
    }

    /// Short label used when picking a coffee, e.g. `Kochere (212.0g)`
    pub fn label(&self) -> String {
        format!("{} ({:.1}g)", self.name, self.grams_remaining)
    }

    /// Rebuild a coffee from a Beans Inventory row
    ///
    /// # Errors
    ///
    /// Returns `BrewLogError::InvalidRow` if the ID or name is blank, or if
    /// the remaining grams or the roast date cannot be parsed.
    pub fn from_row(row: &Row) -> Result<Self, BrewLogError> {
        let id = optional_cell(row, "id")
            .ok_or_else(|| BrewLogError::invalid_row("coffee row has no id"))?;
        let name = optional_cell(row, "name")
            .ok_or_else(|| BrewLogError::invalid_row(format!("coffee {} has no name", id)))?;

        let roast_date = match optional_cell(row, "roast_date") {
            Some(text) => Some(NaiveDate::parse_from_str(&text, DATE_FORMAT).map_err(|e| {
                BrewLogError::invalid_row(format!("coffee {} has bad roast date '{}': {}", id, text, e))
            })?),
            None => None,
        };

        Ok(Self {
            id: CoffeeId::new(id),
            name,
            varietal: cell(row, "varietal").to_string(),
            process: cell(row, "process").to_string(),
            origin: cell(row, "origin").to_string(),
            roast_date,
            grams_remaining: number_cell(row, "grams_remaining")?,
            notes: cell(row, "notes").to_string(),
        })
    }

    /// Convert to a Beans Inventory row
    pub fn to_row(&self) -> Row {
        let mut row = Row::new();
        row.insert("id".into(), self.id.to_string());
        row.insert("name".into(), self.name.clone());
        row.insert("varietal".into(), self.varietal.clone());
        row.insert("process".into(), self.process.clone());
        row.insert("origin".into(), self.origin.clone());
        row.insert(
            "roast_date".into(),
            self.roast_date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
        );
        row.insert("grams_remaining".into(), self.grams_remaining.to_string());
        row.insert("notes".into(), self.notes.clone());
        row
    }
}

/// Details of a coffee about to be added to the inventory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewCoffee {
    pub name: String,
    pub varietal: String,
    pub process: String,
    pub origin: String,
    pub roast_date: Option<NaiveDate>,
    pub grams: f64,
    pub notes: String,
}

impl NewCoffee {
    /// Turn into an inventory entry with the given ID
    pub fn into_coffee(self, id: CoffeeId) -> Coffee {
        Coffee {
            id,
            name: self.name,
            varietal: self.varietal,
            process: self.process,
            origin: self.origin,
            roast_date: self.roast_date,
            grams_remaining: self.grams,
            notes: self.notes,
        }
    }
}
