//! Domain errors for brew log and inventory operations
//!
//! These errors abstract away the storage technology: adapters convert
//! their I/O and parsing failures into these variants.

use thiserror::Error;

use crate::extraction::ExtractionError;

/// Errors that can occur while reading or writing tracker tables
#[derive(Error, Debug)]
pub enum BrewLogError {
    /// The storage backend failed
    #[error("Storage operation failed: {0}")]
    StorageFailure(String),

    /// The requested table has not been provisioned
    #[error("Table '{0}' not found")]
    TableNotFound(String),

    /// A stored row could not be interpreted
    #[error("Invalid row: {0}")]
    InvalidRow(String),

    /// No coffee with this ID in the inventory
    #[error("Coffee {0} not found in inventory")]
    CoffeeNotFound(String),

    /// An inventory amount is negative or not a number
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// The measurement did not produce a valid extraction
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

impl BrewLogError {
    /// Create a storage failure error with a message
    pub fn storage_failure(msg: impl Into<String>) -> Self {
        Self::StorageFailure(msg.into())
    }

    /// Create a table not found error
    pub fn table_not_found(table: impl Into<String>) -> Self {
        Self::TableNotFound(table.into())
    }

    /// Create an invalid row error with a message
    pub fn invalid_row(msg: impl Into<String>) -> Self {
        Self::InvalidRow(msg.into())
    }

    /// Create an invalid amount error with a message
    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }

    /// Create a coffee not found error
    pub fn coffee_not_found(id: impl Into<String>) -> Self {
        Self::CoffeeNotFound(id.into())
    }
}

/// Result type alias for brew log operations
pub type Result<T> = std::result::Result<T, BrewLogError>;
