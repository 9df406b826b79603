//! Ports (trait definitions) for external dependencies
//!
//! The tracker keeps its data in named tables of string cells. This module
//! defines the contract a storage adapter must fulfil so that the domain
//! never depends on the concrete storage technology.
//!
//! ## Static Dispatch
//!
//! We use native Rust async traits with `impl Future` return types instead of
//! `async_trait` to keep static dispatch.

use std::collections::BTreeMap;
use std::future::Future;

use crate::brewing::BrewLogError;

/// One table row: column name to cell text
pub type Row = BTreeMap<String, String>;

/// Port for table storage
///
/// Implementations must:
/// - Keep rows in insertion order
/// - Report a table that was never created as `BrewLogError::TableNotFound`
/// - Convert infrastructure errors to `BrewLogError::StorageFailure`
pub trait TableRepository: Send + Sync {
    /// Load every row of a table
    ///
    /// # Errors
    ///
    /// - `BrewLogError::TableNotFound` if the table does not exist
    /// - `BrewLogError::InvalidRow` if stored data cannot be decoded
    /// - `BrewLogError::StorageFailure` if the backend fails
    fn load(&self, table: &str) -> impl Future<Output = Result<Vec<Row>, BrewLogError>> + Send;

    /// Append a single row at the end of an existing table
    ///
    /// # Errors
    ///
    /// - `BrewLogError::TableNotFound` if the table does not exist
    /// - `BrewLogError::StorageFailure` if the backend fails
    fn append(&self, table: &str, row: Row)
        -> impl Future<Output = Result<(), BrewLogError>> + Send;

    /// Replace the whole content of a table, creating it if needed
    ///
    /// # Errors
    ///
    /// Returns `BrewLogError::StorageFailure` if the backend fails
    fn replace(
        &self,
        table: &str,
        rows: Vec<Row>,
    ) -> impl Future<Output = Result<(), BrewLogError>> + Send;

    /// Check if a table exists
    fn exists(&self, table: &str) -> impl Future<Output = Result<bool, BrewLogError>> + Send;
}
