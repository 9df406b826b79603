//! Table cache
//!
//! Keeps loaded tables in memory, keyed by table name. Callers decide when
//! cached rows are stale by passing `force_refresh` explicitly.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::brewing::BrewLogError;
use crate::ports::{Row, TableRepository};

/// Write-through cache in front of a `TableRepository`
pub struct TableCache<R> {
    repository: R,
    tables: Mutex<HashMap<String, Vec<Row>>>,
}

impl<R> TableCache<R>
where
    R: TableRepository,
{
    /// Create an empty cache over the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            tables: Mutex::new(HashMap::new()),
        }
    }

    /// Load a table, from memory unless `force_refresh` is set
    pub async fn load(&self, table: &str, force_refresh: bool) -> Result<Vec<Row>, BrewLogError> {
        if !force_refresh {
            if let Some(rows) = self.cached(table) {
                debug!(table = table, rows = rows.len(), "Serving table from cache");
                return Ok(rows);
            }
        }

        let rows = self.repository.load(table).await?;
        debug!(table = table, rows = rows.len(), "Loaded table from repository");
        self.lock().insert(table.to_string(), rows.clone());
        Ok(rows)
    }

    /// Append a row and drop the cached copy of the table
    pub async fn append(&self, table: &str, row: Row) -> Result<(), BrewLogError> {
        self.repository.append(table, row).await?;
        self.invalidate(table);
        Ok(())
    }

    /// Replace a table and keep the written rows as the cached copy
    pub async fn replace(&self, table: &str, rows: Vec<Row>) -> Result<(), BrewLogError> {
        self.repository.replace(table, rows.clone()).await?;
        self.lock().insert(table.to_string(), rows);
        Ok(())
    }

    /// Forget the cached copy of a table
    pub fn invalidate(&self, table: &str) {
        self.lock().remove(table);
    }

    /// Forget every cached table
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Whether a table is currently cached
    pub fn is_cached(&self, table: &str) -> bool {
        self.lock().contains_key(table)
    }

    /// Get the underlying repository
    pub fn repository(&self) -> &R {
        &self.repository
    }

    fn cached(&self, table: &str) -> Option<Vec<Row>> {
        self.lock().get(table).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<Row>>> {
        // Cached rows stay usable even if a holder panicked
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryTables;

    fn row(name: &str) -> Row {
        [("name".to_string(), name.to_string())].into_iter().collect()
    }

    #[tokio::test]
    async fn test_load_serves_cached_rows() {
        let storage = InMemoryTables::with_tables(&["Brewers"]);
        let cache = TableCache::new(storage.clone());

        cache.load("Brewers", false).await.unwrap();
        storage.put("Brewers", vec![row("V60")]);

        // Stale until refreshed
        assert!(cache.load("Brewers", false).await.unwrap().is_empty());
        assert_eq!(cache.load("Brewers", true).await.unwrap(), vec![row("V60")]);
        assert_eq!(storage.load_count(), 2);
    }

    #[tokio::test]
    async fn test_append_invalidates() {
        let storage = InMemoryTables::with_tables(&["Brewers"]);
        let cache = TableCache::new(storage.clone());

        cache.load("Brewers", false).await.unwrap();
        cache.append("Brewers", row("Kalita")).await.unwrap();
        assert!(!cache.is_cached("Brewers"));

        assert_eq!(cache.load("Brewers", false).await.unwrap(), vec![row("Kalita")]);
    }

    #[tokio::test]
    async fn test_replace_writes_through() {
        let storage = InMemoryTables::with_tables(&["Brewers"]);
        let cache = TableCache::new(storage.clone());

        cache
            .replace("Brewers", vec![row("V60"), row("Origami")])
            .await
            .unwrap();

        assert!(cache.is_cached("Brewers"));
        assert_eq!(storage.rows("Brewers").len(), 2);
        assert_eq!(cache.load("Brewers", false).await.unwrap().len(), 2);
        assert_eq!(storage.load_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_table_is_not_cached() {
        let cache = TableCache::new(InMemoryTables::default());

        let result = cache.load("Brew Log", false).await;
        assert!(matches!(result, Err(BrewLogError::TableNotFound(_))));
        assert!(!cache.is_cached("Brew Log"));
    }

    #[tokio::test]
    async fn test_invalidate_and_clear() {
        let cache = TableCache::new(InMemoryTables::with_tables(&["Brewers", "Brew Log"]));
        cache.load("Brewers", false).await.unwrap();
        cache.load("Brew Log", false).await.unwrap();

        cache.invalidate("Brewers");
        assert!(!cache.is_cached("Brewers"));
        assert!(cache.is_cached("Brew Log"));

        cache.clear();
        assert!(!cache.is_cached("Brew Log"));
    }
}
