//! In-memory table storage for tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::brewing::BrewLogError;
use crate::ports::{Row, TableRepository};

#[derive(Clone, Default)]
pub(crate) struct InMemoryTables {
    tables: Arc<Mutex<HashMap<String, Vec<Row>>>>,
    loads: Arc<AtomicUsize>,
    fail_appends: Arc<Mutex<Option<String>>>,
    fail_replaces: Arc<Mutex<Option<String>>>,
}

impl InMemoryTables {
    pub(crate) fn with_tables(names: &[&str]) -> Self {
        let storage = Self::default();
        for name in names {
            storage.put(name, Vec::new());
        }
        storage
    }

    pub(crate) fn put(&self, table: &str, rows: Vec<Row>) {
        self.tables.lock().unwrap().insert(table.to_string(), rows);
    }

    pub(crate) fn rows(&self, table: &str) -> Vec<Row> {
        self.tables
            .lock()
            .unwrap()
            .get(table)
            .cloned()
            .unwrap_or_default()
    }

    pub(crate) fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    /// Make every append to `table` fail
    pub(crate) fn fail_appends_to(&self, table: &str) {
        *self.fail_appends.lock().unwrap() = Some(table.to_string());
    }

    /// Make every replace of `table` fail
    pub(crate) fn fail_replaces_to(&self, table: &str) {
        *self.fail_replaces.lock().unwrap() = Some(table.to_string());
    }
}

impl TableRepository for InMemoryTables {
    fn load(
        &self,
        table: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Row>, BrewLogError>> + Send {
        let table = table.to_string();
        let tables = self.tables.clone();
        let loads = self.loads.clone();

        async move {
            loads.fetch_add(1, Ordering::SeqCst);
            tables
                .lock()
                .unwrap()
                .get(&table)
                .cloned()
                .ok_or_else(|| BrewLogError::table_not_found(table))
        }
    }

    fn append(
        &self,
        table: &str,
        row: Row,
    ) -> impl std::future::Future<Output = Result<(), BrewLogError>> + Send {
        let table = table.to_string();
        let tables = self.tables.clone();
        let fail_appends = self.fail_appends.clone();

        async move {
            if fail_appends.lock().unwrap().as_deref() == Some(table.as_str()) {
                return Err(BrewLogError::storage_failure("append rejected"));
            }
            match tables.lock().unwrap().get_mut(&table) {
                Some(rows) => {
                    rows.push(row);
                    Ok(())
                }
                None => Err(BrewLogError::table_not_found(table)),
            }
        }
    }

    fn replace(
        &self,
        table: &str,
        rows: Vec<Row>,
    ) -> impl std::future::Future<Output = Result<(), BrewLogError>> + Send {
        let table = table.to_string();
        let tables = self.tables.clone();
        let fail_replaces = self.fail_replaces.clone();

        async move {
            if fail_replaces.lock().unwrap().as_deref() == Some(table.as_str()) {
                return Err(BrewLogError::storage_failure("replace rejected"));
            }
            tables.lock().unwrap().insert(table, rows);
            Ok(())
        }
    }

    fn exists(
        &self,
        table: &str,
    ) -> impl std::future::Future<Output = Result<bool, BrewLogError>> + Send {
        let table = table.to_string();
        let tables = self.tables.clone();

        async move { Ok(tables.lock().unwrap().contains_key(&table)) }
    }
}
