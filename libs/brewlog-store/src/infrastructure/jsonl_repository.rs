//! JSON-lines Table Repository Implementation
//!
//! This module implements the `TableRepository` trait over plain files. Each
//! table lives in its own `<slug>.jsonl` file inside a data directory, one
//! JSON object of string cells per line.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use brewlog_domain::{BrewLogError, Row, TableRepository};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, error, info, instrument};

/// File name of a table: lowercase, runs of other characters become `_`
///
/// `Beans Inventory` is stored as `beans_inventory.jsonl`.
pub fn table_file_name(table: &str) -> String {
    let mut slug = String::with_capacity(table.len());
    for c in table.trim().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('_') {
            slug.push('_');
        }
    }
    format!("{}.jsonl", slug.trim_matches('_'))
}

/// JSON-lines implementation of the TableRepository port
///
/// ## Layout
///
/// - One file per table, named by [`table_file_name`]
/// - `append` adds one line at the end of the file
/// - `replace` writes a temporary file and renames it over the table, so a
///   crash never leaves a half-written table behind
///
/// ## Error Handling
///
/// A missing file is reported as `BrewLogError::TableNotFound`, a line that
/// is not a JSON object of strings as `BrewLogError::InvalidRow`, and every
/// other I/O error as `BrewLogError::StorageFailure`.
#[derive(Debug, Clone)]
pub struct JsonLinesRepository {
    dir: PathBuf,
}

impl JsonLinesRepository {
    /// Create a repository over the given data directory
    ///
    /// The directory is created on the first `replace`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        info!(dir = %dir.display(), "Initializing JsonLinesRepository");
        Self { dir }
    }

    /// Get the data directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding a table
    pub fn table_path(&self, table: &str) -> PathBuf {
        self.dir.join(table_file_name(table))
    }
}

impl TableRepository for JsonLinesRepository {
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn load(
        &self,
        table: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Row>, BrewLogError>> + Send {
        let table = table.to_string();
        let path = self.table_path(&table);

        async move {
            debug!(path = %path.display(), "Loading table");

            let content = match fs::read_to_string(&path).await {
                Ok(content) => content,
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    return Err(BrewLogError::table_not_found(table));
                }
                Err(err) => {
                    error!(path = %path.display(), error = ?err, "Failed to read table");
                    return Err(BrewLogError::storage_failure(format!(
                        "Failed to read '{}': {}",
                        path.display(),
                        err
                    )));
                }
            };

            let mut rows = Vec::new();
            for (index, line) in content.lines().enumerate() {
                if line.trim().is_empty() {
                    continue;
                }
                let row: Row = serde_json::from_str(line).map_err(|err| {
                    BrewLogError::invalid_row(format!(
                        "{} line {}: {}",
                        table,
                        index + 1,
                        err
                    ))
                })?;
                rows.push(row);
            }

            debug!(path = %path.display(), rows = rows.len(), "Loaded table");
            Ok(rows)
        }
    }

    #[instrument(skip(self, row), fields(dir = %self.dir.display()))]
    fn append(
        &self,
        table: &str,
        row: Row,
    ) -> impl std::future::Future<Output = Result<(), BrewLogError>> + Send {
        let table = table.to_string();
        let path = self.table_path(&table);

        async move {
            let mut line = serde_json::to_string(&row).map_err(|err| {
                BrewLogError::storage_failure(format!("Failed to encode row: {}", err))
            })?;
            line.push('\n');

            // No `create`: appending to a table that was never provisioned is an error
            let mut file = match OpenOptions::new().append(true).open(&path).await {
                Ok(file) => file,
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    return Err(BrewLogError::table_not_found(table));
                }
                Err(err) => {
                    error!(path = %path.display(), error = ?err, "Failed to open table");
                    return Err(BrewLogError::storage_failure(format!(
                        "Failed to open '{}': {}",
                        path.display(),
                        err
                    )));
                }
            };

            file.write_all(line.as_bytes()).await.map_err(|err| {
                error!(path = %path.display(), error = ?err, "Failed to append row");
                BrewLogError::storage_failure(format!(
                    "Failed to append to '{}': {}",
                    path.display(),
                    err
                ))
            })?;
            file.flush().await.map_err(|err| {
                BrewLogError::storage_failure(format!(
                    "Failed to flush '{}': {}",
                    path.display(),
                    err
                ))
            })?;

            info!(table = %table, "Appended row");
            Ok(())
        }
    }

    #[instrument(skip(self, rows), fields(dir = %self.dir.display(), rows = rows.len()))]
    fn replace(
        &self,
        table: &str,
        rows: Vec<Row>,
    ) -> impl std::future::Future<Output = Result<(), BrewLogError>> + Send {
        let table = table.to_string();
        let dir = self.dir.clone();
        let path = self.table_path(&table);

        async move {
            let mut content = String::new();
            for row in &rows {
                let line = serde_json::to_string(row).map_err(|err| {
                    BrewLogError::storage_failure(format!("Failed to encode row: {}", err))
                })?;
                content.push_str(&line);
                content.push('\n');
            }

            fs::create_dir_all(&dir).await.map_err(|err| {
                error!(dir = %dir.display(), error = ?err, "Failed to create data directory");
                BrewLogError::storage_failure(format!(
                    "Failed to create '{}': {}",
                    dir.display(),
                    err
                ))
            })?;

            let tmp = path.with_extension("jsonl.tmp");
            fs::write(&tmp, content).await.map_err(|err| {
                error!(path = %tmp.display(), error = ?err, "Failed to write table");
                BrewLogError::storage_failure(format!(
                    "Failed to write '{}': {}",
                    tmp.display(),
                    err
                ))
            })?;
            fs::rename(&tmp, &path).await.map_err(|err| {
                error!(path = %path.display(), error = ?err, "Failed to move table into place");
                BrewLogError::storage_failure(format!(
                    "Failed to rename '{}' to '{}': {}",
                    tmp.display(),
                    path.display(),
                    err
                ))
            })?;

            info!(table = %table, rows = rows.len(), "Replaced table");
            Ok(())
        }
    }

    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn exists(
        &self,
        table: &str,
    ) -> impl std::future::Future<Output = Result<bool, BrewLogError>> + Send {
        let path = self.table_path(table);

        async move {
            fs::try_exists(&path).await.map_err(|err| {
                BrewLogError::storage_failure(format!(
                    "Failed to check '{}': {}",
                    path.display(),
                    err
                ))
            })
        }
    }
}
