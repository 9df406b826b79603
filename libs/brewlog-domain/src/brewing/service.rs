//! Brew service - Business logic orchestration
//!
//! This module coordinates the extraction engine with the inventory and the
//! brew log. The engine stays pure; every read and write of tracker tables
//! happens here, through the table cache and the repository port.

use chrono::Utc;
use tracing::{error, info, warn};

use super::{BrewLogEntry, BrewLogError, BrewRequest, BrewStats, RecordedBrew};
use crate::cache::TableCache;
use crate::extraction::{self, BrewMeasurement, ExtractionError, ExtractionResult};
use crate::ids::CoffeeId;
use crate::inventory::{Coffee, NewCoffee};
use crate::ports::{Row, TableRepository};
use crate::suggestions::{self, BrewingSuggestion};
use crate::tables::{cell, Table};

/// Configuration for the brew service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Coffees with fewer grams left than this are flagged (default: 50g)
    pub low_supply_threshold_g: f64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            low_supply_threshold_g: 50.0,
        }
    }
}

/// Service for the coffee tracker
///
/// This service encapsulates the tracker's business rules:
/// - Computes extractions through the pure engine
/// - Logs a brew only once its extraction is valid
/// - Takes the brewed dose out of the inventory
/// - Serves tables through an explicit cache
///
/// The service is generic over any `TableRepository` implementation.
pub struct BrewService<R> {
    tables: TableCache<R>,
    config: ServiceConfig,
}

impl<R> BrewService<R>
where
    R: TableRepository,
{
    /// Create a new BrewService with the given repository and configuration
    pub fn new(repository: R, config: ServiceConfig) -> Self {
        Self {
            tables: TableCache::new(repository),
            config,
        }
    }

    /// Create a new BrewService with default configuration
    pub fn with_repository(repository: R) -> Self {
        Self::new(repository, ServiceConfig::default())
    }

    /// Create every missing tracker table, empty
    ///
    /// Returns the tables that were created. Existing tables are left alone.
    pub async fn provision(&self) -> Result<Vec<Table>, BrewLogError> {
        let mut created = Vec::new();
        for table in Table::ALL {
            if self.tables.repository().exists(table.name()).await? {
                continue;
            }
            self.tables.replace(table.name(), Vec::new()).await?;
            info!(table = %table, "Provisioned table");
            created.push(table);
        }
        Ok(created)
    }

    /// Compute the extraction for a measurement
    pub fn calculate(
        &self,
        measurement: &BrewMeasurement,
    ) -> Result<ExtractionResult, ExtractionError> {
        extraction::calculate(measurement)
    }

    /// List the coffees in the inventory
    ///
    /// Rows without a name or with unreadable grams are skipped.
    pub async fn coffees(&self, force_refresh: bool) -> Result<Vec<Coffee>, BrewLogError> {
        let rows = self
            .tables
            .load(Table::BeansInventory.name(), force_refresh)
            .await?;

        Ok(rows
            .iter()
            .filter_map(|row| match Coffee::from_row(row) {
                Ok(coffee) => Some(coffee),
                Err(err) => {
                    warn!(error = %err, "Skipping inventory row");
                    None
                }
            })
            .collect())
    }

    /// Find a coffee by ID
    ///
    /// # Errors
    ///
    /// Returns `BrewLogError::CoffeeNotFound` if no coffee has this ID
    pub async fn find_coffee(&self, id: &CoffeeId) -> Result<Coffee, BrewLogError> {
        self.coffees(false)
            .await?
            .into_iter()
            .find(|coffee| &coffee.id == id)
            .ok_or_else(|| BrewLogError::coffee_not_found(id.as_str()))
    }

    /// Coffees running low, per the configured threshold
    pub async fn low_supply(&self) -> Result<Vec<Coffee>, BrewLogError> {
        let threshold = self.config.low_supply_threshold_g;
        Ok(self
            .coffees(false)
            .await?
            .into_iter()
            .filter(|coffee| coffee.is_low_supply(threshold))
            .collect())
    }

    /// Add a coffee to the inventory
    ///
    /// The ID is derived from the current time; a numeric suffix is added
    /// if another coffee already uses it.
    pub async fn add_coffee(&self, new_coffee: NewCoffee) -> Result<Coffee, BrewLogError> {
        check_grams(new_coffee.grams)?;

        let rows = self
            .tables
            .load(Table::BeansInventory.name(), true)
            .await?;

        let base = CoffeeId::from_timestamp(Utc::now());
        let taken = |candidate: &CoffeeId| rows.iter().any(|row| cell(row, "id") == candidate.as_str());
        let mut id = base.clone();
        let mut suffix = 1;
        while taken(&id) {
            id = CoffeeId::new(format!("{}-{}", base, suffix));
            suffix += 1;
        }

        let coffee = new_coffee.into_coffee(id);
        self.tables
            .append(Table::BeansInventory.name(), coffee.to_row())
            .await?;

        info!(coffee_id = %coffee.id, name = %coffee.name, grams = coffee.grams_remaining, "Added coffee");
        Ok(coffee)
    }

    /// Add grams to a coffee ("Add More")
    pub async fn restock(&self, id: &CoffeeId, grams: f64) -> Result<Coffee, BrewLogError> {
        check_grams(grams)?;
        self.update_grams(id, |current| current + grams).await
    }

    /// Set the remaining grams of a coffee ("Adjust Amount")
    pub async fn adjust(&self, id: &CoffeeId, grams: f64) -> Result<Coffee, BrewLogError> {
        check_grams(grams)?;
        self.update_grams(id, |_| grams).await
    }

    /// Compute, log and take the dose out of the inventory
    ///
    /// Nothing is written unless the coffee exists and the measurement
    /// produces a valid extraction. If the inventory cannot be updated after
    /// the log row was appended, the brew log is put back as it was.
    ///
    /// # Errors
    ///
    /// - `BrewLogError::Extraction` if the measurement is invalid
    /// - `BrewLogError::CoffeeNotFound` if the coffee is not in the inventory
    /// - `BrewLogError::StorageFailure` if a table cannot be written
    pub async fn record_brew(&self, request: BrewRequest) -> Result<RecordedBrew, BrewLogError> {
        let result = extraction::calculate(&request.measurement)?;

        let coffees = self.coffees(true).await?;
        let coffee = coffees
            .iter()
            .find(|coffee| coffee.id == request.coffee_id)
            .ok_or_else(|| BrewLogError::coffee_not_found(request.coffee_id.as_str()))?;

        let entry = BrewLogEntry::new(coffee, &request, &result, Utc::now());
        let previous_log = self.tables.load(Table::BrewLog.name(), true).await?;
        self.tables
            .append(Table::BrewLog.name(), entry.to_row())
            .await?;

        let dose = request.measurement.coffee_dose_g;
        let updated = match self
            .update_grams(&request.coffee_id, |current| current - dose)
            .await
        {
            Ok(updated) => updated,
            Err(err) => {
                self.restore_brew_log(previous_log).await;
                return Err(err);
            }
        };

        let low_supply = updated.is_low_supply(self.config.low_supply_threshold_g);
        if updated.grams_remaining < 0.0 {
            warn!(coffee_id = %updated.id, remaining = updated.grams_remaining, "Inventory went below zero");
        } else if low_supply {
            warn!(coffee_id = %updated.id, remaining = updated.grams_remaining, "Low coffee supply");
        }

        info!(
            coffee_id = %updated.id,
            extraction_yield = result.extraction_yield_percent,
            zone = %result.zone,
            "Brew recorded"
        );

        Ok(RecordedBrew {
            entry,
            result,
            remaining_g: updated.grams_remaining,
            low_supply,
        })
    }

    /// The brew log, newest first
    ///
    /// Rows that cannot be read are skipped.
    pub async fn brew_log(&self, force_refresh: bool) -> Result<Vec<BrewLogEntry>, BrewLogError> {
        let rows = self.tables.load(Table::BrewLog.name(), force_refresh).await?;

        let mut entries: Vec<BrewLogEntry> = rows
            .iter()
            .filter_map(|row| match BrewLogEntry::from_row(row) {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!(error = %err, "Skipping brew log row");
                    None
                }
            })
            .collect();

        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(entries)
    }

    /// Statistics over the whole brew log
    pub async fn stats(&self) -> Result<BrewStats, BrewLogError> {
        Ok(BrewStats::from_entries(&self.brew_log(false).await?))
    }

    /// Names of the known brewers
    pub async fn brewers(&self) -> Result<Vec<String>, BrewLogError> {
        self.names(Table::Brewers).await
    }

    /// Names of the known water recipes
    pub async fn water_recipes(&self) -> Result<Vec<String>, BrewLogError> {
        self.names(Table::WaterRecipes).await
    }

    /// Brewing advice for a coffee in the inventory
    ///
    /// Returns `None` when the coffee has neither varietal nor process.
    pub async fn suggestions_for(
        &self,
        id: &CoffeeId,
    ) -> Result<Option<BrewingSuggestion>, BrewLogError> {
        let coffee = self.find_coffee(id).await?;
        if coffee.varietal.is_empty() && coffee.process.is_empty() {
            return Ok(None);
        }
        Ok(Some(suggestions::suggest(&coffee.varietal, &coffee.process)))
    }

    /// Get the service configuration
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    async fn restore_brew_log(&self, rows: Vec<Row>) {
        match self.tables.replace(Table::BrewLog.name(), rows).await {
            Ok(()) => warn!("Inventory update failed, brew log restored"),
            Err(err) => error!(error = %err, "Inventory update failed and brew log could not be restored"),
        }
    }

    async fn names(&self, table: Table) -> Result<Vec<String>, BrewLogError> {
        let rows = self.tables.load(table.name(), false).await?;
        Ok(rows
            .iter()
            .map(|row| cell(row, "name"))
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect())
    }

    async fn update_grams(
        &self,
        id: &CoffeeId,
        update: impl FnOnce(f64) -> f64,
    ) -> Result<Coffee, BrewLogError> {
        // Always mutate the latest rows so a stale cache is never written back
        let mut rows: Vec<Row> = self
            .tables
            .load(Table::BeansInventory.name(), true)
            .await?;

        let row = rows
            .iter_mut()
            .find(|row| cell(row, "id") == id.as_str())
            .ok_or_else(|| BrewLogError::coffee_not_found(id.as_str()))?;

        let mut coffee = Coffee::from_row(row)?;
        coffee.grams_remaining = update(coffee.grams_remaining);
        row.insert(
            "grams_remaining".to_string(),
            coffee.grams_remaining.to_string(),
        );

        self.tables
            .replace(Table::BeansInventory.name(), rows)
            .await?;

        info!(coffee_id = %coffee.id, grams = coffee.grams_remaining, "Updated inventory");
        Ok(coffee)
    }
}

fn check_grams(grams: f64) -> Result<(), BrewLogError> {
    if !grams.is_finite() || grams < 0.0 {
        return Err(BrewLogError::invalid_amount(format!(
            "grams must be a non-negative number, got {}",
            grams
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::Zone;
    use crate::testing::InMemoryTables;

    async fn provisioned() -> (InMemoryTables, BrewService<InMemoryTables>) {
        let storage = InMemoryTables::default();
        let service = BrewService::with_repository(storage.clone());
        service.provision().await.unwrap();
        (storage, service)
    }

    fn kochere() -> NewCoffee {
        NewCoffee {
            name: "Kochere".to_string(),
            varietal: "Ethiopian Heirloom".to_string(),
            process: "Washed".to_string(),
            grams: 250.0,
            ..Default::default()
        }
    }

    fn ideal_measurement() -> BrewMeasurement {
        BrewMeasurement::new(20.0, 0.0, 40.0, 300.0, 256.0)
    }

    #[tokio::test]
    async fn test_provision_creates_missing_tables_only() {
        let storage = InMemoryTables::with_tables(&["Brewers"]);
        let service = BrewService::with_repository(storage.clone());

        let created = service.provision().await.unwrap();
        assert_eq!(
            created,
            vec![Table::BeansInventory, Table::BrewLog, Table::WaterRecipes]
        );

        assert!(service.provision().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_and_find_coffee() {
        let (_, service) = provisioned().await;

        let added = service.add_coffee(kochere()).await.unwrap();
        let found = service.find_coffee(&added.id).await.unwrap();

        assert_eq!(found, added);
        assert_eq!(found.grams_remaining, 250.0);
    }

    #[tokio::test]
    async fn test_add_coffee_ids_are_unique() {
        let (_, service) = provisioned().await;

        let first = service.add_coffee(kochere()).await.unwrap();
        let second = service.add_coffee(kochere()).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(service.coffees(true).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_restock_and_adjust() {
        let (_, service) = provisioned().await;
        let coffee = service.add_coffee(kochere()).await.unwrap();

        let restocked = service.restock(&coffee.id, 100.0).await.unwrap();
        assert_eq!(restocked.grams_remaining, 350.0);

        let adjusted = service.adjust(&coffee.id, 42.0).await.unwrap();
        assert_eq!(adjusted.grams_remaining, 42.0);

        let low = service.low_supply().await.unwrap();
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].id, coffee.id);
    }

    #[tokio::test]
    async fn test_restock_and_adjust_reject_invalid_grams() {
        let (storage, service) = provisioned().await;
        let coffee = service.add_coffee(kochere()).await.unwrap();

        let restocked = service.restock(&coffee.id, -1000.0).await;
        assert!(matches!(restocked, Err(BrewLogError::InvalidAmount(_))));

        let adjusted = service.adjust(&coffee.id, f64::NAN).await;
        assert!(matches!(adjusted, Err(BrewLogError::InvalidAmount(_))));

        let infinite = service.restock(&coffee.id, f64::INFINITY).await;
        assert!(matches!(infinite, Err(BrewLogError::InvalidAmount(_))));

        let stored = storage.rows("Beans Inventory");
        assert_eq!(cell(&stored[0], "grams_remaining"), "250");
    }

    #[tokio::test]
    async fn test_add_coffee_rejects_negative_grams() {
        let (storage, service) = provisioned().await;

        let result = service
            .add_coffee(NewCoffee {
                grams: -5.0,
                ..kochere()
            })
            .await;

        assert!(matches!(result, Err(BrewLogError::InvalidAmount(_))));
        assert!(storage.rows("Beans Inventory").is_empty());
    }

    #[tokio::test]
    async fn test_update_unknown_coffee_fails() {
        let (_, service) = provisioned().await;

        let result = service.restock(&CoffeeId::new("nope"), 10.0).await;
        assert!(matches!(result, Err(BrewLogError::CoffeeNotFound(_))));
    }

    #[tokio::test]
    async fn test_record_brew_logs_and_decrements() {
        let (storage, service) = provisioned().await;
        let coffee = service.add_coffee(kochere()).await.unwrap();

        let mut request = BrewRequest::new(coffee.id.clone(), ideal_measurement());
        request.brewer = Some("V60".to_string());

        let recorded = service.record_brew(request).await.unwrap();

        assert_eq!(recorded.result.zone, Zone::Ideal);
        assert_eq!(recorded.remaining_g, 230.0);
        assert!(!recorded.low_supply);
        assert_eq!(storage.rows("Brew Log").len(), 1);

        let log = service.brew_log(false).await.unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].coffee_name, "Kochere");
        assert_eq!(log[0].extraction_yield, recorded.result.extraction_yield_percent);

        let remaining = service.find_coffee(&coffee.id).await.unwrap();
        assert_eq!(remaining.grams_remaining, 230.0);
    }

    #[tokio::test]
    async fn test_record_brew_invalid_measurement_writes_nothing() {
        let (storage, service) = provisioned().await;
        let coffee = service.add_coffee(kochere()).await.unwrap();

        let measurement = BrewMeasurement::new(18.0, 0.0, 10.0, 10.0, 5.0);
        let result = service
            .record_brew(BrewRequest::new(coffee.id.clone(), measurement))
            .await;

        assert!(matches!(
            result,
            Err(BrewLogError::Extraction(ExtractionError::DivisionUndefined(_)))
        ));
        assert!(storage.rows("Brew Log").is_empty());
        assert_eq!(
            service.find_coffee(&coffee.id).await.unwrap().grams_remaining,
            250.0
        );
    }

    #[tokio::test]
    async fn test_record_brew_unknown_coffee_writes_nothing() {
        let (storage, service) = provisioned().await;

        let result = service
            .record_brew(BrewRequest::new(CoffeeId::new("ghost"), ideal_measurement()))
            .await;

        assert!(matches!(result, Err(BrewLogError::CoffeeNotFound(_))));
        assert!(storage.rows("Brew Log").is_empty());
    }

    #[tokio::test]
    async fn test_record_brew_log_failure_keeps_inventory() {
        let (storage, service) = provisioned().await;
        let coffee = service.add_coffee(kochere()).await.unwrap();
        storage.fail_appends_to("Brew Log");

        let result = service
            .record_brew(BrewRequest::new(coffee.id.clone(), ideal_measurement()))
            .await;

        assert!(matches!(result, Err(BrewLogError::StorageFailure(_))));
        assert_eq!(
            service.find_coffee(&coffee.id).await.unwrap().grams_remaining,
            250.0
        );
    }

    #[tokio::test]
    async fn test_record_brew_inventory_failure_restores_log() {
        let (storage, service) = provisioned().await;
        let coffee = service.add_coffee(kochere()).await.unwrap();
        service
            .record_brew(BrewRequest::new(coffee.id.clone(), ideal_measurement()))
            .await
            .unwrap();
        storage.fail_replaces_to("Beans Inventory");

        let result = service
            .record_brew(BrewRequest::new(coffee.id.clone(), ideal_measurement()))
            .await;

        assert!(matches!(result, Err(BrewLogError::StorageFailure(_))));
        assert_eq!(storage.rows("Brew Log").len(), 1);
        assert_eq!(service.brew_log(false).await.unwrap().len(), 1);
        assert_eq!(
            service.find_coffee(&coffee.id).await.unwrap().grams_remaining,
            230.0
        );
    }

    #[tokio::test]
    async fn test_record_brew_flags_low_supply() {
        let (_, service) = provisioned().await;
        let coffee = service
            .add_coffee(NewCoffee {
                grams: 60.0,
                ..kochere()
            })
            .await
            .unwrap();

        let recorded = service
            .record_brew(BrewRequest::new(coffee.id, ideal_measurement()))
            .await
            .unwrap();

        assert_eq!(recorded.remaining_g, 40.0);
        assert!(recorded.low_supply);
    }

    #[tokio::test]
    async fn test_brew_log_newest_first_and_stats() {
        let (storage, service) = provisioned().await;
        let rows: Vec<Row> = [
            ("2024-01-01 08:00", "A", "18.0"),
            ("2024-03-01 08:00", "B", "20.0"),
            ("2024-02-01 08:00", "B", "22.0"),
        ]
        .iter()
        .map(|(date, name, ey)| {
            [
                ("date", *date),
                ("coffee_id", *name),
                ("coffee_name", *name),
                ("tds_percent", "1.3"),
                ("extraction_yield", *ey),
            ]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<Row>()
        })
        .collect();
        storage.put("Brew Log", rows);

        let log = service.brew_log(true).await.unwrap();
        let names: Vec<&str> = log.iter().map(|e| e.coffee_name.as_str()).collect();
        assert_eq!(names, vec!["B", "B", "A"]);

        let stats = service.stats().await.unwrap();
        assert_eq!(stats.total_brews, 3);
        assert_eq!(stats.average_extraction_yield, Some(20.0));
        assert_eq!(stats.most_used_coffee, Some(("B".to_string(), 2)));
    }

    #[tokio::test]
    async fn test_brewers_and_water_recipes() {
        let named = |name: &str| -> Row { [("name".to_string(), name.to_string())].into_iter().collect() };
        let storage = InMemoryTables::default();
        storage.put("Brewers", vec![named("V60"), named(""), named("Kalita Wave")]);
        storage.put("Water Recipes", vec![named("Rao")]);

        let service = BrewService::with_repository(storage);
        service.provision().await.unwrap();

        assert_eq!(service.brewers().await.unwrap(), vec!["V60", "Kalita Wave"]);
        assert_eq!(service.water_recipes().await.unwrap(), vec!["Rao"]);
    }

    #[tokio::test]
    async fn test_suggestions_for_coffee() {
        let (_, service) = provisioned().await;
        let coffee = service.add_coffee(kochere()).await.unwrap();
        let plain = service
            .add_coffee(NewCoffee {
                name: "Mystery".to_string(),
                grams: 100.0,
                ..Default::default()
            })
            .await
            .unwrap();

        let suggestion = service.suggestions_for(&coffee.id).await.unwrap().unwrap();
        // Washed process advice overrides the varietal ratio
        assert_eq!(suggestion.brew_ratio, "1:15.5 to 1:16");

        assert!(service.suggestions_for(&plain.id).await.unwrap().is_none());
    }

    #[test]
    fn test_calculate_delegates_to_engine() {
        let service = BrewService::with_repository(InMemoryTables::default());
        let result = service.calculate(&ideal_measurement()).unwrap();
        assert_eq!(result, extraction::compute(&ideal_measurement()).unwrap());
    }
}
