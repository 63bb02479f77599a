//! # In-Memory Record Store
//!
//! A generic keyed collection backing one entity type. Records are kept in
//! a `Vec` so snapshots come back in a stable order: newly created records
//! go to the front, seeded records keep their file order behind them.
//!
//! Every operation first waits out the configured latency, then takes the
//! lock for the duration of a single read or write. There is no cross-store
//! transaction; callers that write to two stores do so in two steps.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info, warn};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use crate::storage::error::StoreError;
use crate::storage::traits::{Record, RecordStorage};

/// In-memory store for a single record type
#[derive(Clone)]
pub struct MemoryRecordStore<R: Record> {
    records: Arc<RwLock<Vec<R>>>,
    latency: Duration,
}

impl<R: Record> MemoryRecordStore<R> {
    /// Create an empty store with the given per-operation latency
    pub fn new(latency: Duration) -> Self {
        Self::with_records(Vec::new(), latency)
    }

    /// Create a store pre-filled with `records` (in the given order)
    pub fn with_records(records: Vec<R>, latency: Duration) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
            latency,
        }
    }

    /// Number of stored records, without simulated latency. Test-only:
    /// panics if the lock is poisoned.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.read().expect("Store lock poisoned").len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<R>>> {
        self.records
            .read()
            .map_err(|_| anyhow!(StoreError::Poisoned { kind: R::KIND }))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<R>>> {
        self.records
            .write()
            .map_err(|_| anyhow!(StoreError::Poisoned { kind: R::KIND }))
    }
}

#[async_trait]
impl<R: Record> RecordStorage<R> for MemoryRecordStore<R> {
    async fn get_all(&self) -> Result<Vec<R>> {
        self.simulate_latency().await;
        let records = self.read()?;
        debug!("Loaded {} {} records", records.len(), R::KIND);
        Ok(records.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<R>> {
        self.simulate_latency().await;
        let records = self.read()?;
        Ok(records.iter().find(|record| record.id() == id).cloned())
    }

    async fn create(&self, draft: R::Draft) -> Result<R> {
        self.simulate_latency().await;
        let record = R::from_draft(R::generate_id(), Utc::now(), draft);

        let mut records = self.write()?;
        records.insert(0, record.clone());

        info!("Created {} {}", R::KIND, record.id());
        Ok(record)
    }

    async fn update(&self, id: &str, patch: R::Patch) -> Result<R> {
        self.simulate_latency().await;
        let mut records = self.write()?;

        let Some(record) = records.iter_mut().find(|record| record.id() == id) else {
            warn!("Cannot update missing {} {}", R::KIND, id);
            return Err(anyhow!(StoreError::not_found(R::KIND, id)));
        };
        record.apply_patch(patch);

        info!("Updated {} {}", R::KIND, id);
        Ok(record.clone())
    }

    async fn delete(&self, id: &str) -> Result<R> {
        self.simulate_latency().await;
        let mut records = self.write()?;

        let Some(index) = records.iter().position(|record| record.id() == id) else {
            warn!("Cannot delete missing {} {}", R::KIND, id);
            return Err(anyhow!(StoreError::not_found(R::KIND, id)));
        };
        let deleted = records.remove(index);

        info!("Deleted {} {}", R::KIND, id);
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::error::is_not_found;
    use crate::storage::records::{ActivityDraft, ActivityPatch};
    use chrono::NaiveDate;
    use shared::{Activity, ActivityCategory, Location};

    fn store() -> MemoryRecordStore<Activity> {
        MemoryRecordStore::new(Duration::ZERO)
    }

    fn draft(name: &str) -> ActivityDraft {
        ActivityDraft {
            name: name.to_string(),
            location: Location::default(),
            time: "09:00".to_string(),
            duration: 60,
            cost: 10.0,
            category: ActivityCategory::Food,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_unique_ids_newest_first() {
        let store = store();

        let first = store.create(draft("Breakfast")).await.expect("Failed to create");
        let second = store.create(draft("Lunch")).await.expect("Failed to create");

        assert_ne!(first.id, second.id);
        let all = store.get_all().await.expect("Failed to list");
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, second.id);
        assert_eq!(all[1].id, first.id);
    }

    #[tokio::test]
    async fn test_snapshot_is_an_independent_copy() {
        let store = store();
        let created = store.create(draft("Breakfast")).await.expect("Failed to create");

        let mut snapshot = store.get_all().await.expect("Failed to list");
        snapshot[0].name = "Changed".to_string();
        snapshot.clear();

        let stored = store.get_by_id(&created.id).await.expect("Failed to get")
            .expect("Activity should exist");
        assert_eq!(stored.name, "Breakfast");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_update_merges_fields() {
        let store = store();
        let created = store.create(draft("Breakfast")).await.expect("Failed to create");

        let updated = store
            .update(&created.id, ActivityPatch { cost: Some(25.0), ..Default::default() })
            .await
            .expect("Failed to update");

        assert_eq!(updated.cost, 25.0);
        assert_eq!(updated.name, "Breakfast");
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_update_missing_record_is_not_found() {
        let store = store();

        let err = store
            .update("activity::missing", ActivityPatch::default())
            .await
            .unwrap_err();

        assert!(is_not_found(&err));
        assert_eq!(err.to_string(), "Activity not found: activity::missing");
    }

    #[tokio::test]
    async fn test_delete_returns_removed_record() {
        let store = store();
        let created = store.create(draft("Breakfast")).await.expect("Failed to create");

        let deleted = store.delete(&created.id).await.expect("Failed to delete");
        assert_eq!(deleted.id, created.id);
        assert!(store.is_empty());

        let err = store.delete(&created.id).await.unwrap_err();
        assert!(is_not_found(&err));
    }

    #[tokio::test]
    async fn test_get_by_id_missing_returns_none() {
        let store = store();
        let found = store.get_by_id("activity::missing").await.expect("Failed to get");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_latency_is_applied() {
        let store: MemoryRecordStore<Activity> = MemoryRecordStore::new(Duration::from_millis(20));
        let started = std::time::Instant::now();

        store.get_all().await.expect("Failed to list");

        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
