//! # Storage Traits
//!
//! This module defines the record store contract that the domain layer
//! depends on. Every entity type (trips, itineraries, activities) gets its
//! own independent store with the same five operations, so the services
//! never know which backend holds the data.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// A storable entity
///
/// `Draft` is the creation input (everything except the identifier and the
/// creation stamp, which the store assigns). `Patch` carries optional fields
/// for a shallow merge: `Some` replaces the stored value, `None` keeps it.
pub trait Record: Clone + Send + Sync + 'static {
    type Draft: Send + 'static;
    type Patch: Send + 'static;

    /// Human-readable record kind, used in errors and logs
    const KIND: &'static str;

    fn id(&self) -> &str;

    fn created_at(&self) -> DateTime<Utc>;

    /// Generate a fresh, process-unique identifier
    fn generate_id() -> String;

    /// Build the stored record from a draft and the store-assigned fields
    fn from_draft(id: String, created_at: DateTime<Utc>, draft: Self::Draft) -> Self;

    /// Shallow-merge a patch into this record
    fn apply_patch(&mut self, patch: Self::Patch);
}

/// Trait defining the interface for a single record store
///
/// All values handed out are independent copies: mutating a returned record
/// never changes store state.
#[async_trait]
pub trait RecordStorage<R: Record>: Send + Sync {
    /// Full snapshot of the store, newest first
    async fn get_all(&self) -> Result<Vec<R>>;

    /// Retrieve a specific record by ID
    async fn get_by_id(&self, id: &str) -> Result<Option<R>>;

    /// Assign an identifier and creation stamp, store, and return the stored copy
    async fn create(&self, draft: R::Draft) -> Result<R>;

    /// Shallow-merge `patch` into the record with this ID
    /// Fails with `StoreError::NotFound` if the record does not exist
    async fn update(&self, id: &str, patch: R::Patch) -> Result<R>;

    /// Remove and return the record with this ID
    /// Fails with `StoreError::NotFound` if the record does not exist
    async fn delete(&self, id: &str) -> Result<R>;
}

/// Trait defining the interface for storage connections
///
/// A connection owns the three stores the planner works with and hands out
/// cheap clones of them. The domain layer is generic over this trait.
pub trait Connection: Send + Sync + Clone + 'static {
    type TripStore: RecordStorage<shared::Trip> + Clone + 'static;
    type ItineraryStore: RecordStorage<shared::Itinerary> + Clone + 'static;
    type ActivityStore: RecordStorage<shared::Activity> + Clone + 'static;

    fn trips(&self) -> Self::TripStore;

    fn itineraries(&self) -> Self::ItineraryStore;

    fn activities(&self) -> Self::ActivityStore;
}
