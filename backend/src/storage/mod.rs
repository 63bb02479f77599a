//! # Storage Module
//!
//! Handles all record persistence for the trip planner.
//!
//! The domain layer only sees the `RecordStorage` contract and the
//! `Connection` factory; the in-memory backend is the one implementation.
//!
//! - **traits**: the record store contract every backend implements
//! - **records**: creation drafts and update patches per entity
//! - **error**: store error taxonomy (`NotFound`)
//! - **memory**: the seeded in-memory backend

pub mod error;
pub mod memory;
pub mod records;
pub mod traits;

pub use error::{is_not_found, StoreError};
pub use memory::{MemoryConnection, MemoryRecordStore};
pub use records::{
    ActivityDraft, ActivityPatch, ItineraryDraft, ItineraryPatch, TripDraft, TripPatch,
};
pub use traits::{Connection, Record, RecordStorage};
